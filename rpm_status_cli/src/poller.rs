//! Status polling loop
//!
//! The loop pulls one full snapshot per tick from a [`SnapshotSource`],
//! hands it to a dispatcher and sleeps until the next tick. It ends when
//! the source runs dry or the dispatcher reports a cancelled operation.

use anyhow::{Context, Result};
use rpm_status_core::{DisplayOutcome, Prompt, Snapshot, StatusRenderer};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Where the loop gets its snapshots from
pub trait SnapshotSource {
    /// Next snapshot, or `None` once the operation is over
    fn next_snapshot(&mut self) -> Result<Option<Snapshot>, SourceError>;

    /// Whether `next_snapshot` is known to return `None` without waiting
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Errors raised while reading snapshots
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read snapshot capture: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot on line {line} is malformed: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: rpm_status_core::Error,
    },
}

/// Replays a JSON-lines capture, one full snapshot per line
///
/// Blank lines are skipped.
#[derive(Debug, Default)]
pub struct ReplaySource {
    lines: VecDeque<(usize, String)>,
}

impl ReplaySource {
    /// Read a whole capture up front
    pub fn from_reader(reader: impl BufRead) -> Result<Self, SourceError> {
        let mut lines = VecDeque::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| SourceError::Io { source })?;
            if !line.trim().is_empty() {
                lines.push_back((index + 1, line));
            }
        }
        Ok(Self { lines })
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            SourceError::Io { source } => source,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        })
    }

    /// Snapshots not yet handed out
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl SnapshotSource for ReplaySource {
    fn next_snapshot(&mut self) -> Result<Option<Snapshot>, SourceError> {
        let Some((line, text)) = self.lines.pop_front() else {
            return Ok(None);
        };
        Snapshot::parse(&text)
            .map(Some)
            .map_err(|source| SourceError::Malformed { line, source })
    }

    fn is_exhausted(&self) -> bool {
        self.lines.is_empty()
    }
}

/// How a polling run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The source ran dry after `ticks` snapshots
    Finished { ticks: usize },
    /// The operation was cancelled on tick `ticks`
    Cancelled { ticks: usize },
}

/// Drives one dispatcher from one snapshot source
pub struct StatusPoller<R: StatusRenderer> {
    renderer: R,
    interval: Duration,
}

impl<R: StatusRenderer> StatusPoller<R> {
    pub fn new(renderer: R, interval: Duration) -> Self {
        Self { renderer, interval }
    }

    /// Poll until the source runs dry or the operation is cancelled
    pub async fn run(
        &mut self,
        source: &mut dyn SnapshotSource,
        prompt: &mut dyn Prompt,
    ) -> Result<PollOutcome> {
        let mut ticks = 0;

        loop {
            let Some(snapshot) = source.next_snapshot()? else {
                log::debug!("Snapshot source ran dry after {ticks} ticks");
                self.log_final_states();
                return Ok(PollOutcome::Finished { ticks });
            };
            ticks += 1;
            log::debug!("Rendering snapshot {ticks}");

            let outcome = self
                .renderer
                .display_report(prompt, &snapshot)
                .with_context(|| format!("Failed to render snapshot {ticks}"))?;
            if outcome == DisplayOutcome::Cancelled {
                self.log_final_states();
                return Ok(PollOutcome::Cancelled { ticks });
            }
            if source.is_exhausted() {
                log::debug!("Snapshot source exhausted after {ticks} ticks");
                self.log_final_states();
                return Ok(PollOutcome::Finished { ticks });
            }

            if !self.interval.is_zero() {
                tokio::time::sleep(self.interval).await;
            }
        }
    }

    fn log_final_states(&self) {
        for (step, state) in self.renderer.tracker().iter() {
            log::debug!("Step {step} ended as {state}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_blank_lines() {
        let capture = "{}\n\n{\"yum_importer\": {}}\n";
        let mut source = ReplaySource::from_reader(capture.as_bytes()).unwrap();

        assert_eq!(source.remaining(), 2);
        assert!(source.next_snapshot().unwrap().is_some());
        assert!(!source.is_exhausted());
        let second = source.next_snapshot().unwrap().unwrap();
        assert!(second.has_phase("yum_importer"));
        assert!(source.is_exhausted());
        assert!(source.next_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let capture = "{}\n{not json\n";
        let mut source = ReplaySource::from_reader(capture.as_bytes()).unwrap();

        source.next_snapshot().unwrap();
        let err = source.next_snapshot().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }
}
