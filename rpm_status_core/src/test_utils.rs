//! Recording prompt for asserting on rendered output
//!
//! Every call made on the prompt is stored as a [`PromptEvent`] so tests can
//! check not only what was printed but how often and in which order.

#![cfg(any(test, feature = "test-utils"))]

use crate::prompt::Prompt;
use crate::tracker::StepId;

/// One call made on a [`RecordingPrompt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Write(String),
    Failure(String),
    Spacer,
    Bar {
        step: StepId,
        done: u64,
        total: u64,
        message: String,
    },
    BarFinished(StepId),
    Spinner {
        step: StepId,
        finished: bool,
    },
}

/// Prompt that records every call
#[derive(Debug, Default)]
pub struct RecordingPrompt {
    events: Vec<PromptEvent>,
}

impl RecordingPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in call order
    pub fn events(&self) -> &[PromptEvent] {
        &self.events
    }

    /// Return the recorded events and start over, one call per polling tick
    pub fn take(&mut self) -> Vec<PromptEvent> {
        std::mem::take(&mut self.events)
    }

    /// Text of every `write` call
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PromptEvent::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of every failure block
    pub fn failures(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PromptEvent::Failure(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// `(done, total)` of every bar drawn for `step`
    pub fn bars(&self, step: StepId) -> Vec<(u64, u64)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PromptEvent::Bar {
                    step: s, done, total, ..
                } if *s == step => Some((*done, *total)),
                _ => None,
            })
            .collect()
    }

    /// Number of times `text` was written
    pub fn count_line(&self, text: &str) -> usize {
        self.lines().iter().filter(|l| **l == text).count()
    }
}

impl Prompt for RecordingPrompt {
    fn write(&mut self, text: &str) {
        self.events.push(PromptEvent::Write(text.to_string()));
    }

    fn render_failure_message(&mut self, text: &str) {
        self.events.push(PromptEvent::Failure(text.to_string()));
    }

    fn render_spacer(&mut self) {
        self.events.push(PromptEvent::Spacer);
    }

    fn render_progress_bar(&mut self, step: StepId, done: u64, total: u64, message: &str) {
        self.events.push(PromptEvent::Bar {
            step,
            done,
            total,
            message: message.to_string(),
        });
    }

    fn finish_progress_bar(&mut self, step: StepId) {
        self.events.push(PromptEvent::BarFinished(step));
    }

    fn advance_spinner(&mut self, step: StepId, finished: bool) {
        self.events.push(PromptEvent::Spinner { step, finished });
    }
}
