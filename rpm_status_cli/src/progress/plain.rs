//! Line-oriented rendering surface
//!
//! Used whenever bars cannot be drawn. A bar becomes one line per change in
//! its counters and spinners print nothing, so a replayed capture produces
//! the same text on every run.

use super::utils::{format_bytes, format_percent};
use rpm_status_core::{Prompt, StepId};
use std::collections::HashMap;
use std::io::{self, Write};

/// Prompt writing plain lines to any writer
pub struct PlainPrompt<W: Write> {
    out: W,
    last_drawn: HashMap<StepId, (u64, u64)>,
}

impl PlainPrompt<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlainPrompt<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_drawn: HashMap::new(),
        }
    }

    /// Give back the writer, mostly to inspect what was written
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::debug!("Dropped output line: {e}");
        }
    }
}

impl<W: Write> Prompt for PlainPrompt<W> {
    fn write(&mut self, text: &str) {
        self.line(text);
    }

    fn render_failure_message(&mut self, text: &str) {
        self.line(text);
    }

    fn render_spacer(&mut self) {
        self.line("");
    }

    fn render_progress_bar(&mut self, step: StepId, done: u64, total: u64, message: &str) {
        if self.last_drawn.insert(step, (done, total)) == Some((done, total)) {
            return;
        }

        let percent = format_percent(done, total);
        let text = if step == StepId::Download {
            format!(
                "{}{} of {} ({percent})",
                message,
                format_bytes(done),
                format_bytes(total)
            )
        } else {
            format!("{message} ({percent})")
        };
        self.line(&text);
    }

    fn finish_progress_bar(&mut self, _step: StepId) {}

    fn advance_spinner(&mut self, _step: StepId, _finished: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(prompt: PlainPrompt<Vec<u8>>) -> String {
        String::from_utf8(prompt.into_inner()).unwrap()
    }

    #[test]
    fn test_lines_and_spacers() {
        let mut prompt = PlainPrompt::new(Vec::new());
        prompt.write("Importing errata...");
        prompt.advance_spinner(StepId::Errata, true);
        prompt.write("... completed");
        prompt.render_spacer();

        assert_eq!(output(prompt), "Importing errata...\n... completed\n\n");
    }

    #[test]
    fn test_unchanged_bar_is_not_repeated() {
        let mut prompt = PlainPrompt::new(Vec::new());
        prompt.render_progress_bar(StepId::Packages, 3, 4, "3/4 packages");
        prompt.render_progress_bar(StepId::Packages, 3, 4, "3/4 packages");
        prompt.render_progress_bar(StepId::Packages, 4, 4, "4/4 packages");

        assert_eq!(output(prompt), "3/4 packages (75%)\n4/4 packages (100%)\n");
    }

    #[test]
    fn test_content_bar_shows_bytes() {
        let mut prompt = PlainPrompt::new(Vec::new());
        prompt.render_progress_bar(
            StepId::Download,
            1024,
            2048,
            "RPMs:       1/2 items\nDelta RPMs: 0/0 items\n",
        );

        assert_eq!(
            output(prompt),
            "RPMs:       1/2 items\nDelta RPMs: 0/0 items\n1.00 KB of 2.00 KB (50%)\n"
        );
    }
}
