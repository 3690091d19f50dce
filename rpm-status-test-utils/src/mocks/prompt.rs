//! Prompt that enforces the rendering surface contract

use rpm_status_core::{Prompt, StepId};

use super::{PromptEvent, RecordingPrompt};

/// Recording prompt that panics on calls a real surface cannot draw
///
/// A bar is never drawn with a zero total or with more done than total.
/// Finished bars and spinners are never touched again.
#[derive(Debug, Default)]
pub struct CheckedPrompt {
    inner: RecordingPrompt,
    finished_bars: Vec<StepId>,
    finished_spinners: Vec<StepId>,
}

impl CheckedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording(&self) -> &RecordingPrompt {
        &self.inner
    }

    pub fn events(&self) -> &[PromptEvent] {
        self.inner.events()
    }
}

impl Prompt for CheckedPrompt {
    fn write(&mut self, text: &str) {
        self.inner.write(text);
    }

    fn render_failure_message(&mut self, text: &str) {
        self.inner.render_failure_message(text);
    }

    fn render_spacer(&mut self) {
        self.inner.render_spacer();
    }

    fn render_progress_bar(&mut self, step: StepId, done: u64, total: u64, message: &str) {
        assert!(total > 0, "bar of {step} drawn with a zero total");
        assert!(done <= total, "bar of {step} overflows: {done}/{total}");
        assert!(
            !self.finished_bars.contains(&step),
            "bar of {step} drawn after it finished"
        );
        self.inner.render_progress_bar(step, done, total, message);
    }

    fn finish_progress_bar(&mut self, step: StepId) {
        assert!(
            !self.finished_bars.contains(&step),
            "bar of {step} finished twice"
        );
        self.finished_bars.push(step);
        self.inner.finish_progress_bar(step);
    }

    fn advance_spinner(&mut self, step: StepId, finished: bool) {
        assert!(
            !self.finished_spinners.contains(&step),
            "spinner of {step} advanced after it finished"
        );
        if finished {
            self.finished_spinners.push(step);
        }
        self.inner.advance_spinner(step, finished);
    }
}
