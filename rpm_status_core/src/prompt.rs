//! Rendering surface abstraction
//!
//! The core decides *what* to show and *when*; a [`Prompt`] decides how it
//! looks. Each step owns at most one widget (bar or spinner), addressed by
//! its [`StepId`], and implementations keep those widgets alive for as long
//! as the prompt itself.

use crate::tracker::StepId;

/// Line-oriented output surface used by the renderers
pub trait Prompt {
    /// Write one line (may contain embedded newlines)
    fn write(&mut self, text: &str);

    /// Write a failure block
    fn render_failure_message(&mut self, text: &str);

    /// Write a blank separator line
    fn render_spacer(&mut self);

    /// Draw the progress bar of `step` at `done` out of `total`
    ///
    /// Callers never pass a `total` of zero.
    fn render_progress_bar(&mut self, step: StepId, done: u64, total: u64, message: &str);

    /// Freeze the bar of `step` at its last drawn position
    ///
    /// Called once, on the tick the step completes or fails.
    fn finish_progress_bar(&mut self, step: StepId);

    /// Advance the spinner of `step`; `finished` stops it for good
    fn advance_spinner(&mut self, step: StepId, finished: bool);
}
