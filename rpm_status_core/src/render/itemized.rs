//! Itemized step rendering
//!
//! An itemized step processes many sub-items (packages, distribution files,
//! errata). While it runs, its bar is redrawn on every tick with the
//! current counters; on the tick it completes the bar is drawn one last
//! time and any per-item failures are listed.

use super::failures::{ErrorTemplate, render_error_details};
use super::{COMPLETED_LINE, FAILED_LINE, RenderOptions};
use crate::prompt::Prompt;
use crate::snapshot::StepReport;
use crate::tracker::{Cancelled, StepId, Tracker, Transition};

/// What the bar measures and how it is captioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    /// Bar over items, captioned `"{done}/{total} {label}"`
    Items(&'static str),
    /// Bar over bytes, captioned with RPM and delta RPM counts
    Content,
}

/// Static description of an itemized step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemizedStep {
    pub id: StepId,
    /// Printed once, when the step first leaves `NOT_STARTED`
    pub header: &'static str,
    pub caption: Caption,
    /// Heading of the failure list when the step completes with item errors
    pub item_errors_header: &'static str,
    /// Heading of the failure list when the step fails with item errors
    pub failure_header: &'static str,
    pub template: ErrorTemplate,
}

/// Draw a bar, showing zero total work as finished
pub fn render_itemized_progress(
    prompt: &mut dyn Prompt,
    step: StepId,
    done: u64,
    total: u64,
    message: &str,
) {
    let (done, total) = if total == 0 {
        (1, 1)
    } else {
        (done.min(total), total)
    };
    prompt.render_progress_bar(step, done, total, message);
}

impl ItemizedStep {
    fn draw(&self, prompt: &mut dyn Prompt, report: &StepReport) {
        match self.caption {
            Caption::Items(label) => {
                let message = format!("{}/{} {}", report.items_done(), report.items_total, label);
                render_itemized_progress(
                    prompt,
                    self.id,
                    report.items_done(),
                    report.items_total,
                    &message,
                );
            }
            Caption::Content => {
                let d = &report.details;
                let message = format!(
                    "RPMs:       {}/{} items\nDelta RPMs: {}/{} items\n",
                    d.rpm_done, d.rpm_total, d.drpm_done, d.drpm_total
                );
                render_itemized_progress(
                    prompt,
                    self.id,
                    report.size_done(),
                    report.size_total,
                    &message,
                );
            }
        }
    }
}

/// Render one itemized step for the current snapshot
///
/// An absent step renders nothing. The tracker is updated with the state
/// that was rendered.
pub fn render_itemized_step(
    prompt: &mut dyn Prompt,
    tracker: &mut Tracker,
    step: &ItemizedStep,
    report: Option<&StepReport>,
    options: &RenderOptions,
) -> Result<(), Cancelled> {
    let Some(report) = report else {
        return Ok(());
    };

    let transition = tracker.observe(step.id, report.state)?;
    if transition.is_idle() {
        return Ok(());
    }
    if transition.announces() {
        prompt.write(step.header);
    }

    match transition {
        Transition::Progress { .. } => step.draw(prompt, report),
        Transition::Completed { .. } => {
            step.draw(prompt, report);
            prompt.finish_progress_bar(step.id);
            prompt.write(COMPLETED_LINE);
            prompt.render_spacer();
            render_error_details(
                prompt,
                step.item_errors_header,
                &report.error_details,
                step.template,
                options.max_error_details,
            );
        }
        Transition::Failed { .. } => {
            step.draw(prompt, report);
            prompt.finish_progress_bar(step.id);
            if report.error_details.is_empty() {
                prompt.write(FAILED_LINE);
            } else {
                prompt.render_spacer();
                render_error_details(
                    prompt,
                    step.failure_header,
                    &report.error_details,
                    step.template,
                    options.max_error_details,
                );
            }
        }
        Transition::Idle => {}
    }

    tracker.record(step.id, report.state);
    Ok(())
}
