//! Publish notices of the export operation
//!
//! Publishing exported ISOs over HTTP or HTTPS shows no progress at all;
//! only the outcome is reported, once.

use crate::prompt::Prompt;
use crate::snapshot::StepReport;
use crate::tracker::{Cancelled, StepId, Tracker, Transition};

/// Lines written when a publish step finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishNotice {
    pub id: StepId,
    pub success: &'static str,
    pub failure: &'static str,
}

/// Render the outcome of a publish step, if it just finished
pub fn render_publish_notice(
    prompt: &mut dyn Prompt,
    tracker: &mut Tracker,
    notice: &PublishNotice,
    report: Option<&StepReport>,
) -> Result<(), Cancelled> {
    let Some(report) = report else {
        return Ok(());
    };

    match tracker.observe(notice.id, report.state)? {
        Transition::Idle => return Ok(()),
        Transition::Progress { .. } => {}
        Transition::Completed { .. } => {
            prompt.write(notice.success);
            prompt.render_spacer();
        }
        Transition::Failed { .. } => {
            prompt.write(notice.failure);
            prompt.render_spacer();
        }
    }

    tracker.record(notice.id, report.state);
    Ok(())
}
