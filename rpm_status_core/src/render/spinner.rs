//! Spinner step rendering
//!
//! Spinner steps carry nothing but a state: they print a label when they
//! start, keep a busy indicator moving while running and print a terminal
//! marker once.

use super::{COMPLETED_LINE, FAILED_LINE};
use crate::prompt::Prompt;
use crate::state::StepState;
use crate::tracker::{StepId, Transition};

/// Render one spinner step
///
/// `update` receives the state that was rendered so the caller can persist
/// it; it is not called when nothing was rendered. Returns the transition
/// that was applied.
pub fn render_spinner_step(
    prompt: &mut dyn Prompt,
    step: StepId,
    current: StepState,
    last: StepState,
    label: &str,
    update: impl FnOnce(StepState),
) -> Transition {
    let transition = Transition::between(last, current);
    if transition.is_idle() {
        return transition;
    }
    if transition.announces() {
        prompt.write(label);
    }

    match transition {
        Transition::Progress { .. } => prompt.advance_spinner(step, false),
        Transition::Completed { .. } | Transition::Failed { .. } => {
            prompt.advance_spinner(step, true);
            if current == StepState::Failed {
                prompt.write(FAILED_LINE);
            } else {
                prompt.write(COMPLETED_LINE);
            }
            prompt.render_spacer();
        }
        Transition::Idle => {}
    }

    update(current);
    transition
}
