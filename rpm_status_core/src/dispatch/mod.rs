//! Report dispatchers
//!
//! A dispatcher owns the tracker of one status command. For every snapshot
//! it walks a fixed table of steps per phase, in display order, and hands
//! each step to the renderer for its kind. A cancelled step stops the walk
//! and turns the dispatcher into a no-op for the rest of its life.

pub mod export;
pub mod sync_publish;

pub use export::ExportStatusRenderer;
pub use sync_publish::RpmStatusRenderer;

use crate::error::Result;
use crate::prompt::Prompt;
use crate::render::{
    ItemizedStep, PublishNotice, RenderOptions, render_itemized_step, render_publish_notice,
    render_spinner_step,
};
use crate::snapshot::{Snapshot, StepReport};
use crate::tracker::{Cancelled, StepId, Tracker, Transition};

/// Printed once when an operation is cancelled
pub const CANCELLED_MESSAGE: &str = "Operation cancelled.";

/// Result of displaying one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// The snapshot was rendered; keep polling
    Rendered,
    /// The operation was cancelled; stop polling
    Cancelled,
}

/// Renders successive snapshots of one operation
pub trait StatusRenderer {
    /// Render whatever changed in `snapshot` since the previous call
    fn display_report(
        &mut self,
        prompt: &mut dyn Prompt,
        snapshot: &Snapshot,
    ) -> Result<DisplayOutcome>;

    /// Last rendered state of every step seen so far
    fn tracker(&self) -> &Tracker;
}

/// How a step is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Itemized(ItemizedStep),
    Spinner {
        id: StepId,
        label: &'static str,
        /// Show the step's `error` text when it fails
        show_error: bool,
    },
    Notice(PublishNotice),
}

impl StepKind {
    pub fn id(&self) -> StepId {
        match self {
            Self::Itemized(step) => step.id,
            Self::Spinner { id, .. } => *id,
            Self::Notice(notice) => notice.id,
        }
    }
}

/// Steps of one phase, in display order
#[derive(Debug, Clone, Copy)]
pub struct PhasePlan {
    /// Top-level key gating the whole phase
    pub key: &'static str,
    pub steps: &'static [StepKind],
}

/// Tracker, options and cancellation latch shared by both dispatchers
#[derive(Debug, Default)]
pub(crate) struct DispatchState {
    tracker: Tracker,
    options: RenderOptions,
    cancelled: bool,
}

impl DispatchState {
    pub(crate) fn new(options: RenderOptions) -> Self {
        Self {
            tracker: Tracker::new(),
            options,
            cancelled: false,
        }
    }

    pub(crate) fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Render every present phase of `snapshot`
    pub(crate) fn display(
        &mut self,
        prompt: &mut dyn Prompt,
        snapshot: &Snapshot,
        phases: &[PhasePlan],
    ) -> Result<DisplayOutcome> {
        if self.cancelled {
            return Ok(DisplayOutcome::Cancelled);
        }

        // Read every step first so a malformed report renders nothing
        let mut work = Vec::new();
        for phase in phases {
            if !snapshot.has_phase(phase.key) {
                log::debug!("Phase {} not in report yet", phase.key);
                continue;
            }
            for step in phase.steps {
                work.push((step, snapshot.step(phase.key, step.id().key())?));
            }
        }

        let walk = work
            .iter()
            .try_for_each(|(step, report)| self.render_step(prompt, step, report.as_ref()));

        match walk {
            Ok(()) => Ok(DisplayOutcome::Rendered),
            Err(Cancelled) => {
                self.cancelled = true;
                prompt.render_failure_message(CANCELLED_MESSAGE);
                Ok(DisplayOutcome::Cancelled)
            }
        }
    }

    fn render_step(
        &mut self,
        prompt: &mut dyn Prompt,
        step: &StepKind,
        report: Option<&StepReport>,
    ) -> std::result::Result<(), Cancelled> {
        match step {
            StepKind::Itemized(itemized) => {
                render_itemized_step(prompt, &mut self.tracker, itemized, report, &self.options)
            }
            StepKind::Notice(notice) => {
                render_publish_notice(prompt, &mut self.tracker, notice, report)
            }
            StepKind::Spinner {
                id,
                label,
                show_error,
            } => {
                let Some(report) = report else {
                    return Ok(());
                };
                // Cancellation check; the spinner renderer decides the rest
                self.tracker.observe(*id, report.state)?;

                let last = self.tracker.last_state(*id);
                let tracker = &mut self.tracker;
                let transition =
                    render_spinner_step(prompt, *id, report.state, last, label, |state| {
                        tracker.record(*id, state)
                    });

                if *show_error
                    && matches!(transition, Transition::Failed { .. })
                    && let Some(error) = &report.error
                {
                    prompt.render_failure_message(error);
                }
                Ok(())
            }
        }
    }
}
