//! Step state tracking
//!
//! Every step of an operation is an independent state machine whose only
//! memory is the last state that was rendered. A [`Tracker`] holds one
//! machine per step for the lifetime of one status command, and
//! [`Transition::between`] decides what a new snapshot means for a step.

use crate::state::StepState;
use std::collections::HashMap;
use std::fmt;

/// Steps of the sync, publish and export operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepId {
    // Sync
    Metadata,
    Download,
    DistributionSync,
    Errata,
    Comps,
    // Publish
    Packages,
    DistributionPublish,
    GenerateMetadata,
    PublishHttps,
    PublishHttp,
    // Export
    ExportRpms,
    ExportErrata,
    ExportDistributions,
    ExportMetadata,
    Isos,
    ExportPublishHttps,
    ExportPublishHttp,
}

impl StepId {
    /// Key of the step inside its phase
    pub fn key(&self) -> &'static str {
        use crate::ids;

        match self {
            Self::Metadata | Self::GenerateMetadata | Self::ExportMetadata => "metadata",
            Self::Download => "content",
            Self::DistributionSync | Self::DistributionPublish => "distribution",
            Self::Errata => "errata",
            Self::Comps => "comps",
            Self::Packages => "packages",
            Self::PublishHttps | Self::ExportPublishHttps => "publish_https",
            Self::PublishHttp | Self::ExportPublishHttp => "publish_http",
            Self::ExportRpms => ids::TYPE_ID_RPM,
            Self::ExportErrata => ids::TYPE_ID_ERRATA,
            Self::ExportDistributions => ids::TYPE_ID_DISTRO,
            Self::Isos => "isos",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Marker returned when a step reports `CANCELLED`
///
/// It travels up through `?` and stops every remaining step of the
/// snapshot being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// What a step should render for the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to render
    Idle,
    /// Step is running; refresh its progress
    Progress { announce: bool },
    /// Step reached `COMPLETE` on this tick
    Completed { announce: bool },
    /// Step reached `FAILED` on this tick
    Failed { announce: bool },
}

impl Transition {
    /// Decide the rendering for a step last rendered in `last` and now in `current`
    ///
    /// `announce` is set on the first tick that moves a step out of
    /// `NOT_STARTED`, which is when its header line is printed. Once `last`
    /// is a complete state the answer is always `Idle`.
    pub fn between(last: StepState, current: StepState) -> Self {
        if last.is_complete() || current.is_dormant() || !last.can_advance_to(current) {
            return Self::Idle;
        }

        let announce = last == StepState::NotStarted;
        match current {
            StepState::Running => Self::Progress { announce },
            StepState::Complete => Self::Completed { announce },
            StepState::Failed => Self::Failed { announce },
            StepState::NotStarted | StepState::Skipped | StepState::Cancelled => Self::Idle,
        }
    }

    /// Whether the step header must be printed first
    pub fn announces(&self) -> bool {
        matches!(
            self,
            Self::Progress { announce: true }
                | Self::Completed { announce: true }
                | Self::Failed { announce: true }
        )
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::Idle
    }
}

/// Last rendered state of a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepMachine {
    last: StepState,
}

impl StepMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> StepState {
        self.last
    }

    /// Move to `state` if the partial order allows it
    ///
    /// Returns whether the state was accepted.
    pub fn record(&mut self, state: StepState) -> bool {
        if self.last.can_advance_to(state) {
            self.last = state;
            true
        } else {
            false
        }
    }
}

/// Last rendered state of every step of one operation
#[derive(Debug, Default)]
pub struct Tracker {
    steps: HashMap<StepId, StepMachine>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered state of `step`, `NOT_STARTED` if never seen
    pub fn last_state(&self, step: StepId) -> StepState {
        self.steps.get(&step).map(StepMachine::last).unwrap_or_default()
    }

    /// Decide what `step` should render given its `current` state
    pub fn observe(&self, step: StepId, current: StepState) -> Result<Transition, Cancelled> {
        if current == StepState::Cancelled {
            log::debug!("Step {step} reported cancellation");
            return Err(Cancelled);
        }
        Ok(Transition::between(self.last_state(step), current))
    }

    /// Persist the state that was just rendered for `step`
    pub fn record(&mut self, step: StepId, state: StepState) {
        let machine = self.steps.entry(step).or_default();
        let previous = machine.last();
        if !machine.record(state) {
            log::debug!("Ignoring regression of step {step} from {previous} to {state}");
        }
    }

    /// Iterate over every step seen so far with its last state
    pub fn iter(&self) -> impl Iterator<Item = (StepId, StepState)> + '_ {
        self.steps.iter().map(|(id, machine)| (*id, machine.last()))
    }
}
