//! Step states shared by every step of a sync, publish or export run

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State of a single step as reported by the server
///
/// `Complete` and `Failed` are the complete states. `Skipped` and
/// `Cancelled` are sinks that can only be entered from `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepState {
    #[default]
    NotStarted,
    Running,
    #[serde(alias = "FINISHED")]
    Complete,
    Failed,
    Skipped,
    Cancelled,
}

/// States after which a step is never rendered again
pub const COMPLETE_STATES: [StepState; 2] = [StepState::Complete, StepState::Failed];

impl StepState {
    /// Wire name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Running => "RUNNING",
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether this is `Complete` or `Failed`
    pub fn is_complete(&self) -> bool {
        COMPLETE_STATES.contains(self)
    }

    /// Whether a step in this state has nothing to show
    pub fn is_dormant(&self) -> bool {
        matches!(self, Self::NotStarted | Self::Skipped)
    }

    /// Whether a step may move from `self` to `next`
    ///
    /// Staying in the same state is always allowed.
    pub fn can_advance_to(&self, next: StepState) -> bool {
        if *self == next {
            return true;
        }
        match self {
            Self::NotStarted => true,
            Self::Running => next.is_complete(),
            Self::Complete | Self::Failed | Self::Skipped | Self::Cancelled => false,
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "RUNNING" => Ok(Self::Running),
            "COMPLETE" | "FINISHED" => Ok(Self::Complete),
            "FAILED" => Ok(Self::Failed),
            "SKIPPED" => Ok(Self::Skipped),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(other.to_string()),
        }
    }
}
