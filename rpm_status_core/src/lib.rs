//! RPM Status Core Library
//!
//! Core of the RPM repository status renderer: turns successive progress
//! snapshots of sync, publish and export operations into incremental,
//! print-once output on an abstract rendering surface.

pub mod dispatch;
pub mod error;
pub mod ids;
pub mod prompt;
pub mod render;
pub mod snapshot;
pub mod state;
pub mod tracker;
pub mod units;

// Test utilities module (available for tests)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types
pub use dispatch::{
    CANCELLED_MESSAGE, DisplayOutcome, ExportStatusRenderer, RpmStatusRenderer, StatusRenderer,
};
pub use error::{Error, LookupError, ReportError, Result};
pub use prompt::Prompt;
pub use render::RenderOptions;
pub use snapshot::{ContentDetails, ErrorDetail, Snapshot, StepReport};
pub use state::StepState;
pub use tracker::{Cancelled, StepId, Tracker, Transition};
pub use units::{ContentType, formatter_for_type};
