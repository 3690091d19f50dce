//! Test utilities for the RPM status renderer
//!
//! This crate provides snapshot builders and recording rendering surfaces
//! for testing the dispatchers end to end.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{SnapshotBuilder, StepBuilder};
pub use mocks::{CheckedPrompt, PromptEvent, RecordingPrompt};
