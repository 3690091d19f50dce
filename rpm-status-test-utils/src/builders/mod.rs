//! Builders for progress snapshots

mod snapshot;

pub use snapshot::{SnapshotBuilder, StepBuilder};
