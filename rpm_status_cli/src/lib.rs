//! RPM status command line interface
//!
//! Library half of the `rpm-status` binary: configuration, rendering
//! surfaces, the polling loop and CLI error reporting.

pub mod config;
pub mod error;
pub mod poller;
pub mod progress;
pub mod terminal;

pub use error::{CliError, CliResult, ErrorContext, ExitCode};
pub use poller::{PollOutcome, ReplaySource, SnapshotSource, SourceError, StatusPoller};
