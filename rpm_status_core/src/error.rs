//! Error types for the RPM status core library
//!
//! Errors are split by the two places the library touches server data:
//! reading progress snapshots and formatting content units.

use thiserror::Error;

pub mod lookup;
pub mod report;

pub use self::lookup::LookupError;
pub use self::report::ReportError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the RPM status core library
///
/// Cancellation is deliberately absent here: a cancelled operation is a
/// normal outcome of rendering, see [`crate::tracker::Cancelled`].
#[derive(Error, Debug)]
pub enum Error {
    /// A progress snapshot could not be interpreted
    #[error(transparent)]
    Report(#[from] ReportError),

    /// A content unit could not be formatted
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Report(ReportError::malformed_json(source))
    }
}
