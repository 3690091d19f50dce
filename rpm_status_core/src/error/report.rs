//! Snapshot related error types

use thiserror::Error;

/// Errors raised while reading a progress snapshot
#[derive(Error, Debug)]
pub enum ReportError {
    /// The snapshot text is not valid JSON
    #[error("Malformed progress report: {source}")]
    MalformedJson {
        #[source]
        source: serde_json::Error,
    },

    /// The server sent a state string outside the known set
    #[error("Unknown step state '{state}' at {path}")]
    UnknownState { path: String, state: String },

    /// A step sub-tree exists but does not have the expected shape
    #[error("Invalid step data at {path}: {message}")]
    InvalidStep { path: String, message: String },
}

impl ReportError {
    /// Create a malformed JSON error
    pub fn malformed_json(source: serde_json::Error) -> Self {
        Self::MalformedJson { source }
    }

    /// Create an unknown state error
    pub fn unknown_state(path: &str, state: &str) -> Self {
        Self::UnknownState {
            path: path.to_string(),
            state: state.to_string(),
        }
    }

    /// Create an invalid step error
    pub fn invalid_step(path: &str, message: &str) -> Self {
        Self::InvalidStep {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}
