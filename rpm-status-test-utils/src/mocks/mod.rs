//! Rendering surfaces for testing

mod prompt;

pub use prompt::CheckedPrompt;
pub use rpm_status_core::test_utils::{PromptEvent, RecordingPrompt};
