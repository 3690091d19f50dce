//! Rendering surfaces for the CLI
//!
//! Interactive terminals get indicatif bars and spinners; everything else
//! (pipes, CI logs, `--no-progress`) gets plain lines on stdout.

pub mod plain;
pub mod terminal;
pub mod utils;

pub use plain::PlainPrompt;
pub use terminal::TerminalPrompt;
pub use utils::{format_bytes, format_percent};

use crate::config::OutputConfig;
use rpm_status_core::Prompt;

/// Pick the rendering surface for the current output settings
pub fn create_prompt(output: &OutputConfig) -> Box<dyn Prompt> {
    if output.progress_enabled && crate::terminal::should_show_progress_by_default() {
        log::debug!("Rendering with terminal progress bars");
        Box::new(TerminalPrompt::new())
    } else {
        log::debug!("Rendering plain text");
        Box::new(PlainPrompt::stdout())
    }
}
