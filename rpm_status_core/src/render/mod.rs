//! Per-step renderers
//!
//! Three kinds of steps exist: itemized steps with a progress bar and
//! per-item failures, spinner steps that only start and finish, and the
//! export publish notices that only report their final outcome.

pub mod failures;
pub mod itemized;
pub mod notice;
pub mod spinner;

pub use failures::{ErrorTemplate, render_error_details};
pub use itemized::{Caption, ItemizedStep, render_itemized_progress, render_itemized_step};
pub use notice::{PublishNotice, render_publish_notice};
pub use spinner::render_spinner_step;

/// Number of per-item errors shown when nothing else is configured
pub const DEFAULT_DISPLAY_ERROR_COUNT: usize = 5;

/// Written on the tick a step completes
pub const COMPLETED_LINE: &str = "... completed";

/// Written on the tick a step fails without item details
pub const FAILED_LINE: &str = "... failed";

/// Knobs shared by all renderers of one status command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cap on per-item error blocks rendered for one step
    pub max_error_details: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_error_details: DEFAULT_DISPLAY_ERROR_COUNT,
        }
    }
}

impl RenderOptions {
    pub fn with_max_error_details(mut self, count: usize) -> Self {
        self.max_error_details = count;
        self
    }
}
