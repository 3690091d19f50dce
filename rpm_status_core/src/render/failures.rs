//! Per-item failure blocks

use crate::prompt::Prompt;
use crate::snapshot::ErrorDetail;

/// Layout of one failure block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTemplate {
    /// Distribution files: name, numeric code and message
    File,
    /// Packages: name, message and optional traceback
    Package,
}

impl ErrorTemplate {
    /// Format one failure as a multi-line block
    pub fn format(&self, detail: &ErrorDetail) -> String {
        match self {
            Self::File => {
                let code = detail
                    .code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                format!(
                    "File: {}\nError Code:   {}\nError Message: {}",
                    detail.identifier, code, detail.message
                )
            }
            Self::Package => {
                let mut block = format!(
                    "Package: {}\nError:   {}\n",
                    detail.identifier, detail.message
                );
                if !detail.traceback.is_empty() {
                    block.push_str("Traceback:\n");
                    block.push_str(&detail.traceback.join("\n"));
                }
                block
            }
        }
    }
}

/// Render `header` followed by at most `cap` failure blocks and a spacer
///
/// Returns the number of blocks rendered. Nothing is written when there
/// are no details or the cap is zero.
pub fn render_error_details(
    prompt: &mut dyn Prompt,
    header: &str,
    details: &[ErrorDetail],
    template: ErrorTemplate,
    cap: usize,
) -> usize {
    let shown = details.len().min(cap);
    if shown == 0 {
        return 0;
    }

    prompt.render_failure_message(header);
    for detail in &details[..shown] {
        prompt.render_failure_message(&template.format(detail));
    }
    prompt.render_spacer();

    if details.len() > shown {
        log::debug!("Suppressed {} of {} error details", details.len() - shown, details.len());
    }
    shown
}
