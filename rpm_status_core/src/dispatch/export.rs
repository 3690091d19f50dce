//! Export report rendering
//!
//! The export distributor reports every step under `export_distributor`.
//! Content steps are keyed by content type identifier.

use super::{DispatchState, DisplayOutcome, PhasePlan, StatusRenderer, StepKind};
use crate::error::Result;
use crate::ids::EXPORT_DISTRIBUTOR_KEY;
use crate::prompt::Prompt;
use crate::render::{Caption, ErrorTemplate, ItemizedStep, PublishNotice, RenderOptions};
use crate::snapshot::Snapshot;
use crate::tracker::{StepId, Tracker};

const EXPORT_STEPS: &[StepKind] = &[
    StepKind::Itemized(ItemizedStep {
        id: StepId::ExportRpms,
        header: "Exporting packages...",
        caption: Caption::Items("rpms"),
        item_errors_header: "Individual package errors encountered during export:",
        failure_header: "Errors encountered during package export:",
        template: ErrorTemplate::Package,
    }),
    StepKind::Itemized(ItemizedStep {
        id: StepId::ExportErrata,
        header: "Exporting errata...",
        caption: Caption::Items("errata"),
        item_errors_header: "Individual errata errors encountered during export:",
        failure_header: "Errors encountered during errata export:",
        template: ErrorTemplate::Package,
    }),
    StepKind::Itemized(ItemizedStep {
        id: StepId::ExportDistributions,
        header: "Exporting distributions...",
        caption: Caption::Items("distributions"),
        item_errors_header: "Individual distribution file errors encountered during export:",
        failure_header: "Errors encountered during distribution export:",
        template: ErrorTemplate::File,
    }),
    StepKind::Spinner {
        id: StepId::ExportMetadata,
        label: "Generating metadata...",
        show_error: false,
    },
    StepKind::Spinner {
        id: StepId::Isos,
        label: "Creating ISOs...",
        show_error: false,
    },
    StepKind::Notice(PublishNotice {
        id: StepId::ExportPublishHttps,
        success: "Successfully published ISOs over HTTPS",
        failure: "Failed to publish ISOs over HTTPS",
    }),
    StepKind::Notice(PublishNotice {
        id: StepId::ExportPublishHttp,
        success: "Successfully published ISOs over HTTP",
        failure: "Failed to publish ISOs over HTTP",
    }),
];

const PHASES: &[PhasePlan] = &[PhasePlan {
    key: EXPORT_DISTRIBUTOR_KEY,
    steps: EXPORT_STEPS,
}];

/// Renderer for `export status`, for single repositories and groups alike
#[derive(Debug, Default)]
pub struct ExportStatusRenderer {
    state: DispatchState,
}

impl ExportStatusRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            state: DispatchState::new(options),
        }
    }
}

impl StatusRenderer for ExportStatusRenderer {
    fn display_report(
        &mut self,
        prompt: &mut dyn Prompt,
        snapshot: &Snapshot,
    ) -> Result<DisplayOutcome> {
        self.state.display(prompt, snapshot, PHASES)
    }

    fn tracker(&self) -> &Tracker {
        self.state.tracker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingPrompt;
    use serde_json::json;

    #[test]
    fn test_export_lifecycle() {
        let mut renderer = ExportStatusRenderer::new();
        let mut prompt = RecordingPrompt::new();

        let running = Snapshot::new(json!({
            "export_distributor": {
                "rpm": {"state": "RUNNING", "items_total": 10, "items_left": 4},
                "erratum": {"state": "NOT_STARTED"},
                "distribution": {"state": "NOT_STARTED"},
                "metadata": {"state": "NOT_STARTED"},
                "isos": {"state": "NOT_STARTED"},
                "publish_http": {"state": "NOT_STARTED"},
                "publish_https": {"state": "NOT_STARTED"}
            }
        }));
        let done = Snapshot::new(json!({
            "export_distributor": {
                "rpm": {"state": "COMPLETE", "items_total": 10, "items_left": 0},
                "erratum": {"state": "COMPLETE", "items_total": 0, "items_left": 0},
                "distribution": {"state": "SKIPPED"},
                "metadata": {"state": "COMPLETE"},
                "isos": {"state": "COMPLETE"},
                "publish_http": {"state": "COMPLETE"},
                "publish_https": {"state": "SKIPPED"}
            }
        }));

        renderer.display_report(&mut prompt, &running).unwrap();
        renderer.display_report(&mut prompt, &done).unwrap();
        renderer.display_report(&mut prompt, &done).unwrap();

        assert_eq!(prompt.bars(StepId::ExportRpms), vec![(6, 10), (10, 10)]);
        assert_eq!(prompt.bars(StepId::ExportErrata), vec![(1, 1)]);
        assert_eq!(prompt.count_line("Creating ISOs..."), 1);
        assert_eq!(prompt.count_line("Successfully published ISOs over HTTP"), 1);
        assert_eq!(prompt.count_line("Successfully published ISOs over HTTPS"), 0);
    }

    #[test]
    fn test_without_export_key_nothing_renders() {
        let mut renderer = ExportStatusRenderer::new();
        let mut prompt = RecordingPrompt::new();
        let snapshot = Snapshot::new(json!({"yum_distributor": {"packages": {"state": "RUNNING"}}}));

        let outcome = renderer.display_report(&mut prompt, &snapshot).unwrap();

        assert_eq!(outcome, DisplayOutcome::Rendered);
        assert!(prompt.events().is_empty());
    }
}
