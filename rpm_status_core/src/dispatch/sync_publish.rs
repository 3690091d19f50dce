//! Combined sync and publish report rendering
//!
//! A repository sync is usually followed by an automatic publish, and both
//! report into the same task: the importer under `yum_importer` and the
//! distributor under `yum_distributor`. Either may be missing, most often
//! right after the task was accepted and before its first report was saved.

use super::{DispatchState, DisplayOutcome, PhasePlan, StatusRenderer, StepKind};
use crate::error::Result;
use crate::ids::{DISTRIBUTOR_KEY, IMPORTER_KEY};
use crate::prompt::Prompt;
use crate::render::{Caption, ErrorTemplate, ItemizedStep, RenderOptions};
use crate::snapshot::Snapshot;
use crate::tracker::{StepId, Tracker};

const SYNC_STEPS: &[StepKind] = &[
    StepKind::Spinner {
        id: StepId::Metadata,
        label: "Downloading metadata...",
        show_error: true,
    },
    StepKind::Itemized(ItemizedStep {
        id: StepId::Download,
        header: "Downloading repository content...",
        caption: Caption::Content,
        item_errors_header: "Individual package errors encountered during sync:",
        failure_header: "Errors encountered during content download:",
        template: ErrorTemplate::Package,
    }),
    StepKind::Itemized(ItemizedStep {
        id: StepId::DistributionSync,
        header: "Downloading distribution files...",
        caption: Caption::Items("distributions"),
        item_errors_header: "Individual distribution file errors encountered during sync:",
        failure_header: "Errors encountered during distribution sync:",
        template: ErrorTemplate::File,
    }),
    StepKind::Spinner {
        id: StepId::Errata,
        label: "Importing errata...",
        show_error: false,
    },
    StepKind::Spinner {
        id: StepId::Comps,
        label: "Importing package groups/categories...",
        show_error: false,
    },
];

const PUBLISH_STEPS: &[StepKind] = &[
    StepKind::Itemized(ItemizedStep {
        id: StepId::Packages,
        header: "Publishing packages...",
        caption: Caption::Items("packages"),
        item_errors_header: "Individual package errors encountered during publish:",
        failure_header: "Errors encountered during package publish:",
        template: ErrorTemplate::Package,
    }),
    StepKind::Itemized(ItemizedStep {
        id: StepId::DistributionPublish,
        header: "Publishing distributions...",
        caption: Caption::Items("distributions"),
        item_errors_header: "Individual distribution file errors encountered during publish:",
        failure_header: "Errors encountered during distribution publish:",
        template: ErrorTemplate::File,
    }),
    StepKind::Spinner {
        id: StepId::GenerateMetadata,
        label: "Generating metadata",
        show_error: false,
    },
    StepKind::Spinner {
        id: StepId::PublishHttps,
        label: "Publishing repository over HTTPS",
        show_error: false,
    },
    StepKind::Spinner {
        id: StepId::PublishHttp,
        label: "Publishing repository over HTTP",
        show_error: false,
    },
];

const PHASES: &[PhasePlan] = &[
    PhasePlan {
        key: IMPORTER_KEY,
        steps: SYNC_STEPS,
    },
    PhasePlan {
        key: DISTRIBUTOR_KEY,
        steps: PUBLISH_STEPS,
    },
];

/// Renderer for `sync status` and `publish status`
#[derive(Debug, Default)]
pub struct RpmStatusRenderer {
    state: DispatchState,
}

impl RpmStatusRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            state: DispatchState::new(options),
        }
    }
}

impl StatusRenderer for RpmStatusRenderer {
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
