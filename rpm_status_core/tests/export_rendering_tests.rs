//! Export rendering tests

use rpm_status_core::render::{COMPLETED_LINE, FAILED_LINE};
use rpm_status_core::{DisplayOutcome, ExportStatusRenderer, Snapshot, StatusRenderer, StepId};
use rpm_status_test_utils::{CheckedPrompt, RecordingPrompt, SnapshotBuilder, StepBuilder};

fn export_snapshot(rpm: StepBuilder, isos: StepBuilder, http: StepBuilder) -> SnapshotBuilder {
    SnapshotBuilder::new()
        .export("rpm", rpm)
        .export("erratum", StepBuilder::skipped())
        .export("distribution", StepBuilder::skipped())
        .export("metadata", StepBuilder::complete())
        .export("isos", isos)
        .export("publish_https", StepBuilder::skipped())
        .export("publish_http", http)
}

#[test]
fn test_export_to_http() {
    let mut renderer = ExportStatusRenderer::new();
    let mut prompt = CheckedPrompt::new();
    let ticks = [
        export_snapshot(
            StepBuilder::running().items(8, 6),
            StepBuilder::not_started(),
            StepBuilder::not_started(),
        ),
        export_snapshot(
            StepBuilder::complete().items(8, 0),
            StepBuilder::running(),
            StepBuilder::not_started(),
        ),
        export_snapshot(
            StepBuilder::complete().items(8, 0),
            StepBuilder::complete(),
            StepBuilder::running(),
        ),
        export_snapshot(
            StepBuilder::complete().items(8, 0),
            StepBuilder::complete(),
            StepBuilder::complete(),
        ),
        export_snapshot(
            StepBuilder::complete().items(8, 0),
            StepBuilder::complete(),
            StepBuilder::complete(),
        ),
    ];

    for snapshot in ticks {
        let outcome = renderer
            .display_report(&mut prompt, &snapshot.build())
            .unwrap();
        assert_eq!(outcome, DisplayOutcome::Rendered);
    }

    let recording = prompt.recording();
    assert_eq!(recording.bars(StepId::ExportRpms), vec![(2, 8), (8, 8)]);
    assert_eq!(
        recording.lines(),
        vec![
            "Exporting packages...",
            "Generating metadata...",
            COMPLETED_LINE,
            COMPLETED_LINE,
            "Creating ISOs...",
            COMPLETED_LINE,
            "Successfully published ISOs over HTTP",
        ]
    );
}

#[test]
fn test_publish_failure_notice() {
    let mut renderer = ExportStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let snapshot = SnapshotBuilder::new()
        .export("publish_https", StepBuilder::failed())
        .build();

    renderer.display_report(&mut prompt, &snapshot).unwrap();
    renderer.display_report(&mut prompt, &snapshot).unwrap();

    assert_eq!(prompt.lines(), vec!["Failed to publish ISOs over HTTPS"]);
}

#[test]
fn test_errata_export_failure_with_details() {
    let mut renderer = ExportStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let snapshot = SnapshotBuilder::new()
        .export(
            "erratum",
            StepBuilder::failed()
                .items(2, 1)
                .package_error("RHSA-2024:0001", "could not write updateinfo"),
        )
        .build();

    renderer.display_report(&mut prompt, &snapshot).unwrap();

    assert_eq!(prompt.count_line(FAILED_LINE), 0);
    assert_eq!(
        prompt.failures(),
        vec![
            "Errors encountered during errata export:",
            "Package: RHSA-2024:0001\nError:   could not write updateinfo\n",
        ]
    );
}

#[test]
fn test_sync_keys_are_ignored() {
    let mut renderer = ExportStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let snapshot = SnapshotBuilder::new()
        .importer("metadata", StepBuilder::running())
        .distributor("packages", StepBuilder::running().items(1, 1))
        .build();

    renderer.display_report(&mut prompt, &snapshot).unwrap();

    assert!(prompt.events().is_empty());
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let mut renderer = ExportStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let mut value = SnapshotBuilder::new()
        .export("rpm", StepBuilder::running().items(1, 1))
        .export("isos", StepBuilder::running())
        .build_value();
    value["export_distributor"]["isos"]["state"] = serde_json::json!("PAUSED");

    let result = renderer.display_report(&mut prompt, &Snapshot::from(value));

    assert!(result.is_err());
    assert!(prompt.events().is_empty());
}
