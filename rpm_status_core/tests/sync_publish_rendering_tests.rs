//! Sync and publish rendering tests
//!
//! These drive `RpmStatusRenderer` through sequences of snapshots the way
//! the polling loop does and check what reaches the prompt on each tick.

use rpm_status_core::render::{COMPLETED_LINE, FAILED_LINE};
use rpm_status_core::{
    DisplayOutcome, RenderOptions, RpmStatusRenderer, StatusRenderer, StepId, StepState,
};
use rpm_status_test_utils::{CheckedPrompt, PromptEvent, RecordingPrompt, SnapshotBuilder, StepBuilder};

fn tick(renderer: &mut RpmStatusRenderer, prompt: &mut RecordingPrompt, snapshot: SnapshotBuilder) {
    let outcome = renderer.display_report(prompt, &snapshot.build()).unwrap();
    assert_eq!(outcome, DisplayOutcome::Rendered);
}

#[test]
fn test_completed_step_is_never_rendered_again() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let done = || {
        SnapshotBuilder::new()
            .importer("metadata", StepBuilder::complete())
            .importer("errata", StepBuilder::failed())
    };

    tick(&mut renderer, &mut prompt, done());
    prompt.take();
    tick(&mut renderer, &mut prompt, done());
    tick(&mut renderer, &mut prompt, done());

    assert!(prompt.events().is_empty());
}

#[test]
fn test_header_emitted_once_at_first_activity() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let packages = |step| SnapshotBuilder::new().distributor("packages", step);

    tick(&mut renderer, &mut prompt, packages(StepBuilder::not_started().items(5, 5)));
    assert!(prompt.take().is_empty());

    tick(&mut renderer, &mut prompt, packages(StepBuilder::running().items(5, 4)));
    tick(&mut renderer, &mut prompt, packages(StepBuilder::running().items(5, 2)));
    tick(&mut renderer, &mut prompt, packages(StepBuilder::complete().items(5, 0)));

    assert_eq!(prompt.count_line("Publishing packages..."), 1);
    assert_eq!(
        prompt.events()[0],
        PromptEvent::Write("Publishing packages...".to_string())
    );
}

#[test]
fn test_empty_step_renders_full_bar() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();

    tick(
        &mut renderer,
        &mut prompt,
        SnapshotBuilder::new().distributor("packages", StepBuilder::complete().items(0, 0)),
    );

    assert_eq!(prompt.bars(StepId::Packages), vec![(1, 1)]);
    assert_eq!(prompt.count_line(COMPLETED_LINE), 1);
}

#[test]
fn test_failed_step_shows_five_of_seven_errors() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();

    tick(
        &mut renderer,
        &mut prompt,
        SnapshotBuilder::new().importer(
            "content",
            StepBuilder::failed().size(100, 50).package_errors(7),
        ),
    );

    let failures = prompt.failures();
    assert_eq!(failures[0], "Errors encountered during content download:");
    let blocks: Vec<_> = failures.iter().filter(|f| f.starts_with("Package: ")).collect();
    assert_eq!(blocks.len(), 5);
    assert!(blocks[4].contains("pkg-4.rpm"));
}

#[test]
fn test_error_cap_is_configurable() {
    let mut renderer =
        RpmStatusRenderer::with_options(RenderOptions::default().with_max_error_details(2));
    let mut prompt = RecordingPrompt::new();

    tick(
        &mut renderer,
        &mut prompt,
        SnapshotBuilder::new().importer(
            "distribution",
            StepBuilder::failed()
                .items(3, 3)
                .file_error("images/boot.iso", "Couldn't open file", 37)
                .file_error("images/pxeboot/vmlinuz", "Couldn't open file", 37)
                .file_error("images/pxeboot/initrd.img", "Couldn't open file", 37),
        ),
    );

    assert_eq!(
        prompt.failures(),
        vec![
            "Errors encountered during distribution sync:",
            "File: images/boot.iso\nError Code:   37\nError Message: Couldn't open file",
            "File: images/pxeboot/vmlinuz\nError Code:   37\nError Message: Couldn't open file",
        ]
    );
}

#[test]
fn test_not_started_distribution_renders_nothing() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();

    tick(
        &mut renderer,
        &mut prompt,
        SnapshotBuilder::new().importer("distribution", StepBuilder::not_started().items(3, 3)),
    );

    assert!(prompt.events().is_empty());
    assert_eq!(
        renderer.tracker().last_state(StepId::DistributionSync),
        StepState::NotStarted
    );
}

#[test]
fn test_content_download_bar_over_bytes() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let content = |step: StepBuilder| {
        SnapshotBuilder::new().importer("content", step.content_details((3, 5), (0, 0)))
    };

    tick(&mut renderer, &mut prompt, content(StepBuilder::running().size(1000, 400)));
    assert_eq!(prompt.bars(StepId::Download), vec![(600, 1000)]);

    tick(&mut renderer, &mut prompt, content(StepBuilder::complete().size(1000, 0)));
    assert_eq!(prompt.bars(StepId::Download), vec![(600, 1000), (1000, 1000)]);
    assert_eq!(prompt.count_line(COMPLETED_LINE), 1);

    prompt.take();
    tick(&mut renderer, &mut prompt, content(StepBuilder::complete().size(1000, 0)));
    assert!(prompt.events().is_empty());
}

#[test]
fn test_missing_phases_and_steps_render_nothing() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();

    tick(&mut renderer, &mut prompt, SnapshotBuilder::new());
    tick(
        &mut renderer,
        &mut prompt,
        SnapshotBuilder::new()
            .empty_phase("yum_importer")
            .empty_phase("yum_distributor"),
    );

    assert!(prompt.events().is_empty());
    assert_eq!(renderer.tracker().iter().count(), 0);
}

#[test]
fn test_metadata_failure_shows_server_error() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = RecordingPrompt::new();
    let failed = || {
        SnapshotBuilder::new().importer(
            "metadata",
            StepBuilder::failed().error("Cannot retrieve repository metadata (repomd.xml)"),
        )
    };

    tick(&mut renderer, &mut prompt, failed());
    tick(&mut renderer, &mut prompt, failed());

    assert_eq!(prompt.lines(), vec!["Downloading metadata...", FAILED_LINE]);
    assert_eq!(
        prompt.failures(),
        vec!["Cannot retrieve repository metadata (repomd.xml)"]
    );
}

#[test]
fn test_full_sync_then_publish() {
    let mut renderer = RpmStatusRenderer::new();
    let mut prompt = CheckedPrompt::new();
    let ticks = vec![
        SnapshotBuilder::new().importer("metadata", StepBuilder::running()),
        SnapshotBuilder::new()
            .importer("metadata", StepBuilder::complete())
            .importer("content", StepBuilder::running().size(2048, 1024))
            .importer("distribution", StepBuilder::not_started()),
        SnapshotBuilder::new()
            .importer("metadata", StepBuilder::complete())
            .importer("content", StepBuilder::complete().size(2048, 0))
            .importer("distribution", StepBuilder::skipped())
            .importer("errata", StepBuilder::complete())
            .importer("comps", StepBuilder::complete())
            .distributor("packages", StepBuilder::running().items(2, 1)),
        SnapshotBuilder::new()
            .importer("metadata", StepBuilder::complete())
            .importer("content", StepBuilder::complete().size(2048, 0))
            .importer("distribution", StepBuilder::skipped())
            .importer("errata", StepBuilder::complete())
            .importer("comps", StepBuilder::complete())
            .distributor("packages", StepBuilder::complete().items(2, 0))
            .distributor("distribution", StepBuilder::skipped())
            .distributor("metadata", StepBuilder::complete())
            .distributor("publish_http", StepBuilder::complete())
            .distributor("publish_https", StepBuilder::skipped()),
    ];

    for snapshot in ticks {
        renderer.display_report(&mut prompt, &snapshot.build()).unwrap();
    }

    let recording = prompt.recording();
    assert_eq!(recording.count_line(COMPLETED_LINE), 7);
    assert_eq!(recording.count_line("Publishing repository over HTTP"), 1);
    assert_eq!(recording.count_line("Publishing repository over HTTPS"), 0);
    assert!(
        renderer
            .tracker()
            .iter()
            .all(|(_, state)| state.is_complete())
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn any_step() -> impl Strategy<Value = StepBuilder> {
        (0u8..5, 0u64..20, 0u64..20).prop_map(|(state, total, left)| {
            let step = match state {
                0 => StepBuilder::not_started(),
                1 => StepBuilder::running(),
                2 => StepBuilder::complete(),
                3 => StepBuilder::failed(),
                _ => StepBuilder::skipped(),
            };
            step.items(total, left).size(total, left)
        })
    }

    proptest! {
        #[test]
        fn headers_are_announced_at_most_once(
            ticks in proptest::collection::vec((any_step(), any_step()), 1..15)
        ) {
            let mut renderer = RpmStatusRenderer::new();
            let mut prompt = CheckedPrompt::new();

            for (content, packages) in ticks {
                let snapshot = SnapshotBuilder::new()
                    .importer("content", content)
                    .distributor("packages", packages)
                    .build();
                renderer.display_report(&mut prompt, &snapshot).unwrap();
            }

            let recording = prompt.recording();
            prop_assert!(recording.count_line("Downloading repository content...") <= 1);
            prop_assert!(recording.count_line("Publishing packages...") <= 1);
            prop_assert!(recording.count_line(COMPLETED_LINE) + recording.count_line(FAILED_LINE) <= 2);
        }
    }
}
