//! Integration tests for the viewport sizing pipeline.
//!
//! These tests exercise `ViewportSync` against the real in-memory store and
//! the resize source infrastructure, covering the startup gate and the
//! chrome geometry invariants end-to-end.

use std::sync::Arc;

use deck_core::BoxSize;
use deck_shell::application::store::ShellStateStore;
use deck_shell::application::sync_viewport::ViewportSync;
use deck_shell::infrastructure::resize::{
    fixed::FixedPanelSource, mock::MockResizeSource, ResizeSource,
};
use deck_shell::infrastructure::state::{InMemoryShellState, ShellState};

fn make_store(started_up: bool, top_bar_height: u32) -> Arc<InMemoryShellState> {
    Arc::new(InMemoryShellState::new(ShellState {
        started_up,
        top_bar_height,
        ..ShellState::default()
    }))
}

/// Drains every queued observation into the sizer, the way the binary's
/// pump does.
fn drain(rx: &std::sync::mpsc::Receiver<Option<BoxSize>>, sizer: &mut ViewportSync) {
    while let Ok(observation) = rx.try_recv() {
        sizer.handle_resize(observation);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_sizes_published_only_after_startup() {
    // Arrange
    let store = make_store(false, 50);
    let mut sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let source = MockResizeSource::new();
    let rx = source.observe().expect("observe should succeed");

    // Act – observation lands before the shell has started up
    source.inject(800, 600);
    drain(&rx, &mut sizer);

    // Assert – sizes untouched, surface not ready
    let snapshot = store.snapshot();
    assert_eq!(snapshot.window_size, BoxSize::default());
    assert_eq!(snapshot.mirror_size, BoxSize::default());
    assert!(!sizer.is_ready());

    // Act – readiness flips; the retained size is recomputed immediately
    store.set_started_up(true);
    sizer.handle_startup_change();

    // Assert
    let snapshot = store.snapshot();
    assert_eq!(snapshot.window_size, BoxSize::new(800, 600));
    assert_eq!(snapshot.mirror_size, BoxSize::new(800, 550));
    assert!(sizer.is_ready());
}

#[test]
fn test_chrome_visible_and_hidden_geometry() {
    // Arrange
    let store = make_store(true, 50);
    let mut sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let source = MockResizeSource::new();
    let rx = source.observe().expect("observe should succeed");

    // Act – chrome visible
    source.inject(800, 600);
    drain(&rx, &mut sizer);
    assert_eq!(store.snapshot().mirror_size, BoxSize::new(800, 550));

    // Act – chrome hidden; next observation publishes the full height
    store.set_top_bar_height(0);
    source.inject(800, 600);
    drain(&rx, &mut sizer);

    // Assert
    let snapshot = store.snapshot();
    assert_eq!(snapshot.mirror_size, BoxSize::new(800, 600));
    assert_eq!(snapshot.mirror_size.width, snapshot.window_size.width);
}

#[test]
fn test_dead_container_observations_do_not_disturb_published_sizes() {
    // Arrange
    let store = make_store(true, 50);
    let mut sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let source = MockResizeSource::new();
    let rx = source.observe().expect("observe should succeed");

    source.inject(1024, 600);
    drain(&rx, &mut sizer);
    let before = store.snapshot();

    // Act – dead-container callback
    source.inject_dead();
    drain(&rx, &mut sizer);

    // Assert – still the previous sizes, still ready
    let after = store.snapshot();
    assert_eq!(after.window_size, before.window_size);
    assert_eq!(after.mirror_size, before.mirror_size);
    assert!(sizer.is_ready());
}

#[test]
fn test_fixed_panel_source_drives_the_sizer_once() {
    // The binary's wiring: a fixed panel resolution observed at startup.
    let store = make_store(true, 50);
    let mut sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let source = FixedPanelSource::new(BoxSize::new(1280, 480));
    let rx = source.observe().expect("observe should succeed");

    drain(&rx, &mut sizer);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.window_size, BoxSize::new(1280, 480));
    assert_eq!(snapshot.mirror_size, BoxSize::new(1280, 430));
    assert!(sizer.is_ready());

    // Disconnect closes the stream; the pump loop would now exit.
    source.disconnect();
    assert!(rx.recv().is_err());
}

#[test]
fn test_ready_survives_later_resizes() {
    let store = make_store(true, 0);
    let mut sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let source = MockResizeSource::new();
    let rx = source.observe().expect("observe should succeed");

    source.inject(800, 480);
    source.inject(1024, 600);
    drain(&rx, &mut sizer);

    assert!(sizer.is_ready());
    assert_eq!(store.snapshot().window_size, BoxSize::new(1024, 600));
}
