//! ViewportSync: keeps the mirroring surface's rectangles in step with the
//! observed container size and the shell chrome.
//!
//! Observations arrive as `Option<BoxSize>`: `None` models a container
//! reference that was not live when the callback fired – a transient
//! condition retried on the next observation, never an error.  The last
//! live size is retained so a flip of the `started_up` readiness flag can
//! recompute immediately instead of waiting for another resize.
//!
//! Every successful computation publishes `window` and `mirror` rectangles
//! through a single store call, and latches the local `ready` flag.  `ready`
//! transitions false→true exactly once per instance and never reverts: a
//! later resize republished new sizes without "unreadying" the surface.

use std::sync::Arc;

use deck_core::{compute_surface_rects, BoxSize, ChromeConfig};
use tracing::{debug, trace};

use super::store::ShellStateStore;

/// The viewport synchronization use case.
pub struct ViewportSync {
    store: Arc<dyn ShellStateStore>,
    /// Last live container size, retained across readiness changes.
    last_observed: Option<BoxSize>,
    ready: bool,
}

impl ViewportSync {
    /// Creates a sizer over the given store.  Not ready until the first
    /// successful computation.
    pub fn new(store: Arc<dyn ShellStateStore>) -> Self {
        Self {
            store,
            last_observed: None,
            ready: false,
        }
    }

    /// Handles one box-size observation from the container.
    ///
    /// `None` (container not live) is skipped; the next observation retries.
    pub fn handle_resize(&mut self, observation: Option<BoxSize>) {
        let Some(size) = observation else {
            trace!("container not live, size left untouched");
            return;
        };
        self.last_observed = Some(size);
        self.recompute();
    }

    /// Re-runs the computation after the `started_up` readiness flag
    /// changed, using the last retained container size.
    pub fn handle_startup_change(&mut self) {
        self.recompute();
    }

    /// `true` once the first sizes have been published.  Never reverts.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn recompute(&mut self) {
        // Before startup completes, stale or zero sizes must not be
        // published as final.
        if !self.store.started_up() {
            trace!("sizing deferred: shell not started up");
            return;
        }
        let Some(container) = self.last_observed else {
            return;
        };

        let chrome = ChromeConfig::new(self.store.top_bar_height());
        let rects = compute_surface_rects(container, chrome);
        debug!(
            window_width = rects.window.width,
            window_height = rects.window.height,
            mirror_height = rects.mirror.height,
            top_bar_height = chrome.top_bar_height,
            "publishing surface rectangles"
        );

        // Single call: both rectangles land in the store as one atomic update.
        self.store.publish_surface_rects(rects);
        self.ready = true;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::SurfaceRects;
    use std::sync::Mutex;

    // ── Test double ───────────────────────────────────────────────────────────

    struct FakeStore {
        started_up: Mutex<bool>,
        top_bar_height: Mutex<u32>,
        published: Mutex<Vec<SurfaceRects>>,
    }

    impl FakeStore {
        fn new(started_up: bool, top_bar_height: u32) -> Self {
            Self {
                started_up: Mutex::new(started_up),
                top_bar_height: Mutex::new(top_bar_height),
                published: Mutex::new(Vec::new()),
            }
        }

        fn set_started_up(&self, started: bool) {
            *self.started_up.lock().unwrap() = started;
        }

        fn set_top_bar_height(&self, height: u32) {
            *self.top_bar_height.lock().unwrap() = height;
        }

        fn published(&self) -> Vec<SurfaceRects> {
            self.published.lock().unwrap().clone()
        }
    }

    impl ShellStateStore for FakeStore {
        fn active_view(&self) -> String {
            super::super::store::MIRROR_VIEW.to_string()
        }

        fn switch_key(&self) -> Option<String> {
            None
        }

        fn started_up(&self) -> bool {
            *self.started_up.lock().unwrap()
        }

        fn top_bar_height(&self) -> u32 {
            *self.top_bar_height.lock().unwrap()
        }

        fn record_keystroke(&self, _key_code: &str) {}

        fn publish_surface_rects(&self, rects: SurfaceRects) {
            self.published.lock().unwrap().push(rects);
        }
    }

    fn make_sizer(started_up: bool, top_bar_height: u32) -> (ViewportSync, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::new(started_up, top_bar_height));
        let sizer = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
        (sizer, store)
    }

    // ── Guards ────────────────────────────────────────────────────────────────

    #[test]
    fn test_dead_container_observation_is_skipped() {
        // Arrange
        let (mut sizer, store) = make_sizer(true, 50);

        // Act
        sizer.handle_resize(None);

        // Assert
        assert!(store.published().is_empty());
        assert!(!sizer.is_ready());
    }

    #[test]
    fn test_no_publish_before_started_up() {
        let (mut sizer, store) = make_sizer(false, 50);

        sizer.handle_resize(Some(BoxSize::new(800, 600)));

        assert!(store.published().is_empty());
        assert!(!sizer.is_ready());
    }

    #[test]
    fn test_startup_flip_recomputes_from_retained_size() {
        // Arrange – observation lands while not started up
        let (mut sizer, store) = make_sizer(false, 50);
        sizer.handle_resize(Some(BoxSize::new(800, 600)));
        assert!(store.published().is_empty());

        // Act – readiness flips
        store.set_started_up(true);
        sizer.handle_startup_change();

        // Assert – the retained size is published without a new resize
        let published = store.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].window, BoxSize::new(800, 600));
        assert!(sizer.is_ready());
    }

    #[test]
    fn test_startup_change_without_any_observation_publishes_nothing() {
        let (mut sizer, store) = make_sizer(true, 50);
        sizer.handle_startup_change();
        assert!(store.published().is_empty());
        assert!(!sizer.is_ready());
    }

    // ── Geometry ──────────────────────────────────────────────────────────────

    #[test]
    fn test_visible_chrome_shrinks_mirror_by_top_bar_height() {
        let (mut sizer, store) = make_sizer(true, 50);

        sizer.handle_resize(Some(BoxSize::new(800, 600)));

        let published = store.published();
        assert_eq!(published[0].window, BoxSize::new(800, 600));
        assert_eq!(published[0].mirror, BoxSize::new(800, 550));
    }

    #[test]
    fn test_hidden_chrome_keeps_full_height() {
        let (mut sizer, store) = make_sizer(true, 0);

        sizer.handle_resize(Some(BoxSize::new(800, 600)));

        assert_eq!(store.published()[0].mirror, BoxSize::new(800, 600));
    }

    #[test]
    fn test_chrome_height_is_read_at_computation_time() {
        // Arrange – settings change between two observations
        let (mut sizer, store) = make_sizer(true, 50);
        sizer.handle_resize(Some(BoxSize::new(800, 600)));

        // Act
        store.set_top_bar_height(0);
        sizer.handle_resize(Some(BoxSize::new(800, 600)));

        // Assert
        let published = store.published();
        assert_eq!(published[0].mirror.height, 550);
        assert_eq!(published[1].mirror.height, 600);
    }

    // ── Readiness ─────────────────────────────────────────────────────────────

    #[test]
    fn test_ready_latches_after_first_publish() {
        let (mut sizer, _) = make_sizer(true, 0);
        assert!(!sizer.is_ready());

        sizer.handle_resize(Some(BoxSize::new(1280, 480)));

        assert!(sizer.is_ready());
    }

    #[test]
    fn test_ready_never_reverts_on_later_events() {
        let (mut sizer, store) = make_sizer(true, 0);
        sizer.handle_resize(Some(BoxSize::new(1280, 480)));

        // Later resizes and dead-container callbacks republish or no-op,
        // but never unready the surface.
        sizer.handle_resize(Some(BoxSize::new(1024, 600)));
        sizer.handle_resize(None);

        assert!(sizer.is_ready());
        assert_eq!(store.published().len(), 2);
    }
}
