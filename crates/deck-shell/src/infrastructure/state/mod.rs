//! In-memory shared shell state.
//!
//! One instance is created at startup and shared (via `Arc`) between the
//! use cases and the external collaborators that own parts of the state:
//! view navigation writes `active_view`, the splash sequence flips
//! `started_up`, the settings screen adjusts `top_bar_height`.  The use
//! cases reach it only through the [`ShellStateStore`] trait.

use std::sync::RwLock;

use deck_core::{BoxSize, SurfaceRects};

use crate::application::store::{ShellStateStore, MIRROR_VIEW};

/// The full shared state record.
#[derive(Debug, Clone)]
pub struct ShellState {
    /// Name of the currently active view.
    pub active_view: String,
    /// Key code reserved for view switching, if any.
    pub switch_key: Option<String>,
    /// `true` once the shell has finished starting up.
    pub started_up: bool,
    /// Top bar height from user settings.
    pub top_bar_height: u32,
    /// Raw code of the most recent keystroke, for telemetry consumers.
    pub last_keystroke: Option<String>,
    /// Full container box, published by the viewport sizer.
    pub window_size: BoxSize,
    /// Mirroring surface box, published by the viewport sizer.
    pub mirror_size: BoxSize,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_view: MIRROR_VIEW.to_string(),
            switch_key: None,
            started_up: false,
            top_bar_height: 0,
            last_keystroke: None,
            window_size: BoxSize::default(),
            mirror_size: BoxSize::default(),
        }
    }
}

/// `RwLock`-guarded [`ShellStateStore`] implementation.
pub struct InMemoryShellState {
    inner: RwLock<ShellState>,
}

impl InMemoryShellState {
    /// Creates a store seeded with `initial`.
    pub fn new(initial: ShellState) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    // ── Collaborator entry points ─────────────────────────────────────────────

    /// Switches the active view (view navigation).
    pub fn set_active_view(&self, view: &str) {
        self.inner.write().expect("lock poisoned").active_view = view.to_string();
    }

    /// Sets or clears the reserved view-switch key.
    pub fn set_switch_key(&self, key: Option<String>) {
        self.inner.write().expect("lock poisoned").switch_key = key;
    }

    /// Flips the startup readiness flag (splash sequence).
    pub fn set_started_up(&self, started_up: bool) {
        self.inner.write().expect("lock poisoned").started_up = started_up;
    }

    /// Adjusts the top bar height (settings screen).
    pub fn set_top_bar_height(&self, height: u32) {
        self.inner.write().expect("lock poisoned").top_bar_height = height;
    }

    // ── Diagnostics ───────────────────────────────────────────────────────────

    /// Returns a copy of the full state record.
    pub fn snapshot(&self) -> ShellState {
        self.inner.read().expect("lock poisoned").clone()
    }

    /// Raw code of the most recent keystroke, if any key was pressed yet.
    pub fn last_keystroke(&self) -> Option<String> {
        self.inner.read().expect("lock poisoned").last_keystroke.clone()
    }
}

impl Default for InMemoryShellState {
    fn default() -> Self {
        Self::new(ShellState::default())
    }
}

impl ShellStateStore for InMemoryShellState {
    fn active_view(&self) -> String {
        self.inner.read().expect("lock poisoned").active_view.clone()
    }

    fn switch_key(&self) -> Option<String> {
        self.inner.read().expect("lock poisoned").switch_key.clone()
    }

    fn started_up(&self) -> bool {
        self.inner.read().expect("lock poisoned").started_up
    }

    fn top_bar_height(&self) -> u32 {
        self.inner.read().expect("lock poisoned").top_bar_height
    }

    fn record_keystroke(&self, key_code: &str) {
        self.inner.write().expect("lock poisoned").last_keystroke = Some(key_code.to_string());
    }

    fn publish_surface_rects(&self, rects: SurfaceRects) {
        // One write guard covers both fields, so readers never see a
        // half-updated pair.
        let mut state = self.inner.write().expect("lock poisoned");
        state.window_size = rects.window;
        state.mirror_size = rects.mirror;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
