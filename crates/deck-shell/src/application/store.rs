//! The shared shell state seam.
//!
//! The original shell reached into a process-wide observable store from
//! inside its components.  Here the same fields are exposed through an
//! injected trait instead: use cases take an `Arc<dyn ShellStateStore>` at
//! construction time, which makes them independently testable against an
//! in-memory fake and keeps the store implementation swappable.

use deck_core::SurfaceRects;

/// Name of the view in which key routing is active.
pub const MIRROR_VIEW: &str = "MirrorView";

/// Read accessors and mutation entry points over the shared shell state.
///
/// The production implementation is
/// [`InMemoryShellState`](crate::infrastructure::state::InMemoryShellState);
/// test implementations record calls.
///
/// External collaborators (view navigation, the splash sequence, the
/// settings screen) own the fields read here; this module only ever writes
/// the last keystroke and the surface rectangles.
pub trait ShellStateStore: Send + Sync {
    /// The currently active view name.
    fn active_view(&self) -> String;

    /// The key code reserved for view switching, if one is configured.
    ///
    /// `None` means no key is reserved – not a failure.
    fn switch_key(&self) -> Option<String>;

    /// `true` once the shell has finished starting up.  Sizing is not
    /// published before this flips.
    fn started_up(&self) -> bool;

    /// Current top bar height from user settings.  Zero means the chrome is
    /// hidden.
    fn top_bar_height(&self) -> u32;

    /// Records the raw key code of the most recent keystroke.
    ///
    /// Called unconditionally for every key-down, whether or not routing is
    /// active – other parts of the system consume last-key telemetry.
    fn record_keystroke(&self, key_code: &str);

    /// Publishes the window and mirroring-surface rectangles as a single
    /// atomic update.
    fn publish_surface_rects(&self, rects: SurfaceRects);
}
