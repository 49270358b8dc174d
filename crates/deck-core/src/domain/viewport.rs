//! Viewport geometry for the mirroring surface.
//!
//! The shell renders inside one root container.  Persistent chrome (the top
//! bar) reduces the area available to the mirroring surface: the surface is
//! always full-width, and gives up the chrome height whenever the chrome is
//! visible.

use serde::{Deserialize, Serialize};

/// A rectangle size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Chrome configuration, supplied by the settings layer.
///
/// Read-only from the layout engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeConfig {
    /// Height of the collapsible top bar in layout units.  Zero means the
    /// chrome is hidden.
    pub top_bar_height: u32,
}

impl ChromeConfig {
    pub fn new(top_bar_height: u32) -> Self {
        Self { top_bar_height }
    }

    /// Returns `true` when the chrome occupies screen space.
    pub fn is_visible(&self) -> bool {
        self.top_bar_height > 0
    }
}

/// The two derived rectangles published on every size change: the full
/// container box and the area left for the mirroring surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceRects {
    /// The root container's full box.
    pub window: BoxSize,
    /// The box the mirroring surface may paint.
    pub mirror: BoxSize,
}

/// Computes the surface rectangles for a container of size `container` under
/// the given chrome configuration.
///
/// Invariants:
/// - `mirror.width == window.width` always.
/// - `mirror.height == window.height` when the chrome is hidden, otherwise
///   `window.height - top_bar_height` (saturating at zero for degenerate
///   containers shorter than the chrome).
pub fn compute_surface_rects(container: BoxSize, chrome: ChromeConfig) -> SurfaceRects {
    let mirror_height = if chrome.is_visible() {
        container.height.saturating_sub(chrome.top_bar_height)
    } else {
        container.height
    };

    SurfaceRects {
        window: container,
        mirror: BoxSize::new(container.width, mirror_height),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
