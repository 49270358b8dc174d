//! # deck-core
//!
//! Shared library for MirrorDeck containing the key binding table, control
//! command types, the command sequence counter, and viewport geometry.
//!
//! This crate is used by the shell application and its tests.  It has zero
//! dependencies on OS APIs, UI frameworks, async runtimes, or sockets.
//!
//! # Architecture overview (for beginners)
//!
//! MirrorDeck is the input-and-layout core of an in-vehicle multimedia shell.
//! The shell embeds a "mirroring surface": a component that displays content
//! projected from an external media device (a phone, typically).  The device
//! only understands discrete named control actions ("left", "selectDown"),
//! not raw key codes, and its surface must be told exactly how many pixels
//! it may paint.
//!
//! This crate (`deck-core`) is the pure-domain foundation.  It defines:
//!
//! - **`domain::bindings`** – The configurable table mapping abstract action
//!   names to physical key codes.  The shell consults it on every key press.
//!
//! - **`domain::command`** – The `ControlCommand` handed to the mirroring
//!   surface: an action name plus a monotonic sequence number.
//!
//! - **`domain::sequence`** – The counter producing those sequence numbers.
//!
//! - **`domain::viewport`** – Geometry: given the root container size and
//!   the chrome configuration (top bar height), compute the rectangle the
//!   mirroring surface is allowed to occupy.

// Declare the top-level module.  Rust will look for it in a subdirectory
// with the same name (src/domain/mod.rs).
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `deck_core::BindingTable` instead of `deck_core::domain::bindings::BindingTable`.
pub use domain::bindings::{BindingError, BindingTable};
pub use domain::command::{
    paired_release, ControlCommand, ACTION_SELECT_PRESS, ACTION_SELECT_RELEASE,
};
pub use domain::sequence::CommandSequence;
pub use domain::viewport::{compute_surface_rects, BoxSize, ChromeConfig, SurfaceRects};
