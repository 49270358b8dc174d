//! Infrastructure layer for the shell.
//!
//! Contains the outward-facing adapters: key event sources, container
//! resize observation, the runtime-backed release scheduler, the shared
//! state store, the surface command channel, and config storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `deck_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod key_events;
pub mod resize;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod surface;
