//! Container box-size observation.
//!
//! The viewport sizer does not poll the container; it subscribes to a
//! source of box-size observations and recomputes on each one.  The
//! observe/disconnect pair is explicit: `observe()` hands out the channel,
//! `disconnect()` closes it, and the consuming pump drains and exits – the
//! release path is the same on every teardown, not an implicit side effect
//! of dropping something.
//!
//! An observation of `None` means the observed container was not live when
//! the callback fired.  This is transient and retried on the next
//! observation, never an error.

use std::sync::mpsc;

use deck_core::BoxSize;

pub mod fixed;
pub mod mock;

/// One box-size observation; `None` when the container reference is dead.
pub type BoxObservation = Option<BoxSize>;

/// Error type for resize observation operations.
#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    #[error("failed to observe container size: {0}")]
    ObserveFailed(String),
    #[error("resize source has already been observed")]
    AlreadyObserved,
}

/// Trait abstracting box-size observation.
///
/// The production implementation emits the configured panel size; tests use
/// [`mock::MockResizeSource`].
pub trait ResizeSource: Send {
    /// Starts observation and returns a receiver for size notifications.
    fn observe(&self) -> Result<mpsc::Receiver<BoxObservation>, ObserveError>;

    /// Stops observation and closes the channel.
    fn disconnect(&self);
}
