//! Key event sources for the shell.
//!
//! Key codes are DOM-style `KeyboardEvent.code` strings ("Enter",
//! "ArrowLeft") – the convention the shell's input layer reports and the
//! binding table is written in.
//!
//! Raw events are placed into a channel by the source and consumed by a
//! pump task; the source itself never touches routing logic.
//!
//! # Testability
//!
//! The `KeyEventSource` trait allows unit tests to inject synthetic events
//! without any real input device.

use std::sync::mpsc;

pub mod mock;
pub mod stdin;

/// A raw key-down event produced by an input source.
///
/// Only key-down exists: the head unit's input hardware does not report
/// releases, which is why the select control gets a synthetic release at
/// the routing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// DOM-style key code string.
    pub code: String,
}

impl KeyPress {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Error type for key event source operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to start key event source: {0}")]
    StartFailed(String),
    #[error("key event source has already been started")]
    AlreadyStarted,
}

/// Trait abstracting key event production.
///
/// The production implementation reads the development stdin harness; tests
/// use [`mock::MockKeySource`].  Stopping the source closes the channel so
/// the consuming pump drains and exits – subscribe on activation,
/// unsubscribe on teardown, with no leaked handles across that boundary.
pub trait KeyEventSource: Send {
    /// Starts the source and returns a receiver for captured events.
    fn start(&self) -> Result<mpsc::Receiver<KeyPress>, CaptureError>;

    /// Stops the source and releases its resources.
    fn stop(&self);
}
