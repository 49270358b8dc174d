//! Mock key event source for unit testing.
//!
//! Allows tests to inject synthetic [`KeyPress`] events without a real
//! input device.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use super::{CaptureError, KeyEventSource, KeyPress};

/// A mock implementation of [`KeyEventSource`] that allows tests to inject
/// events.
pub struct MockKeySource {
    sender: Arc<Mutex<Option<Sender<KeyPress>>>>,
}

impl MockKeySource {
    /// Creates a new mock key source.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a synthetic key press, as if captured from hardware.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been
    /// called.
    pub fn inject(&self, code: &str) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(KeyPress::new(code))
                .expect("receiver has been dropped; call start() first");
        } else {
            panic!("MockKeySource::inject called before start()");
        }
    }
}

impl Default for MockKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEventSource for MockKeySource {
    fn start(&self) -> Result<mpsc::Receiver<KeyPress>, CaptureError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_key_source_starts_and_receives_events() {
        // Arrange
        let source = MockKeySource::new();
        let rx = source.start().expect("start should succeed");

        // Act
        source.inject("Enter");

        // Assert
        let event = rx.recv().expect("should receive event");
        assert_eq!(event, KeyPress::new("Enter"));
    }

    #[test]
    fn test_mock_key_source_preserves_injection_order() {
        let source = MockKeySource::new();
        let rx = source.start().expect("start should succeed");

        source.inject("ArrowLeft");
        source.inject("ArrowRight");
        source.inject("Enter");

        assert_eq!(rx.recv().unwrap().code, "ArrowLeft");
        assert_eq!(rx.recv().unwrap().code, "ArrowRight");
        assert_eq!(rx.recv().unwrap().code, "Enter");
    }

    #[test]
    fn test_mock_key_source_stop_closes_channel() {
        // Arrange
        let source = MockKeySource::new();
        let rx = source.start().expect("start should succeed");

        // Act
        source.stop();

        // Assert – channel should be disconnected
        assert!(rx.recv().is_err(), "channel should be closed after stop()");
    }
}
