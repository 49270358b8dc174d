//! Mock resize source for unit testing.
//!
//! Allows tests to inject synthetic box-size observations, including the
//! `None` dead-container case.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use deck_core::BoxSize;

use super::{BoxObservation, ObserveError, ResizeSource};

/// A mock implementation of [`ResizeSource`] that allows tests to inject
/// observations.
pub struct MockResizeSource {
    sender: Arc<Mutex<Option<Sender<BoxObservation>>>>,
}

impl MockResizeSource {
    /// Creates a new mock resize source.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a live container observation.
    pub fn inject(&self, width: u32, height: u32) {
        self.inject_observation(Some(BoxSize::new(width, height)));
    }

    /// Injects a dead-container observation.
    pub fn inject_dead(&self) {
        self.inject_observation(None);
    }

    fn inject_observation(&self, observation: BoxObservation) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(observation)
                .expect("receiver has been dropped; call observe() first");
        } else {
            panic!("MockResizeSource::inject called before observe()");
        }
    }
}

impl Default for MockResizeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeSource for MockResizeSource {
    fn observe(&self) -> Result<mpsc::Receiver<BoxObservation>, ObserveError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn disconnect(&self) {
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_resize_source_delivers_observations() {
        // Arrange
        let source = MockResizeSource::new();
        let rx = source.observe().expect("observe should succeed");

        // Act
        source.inject(800, 600);
        source.inject_dead();

        // Assert
        assert_eq!(rx.recv().unwrap(), Some(BoxSize::new(800, 600)));
        assert_eq!(rx.recv().unwrap(), None);
    }

    #[test]
    fn test_mock_resize_source_disconnect_closes_channel() {
        let source = MockResizeSource::new();
        let rx = source.observe().expect("observe should succeed");

        source.disconnect();

        assert!(rx.recv().is_err());
    }
}
