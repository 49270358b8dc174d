//! Fixed-panel resize source.
//!
//! In-vehicle displays do not physically resize: the container box is the
//! panel resolution from configuration, observed once at startup.  This
//! source emits that single observation and then stays silent until
//! disconnected.  (Chrome changes do not need further observations – the
//! sizer reads the top bar height from the store at computation time.)

use std::sync::{
    mpsc::{self, Sender},
    Mutex,
};

use deck_core::BoxSize;

use super::{BoxObservation, ObserveError, ResizeSource};

/// Resize source emitting the configured panel size once.
pub struct FixedPanelSource {
    size: BoxSize,
    sender: Mutex<Option<Sender<BoxObservation>>>,
}

impl FixedPanelSource {
    pub fn new(size: BoxSize) -> Self {
        Self {
            size,
            sender: Mutex::new(None),
        }
    }
}

impl ResizeSource for FixedPanelSource {
    fn observe(&self) -> Result<mpsc::Receiver<BoxObservation>, ObserveError> {
        let mut guard = self.sender.lock().expect("lock poisoned");
        if guard.is_some() {
            return Err(ObserveError::AlreadyObserved);
        }

        let (tx, rx) = mpsc::channel();
        tx.send(Some(self.size))
            .map_err(|e| ObserveError::ObserveFailed(e.to_string()))?;
        *guard = Some(tx);
        Ok(rx)
    }

    fn disconnect(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}
