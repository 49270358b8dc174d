//! Line-oriented stdin key source for development.
//!
//! Each line on stdin is taken as one DOM-style key code ("Enter",
//! "ArrowLeft") and forwarded as a key-down event.  The production head
//! unit feeds key events through its own input device layer; that transport
//! is an external collaborator, so this harness is what the binary ships
//! with for bench testing the routing pipeline.
//!
//! The reader runs on a dedicated thread because stdin reads block.  After
//! `stop()` the thread exits on the next line (or EOF) – it may stay parked
//! on a blocking read until then, which is acceptable for a dev harness.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use tracing::debug;

use super::{CaptureError, KeyEventSource, KeyPress};

/// Key source reading one key code per line from standard input.
pub struct StdinKeySource {
    stopping: Arc<AtomicBool>,
    started: AtomicBool,
}

impl StdinKeySource {
    pub fn new() -> Self {
        Self {
            stopping: Arc::new(AtomicBool::new(false)),
            started: AtomicBool::new(false),
        }
    }
}

impl Default for StdinKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEventSource for StdinKeySource {
    fn start(&self) -> Result<mpsc::Receiver<KeyPress>, CaptureError> {
        if self.started.swap(true, Ordering::Relaxed) {
            return Err(CaptureError::AlreadyStarted);
        }

        let (tx, rx) = mpsc::channel();
        let stopping = Arc::clone(&self.stopping);

        std::thread::Builder::new()
            .name("deck-stdin-keys".to_string())
            .spawn(move || {
                let stdin = std::io::stdin();
                let mut line = String::new();
                loop {
                    if stopping.load(Ordering::Relaxed) {
                        break;
                    }
                    line.clear();
                    match stdin.lock().read_line(&mut line) {
                        // EOF: the terminal went away
                        Ok(0) => break,
                        Ok(_) => {
                            let code = line.trim();
                            if code.is_empty() {
                                continue;
                            }
                            if tx.send(KeyPress::new(code)).is_err() {
                                // Receiver dropped: pump already torn down
                                break;
                            }
                        }
                        Err(e) => {
                            debug!("stdin read failed, stopping key source: {e}");
                            break;
                        }
                    }
                }
            })
            .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

        Ok(rx)
    }

    fn stop(&self) {
        self.stopping.store(true, Ordering::Relaxed);
    }
}
