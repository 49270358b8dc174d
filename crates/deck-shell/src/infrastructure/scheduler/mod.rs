//! Tokio-backed one-shot scheduling for the synthetic select release.
//!
//! Each scheduled release is its own spawned task: sleep, then run.  The
//! handle aborts the task on [`cancel`](crate::application::route_keys::ReleaseHandle::cancel);
//! merely *dropping* a handle does not abort – a Tokio `JoinHandle` detaches
//! on drop, which is exactly the fire-and-forget behavior the router
//! requires for timers outliving the key event that created them.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::application::route_keys::{ReleaseHandle, ReleaseScheduler};

/// Scheduler spawning one-shot timer tasks on a captured runtime handle.
pub struct TokioReleaseScheduler {
    runtime: Handle,
}

impl TokioReleaseScheduler {
    /// Captures the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a runtime context, like
    /// `Handle::current()` itself.
    pub fn new() -> Self {
        Self {
            runtime: Handle::current(),
        }
    }
}

struct TokioReleaseHandle {
    task: JoinHandle<()>,
}

impl ReleaseHandle for TokioReleaseHandle {
    fn cancel(&self) {
        self.task.abort();
    }

    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl ReleaseScheduler for TokioReleaseScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Box<dyn ReleaseHandle> {
        let spawned = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioReleaseHandle { task: spawned })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_task_fires_after_the_delay() {
        // Arrange
        let scheduler = TokioReleaseScheduler::new();
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = Arc::clone(&fired);

        // Act
        let _handle = scheduler.schedule(
            Duration::from_millis(200),
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::Relaxed);
            }),
        );

        // Assert – nothing before the delay elapses
        tokio::time::advance(Duration::from_millis(199)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::Relaxed), 0);

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_handle_does_not_cancel() {
        // Arrange
        let scheduler = TokioReleaseScheduler::new();
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = Arc::clone(&fired);

        // Act – drop the handle immediately; the timer is fire-and-forget
        drop(scheduler.schedule(
            Duration::from_millis(200),
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::Relaxed);
            }),
        ));

        tokio::time::advance(Duration::from_millis(250)).await;
        tokio::task::yield_now().await;

        // Assert
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_the_task_from_firing() {
        // Arrange
        let scheduler = TokioReleaseScheduler::new();
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = Arc::clone(&fired);
        let handle = scheduler.schedule(
            Duration::from_millis(200),
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::Relaxed);
            }),
        );

        // Act
        handle.cancel();
        tokio::time::advance(Duration::from_millis(250)).await;
        tokio::task::yield_now().await;

        // Assert
        assert_eq!(fired.load(Ordering::Relaxed), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_finished_after_firing() {
        let scheduler = TokioReleaseScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(10), Box::new(|| {}));

        assert!(!handle.is_finished());
        tokio::time::advance(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        assert!(handle.is_finished());
    }
}
