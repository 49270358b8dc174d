//! KeyRouter: turns raw key-down events into control commands for the
//! mirroring surface.
//!
//! This use case runs on every keystroke.  It records the raw key code into
//! the shared store unconditionally, then – only while the mirroring view is
//! active – resolves the key against the binding table and dispatches a
//! sequenced [`ControlCommand`] to the injected [`CommandSink`].
//!
//! # Press/release emulation
//!
//! The input hardware only reports key-down events, but the mirrored device
//! expects discrete down/up semantics for its select control.  When the
//! resolved action is the select press, the router schedules a synthetic
//! select release through the injected [`ReleaseScheduler`] after a fixed
//! delay, with its own (further incremented) sequence number.
//!
//! Scheduled releases are fire-and-forget with respect to later key events:
//! a new key arriving before the timer fires does not cancel it, and
//! consumers must treat the sequence number – not the action name – as the
//! "new command" signal.  The router does retain the timer handles so that
//! [`KeyRouter::shutdown`] can cancel whatever is still pending and nothing
//! fires into a torn-down surface.
//!
//! # Architecture
//!
//! This use case depends only on traits ([`ShellStateStore`],
//! [`CommandSink`], [`ReleaseScheduler`]) and domain types from `deck-core`.
//! All infrastructure implementations are injected at construction time,
//! making the use case fully unit-testable.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use deck_core::{paired_release, BindingTable, CommandSequence, ControlCommand};
use deck_core::domain::command::SELECT_RELEASE_DELAY_MS;
use tracing::{debug, trace};

use super::store::{ShellStateStore, MIRROR_VIEW};

/// Trait for handing a dispatched command to the mirroring surface.
///
/// The production implementation forwards over a channel to the surface
/// consumer task; test implementations record calls.
pub trait CommandSink: Send + Sync {
    /// Delivers one command.  Delivery is best-effort: a consumer that has
    /// already gone away is not an error.
    fn deliver(&self, command: ControlCommand);
}

/// Cancellation handle for one scheduled release.
pub trait ReleaseHandle: Send {
    /// Cancels the release if it has not fired yet.  Idempotent.
    fn cancel(&self);

    /// Returns `true` once the release has fired (or been cancelled), so
    /// spent handles can be pruned.
    fn is_finished(&self) -> bool;
}

/// Trait for scheduling the delayed synthetic release.
///
/// The production implementation spawns a one-shot timer task on the
/// runtime; test implementations collect the task and fire it manually.
///
/// Dropping the returned handle must NOT cancel the task – timers are
/// fire-and-forget unless [`ReleaseHandle::cancel`] is called explicitly.
pub trait ReleaseScheduler: Send + Sync {
    /// Runs `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Box<dyn ReleaseHandle>;
}

/// The key routing use case.
///
/// Owns the binding table and the command sequence for one shell lifetime.
/// The sequence never resets while this instance lives; it only restarts
/// when the whole router is rebuilt.
pub struct KeyRouter {
    store: Arc<dyn ShellStateStore>,
    bindings: BindingTable,
    sink: Arc<dyn CommandSink>,
    scheduler: Arc<dyn ReleaseScheduler>,
    /// Shared with scheduled release tasks so their numbering stays in the
    /// same monotonic stream.
    sequence: Arc<CommandSequence>,
    /// Most recently dispatched command, for diagnostics and consumers that
    /// poll rather than subscribe.
    latest: Arc<Mutex<Option<ControlCommand>>>,
    /// Handles of scheduled releases, cancelled on shutdown.
    pending_releases: Vec<Box<dyn ReleaseHandle>>,
}

impl KeyRouter {
    /// Creates a router over the given store, bindings, sink, and scheduler.
    pub fn new(
        store: Arc<dyn ShellStateStore>,
        bindings: BindingTable,
        sink: Arc<dyn CommandSink>,
        scheduler: Arc<dyn ReleaseScheduler>,
    ) -> Self {
        Self {
            store,
            bindings,
            sink,
            scheduler,
            sequence: Arc::new(CommandSequence::new()),
            latest: Arc::new(Mutex::new(None)),
            pending_releases: Vec::new(),
        }
    }

    /// Handles one physical key-down event.
    ///
    /// The keystroke record always happens first, before any routing guard,
    /// so last-key telemetry stays complete even when no command results.
    /// Every miss after that – inactive view, reserved switch key, unbound
    /// key – is a silent no-op.
    pub fn handle_key_down(&mut self, key_code: &str) {
        self.store.record_keystroke(key_code);

        if self.store.active_view() != MIRROR_VIEW {
            trace!(key_code, "key ignored: mirroring view not active");
            return;
        }

        // The switch key is reserved for view navigation and must never
        // reach the binding table.  An unset switch key reserves nothing.
        if let Some(switch_key) = self.store.switch_key() {
            if key_code == switch_key {
                trace!(key_code, "key reserved for view switching");
                return;
            }
        }

        let Some(action) = self.bindings.resolve(key_code) else {
            trace!(key_code, "key not bound to any action");
            return;
        };
        let action = action.to_string();

        let command = self.dispatch(&action);

        if let Some(release_action) = paired_release(&command.action) {
            self.schedule_release(release_action);
        }
    }

    /// Dispatches `action` with the next sequence number.
    fn dispatch(&self, action: &str) -> ControlCommand {
        let command = ControlCommand::new(action, self.sequence.next());
        debug!(
            action = %command.action,
            sequence = command.sequence,
            "dispatching control command"
        );
        *self.latest.lock().expect("lock poisoned") = Some(command.clone());
        self.sink.deliver(command.clone());
        command
    }

    /// Schedules the synthetic release that pairs a select press.
    fn schedule_release(&mut self, release_action: &'static str) {
        let sink = Arc::clone(&self.sink);
        let sequence = Arc::clone(&self.sequence);
        let latest = Arc::clone(&self.latest);

        let handle = self.scheduler.schedule(
            Duration::from_millis(SELECT_RELEASE_DELAY_MS),
            Box::new(move || {
                let command = ControlCommand::new(release_action, sequence.next());
                debug!(
                    action = %command.action,
                    sequence = command.sequence,
                    "dispatching synthetic release"
                );
                *latest.lock().expect("lock poisoned") = Some(command.clone());
                sink.deliver(command);
            }),
        );

        // Prune handles whose timers already fired, then retain the new one
        // so shutdown() can cancel it.
        self.pending_releases.retain(|h| !h.is_finished());
        self.pending_releases.push(handle);
    }

    /// Most recently dispatched command (including synthetic releases), or
    /// `None` when nothing has been dispatched yet.
    pub fn last_command(&self) -> Option<ControlCommand> {
        self.latest.lock().expect("lock poisoned").clone()
    }

    /// Cancels all scheduled releases that have not fired yet.
    ///
    /// Call on teardown, after the key event source has stopped, so no
    /// stale release reaches a consumer that no longer exists.
    pub fn shutdown(&mut self) {
        for handle in self.pending_releases.drain(..) {
            handle.cancel();
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
