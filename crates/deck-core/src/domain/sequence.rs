//! Thread-safe sequence counter for control command numbering.
//!
//! # What is the sequence number for? (for beginners)
//!
//! Every [`ControlCommand`](super::command::ControlCommand) carries a
//! monotonically increasing integer.  Consumers of the mirroring surface use
//! it – not the action name – to detect that a *new* command has arrived:
//! the same action name can repeat on consecutive dispatches (two "left"
//! presses in a row look identical without it), and the synthetic select
//! release reuses a name the consumer already saw.
//!
//! # Thread safety
//!
//! The counter uses `AtomicU64` internally so the key router and the
//! scheduled release task can both draw numbers without a lock.  An atomic
//! `fetch_add` reads, increments, and writes the value as one indivisible
//! step, so two tasks can never be handed the same sequence number.

use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe, monotonically increasing counter for command sequence
/// numbers.
///
/// The first call to [`next`](Self::next) returns 1: consumers treat 0 as
/// "no command dispatched yet", matching a freshly mounted surface.  The
/// counter wraps around at `u64::MAX` back to 0 without panicking.
///
/// # Examples
///
/// ```rust
/// use deck_core::CommandSequence;
///
/// let seq = CommandSequence::new();
/// assert_eq!(seq.next(), 1);
/// assert_eq!(seq.next(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CommandSequence {
    inner: AtomicU64,
}

impl CommandSequence {
    /// Creates a new counter; the first [`next`](Self::next) returns 1.
    pub fn new() -> Self {
        Self {
            inner: AtomicU64::new(0),
        }
    }

    /// Increments the counter and returns the new value.
    ///
    /// The first call returns 1, the second 2, and so on.  Wraps around from
    /// `u64::MAX` to 0 on overflow without panicking.
    ///
    /// # Atomic ordering
    ///
    /// `Ordering::Relaxed` is sufficient: sequence numbers only order
    /// commands relative to each other, they are not used to synchronise
    /// other memory between tasks.
    pub fn next(&self) -> u64 {
        // `fetch_add` returns the value *before* the addition; the command
        // carries the post-increment value so numbering starts at 1.
        self.inner.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Returns the most recently issued value without incrementing.
    ///
    /// Useful for logging and diagnostics.  By the time the caller uses the
    /// returned value another task may already have drawn a higher one.
    pub fn current(&self) -> u64 {
        self.inner.load(Ordering::Relaxed)
    }
}
