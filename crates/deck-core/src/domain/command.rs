//! Control command types dispatched to the mirroring surface.

/// Action name dispatched when the physical select/confirm key goes down.
pub const ACTION_SELECT_PRESS: &str = "selectDown";

/// Synthetic counterpart to [`ACTION_SELECT_PRESS`], dispatched after
/// [`SELECT_RELEASE_DELAY_MS`] to give the device discrete down/up semantics
/// from an input source that only reports key-down events.
pub const ACTION_SELECT_RELEASE: &str = "selectUp";

/// Delay between the select press and the synthetic release, in milliseconds.
pub const SELECT_RELEASE_DELAY_MS: u64 = 200;

/// A discrete control command handed to the mirroring surface.
///
/// The `sequence` number – not the action name – is what tells a consumer a
/// new command has arrived: the same action can legitimately repeat
/// back-to-back (e.g. two "left" presses), and the synthetic release reuses
/// a name the consumer has seen before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCommand {
    /// The named action, as resolved from the binding table.
    pub action: String,
    /// Monotonic per-router counter; increases by exactly one per dispatch.
    pub sequence: u64,
}

impl ControlCommand {
    /// Creates a command for `action` with the given sequence number.
    pub fn new(action: impl Into<String>, sequence: u64) -> Self {
        Self {
            action: action.into(),
            sequence,
        }
    }
}

/// Returns the synthetic follow-up action paired with `action`, if any.
///
/// Only the select press has a pair; every other action is a single
/// discrete event.
pub fn paired_release(action: &str) -> Option<&'static str> {
    if action == ACTION_SELECT_PRESS {
        Some(ACTION_SELECT_RELEASE)
    } else {
        None
    }
}
