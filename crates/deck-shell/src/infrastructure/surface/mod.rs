//! Command hand-off to the mirroring surface consumer.
//!
//! The router's [`CommandSink`] is backed by an unbounded Tokio channel.
//! Whatever renders the mirrored content holds the receiving end and picks
//! up each `(action, sequence)` pair as it arrives – the channel is the
//! Rust equivalent of handing the surface new props.

use deck_core::ControlCommand;
use tokio::sync::mpsc;
use tracing::trace;

use crate::application::route_keys::CommandSink;

/// Channel-backed [`CommandSink`].
pub struct ChannelCommandSink {
    tx: mpsc::UnboundedSender<ControlCommand>,
}

impl ChannelCommandSink {
    /// Creates the sink and the receiver the surface consumer reads from.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ControlCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl CommandSink for ChannelCommandSink {
    fn deliver(&self, command: ControlCommand) {
        // The consumer may already be gone during teardown; delivery is
        // best-effort.
        if self.tx.send(command).is_err() {
            trace!("mirroring surface consumer gone, command dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_commands_arrive_in_order() {
        let (sink, mut rx) = ChannelCommandSink::new();

        sink.deliver(ControlCommand::new("left", 1));
        sink.deliver(ControlCommand::new("selectDown", 2));

        assert_eq!(rx.try_recv().unwrap(), ControlCommand::new("left", 1));
        assert_eq!(rx.try_recv().unwrap(), ControlCommand::new("selectDown", 2));
    }

    #[test]
    fn test_delivery_after_consumer_dropped_is_silent() {
        let (sink, rx) = ChannelCommandSink::new();
        drop(rx);

        // Must not panic
        sink.deliver(ControlCommand::new("back", 1));
    }
}
