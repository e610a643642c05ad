//! Bridge from dispatched statements into the tracing ecosystem.
//!
//! This module is compiled with the `tracing` feature and installs a
//! message handler that republishes every completed statement as a
//! [`tracing`] event: warning statements at [`tracing::Level::WARN`],
//! debug statements at [`tracing::Level::DEBUG`]. It is an in-tree example
//! of the swappable-handler contract any platform log sink uses.

use crate::kind::MessageKind;
use crate::registry::install_message_handler;

/// Target attached to forwarded events.
pub const TRACING_TARGET: &str = "dispatch";

/// Installs a message handler forwarding statements to `tracing`.
///
/// The statement terminator is stripped before the event is emitted, since
/// tracing subscribers add their own line framing. Replaces any previously
/// installed handler; call
/// [`clear_message_handler`](crate::clear_message_handler) to restore
/// console output.
///
/// # Examples
///
/// ```
/// dispatch::install_tracing_handler();
/// dispatch::warning_log!("surfaced as a tracing WARN event");
/// # dispatch::clear_message_handler();
/// ```
pub fn install_tracing_handler() {
    install_message_handler(|kind, line| {
        let line = line.trim_end_matches('\n');
        match kind {
            MessageKind::Warning => tracing::warn!(target: "dispatch", "{line}"),
            MessageKind::Debug => tracing::debug!(target: "dispatch", "{line}"),
        }
    });
}
