#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dispatch` is a process-wide, pluggable debug/warning output facility.
//! Application code emits diagnostic statements through [`warning_log!`]
//! and [`debug_log!`] (or a hand-built [`Statement`]); each statement
//! streams text into a fresh [`MessageSink`] produced by the installed
//! [`SinkFactory`] for its [`MessageKind`], and flushes one terminated
//! line when its scope ends. Independently, [`DebugGate`]s give individual
//! code paths a runtime toggle for verbose work, including out-of-band
//! "table" dumps, without recompilation.
//!
//! # Design
//!
//! - [`DispatchManager`] is the process-wide singleton holding the two
//!   active factories under a lock; [`DispatchManager::set_warning_factory`]
//!   and [`DispatchManager::set_debug_factory`] redirect where new
//!   statements go, taking ownership of the installed factory.
//! - A single registry lock guards the message handler, the table
//!   callback, the stored gate flags, and the live-gate list, so toggling
//!   and registration stay consistent under concurrent access from
//!   arbitrary threads.
//! - [`install_message_handler`] swaps the destination of every completed
//!   line; without a handler, lines go to stdout and are flushed
//!   immediately.
//! - [`install_abort_handler`] hooks SIGABRT so an aborting process
//!   reports its signal and a best-effort backtrace through the same
//!   dispatch path.
//!
//! # Invariants
//!
//! - Exactly one sink is alive per in-flight statement; completion happens
//!   once, at end of statement scope, and appends the line terminator.
//! - A gate's enabled state always reflects the most recent
//!   [`DebugGate::enable`] call naming its exact `(class_path, kind)`
//!   pair, even for gates constructed before the call.
//! - Stored gate preferences persist for the process lifetime; dropping a
//!   gate never erases them.
//!
//! # Errors
//!
//! The core performs no fallible I/O and defines no error type. "No
//! handler installed" is a documented fallback (console output; silently
//! dropped table payloads), not an error. Only OS-level handler
//! installation returns [`std::io::Result`].
//!
//! # Examples
//!
//! Compose a statement and toggle a gate at runtime:
//!
//! ```
//! use dispatch::{DebugGate, DebugKind, warning_log};
//!
//! warning_log!("checksum mismatch on chunk {}", 7);
//!
//! let gate = DebugGate::console("transfer/delta");
//! if gate.is_enabled() {
//!     // expensive diagnostics only when toggled on
//! }
//! DebugGate::enable("transfer/delta", DebugKind::Console, true);
//! assert!(gate.is_enabled());
//! # DebugGate::enable("transfer/delta", DebugKind::Console, false);
//! ```
//!
//! Redirect completed statements to a custom handler:
//!
//! ```
//! use dispatch::{install_message_handler, clear_message_handler};
//!
//! install_message_handler(|kind, line| {
//!     eprint!("{kind}: {line}");
//! });
//! dispatch::debug_log!("lands in the handler, not on stdout");
//! clear_message_handler();
//! ```
//!
//! # See also
//!
//! - `dispatch-syslog` for routing statements to syslog(3) through the
//!   same handler contract.
//! - The `tracing` feature for republishing statements as tracing events.

mod gate;
mod kind;
mod macros;
mod manager;
mod registry;
mod signal;
mod sink;
mod statement;
#[cfg(feature = "tracing")]
mod tracing_forward;

pub use gate::DebugGate;
pub use kind::{DebugKind, MessageKind};
pub use manager::DispatchManager;
pub use registry::{
    MessageHandler, TableCallback, clear_message_handler, clear_table_callback,
    install_message_handler, install_table_callback,
};
pub use signal::{SignalGuard, install_abort_handler};
pub use sink::{ConsoleSink, ConsoleSinkFactory, MessageSink, SinkFactory};
pub use statement::Statement;
#[cfg(feature = "tracing")]
pub use tracing_forward::{TRACING_TARGET, install_tracing_handler};
