//! Process-wide registry shared by the dispatch hooks and debug gates.
//!
//! One mutex guards everything that can be swapped or toggled at runtime:
//! the message handler, the table callback, the stored enable flags, and
//! the list of live gates. The data volume and call frequency are low, so
//! a single lock keeps the toggling/registration/flush paths trivially
//! consistent with each other.

use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use rustc_hash::FxHashMap;

use crate::gate::GateState;
use crate::kind::{DebugKind, MessageKind};

/// Callback receiving every completed statement as `(kind, line)`.
///
/// The line includes its trailing terminator; handlers that need a bare
/// line (syslog, tracing) trim it at their boundary.
pub type MessageHandler = dyn Fn(MessageKind, &str) + Send + Sync;

/// Callback receiving table payloads as `(class_path, kind, payload)`.
pub type TableCallback = dyn Fn(&str, DebugKind, &str) + Send + Sync;

pub(crate) struct Registry {
    pub(crate) message_handler: Option<Box<MessageHandler>>,
    pub(crate) table_callback: Option<Box<TableCallback>>,
    /// Stored preference per `(class_path, kind)` pair. Entries persist for
    /// the process lifetime once set, so gates constructed later inherit
    /// the last-known state.
    pub(crate) flags: FxHashMap<(String, DebugKind), bool>,
    /// Live gates in construction order. The registry holds shared state,
    /// never the gate object itself; entries leave when the gate drops.
    pub(crate) gates: Vec<Arc<GateState>>,
}

impl Registry {
    fn new() -> Self {
        Self {
            message_handler: None,
            table_callback: None,
            flags: FxHashMap::default(),
            gates: Vec::new(),
        }
    }
}

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

pub(crate) fn registry() -> &'static Mutex<Registry> {
    REGISTRY.get_or_init(|| Mutex::new(Registry::new()))
}

/// Installs the process-wide message handler.
///
/// Once installed, every completed warning/debug statement is delivered to
/// `handler` as `(kind, line)` instead of being printed to stdout. The line
/// still carries the terminator appended at completion. Replaces any
/// previously installed handler; the handler is invoked with the registry
/// lock held, so it must not issue dispatch statements of its own.
///
/// # Examples
///
/// ```
/// use dispatch::{install_message_handler, clear_message_handler, MessageKind};
///
/// install_message_handler(|kind, line| {
///     eprint!("[{kind}] {line}");
/// });
/// # clear_message_handler();
/// ```
pub fn install_message_handler<F>(handler: F)
where
    F: Fn(MessageKind, &str) + Send + Sync + 'static,
{
    if let Ok(mut registry) = registry().lock() {
        registry.message_handler = Some(Box::new(handler));
    }
}

/// Removes the installed message handler, restoring console output.
///
/// Statements issued afterwards print to stdout again.
pub fn clear_message_handler() {
    if let Ok(mut registry) = registry().lock() {
        registry.message_handler = None;
    }
}

/// Installs the process-wide table callback.
///
/// The callback receives `(class_path, kind, payload)` for every
/// [`DebugGate::set_table`](crate::DebugGate::set_table) call made through
/// an enabled gate. Without a callback installed, table payloads are
/// silently dropped.
pub fn install_table_callback<F>(callback: F)
where
    F: Fn(&str, DebugKind, &str) + Send + Sync + 'static,
{
    if let Ok(mut registry) = registry().lock() {
        registry.table_callback = Some(Box::new(callback));
    }
}

/// Removes the installed table callback; payloads are dropped again.
pub fn clear_table_callback() {
    if let Ok(mut registry) = registry().lock() {
        registry.table_callback = None;
    }
}

/// Routes one completed line to the installed handler or to stdout.
///
/// Stdout output is flushed immediately.
pub(crate) fn dispatch_line(kind: MessageKind, line: &str) {
    if let Ok(registry) = registry().lock() {
        if let Some(handler) = registry.message_handler.as_deref() {
            handler(kind, line);
        } else {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(line.as_bytes());
            let _ = stdout.flush();
        }
    }
}
