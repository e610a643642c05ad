//! Process-wide manager owning the installed sink factories.

use std::sync::{Mutex, OnceLock};

use crate::kind::MessageKind;
use crate::sink::{ConsoleSink, ConsoleSinkFactory, MessageSink, SinkFactory};

/// Factories currently installed, one per classification.
struct ManagerState {
    warning: Box<dyn SinkFactory>,
    debug: Box<dyn SinkFactory>,
}

impl ManagerState {
    fn new() -> Self {
        Self {
            warning: Box::new(ConsoleSinkFactory::new(MessageKind::Warning)),
            debug: Box::new(ConsoleSinkFactory::new(MessageKind::Debug)),
        }
    }
}

/// Global manager state, created lazily on first use.
static MANAGER_STATE: OnceLock<Mutex<ManagerState>> = OnceLock::new();

static MANAGER_INSTANCE: DispatchManager = DispatchManager;

/// Process-wide dispatch manager.
///
/// Owns the two active sink factories and produces a fresh sink per
/// statement. All accesses are serialized by an internal lock; installing
/// a factory drops the previously installed one. A default factory
/// producing [`ConsoleSink`]s is installed for both classifications at
/// first use.
///
/// # Thread Safety
///
/// All methods are safe to call from any thread, including while other
/// threads are mid-dispatch. A statement in flight keeps using the sink it
/// was produced with; only the factory swap itself is atomic.
///
/// # Examples
///
/// ```
/// use dispatch::{DispatchManager, MessageSink as _};
///
/// let mut sink = DispatchManager::global().produce_warning();
/// sink.append("manual dispatch");
/// sink.complete();
/// ```
#[derive(Debug)]
pub struct DispatchManager;

impl DispatchManager {
    /// Returns the single process-wide manager instance.
    #[must_use]
    pub fn global() -> &'static Self {
        let _ = MANAGER_STATE.get_or_init(|| Mutex::new(ManagerState::new()));
        &MANAGER_INSTANCE
    }

    fn state() -> &'static Mutex<ManagerState> {
        MANAGER_STATE.get_or_init(|| Mutex::new(ManagerState::new()))
    }

    /// Produces a fresh warning sink from the installed factory.
    #[must_use]
    pub fn produce_warning(&self) -> Box<dyn MessageSink> {
        Self::state().lock().map_or_else(
            |_| Box::new(ConsoleSink::new(MessageKind::Warning)) as Box<dyn MessageSink>,
            |state| state.warning.produce(),
        )
    }

    /// Produces a fresh debug sink from the installed factory.
    #[must_use]
    pub fn produce_debug(&self) -> Box<dyn MessageSink> {
        Self::state().lock().map_or_else(
            |_| Box::new(ConsoleSink::new(MessageKind::Debug)) as Box<dyn MessageSink>,
            |state| state.debug.produce(),
        )
    }

    /// Installs the warning factory, dropping the previous one.
    pub fn set_warning_factory(&self, factory: Box<dyn SinkFactory>) {
        if let Ok(mut state) = Self::state().lock() {
            state.warning = factory;
        }
    }

    /// Installs the debug factory, dropping the previous one.
    pub fn set_debug_factory(&self, factory: Box<dyn SinkFactory>) {
        if let Ok(mut state) = Self::state().lock() {
            state.debug = factory;
        }
    }

    /// Reinstalls the default console factories for both classifications.
    pub fn reset_to_console(&self) {
        if let Ok(mut state) = Self::state().lock() {
            *state = ManagerState::new();
        }
    }
}
