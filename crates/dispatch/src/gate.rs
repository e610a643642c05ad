//! Runtime debug gates keyed by class path.
//!
//! A gate is a live, queryable toggle bound to one `(class_path, kind)`
//! pair. Toggling is retroactive: [`DebugGate::enable`] records the value
//! in the stored flag table and flips every live gate registered for that
//! exact pair, so toggles work both before the owning code path has run
//! and after its gates already exist. The stored preference outlives the
//! gates; a gate constructed later inherits the last value set for its
//! pair.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::kind::DebugKind;
use crate::registry::registry;

/// State shared between a gate and the registry's live-gate list.
#[derive(Debug)]
pub(crate) struct GateState {
    pub(crate) class_path: String,
    pub(crate) kind: DebugKind,
    pub(crate) enabled: AtomicBool,
}

/// A per-call-site debug toggle.
///
/// Construct one wherever a code path wants a runtime switch for expensive
/// debug work, commonly at function or object scope. The boolean test is a
/// lock-free atomic load, cheap enough for hot paths; everything else goes
/// through the shared registry lock.
///
/// # Examples
///
/// ```
/// use dispatch::{DebugGate, DebugKind};
///
/// let gate = DebugGate::console("render/culling");
/// assert!(!gate.is_enabled());
///
/// DebugGate::enable("render/culling", DebugKind::Console, true);
/// assert!(gate.is_enabled());
/// # DebugGate::enable("render/culling", DebugKind::Console, false);
/// ```
#[derive(Debug)]
pub struct DebugGate {
    state: Arc<GateState>,
}

impl DebugGate {
    /// Constructs a gate for `(class_path, kind)` and registers it.
    ///
    /// The gate seeds its enabled flag from the stored preference for its
    /// pair, defaulting to disabled when none was ever set. Registration
    /// and seeding happen under one lock acquisition, so a concurrent
    /// [`enable`](Self::enable) is either fully observed or fully applied
    /// afterwards.
    #[must_use]
    pub fn new(class_path: impl Into<String>, kind: DebugKind) -> Self {
        let state = Arc::new(GateState {
            class_path: class_path.into(),
            kind,
            enabled: AtomicBool::new(false),
        });

        if let Ok(mut registry) = registry().lock() {
            if let Some(&stored) = registry.flags.get(&(state.class_path.clone(), kind)) {
                state.enabled.store(stored, Ordering::Relaxed);
            }
            registry.gates.push(Arc::clone(&state));
        }

        Self { state }
    }

    /// Constructs a [`DebugKind::Console`] gate, the common case.
    #[must_use]
    pub fn console(class_path: impl Into<String>) -> Self {
        Self::new(class_path, DebugKind::Console)
    }

    /// Returns the current enabled state.
    ///
    /// Lock-free; reflects the most recent [`enable`](Self::enable) call
    /// naming this gate's exact pair.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled.load(Ordering::Relaxed)
    }

    /// Returns the class path this gate was constructed with.
    #[must_use]
    pub fn class_path(&self) -> &str {
        &self.state.class_path
    }

    /// Returns the gate's classification.
    #[must_use]
    pub fn kind(&self) -> DebugKind {
        self.state.kind
    }

    /// Forwards a large payload to the table callback.
    ///
    /// A no-op unless the gate is enabled; with no callback installed the
    /// payload is silently dropped. The callback is invoked under the
    /// registry lock with this gate's exact `(class_path, kind)` pair.
    pub fn set_table(&self, payload: &str) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(registry) = registry().lock() {
            if let Some(callback) = registry.table_callback.as_deref() {
                callback(&self.state.class_path, self.state.kind, payload);
            }
        }
    }

    /// Records an enable flag and flips every matching live gate.
    ///
    /// The value overwrites any prior flag for the pair and persists for
    /// the process lifetime, so gates constructed later inherit it.
    /// Matching is exact-pair only: neither other kinds under the same
    /// class path nor overlapping class paths are affected.
    pub fn enable(class_path: &str, kind: DebugKind, enabled: bool) {
        if let Ok(mut registry) = registry().lock() {
            registry
                .flags
                .insert((class_path.to_owned(), kind), enabled);
            for gate in &registry.gates {
                if gate.kind == kind && gate.class_path == class_path {
                    gate.enabled.store(enabled, Ordering::Relaxed);
                }
            }
        }
    }

    /// Lists the class paths of all currently live gates of `kind`.
    ///
    /// Enumeration order is construction order; a class path appears once
    /// per live gate, so duplicates are possible. Dropped gates are
    /// excluded.
    #[must_use]
    pub fn class_paths(kind: DebugKind) -> Vec<String> {
        registry().lock().map_or_else(
            |_| Vec::new(),
            |registry| {
                registry
                    .gates
                    .iter()
                    .filter(|gate| gate.kind == kind)
                    .map(|gate| gate.class_path.clone())
                    .collect()
            },
        )
    }
}

impl Drop for DebugGate {
    fn drop(&mut self) {
        // Leaves the stored flag intact so future gates for the same pair
        // inherit the last-known state.
        if let Ok(mut registry) = registry().lock() {
            if let Some(position) = registry
                .gates
                .iter()
                .position(|gate| Arc::ptr_eq(gate, &self.state))
            {
                registry.gates.remove(position);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Class paths here are unique to this module so the process-wide
    // registry does not couple these tests to the rest of the suite.

    #[test]
    fn gate_starts_disabled() {
        let gate = DebugGate::console("gate_tests/starts_disabled");
        assert!(!gate.is_enabled());
    }

    #[test]
    fn enable_flips_live_gate_in_place() {
        let gate = DebugGate::new("gate_tests/flip", DebugKind::Console);
        DebugGate::enable("gate_tests/flip", DebugKind::Console, true);
        assert!(gate.is_enabled());
        DebugGate::enable("gate_tests/flip", DebugKind::Console, false);
        assert!(!gate.is_enabled());
    }

    #[test]
    fn stored_preference_is_inherited_by_later_gates() {
        DebugGate::enable("gate_tests/inherit", DebugKind::Table, true);
        let gate = DebugGate::new("gate_tests/inherit", DebugKind::Table);
        assert!(gate.is_enabled());
        DebugGate::enable("gate_tests/inherit", DebugKind::Table, false);
    }

    #[test]
    fn enable_is_pair_exact() {
        let console = DebugGate::new("gate_tests/pair", DebugKind::Console);
        let table = DebugGate::new("gate_tests/pair", DebugKind::Table);
        let other = DebugGate::new("gate_tests/pair_other", DebugKind::Console);

        DebugGate::enable("gate_tests/pair", DebugKind::Console, true);

        assert!(console.is_enabled());
        assert!(!table.is_enabled());
        assert!(!other.is_enabled());

        DebugGate::enable("gate_tests/pair", DebugKind::Console, false);
    }

    #[test]
    fn class_paths_tracks_live_gates_only() {
        let kept = DebugGate::new("gate_tests/enumerated", DebugKind::Table);
        {
            let _dropped = DebugGate::new("gate_tests/transient", DebugKind::Table);
            let paths = DebugGate::class_paths(DebugKind::Table);
            assert!(paths.iter().any(|p| p == "gate_tests/transient"));
        }
        let paths = DebugGate::class_paths(DebugKind::Table);
        assert!(!paths.iter().any(|p| p == "gate_tests/transient"));
        assert!(paths.iter().any(|p| p == kept.class_path()));
    }

    #[test]
    fn duplicate_gates_enumerate_once_each() {
        let _first = DebugGate::new("gate_tests/duplicate", DebugKind::Table);
        let _second = DebugGate::new("gate_tests/duplicate", DebugKind::Table);
        let count = DebugGate::class_paths(DebugKind::Table)
            .iter()
            .filter(|p| *p == "gate_tests/duplicate")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn drop_preserves_stored_preference() {
        DebugGate::enable("gate_tests/persist", DebugKind::Console, true);
        {
            let gate = DebugGate::console("gate_tests/persist");
            assert!(gate.is_enabled());
        }
        let revived = DebugGate::console("gate_tests/persist");
        assert!(revived.is_enabled());
        DebugGate::enable("gate_tests/persist", DebugKind::Console, false);
    }

    #[test]
    fn accessors_expose_construction_arguments() {
        let gate = DebugGate::new("gate_tests/accessors", DebugKind::Table);
        assert_eq!(gate.class_path(), "gate_tests/accessors");
        assert_eq!(gate.kind(), DebugKind::Table);
    }
}
