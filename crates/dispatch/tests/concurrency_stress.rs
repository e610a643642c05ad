//! Stress test: concurrent toggling against concurrent gate lifecycles.
//!
//! Exercises the registry under contention and asserts the final state
//! matches the last logically-ordered enable call per pair: no lost
//! updates, no stale live gates, no panics.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use dispatch::{DebugGate, DebugKind};

const TOGGLE_THREADS: usize = 4;
const LIFECYCLE_THREADS: usize = 4;
const ROUNDS: usize = 250;

#[test]
fn concurrent_toggles_and_lifecycles_converge() {
    let pairs: Vec<(String, DebugKind)> = (0..TOGGLE_THREADS)
        .map(|i| (format!("stress/pair{i}"), DebugKind::Console))
        .collect();

    // Long-lived gates constructed before the storm; they must observe the
    // final enable for their pair without reconstruction.
    let survivors: Vec<DebugGate> = pairs
        .iter()
        .map(|(path, kind)| DebugGate::new(path.clone(), *kind))
        .collect();

    let running = Arc::new(AtomicBool::new(true));
    let mut handles = Vec::new();

    for (path, kind) in pairs.clone() {
        handles.push(thread::spawn(move || {
            for round in 0..ROUNDS {
                DebugGate::enable(&path, kind, round % 2 == 0);
            }
            // Last logically-ordered call per pair: enabled.
            DebugGate::enable(&path, kind, true);
        }));
    }

    for worker in 0..LIFECYCLE_THREADS {
        let running = Arc::clone(&running);
        handles.push(thread::spawn(move || {
            let mut spin = 0usize;
            while running.load(Ordering::Relaxed) && spin < ROUNDS * 4 {
                let gate =
                    DebugGate::new(format!("stress/transient{worker}"), DebugKind::Table);
                let _ = gate.is_enabled();
                let _ = DebugGate::class_paths(DebugKind::Table);
                drop(gate);
                spin += 1;
            }
        }));
    }

    for (path, _) in &pairs {
        // Interleave reads with the writers to shake out torn state.
        for _ in 0..ROUNDS {
            let _ = DebugGate::class_paths(DebugKind::Console);
            let probe = DebugGate::new(path.clone(), DebugKind::Console);
            let _ = probe.is_enabled();
        }
    }

    running.store(false, Ordering::Relaxed);
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    // Every surviving gate reflects the final enable for its pair.
    for gate in &survivors {
        assert!(
            gate.is_enabled(),
            "gate {} missed the final enable",
            gate.class_path()
        );
    }

    // Fresh gates inherit the stored preference written last.
    for (path, kind) in &pairs {
        let fresh = DebugGate::new(path.clone(), *kind);
        assert!(fresh.is_enabled());
    }

    // All transient gates are gone from enumeration.
    let leftovers: Vec<String> = DebugGate::class_paths(DebugKind::Table)
        .into_iter()
        .filter(|p| p.starts_with("stress/transient"))
        .collect();
    assert!(leftovers.is_empty(), "stale gates: {leftovers:?}");

    for (path, kind) in &pairs {
        DebugGate::enable(path, *kind, false);
    }
}

#[test]
fn pair_exactness_holds_under_contention() {
    let console = DebugGate::new("stress/shared", DebugKind::Console);
    let table = DebugGate::new("stress/shared", DebugKind::Table);

    let mut handles = Vec::new();
    for _ in 0..TOGGLE_THREADS {
        handles.push(thread::spawn(|| {
            for _ in 0..ROUNDS {
                DebugGate::enable("stress/shared", DebugKind::Console, true);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert!(console.is_enabled());
    assert!(!table.is_enabled(), "enable leaked across kinds");

    DebugGate::enable("stress/shared", DebugKind::Console, false);
}
