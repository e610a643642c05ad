//! Abort-signal hook that reports through the normal dispatch path.
//!
//! # Safety
//!
//! This module uses unsafe code to install a Unix signal handler via libc.
//! Unlike a conventional async-signal-safe handler, this one deliberately
//! reuses the ordinary dispatch machinery: it allocates, takes the manager
//! and registry locks, and emits a warning statement followed by a
//! best-effort backtrace. That is the whole point of the hook — the last
//! words of an aborting process should travel through whatever handler the
//! application installed — but it means a signal arriving while the
//! interrupted thread holds a dispatch lock can deadlock. Known
//! limitation, not a guarantee; see `install_abort_handler`.
#![allow(unsafe_code)]

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{SignalGuard, install_abort_handler};

#[cfg(not(unix))]
mod stub;
#[cfg(not(unix))]
pub use stub::{SignalGuard, install_abort_handler};
