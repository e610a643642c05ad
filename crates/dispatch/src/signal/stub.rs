//! Fallback for platforms without Unix signal support.

use std::io;

/// Marker for an installed abort handler.
///
/// On this platform no handler is installed; the guard exists so callers
/// compile unchanged.
#[derive(Debug)]
pub struct SignalGuard {
    _private: (),
}

/// No-op installation for non-Unix platforms.
///
/// Always succeeds without hooking anything; abort-class signals keep
/// their default disposition.
pub fn install_abort_handler() -> io::Result<SignalGuard> {
    Ok(SignalGuard { _private: () })
}
