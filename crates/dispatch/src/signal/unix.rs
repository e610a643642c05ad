//! Unix implementation of the abort-signal hook.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::io;

/// Marker for an installed abort handler.
///
/// Returned by [`install_abort_handler`]. Dropping the guard does not
/// restore the previous handler: once installed, the hook stays active for
/// the life of the process.
#[derive(Debug)]
pub struct SignalGuard {
    _private: (),
}

/// Handler for SIGABRT: one warning statement, then a best-effort trace.
extern "C" fn handle_abort(signum: libc::c_int) {
    crate::warning_log!("Signal caught: {signum}");
    emit_backtrace();
}

/// Prints the current call stack through a warning statement.
///
/// Capture failures and unresolved symbols degrade to partial or no
/// output; the handler itself never panics over them.
fn emit_backtrace() {
    let trace = Backtrace::force_capture();
    if matches!(trace.status(), BacktraceStatus::Captured) {
        crate::warning_log!("{trace}");
    }
}

/// Installs the SIGABRT handler.
///
/// On receipt of the signal the handler emits one warning-classified
/// statement naming the signal number and then attempts to print the call
/// stack, both through whatever message handler is installed at that
/// moment.
///
/// The handler runs in signal context yet takes the dispatch locks. If the
/// signal interrupts a thread that already holds one of them, the handler
/// deadlocks. The hook is opt-in for exactly that reason.
///
/// # Errors
///
/// Returns an error if `sigaction` rejects the installation.
///
/// # Examples
///
/// ```no_run
/// let _guard = dispatch::install_abort_handler()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn install_abort_handler() -> io::Result<SignalGuard> {
    // SAFETY: sigaction is given a zeroed struct with a valid handler
    // pointer and an empty mask; the handler stays valid for the process
    // lifetime because it is a plain fn item.
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handle_abort as libc::sighandler_t;
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut action.sa_mask);

        if libc::sigaction(libc::SIGABRT, &action, std::ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }

    Ok(SignalGuard { _private: () })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_abort_handler_succeeds() {
        let result = install_abort_handler();
        assert!(result.is_ok());
    }

    #[test]
    fn guard_debug_format() {
        let guard = install_abort_handler().expect("install succeeds");
        let rendered = format!("{guard:?}");
        assert!(rendered.contains("SignalGuard"));
    }

    #[test]
    fn emit_backtrace_does_not_panic() {
        emit_backtrace();
    }
}
