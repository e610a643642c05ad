//! Unix syslog(3) backend.
//!
//! # Safety
//!
//! Talks to libc `openlog`/`syslog`/`closelog` directly. `openlog` keeps
//! the ident pointer, so the tag is interned in a process-lifetime static;
//! `syslog` itself is callable from any thread once the connection is
//! open.
#![allow(unsafe_code)]

use std::ffi::CString;
use std::io;
use std::sync::OnceLock;

use dispatch::{MessageKind, install_message_handler};

use crate::config::{DEFAULT_SYSLOG_TAG, SyslogConfig, SyslogFacility};

fn facility_code(facility: SyslogFacility) -> libc::c_int {
    match facility {
        SyslogFacility::User => libc::LOG_USER,
        SyslogFacility::Daemon => libc::LOG_DAEMON,
        SyslogFacility::Local0 => libc::LOG_LOCAL0,
        SyslogFacility::Local1 => libc::LOG_LOCAL1,
        SyslogFacility::Local2 => libc::LOG_LOCAL2,
        SyslogFacility::Local3 => libc::LOG_LOCAL3,
        SyslogFacility::Local4 => libc::LOG_LOCAL4,
        SyslogFacility::Local5 => libc::LOG_LOCAL5,
        SyslogFacility::Local6 => libc::LOG_LOCAL6,
        SyslogFacility::Local7 => libc::LOG_LOCAL7,
    }
}

fn priority_for(kind: MessageKind) -> libc::c_int {
    match kind {
        MessageKind::Warning => libc::LOG_WARNING,
        MessageKind::Debug => libc::LOG_DEBUG,
    }
}

/// Sends one line to syslog at the given priority.
///
/// Lines containing interior NUL bytes cannot cross the C boundary and
/// are dropped.
fn send_line(priority: libc::c_int, line: &str) {
    let Ok(message) = CString::new(line) else {
        return;
    };
    // A fixed "%s" format keeps caller-controlled text out of syslog's
    // format-string parsing.
    static FORMAT: &[u8] = b"%s\0";

    // SAFETY: both pointers are valid NUL-terminated C strings; syslog is
    // thread-safe once openlog has completed.
    unsafe {
        libc::syslog(
            priority,
            FORMAT.as_ptr().cast::<libc::c_char>(),
            message.as_ptr(),
        );
    }
}

/// Open syslog connection; closes on drop.
///
/// Returned by [`install_syslog_handler`]. Dropping the guard calls
/// `closelog(3)` but leaves the installed message handler in place; pair
/// the drop with [`dispatch::clear_message_handler`] when tearing the
/// backend down.
#[derive(Debug)]
pub struct SyslogConnection {
    _private: (),
}

impl Drop for SyslogConnection {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog,
        // which construction through install_syslog_handler guarantees.
        unsafe {
            libc::closelog();
        }
    }
}

/// Opens syslog and installs the forwarding message handler.
///
/// Every completed statement is forwarded as one syslog entry: warnings at
/// `LOG_WARNING`, debug output at `LOG_DEBUG`, with the statement
/// terminator stripped. Console output is suppressed for as long as the
/// handler stays installed.
///
/// The ident tag is interned for the process lifetime because syslog(3)
/// keeps the pointer; only the first tag ever passed takes effect if the
/// backend is installed more than once.
///
/// # Errors
///
/// Never fails on Unix; the `Result` matches the non-Unix stub, which
/// reports [`io::ErrorKind::Unsupported`].
pub fn install_syslog_handler(config: SyslogConfig) -> io::Result<SyslogConnection> {
    static IDENT: OnceLock<CString> = OnceLock::new();
    let ident = IDENT.get_or_init(|| {
        CString::new(config.tag()).unwrap_or_else(|_| {
            CString::new(DEFAULT_SYSLOG_TAG).expect("default tag contains no NUL bytes")
        })
    });

    // SAFETY: the ident pointer stays valid for the process lifetime via
    // the static above; LOG_PID is an ordinary flag.
    unsafe {
        libc::openlog(ident.as_ptr(), libc::LOG_PID, facility_code(config.facility()));
    }

    install_message_handler(|kind, line| {
        send_line(priority_for(kind), line.trim_end_matches('\n'));
    });

    Ok(SyslogConnection { _private: () })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_follow_the_message_kind() {
        assert_eq!(priority_for(MessageKind::Warning), libc::LOG_WARNING);
        assert_eq!(priority_for(MessageKind::Debug), libc::LOG_DEBUG);
    }

    #[test]
    fn facility_codes_match_libc_constants() {
        assert_eq!(facility_code(SyslogFacility::User), libc::LOG_USER);
        assert_eq!(facility_code(SyslogFacility::Daemon), libc::LOG_DAEMON);
        assert_eq!(facility_code(SyslogFacility::Local0), libc::LOG_LOCAL0);
        assert_eq!(facility_code(SyslogFacility::Local7), libc::LOG_LOCAL7);
    }

    #[test]
    fn send_line_handles_empty_and_special_input() {
        let connection = install_syslog_handler(SyslogConfig::default()).expect("install");
        send_line(libc::LOG_DEBUG, "");
        send_line(libc::LOG_DEBUG, "spaces & symbols: /tmp/a b/c%d");
        send_line(libc::LOG_DEBUG, "interior\0nul is dropped");
        dispatch::clear_message_handler();
        drop(connection);
    }

    #[test]
    fn install_forwards_statements_without_panicking() {
        let connection =
            install_syslog_handler(SyslogConfig::new(SyslogFacility::Local7, "diagkit-test"))
                .expect("install");
        dispatch::warning_log!("syslog smoke test: warning path");
        dispatch::debug_log!("syslog smoke test: debug path");
        dispatch::clear_message_handler();
        drop(connection);
    }
}
