//! Fallback for platforms without syslog(3).

use std::io;

use crate::config::SyslogConfig;

/// Placeholder connection; never constructed on this platform.
#[derive(Debug)]
pub struct SyslogConnection {
    _private: (),
}

/// Always fails: this platform has no syslog service.
///
/// # Errors
///
/// Returns [`io::ErrorKind::Unsupported`].
pub fn install_syslog_handler(_config: SyslogConfig) -> io::Result<SyslogConnection> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "syslog is not available on this platform",
    ))
}
