#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dispatch-syslog` routes completed `dispatch` statements to syslog(3).
//! It is a plain consumer of the core's message-handler contract: calling
//! [`install_syslog_handler`] opens the syslog connection and installs a
//! handler that forwards every `(kind, line)` pair with the kind mapped to
//! a syslog priority (warnings to `LOG_WARNING`, debug output to
//! `LOG_DEBUG`) and the statement terminator stripped.
//!
//! # Design
//!
//! The adapter talks to libc `openlog`/`syslog`/`closelog` directly rather
//! than pulling in a dedicated syslog crate, keeping the dependency graph
//! minimal. The connection is owned by an RAII [`SyslogConnection`] guard;
//! dropping it closes the connection but leaves the installed handler in
//! place, so callers that tear down syslog should also call
//! [`dispatch::clear_message_handler`].
//!
//! # Errors
//!
//! On Unix, installation cannot fail. On other platforms
//! [`install_syslog_handler`] returns [`std::io::ErrorKind::Unsupported`].
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(unix)]
//! # {
//! use dispatch_syslog::{SyslogConfig, SyslogFacility, install_syslog_handler};
//!
//! let config = SyslogConfig::new(SyslogFacility::Daemon, "my-service");
//! let _connection = install_syslog_handler(config)?;
//!
//! dispatch::warning_log!("routed to syslog");
//! # }
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;
pub use config::{DEFAULT_SYSLOG_TAG, SyslogConfig, SyslogFacility};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{SyslogConnection, install_syslog_handler};

#[cfg(not(unix))]
mod stub;
#[cfg(not(unix))]
pub use stub::{SyslogConnection, install_syslog_handler};
