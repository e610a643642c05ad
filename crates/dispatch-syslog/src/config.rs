//! Facility and tag configuration for the syslog backend.

use std::fmt;

/// Syslog facilities this adapter is willing to log under.
///
/// An application diagnostics library has no business claiming the
/// kernel/mail/news facilities, so only the user, daemon, and local
/// facilities are exposed. Names follow syslog.conf conventions and parse
/// case-insensitively via [`from_name`](Self::from_name).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SyslogFacility {
    /// User-level messages (`LOG_USER`), the default.
    User,
    /// System daemons (`LOG_DAEMON`), for services without a tty.
    Daemon,
    /// Reserved for local use (`LOG_LOCAL0`).
    Local0,
    /// Reserved for local use (`LOG_LOCAL1`).
    Local1,
    /// Reserved for local use (`LOG_LOCAL2`).
    Local2,
    /// Reserved for local use (`LOG_LOCAL3`).
    Local3,
    /// Reserved for local use (`LOG_LOCAL4`).
    Local4,
    /// Reserved for local use (`LOG_LOCAL5`).
    Local5,
    /// Reserved for local use (`LOG_LOCAL6`).
    Local6,
    /// Reserved for local use (`LOG_LOCAL7`).
    Local7,
}

impl SyslogFacility {
    /// Parses a facility name, case-insensitively.
    ///
    /// Returns `None` for unrecognised names, including facilities that
    /// exist in syslog(3) but are not exposed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch_syslog::SyslogFacility;
    ///
    /// assert_eq!(
    ///     SyslogFacility::from_name("daemon"),
    ///     Some(SyslogFacility::Daemon)
    /// );
    /// assert_eq!(
    ///     SyslogFacility::from_name("LOCAL5"),
    ///     Some(SyslogFacility::Local5)
    /// );
    /// assert_eq!(SyslogFacility::from_name("kern"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the facility name as it appears in syslog.conf.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl Default for SyslogFacility {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default ident string attached to forwarded lines.
pub const DEFAULT_SYSLOG_TAG: &str = "diagkit";

/// Facility and tag handed to `openlog(3)`.
///
/// Constructing a config does nothing on its own; pass it to
/// [`install_syslog_handler`](crate::install_syslog_handler) to open the
/// connection and start routing statements.
///
/// # Examples
///
/// ```
/// use dispatch_syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local2, "ingestd");
/// assert_eq!(config.facility(), SyslogFacility::Local2);
/// assert_eq!(config.tag(), "ingestd");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a config with the given facility and ident tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Returns the configured facility.
    #[must_use]
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured ident tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}
