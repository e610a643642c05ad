//! Classification types for dispatched output and debug gates.

use std::fmt;

/// Classification of a completed diagnostic statement.
///
/// Every sink is bound to exactly one kind at production time, and the kind
/// is reported alongside the finished line when a message handler is
/// installed via [`install_message_handler`](crate::install_message_handler).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// Warning output, on by default in production builds.
    Warning,
    /// Debug output, intended for development diagnostics.
    Debug,
}

impl MessageKind {
    /// Returns the lowercase name used in handler tags and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Debug => "debug",
        }
    }

    /// Parses a kind from its lowercase name.
    ///
    /// Recognised names are case-insensitive. Returns `None` for anything
    /// else.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispatch::MessageKind;
    ///
    /// assert_eq!(MessageKind::from_name("warning"), Some(MessageKind::Warning));
    /// assert_eq!(MessageKind::from_name("DEBUG"), Some(MessageKind::Debug));
    /// assert_eq!(MessageKind::from_name("trace"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "warning" => Some(Self::Warning),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a debug gate.
///
/// `Console` gates guard small inline diagnostics; `Table` gates guard large
/// blob payloads that are served to the table callback out-of-band via
/// [`DebugGate::set_table`](crate::DebugGate::set_table).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugKind {
    /// Small inline messages printed through the normal dispatch path.
    Console,
    /// Large payloads handed to the table callback in a single chunk.
    Table,
}

impl DebugKind {
    /// Returns the lowercase name used in configuration surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Table => "table",
        }
    }

    /// Parses a gate kind from its lowercase name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "console" => Some(Self::Console),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

impl fmt::Display for DebugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
