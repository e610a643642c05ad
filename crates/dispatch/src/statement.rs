//! RAII statement composer: the call-site front end over a sink.

use std::fmt;

use crate::manager::DispatchManager;
use crate::sink::MessageSink;

/// One in-flight diagnostic statement.
///
/// A statement owns the sink produced for it and completes the sink when
/// the statement's scope ends, which is the single flush point: the
/// accumulated text is terminated and handed to the installed message
/// handler or to the console. Text is composed incrementally through
/// [`std::fmt::Write`] or [`push`](Self::push).
///
/// Most call sites go through the [`warning_log!`](crate::warning_log) and
/// [`debug_log!`](crate::debug_log) macros instead of building a statement
/// by hand.
///
/// # Examples
///
/// ```
/// use std::fmt::Write as _;
/// use dispatch::Statement;
///
/// let mut statement = Statement::warning();
/// let _ = write!(statement, "connection lost after {} retries", 3);
/// // dropped here: the composed line is flushed with a trailing newline
/// ```
pub struct Statement {
    sink: Box<dyn MessageSink>,
}

impl Statement {
    /// Starts a warning-classified statement from the global manager.
    #[must_use]
    pub fn warning() -> Self {
        Self {
            sink: DispatchManager::global().produce_warning(),
        }
    }

    /// Starts a debug-classified statement from the global manager.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            sink: DispatchManager::global().produce_debug(),
        }
    }

    /// Wraps an explicitly produced sink in a statement.
    #[must_use]
    pub fn from_sink(sink: Box<dyn MessageSink>) -> Self {
        Self { sink }
    }

    /// Appends a text fragment, returning `self` for chaining.
    pub fn push(&mut self, text: &str) -> &mut Self {
        self.sink.append(text);
        self
    }
}

impl fmt::Write for Statement {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.append(s);
        Ok(())
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("kind", &self.sink.kind())
            .finish()
    }
}

impl Drop for Statement {
    fn drop(&mut self) {
        self.sink.complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MessageKind;

    #[test]
    fn warning_statement_uses_warning_sink() {
        let statement = Statement::warning();
        assert_eq!(statement.sink.kind(), MessageKind::Warning);
    }

    #[test]
    fn debug_statement_uses_debug_sink() {
        let statement = Statement::debug();
        assert_eq!(statement.sink.kind(), MessageKind::Debug);
    }

    #[test]
    fn debug_format_names_the_kind() {
        let statement = Statement::debug();
        let rendered = format!("{statement:?}");
        assert!(rendered.contains("Debug"));
    }
}
