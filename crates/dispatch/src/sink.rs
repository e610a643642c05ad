//! Sink and factory seams for statement output.
//!
//! A sink backs exactly one in-flight statement: the statement appends text
//! fragments into it and completes it when the statement's scope ends.
//! Factories produce a fresh sink per statement, and are the unit of
//! replacement when output is redirected (see
//! [`DispatchManager`](crate::DispatchManager)).

use crate::kind::MessageKind;
use crate::registry::dispatch_line;

/// Append-only text sink backing one diagnostic statement.
///
/// Implementations accumulate fragments and decide in
/// [`complete`](Self::complete) where the finished line goes. The default
/// implementation is [`ConsoleSink`].
pub trait MessageSink: Send {
    /// The classification this sink was produced for.
    fn kind(&self) -> MessageKind;

    /// Appends a text fragment to the in-flight line.
    fn append(&mut self, text: &str);

    /// Completes the statement, flushing whatever was accumulated.
    ///
    /// Called exactly once, when the owning statement goes out of scope.
    fn complete(&mut self);
}

/// Produces a fresh [`MessageSink`] per statement.
///
/// Exactly one factory is installed per [`MessageKind`] at any time; a
/// statement uses whichever factory was current at the instant it was
/// produced.
pub trait SinkFactory: Send {
    /// Allocates a new sink for one statement.
    fn produce(&self) -> Box<dyn MessageSink>;
}

/// Default sink: buffers fragments and flushes one terminated line.
///
/// On completion the sink appends a line terminator and routes the
/// accumulated text to the installed message handler, or to stdout
/// (flushed immediately) when none is installed. The buffer is cleared
/// after flushing; in normal use one sink backs exactly one statement.
#[derive(Debug)]
pub struct ConsoleSink {
    kind: MessageKind,
    buffer: String,
}

impl ConsoleSink {
    /// Creates an empty sink for the given classification.
    #[must_use]
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }
}

impl MessageSink for ConsoleSink {
    fn kind(&self) -> MessageKind {
        self.kind
    }

    fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn complete(&mut self) {
        // Every statement ends with exactly one terminator, regardless of
        // what the caller wrote.
        self.buffer.push('\n');
        dispatch_line(self.kind, &self.buffer);
        self.buffer.clear();
    }
}

/// Factory producing [`ConsoleSink`]s; installed for both kinds at start.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleSinkFactory {
    kind: MessageKind,
}

impl ConsoleSinkFactory {
    /// Creates a factory bound to the given classification.
    #[must_use]
    pub const fn new(kind: MessageKind) -> Self {
        Self { kind }
    }
}

impl SinkFactory for ConsoleSinkFactory {
    fn produce(&self) -> Box<dyn MessageSink> {
        Box::new(ConsoleSink::new(self.kind))
    }
}
