//! The diagnostic sink capability supplied by the host runtime.
//!
//! Every failure path in the arena and the operator suite emits one
//! human-readable message through the sink before returning its error,
//! so the host can surface diagnostics in its own log without the core
//! depending on any particular logging facility.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives human-readable diagnostic messages from the core.
///
/// Implemented by the embedding host. Messages are complete sentences
/// without a trailing newline; the sink decides how to frame them.
pub trait DiagnosticSink {
    /// Deliver one diagnostic message.
    fn message(&mut self, text: &str);
}

/// A sink that collects messages in memory.
///
/// `MemorySink` is a shared handle: cloning it yields another view of
/// the same message buffer. Tests keep one clone and hand the other to
/// the arena, then assert on what the failure paths reported.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages received so far, in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Whether any message has been received.
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Whether any received message contains the given fragment.
    pub fn contains(&self, fragment: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(fragment))
    }
}

impl DiagnosticSink for MemorySink {
    fn message(&mut self, text: &str) {
        self.messages.borrow_mut().push(text.to_owned());
    }
}

/// A sink that forwards every message to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn message(&mut self, text: &str) {
        eprintln!("{text}");
    }
}
