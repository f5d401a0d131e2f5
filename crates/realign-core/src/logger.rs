//! Diagnostic sinks.
//!
//! The pipeline reports progress and failures through an injected [`Logger`] instead of a
//! process-wide output pane. The host owns the logger's lifetime.

use std::cell::RefCell;

/// A sink for diagnostic messages.
pub trait Logger {
    /// Record a debug message.
    fn debug(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
}

/// Forwards messages to the [`log`] facade under the `realign` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn debug(&self, message: &str) {
        log::debug!(target: "realign", "{message}");
    }
}

/// Collects messages in memory so they can be surfaced together, e.g. next to an error.
#[derive(Debug, Default)]
pub struct BufferedLogger {
    messages: RefCell<Vec<String>>,
}

impl BufferedLogger {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Remove and return all recorded messages.
    pub fn take(&self) -> Vec<String> {
        self.messages.take()
    }

    /// Returns `true` if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl Logger for BufferedLogger {
    fn debug(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
