use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// One line appended to the console log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub is_error: bool,
}

impl OutputLine {
    pub fn out(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn err(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Append-only consumer of execution output.
///
/// Error lines are expected to be rendered in an alarm style.
pub trait Sink: Send + Sync {
    fn emit(&self, line: &str, is_error: bool);
}

impl<F> Sink for F
where
    F: Fn(&str, bool) + Send + Sync,
{
    fn emit(&self, line: &str, is_error: bool) {
        self(line, is_error);
    }
}

/// In-memory console log.
#[derive(Debug, Default)]
pub struct ConsoleBuffer {
    lines: Mutex<Vec<OutputLine>>,
}

impl ConsoleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended since the last [`clear`](Self::clear).
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for ConsoleBuffer {
    fn emit(&self, line: &str, is_error: bool) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(OutputLine {
                text: line.to_string(),
                is_error,
            });
    }
}
