// Boundary between the coordinator and whatever actually runs the code

use std::future::Future;

pub use web_console::OutputHandler;

/// What an engine hands back when a script fails.
///
/// `trace` is the full diagnostic text when the engine has one; `message` is
/// the short form. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFailure {
    pub trace: Option<String>,
    pub message: Option<String>,
}

impl RawFailure {
    pub fn with_trace(trace: impl Into<String>) -> Self {
        Self {
            trace: Some(trace.into()),
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            trace: None,
            message: Some(message.into()),
        }
    }

    /// Best available diagnostic text: the trace, else the message.
    /// Empty strings count as absent.
    pub fn diagnostic(&self) -> Option<&str> {
        self.trace
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}

/// A ready-to-use language runtime.
pub trait Engine {
    /// Replace the standard output handler.
    fn set_stdout(&self, handler: OutputHandler);

    /// Replace the standard error handler.
    fn set_stderr(&self, handler: OutputHandler);

    /// Run `code` to completion. Output flows through the installed handlers
    /// while it runs.
    fn run(&self, code: &str) -> impl Future<Output = Result<(), RawFailure>>;
}

/// Builds an [`Engine`]. Creation is asynchronous and may fail.
pub trait EngineFactory {
    type Engine: Engine;
    type Error;

    fn create(&self) -> impl Future<Output = Result<Self::Engine, Self::Error>>;
}
