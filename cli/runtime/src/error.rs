use std::fmt;

/// Failures that stop the playground before user code gets to run.
///
/// Script errors never show up here; they are normalized and written to the
/// sink instead.
#[derive(Debug)]
pub enum RuntimeError {
    /// The engine could not be brought up.
    Init(String),
    Engine(rquickjs::Error),
    Io(std::io::Error),
    /// A normalization config file was unreadable or malformed.
    Config(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::Init(msg) => write!(f, "Failed to initialize runtime: {msg}"),
            RuntimeError::Engine(e) => write!(f, "{e}"),
            RuntimeError::Io(e) => write!(f, "{e}"),
            RuntimeError::Config(msg) => write!(f, "Invalid error config: {msg}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Engine(e) => Some(e),
            RuntimeError::Io(e) => Some(e),
            RuntimeError::Init(_) | RuntimeError::Config(_) => None,
        }
    }
}

impl From<rquickjs::Error> for RuntimeError {
    fn from(e: rquickjs::Error) -> Self {
        RuntimeError::Engine(e)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        RuntimeError::Io(e)
    }
}

impl From<serde_json::Error> for RuntimeError {
    fn from(e: serde_json::Error) -> Self {
        RuntimeError::Config(e.to_string())
    }
}
