//! Execution side of the playground: an embedded engine, a coordinator that
//! captures its output, and the rules that tidy up script failures.

mod coordinator;
pub mod engine;
mod error;
pub mod module_builder;
pub mod normalize;
mod quickjs;
mod rejections;
pub mod sink;

pub use coordinator::Coordinator;
pub use engine::{Engine, EngineFactory, OutputHandler, RawFailure};
pub use error::RuntimeError;
pub use normalize::{NormalizeConfig, NormalizedFailure, Normalizer, UNKNOWN_ERROR};
pub use quickjs::{EXEC_MODULE_NAME, QuickJsEngine, QuickJsFactory};
pub use sink::{ConsoleBuffer, OutputLine, Sink};

use std::sync::Arc;

/// Coordinator backed by the bundled QuickJS engine.
pub type PlaygroundCoordinator = Coordinator<QuickJsFactory>;

pub fn new_coordinator(sink: Arc<dyn Sink>, normalizer: Normalizer) -> PlaygroundCoordinator {
    Coordinator::with_normalizer(QuickJsFactory, sink, normalizer)
}
