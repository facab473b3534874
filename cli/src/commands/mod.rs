pub mod eval;
pub mod repl;
pub mod run;
pub mod scene;

use crate::error_fmt::format_error_chain;
use playground::terminal::TerminalSink;
use playground_runtime::{Normalizer, RuntimeError};
use std::error::Error;
use std::sync::Arc;

/// Execute one snippet against a fresh coordinator writing to the terminal.
/// Returns `true` when no error lines were printed.
fn execute_once(code: &str, normalizer: Normalizer) -> Result<bool, Box<dyn Error>> {
    let sink = Arc::new(TerminalSink::new());
    let coordinator = playground_runtime::new_coordinator(sink.clone(), normalizer);

    let tokio_runtime = tokio::runtime::Runtime::new()?;
    tokio_runtime
        .block_on(coordinator.execute(code))
        .map_err(startup_error)?;

    Ok(sink.error_count() == 0)
}

fn startup_error(e: RuntimeError) -> Box<dyn Error> {
    let error_chain = format_error_chain(&e);
    format!("Runtime failed to start.{error_chain}").into()
}
