use rquickjs::{Ctx, Module, Result};
use std::sync::{Arc, Mutex};
use utils::add_internal_function;

/// Receives one flushed chunk of console output.
pub type OutputHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// The two output slots a context writes into.
///
/// Installing a handler replaces whatever was there, so re-installing before
/// every run never delivers a chunk twice.
#[derive(Clone, Default)]
pub struct ConsoleStreams {
    stdout: Arc<Mutex<Option<OutputHandler>>>,
    stderr: Arc<Mutex<Option<OutputHandler>>>,
}

impl ConsoleStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stdout(&self, handler: OutputHandler) {
        replace(&self.stdout, handler);
    }

    pub fn set_stderr(&self, handler: OutputHandler) {
        replace(&self.stderr, handler);
    }

    pub fn write_stdout(&self, chunk: &str) {
        match current(&self.stdout) {
            Some(handler) => handler(chunk),
            #[allow(clippy::print_stdout)] // No handler installed: behave like a plain console
            None => println!("{chunk}"),
        }
    }

    pub fn write_stderr(&self, chunk: &str) {
        match current(&self.stderr) {
            Some(handler) => handler(chunk),
            #[allow(clippy::print_stderr)]
            None => eprintln!("{chunk}"),
        }
    }
}

fn replace(slot: &Mutex<Option<OutputHandler>>, handler: OutputHandler) {
    // A poisoned slot still holds a usable Option
    let mut guard = slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = Some(handler);
}

// Clone the handler out so the lock is not held while user code output is
// being rendered.
fn current(slot: &Mutex<Option<OutputHandler>>) -> Option<OutputHandler> {
    slot.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

/// # Errors
/// Returns an error if module initialization fails
pub fn init(ctx: &Ctx<'_>, streams: &ConsoleStreams) -> Result<()> {
    let out = streams.clone();
    add_internal_function!(ctx, "print", move |msg: String| {
        out.write_stdout(&msg);
    });

    let err = streams.clone();
    add_internal_function!(ctx, "printErr", move |msg: String| {
        err.write_stderr(&msg);
    });

    let module = Module::evaluate(ctx.clone(), "web_console", include_str!("console.js"))?;
    module.finish::<()>()?;

    Ok(())
}
