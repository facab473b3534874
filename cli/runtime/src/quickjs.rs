// QuickJS-backed engine

use crate::engine::{Engine, EngineFactory, OutputHandler, RawFailure};
use crate::error::RuntimeError;
use crate::module_builder::ModuleBuilder;
use crate::rejections;
use rquickjs::{
    AsyncContext, AsyncRuntime, CatchResultExt, CaughtError, Ctx, Module, Value, async_with,
};
use web_console::ConsoleStreams;

/// Module name user code is evaluated under. Shows up in stack traces.
pub const EXEC_MODULE_NAME: &str = "<exec>";

#[derive(Debug, Default, Clone, Copy)]
pub struct QuickJsFactory;

pub struct QuickJsEngine {
    runtime: AsyncRuntime,
    context: AsyncContext,
    streams: ConsoleStreams,
}

impl EngineFactory for QuickJsFactory {
    type Engine = QuickJsEngine;
    type Error = RuntimeError;

    async fn create(&self) -> Result<QuickJsEngine, RuntimeError> {
        let runtime = AsyncRuntime::new()?;
        runtime
            .set_host_promise_rejection_tracker(Some(Box::new(on_rejection)))
            .await;
        let context = AsyncContext::full(&runtime).await?;

        let streams = ConsoleStreams::new();
        let globals = ModuleBuilder::with_console(&streams)
            .with_global(rejections::init)
            .build();

        async_with!(context => |ctx| {
            globals
                .attach(&ctx)
                .catch(&ctx)
                .map_err(|caught| RuntimeError::Init(describe(&caught)))
        })
        .await?;

        tracing::debug!("QuickJS engine ready");

        Ok(QuickJsEngine {
            runtime,
            context,
            streams,
        })
    }
}

impl Engine for QuickJsEngine {
    fn set_stdout(&self, handler: OutputHandler) {
        self.streams.set_stdout(handler);
    }

    fn set_stderr(&self, handler: OutputHandler) {
        self.streams.set_stderr(handler);
    }

    async fn run(&self, code: &str) -> Result<(), RawFailure> {
        let context = &self.context;

        // Evaluate as a module so top-level await works
        async_with!(context => |ctx| {
            // Drop leftovers from a run that stopped at its first failure
            rejections::take(&ctx)
                .and_then(|_| Module::evaluate(ctx.clone(), EXEC_MODULE_NAME, code))
                .and_then(|promise| promise.finish::<()>())
                .catch(&ctx)
                .map_err(into_raw_failure)
        })
        .await?;

        self.drain_pending_jobs().await?;
        self.check_unhandled_rejection().await
    }
}

impl QuickJsEngine {
    // Execute all pending jobs (promises, microtasks)
    async fn drain_pending_jobs(&self) -> Result<(), RawFailure> {
        let context = &self.context;

        loop {
            self.runtime.idle().await;

            let has_pending_job = async_with!(context => |ctx| {
                let has_pending_job = ctx.execute_pending_job();

                // Check for exceptions after each job execution
                let exception_value = ctx.catch();
                if let Some(exception) = exception_value.into_exception() {
                    return Err(into_raw_failure(CaughtError::Exception(exception)));
                }

                Ok::<_, RawFailure>(has_pending_job)
            })
            .await?;

            if !has_pending_job {
                return Ok(());
            }
        }
    }

    // A rejection still unhandled once the job queue is empty fails the run
    async fn check_unhandled_rejection(&self) -> Result<(), RawFailure> {
        let context = &self.context;

        async_with!(context => |ctx| {
            match rejections::take(&ctx).catch(&ctx) {
                Ok(None) => Ok(()),
                Ok(Some(reason)) => {
                    tracing::debug!("unhandled promise rejection");
                    Err(into_raw_failure(caught_reason(reason)))
                }
                Err(caught) => Err(into_raw_failure(caught)),
            }
        })
        .await
    }
}

fn on_rejection<'js>(ctx: Ctx<'js>, promise: Value<'js>, reason: Value<'js>, is_handled: bool) {
    if let Err(error) = rejections::track(&ctx, promise, reason, is_handled) {
        // Leave no pending exception behind for the running script
        let _ = ctx.catch();
        tracing::warn!(%error, "failed to track promise rejection");
    }
}

fn caught_reason(reason: Value<'_>) -> CaughtError<'_> {
    match reason.clone().into_exception() {
        Some(exception) => CaughtError::Exception(exception),
        None => CaughtError::Value(reason),
    }
}

fn into_raw_failure(caught: CaughtError<'_>) -> RawFailure {
    match caught {
        CaughtError::Exception(exception) => {
            let message = exception.message().filter(|m| !m.is_empty());
            let name = exception.as_object().get::<_, String>("name").ok();
            let stack = exception.stack().filter(|s| !s.trim().is_empty());

            let header = match (name, &message) {
                (Some(name), Some(message)) => Some(format!("{name}: {message}")),
                (name, message) => name.or_else(|| message.clone()),
            };
            let trace = match (header, stack) {
                (Some(header), Some(stack)) => Some(format!("{header}\n{stack}")),
                (header, stack) => header.or(stack),
            };

            RawFailure { trace, message }
        }
        CaughtError::Value(value) => {
            // `throw undefined` carries nothing worth showing
            let message = if value.is_undefined() || value.is_null() {
                None
            } else if let Some(text) = value.as_string() {
                text.to_string().ok()
            } else {
                Some(format!("{value:?}"))
            };
            RawFailure {
                trace: None,
                message,
            }
        }
        CaughtError::Error(error) => RawFailure::with_message(error.to_string()),
    }
}

fn describe(caught: &CaughtError<'_>) -> String {
    match caught {
        CaughtError::Exception(exception) => exception
            .message()
            .unwrap_or_else(|| "Exception (no message)".to_string()),
        CaughtError::Value(value) => format!("{value:?}"),
        CaughtError::Error(error) => error.to_string(),
    }
}
