use crate::engine::{Engine, EngineFactory};
use crate::normalize::Normalizer;
use crate::sink::Sink;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Runs submitted code on a lazily created engine and reports everything
/// through a [`Sink`].
///
/// The engine is created on first use and reused afterwards. Callers that
/// arrive while creation is still in flight wait for the same attempt.
/// Overlapping `execute` calls are not serialized; their output may
/// interleave in the sink.
pub struct Coordinator<F: EngineFactory> {
    factory: F,
    engine: OnceCell<F::Engine>,
    sink: Arc<dyn Sink>,
    normalizer: Normalizer,
}

impl<F: EngineFactory> Coordinator<F> {
    pub fn new(factory: F, sink: Arc<dyn Sink>) -> Self {
        Self::with_normalizer(factory, sink, Normalizer::default())
    }

    pub fn with_normalizer(factory: F, sink: Arc<dyn Sink>, normalizer: Normalizer) -> Self {
        Self {
            factory,
            engine: OnceCell::new(),
            sink,
            normalizer,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.initialized()
    }

    /// Wait for the engine, creating it if nobody has yet.
    ///
    /// # Errors
    /// Returns the factory's error if the engine cannot be created. The next
    /// call tries again.
    pub async fn ready(&self) -> Result<&F::Engine, F::Error> {
        self.engine
            .get_or_try_init(|| async {
                tracing::debug!("initializing engine");
                let engine = self.factory.create().await;
                if engine.is_err() {
                    tracing::warn!("engine initialization failed");
                }
                engine
            })
            .await
    }

    /// Execute `code`, streaming output to the sink.
    ///
    /// Script failures are normalized and written to the sink as a single
    /// error line; they are not returned.
    ///
    /// # Errors
    /// Returns an error only if the engine cannot be created
    pub async fn execute(&self, code: &str) -> Result<(), F::Error> {
        let engine = self.ready().await?;

        // Handlers are not guaranteed to survive between runs
        self.install_handlers(engine);

        tracing::debug!(bytes = code.len(), "executing code");
        if let Err(failure) = engine.run(code).await {
            tracing::debug!(?failure, "execution failed");
            let block = self.normalizer.normalize(&failure).render();
            self.sink.emit(&block, true);
        }

        Ok(())
    }

    fn install_handlers(&self, engine: &F::Engine) {
        let stdout = Arc::clone(&self.sink);
        engine.set_stdout(Arc::new(move |chunk: &str| stdout.emit(chunk, false)));

        let stderr = Arc::clone(&self.sink);
        engine.set_stderr(Arc::new(move |chunk: &str| stderr.emit(chunk, true)));
    }
}
