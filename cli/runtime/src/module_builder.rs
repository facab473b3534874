use rquickjs::{Ctx, Result};
use web_console::ConsoleStreams;

type GlobalInit = Box<dyn Fn(&Ctx<'_>) -> Result<()>>;

/// Collects the global initializers a fresh context needs, in order.
#[derive(Default)]
pub struct ModuleBuilder {
    globals: Vec<GlobalInit>,
}

impl ModuleBuilder {
    pub fn with_global<F>(mut self, init: F) -> Self
    where
        F: Fn(&Ctx<'_>) -> Result<()> + 'static,
    {
        self.globals.push(Box::new(init));
        self
    }

    /// Standard playground globals with console output bound to `streams`.
    pub fn with_console(streams: &ConsoleStreams) -> Self {
        let streams = streams.clone();

        // Internal namespace must exist before anything registers into it
        Self::default()
            .with_global(utils::init)
            .with_global(move |ctx| web_console::init(ctx, &streams))
    }

    pub fn build(self) -> GlobalAttachment {
        GlobalAttachment {
            globals: self.globals,
        }
    }
}

pub struct GlobalAttachment {
    globals: Vec<GlobalInit>,
}

impl GlobalAttachment {
    pub fn attach(&self, ctx: &Ctx<'_>) -> Result<()> {
        for init in &self.globals {
            init(ctx)?;
        }
        Ok(())
    }
}
