use rquickjs::{Ctx, Function, Object, Result, Value};

/// Key passed to `Symbol.for` to reach the hidden namespace that host
/// functions are parked in before the JS glue picks them up.
pub const INTERNAL_SYMBOL: &str = "playground.internal";

/// Create `globalThis[Symbol.for('playground.internal')]` if it is missing.
///
/// # Errors
/// Returns an error if the bootstrap script fails to evaluate
pub fn init(ctx: &Ctx<'_>) -> Result<()> {
    ctx.eval::<(), _>(format!(
        "globalThis[Symbol.for({INTERNAL_SYMBOL:?})] ||= {{}};"
    ))
}

/// Look up the internal namespace object.
///
/// # Errors
/// Returns an error if [`init`] has not run in this context
pub fn internal_namespace<'js>(ctx: &Ctx<'js>) -> Result<Object<'js>> {
    let globals = ctx.globals();
    let symbol_ctor: Function = globals.get("Symbol")?;
    let symbol_for: Function = symbol_ctor.get("for")?;
    let internal_symbol: Value = symbol_for.call((INTERNAL_SYMBOL,))?;
    globals.get(internal_symbol)
}

#[macro_export]
macro_rules! add_internal_function {
    ($ctx:expr, $name:expr, $func:expr) => {{
        use rquickjs::function::Func;
        let temp_name = format!("__playground_internal_{}", $name.replace('.', "_"));
        let internal_path = format!(
            "globalThis[Symbol.for({:?})].{}",
            $crate::INTERNAL_SYMBOL,
            $name
        );

        let func = Func::from($func);
        $ctx.globals().set(temp_name.as_str(), func)?;
        $ctx.eval::<(), _>(format!(
            "{} = globalThis.{}; delete globalThis.{};",
            internal_path, temp_name, temp_name
        ))?
    }};
}
