// Bookkeeping for unhandled promise rejections.
//
// The runtime's rejection tracker reports every rejection and every late
// `then`/`catch`; the pending set lives in the context so promises can be
// matched by identity.

use rquickjs::{Ctx, Function, Module, Object, Result, Value};

/// # Errors
/// Returns an error if the tracking module fails to evaluate
pub fn init(ctx: &Ctx<'_>) -> Result<()> {
    let module = Module::evaluate(ctx.clone(), "rejections", include_str!("rejections.js"))?;
    module.finish::<()>()
}

/// Record a rejection, or forget it once a handler is attached.
///
/// # Errors
/// Returns an error if [`init`] has not run in this context
pub fn track<'js>(
    ctx: &Ctx<'js>,
    promise: Value<'js>,
    reason: Value<'js>,
    is_handled: bool,
) -> Result<()> {
    let internal = utils::internal_namespace(ctx)?;
    let track: Function = internal.get("trackRejection")?;
    track.call((promise, reason, is_handled))
}

/// Reason of the oldest rejection still unhandled. Empties the pending set.
///
/// # Errors
/// Returns an error if [`init`] has not run in this context
pub fn take<'js>(ctx: &Ctx<'js>) -> Result<Option<Value<'js>>> {
    let internal = utils::internal_namespace(ctx)?;
    let take: Function = internal.get("takeRejection")?;
    let oldest: Option<Object<'js>> = take.call(())?;
    oldest.map(|entry| entry.get("reason")).transpose()
}
