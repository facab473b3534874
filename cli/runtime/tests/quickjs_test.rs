// End-to-end runs through the bundled QuickJS engine

#![allow(clippy::unwrap_used)] // Test code: unwrap is acceptable

use playground_runtime::{
    ConsoleBuffer, Normalizer, OutputLine, PlaygroundCoordinator, new_coordinator,
};
use std::sync::Arc;

fn setup() -> (PlaygroundCoordinator, Arc<ConsoleBuffer>) {
    let buffer = Arc::new(ConsoleBuffer::new());
    let coordinator = new_coordinator(buffer.clone(), Normalizer::default());
    (coordinator, buffer)
}

#[tokio::test]
async fn test_console_log_lines_in_order() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"console.log("a"); console.log("b");"#)
        .await
        .unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::out("a"), OutputLine::out("b")]);
}

#[tokio::test]
async fn test_empty_program_is_silent() {
    let (coordinator, buffer) = setup();
    coordinator.execute("const x = 1 + 1;").await.unwrap();
    assert!(buffer.is_empty());
    assert!(coordinator.is_ready());
}

#[tokio::test]
async fn test_console_formats_arguments() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r"console.log(1, 'two', { x: 1 }); print([1, 2]);")
        .await
        .unwrap();
    assert_eq!(
        buffer.lines(),
        vec![OutputLine::out(r#"1 two {"x":1}"#), OutputLine::out("[1,2]")]
    );
}

#[tokio::test]
async fn test_console_error_goes_to_stderr() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"console.log("fine"); console.error("bad"); console.warn("careful");"#)
        .await
        .unwrap();
    assert_eq!(
        buffer.lines(),
        vec![
            OutputLine::out("fine"),
            OutputLine::err("bad"),
            OutputLine::err("careful"),
        ]
    );
}

#[tokio::test]
async fn test_console_log_global_writes_directly() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"console_log("plain"); console_log("alarm", true);"#)
        .await
        .unwrap();
    assert_eq!(
        buffer.lines(),
        vec![OutputLine::out("plain"), OutputLine::err("alarm")]
    );
}

#[tokio::test]
async fn test_thrown_error_becomes_one_error_line() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"console.log("start"); throw new Error("boom");"#)
        .await
        .unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], OutputLine::out("start"));
    assert!(lines[1].is_error);
    assert!(lines[1].text.contains("boom"));
}

#[tokio::test]
async fn test_syntax_error_is_reported_not_returned() {
    let (coordinator, buffer) = setup();
    coordinator.execute("let = ;").await.unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_error);
    assert!(!lines[0].text.is_empty());
}

#[tokio::test]
async fn test_thrown_string_uses_message() {
    let (coordinator, buffer) = setup();
    coordinator.execute(r#"throw "plain failure";"#).await.unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::err("plain failure")]);
}

#[tokio::test]
async fn test_thrown_undefined_is_unknown_error() {
    let (coordinator, buffer) = setup();
    coordinator.execute("throw undefined;").await.unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::err("Unknown Error")]);
}

#[tokio::test]
async fn test_top_level_await() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"const v = await Promise.resolve(42); console.log("got", v);"#)
        .await
        .unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::out("got 42")]);
}

#[tokio::test]
async fn test_engine_is_reused_between_runs() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute("globalThis.counter = (globalThis.counter ?? 0) + 1; console.log(counter);")
        .await
        .unwrap();
    coordinator
        .execute("globalThis.counter = (globalThis.counter ?? 0) + 1; console.log(counter);")
        .await
        .unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::out("1"), OutputLine::out("2")]);
}

#[tokio::test]
async fn test_same_code_twice_yields_same_output() {
    let (coordinator, buffer) = setup();
    let code = r#"console.log("hi"); console.error("oops");"#;

    coordinator.execute(code).await.unwrap();
    let first = buffer.lines();
    buffer.clear();
    coordinator.execute(code).await.unwrap();

    assert_eq!(buffer.lines(), first);
}

#[tokio::test]
async fn test_unhandled_rejection_is_reported() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute("Promise.reject(new Error('later'));")
        .await
        .unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_error);
    assert!(lines[0].text.contains("later"));
}

#[tokio::test]
async fn test_rejected_async_function_is_reported() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute("(async () => { await null; null.x; })();")
        .await
        .unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_error);
}

#[tokio::test]
async fn test_late_handled_rejection_is_silent() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(
            r#"const p = Promise.reject(new Error("handled"));
            p.catch((e) => console.log("caught", e.message));"#,
        )
        .await
        .unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::out("caught handled")]);
}

#[tokio::test]
async fn test_rejection_does_not_leak_into_next_run() {
    let (coordinator, buffer) = setup();
    coordinator
        .execute(r#"Promise.reject("first"); throw new Error("stop");"#)
        .await
        .unwrap();
    buffer.clear();

    coordinator.execute(r#"console.log("clean");"#).await.unwrap();
    assert_eq!(buffer.lines(), vec![OutputLine::out("clean")]);
}
