use super::startup_error;
use playground::terminal::TerminalSink;
use playground_runtime::Normalizer;
use std::error::Error;
use std::io::{BufRead, Write};
use std::sync::Arc;

const PROMPT: &str = "> ";

/// Read snippets from stdin, one per line, and run each on the same engine.
///
/// `.clear` wipes the console, `.exit` (or end of input) quits.
pub fn execute(normalizer: Normalizer) -> Result<(), Box<dyn Error>> {
    let sink = Arc::new(TerminalSink::new());
    let coordinator = playground_runtime::new_coordinator(sink.clone(), normalizer);
    let tokio_runtime = tokio::runtime::Runtime::new()?;

    // Bring the engine up before the first prompt
    tokio_runtime
        .block_on(coordinator.ready())
        .map_err(startup_error)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match line.trim() {
            "" => {}
            ".exit" => break,
            ".clear" => sink.clear(),
            code => {
                tokio_runtime
                    .block_on(coordinator.execute(code))
                    .map_err(startup_error)?;
            }
        }
    }

    Ok(())
}
