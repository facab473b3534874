use deno_terminal::colors;
use playground_runtime::Sink;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Console log rendered straight to the terminal.
///
/// Both kinds of line go to stdout so they stay in the order they were
/// produced; error lines are red and bold.
#[derive(Debug, Default)]
pub struct TerminalSink {
    errors: AtomicUsize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of error lines written since the last [`clear`](Self::clear).
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.errors.store(0, Ordering::Relaxed);
        let mut stdout = std::io::stdout().lock();
        // Erase the screen and home the cursor
        let _ = write!(stdout, "\x1b[2J\x1b[H");
        let _ = stdout.flush();
    }
}

impl Sink for TerminalSink {
    fn emit(&self, line: &str, is_error: bool) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout leaves nowhere to report to
        let _ = if is_error {
            self.errors.fetch_add(1, Ordering::Relaxed);
            writeln!(stdout, "{}", colors::red_bold(line))
        } else {
            writeln!(stdout, "{line}")
        };
    }
}
