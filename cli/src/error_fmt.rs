use std::error::Error;
use std::fmt::Write;

/// Formats an error and its source chain with numbered lines
/// (`0: outer`, `1: cause`, ...). Repeated messages are collapsed.
pub fn format_error_chain(error: &dyn Error) -> String {
    let mut message = String::new();
    let mut display_count = 0;

    let current_message = error.to_string();
    let _ = write!(&mut message, "\n    {display_count}: {current_message}");
    let mut past_message = current_message;
    display_count += 1;

    let mut maybe_source = error.source();
    while let Some(source) = maybe_source {
        let current_message = source.to_string();
        maybe_source = source.source();

        if current_message != past_message {
            let _ = write!(&mut message, "\n    {display_count}: {current_message}");
            past_message = current_message;
            display_count += 1;
        }

        // Limit depth to prevent infinite loops
        if display_count >= 8 {
            message.push_str("\n    ...");
            break;
        }
    }

    message
}
