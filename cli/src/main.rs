use deno_terminal::colors;
use playground_runtime::{NormalizeConfig, Normalizer};
use std::error::Error;

mod commands;
mod error_fmt;
mod flag;
mod logging;

fn main() {
    match run() {
        Ok(true) => {}
        // The script reported errors; they are already on screen
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", colors::red_bold("error"), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool, Box<dyn Error>> {
    logging::init();

    // Parse command line arguments
    let cli_args = flag::parse_args();

    let config = match &cli_args.error_config {
        Some(path) => NormalizeConfig::from_file(path)?,
        None => NormalizeConfig::default(),
    };
    let normalizer = Normalizer::new(config);

    match cli_args.command {
        flag::Command::Run { file_path } => commands::run::execute(&file_path, normalizer),
        flag::Command::Eval { code } => commands::eval::execute(&code, normalizer),
        flag::Command::Repl => {
            commands::repl::execute(normalizer)?;
            Ok(true)
        }
        flag::Command::Scene {
            frames,
            width,
            height,
        } => {
            commands::scene::execute(frames, width, height)?;
            Ok(true)
        }
    }
}
