use bpaf::{OptionParser, Parser, construct, long, positional};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub error_config: Option<PathBuf>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run { file_path: String },
    Eval { code: String },
    Repl,
    Scene { frames: u64, width: f64, height: f64 },
}

pub fn parse_args() -> CliArgs {
    options().run()
}

pub fn options() -> OptionParser<CliArgs> {
    let error_config = long("error-config")
        .help("JSON file overriding the error cleanup rules")
        .argument::<PathBuf>("PATH")
        .optional();
    let command = command();

    construct!(CliArgs {
        error_config,
        command
    })
    .to_options()
    .descr("playground: run code in an embedded runtime and watch its output")
}

fn command() -> impl Parser<Command> {
    let file_path = positional::<String>("FILE").help("Script to run");
    let run = construct!(Command::Run { file_path })
        .to_options()
        .descr("Run a script file")
        .command("run");

    let code = positional::<String>("CODE").help("Source code to evaluate");
    let eval = construct!(Command::Eval { code })
        .to_options()
        .descr("Evaluate a snippet from the command line")
        .command("eval");

    let repl = bpaf::pure(Command::Repl)
        .to_options()
        .descr("Read snippets from stdin; `.clear` clears the console, `.exit` quits")
        .header(
            "Each line runs as its own module: top-level `let`/`const` do not carry over, \
             assign to `globalThis` to keep state between lines.",
        )
        .command("repl");

    let frames = long("frames")
        .help("Animation frames to advance before printing")
        .argument::<u64>("N")
        .fallback(0);
    let width = long("width")
        .help("Canvas width in pixels")
        .argument::<f64>("PX")
        .fallback(800.0);
    let height = long("height")
        .help("Canvas height in pixels")
        .argument::<f64>("PX")
        .fallback(600.0);
    let scene = construct!(Command::Scene {
        frames,
        width,
        height
    })
    .to_options()
    .descr("Print the robot scene as JSON")
    .command("scene");

    construct!([run, eval, repl, scene])
}
