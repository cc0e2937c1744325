mod arguments;
mod cli;
mod flags;
mod input;
mod s3;
mod shared_options;
mod shell;

use std::io::IsTerminal;

use clap::Parser;

use arguments::{Arguments, MainResult};

#[tokio::main]
async fn main() -> MainResult {
    let args = Arguments::parse();

    let client = s3::init(&args).await;

    let mut shell = shell::Shell::new(client, std::io::stdout(), std::io::stderr(), cli::terminal_width(), args.shared.verbose);
    if let Err(e) = shell.greet() {
        cli::println_error(format_args!("failed to write to console: {e}"));
        return MainResult::ErrorConsole;
    }
    let result = match input::Editor::new() {
        Ok(mut editor) if std::io::stdin().is_terminal() => shell.run(&mut editor).await,
        _ => shell.run(&mut input::ByteLines::new(tokio::io::BufReader::new(tokio::io::stdin()))).await,
    };
    match result {
        Ok(()) => MainResult::Success,
        Err(e) => {
            cli::println_error(format_args!("console: {e}"));
            MainResult::ErrorConsole
        },
    }
}
