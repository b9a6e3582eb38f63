//! detype CLI
//!
//! Strips TypeScript/Flow types from a file or stdin.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use detype::{commands, init_tracing, Cli, Config};

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse());
    init_tracing(config.verbose);

    match commands::run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
