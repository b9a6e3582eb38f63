//! Resolved run configuration.
//!
//! [`Cli`] is what the user typed; [`Config`] is what the run does, with the
//! output defaults applied.

use std::fmt;
use std::path::PathBuf;

use detype_strip::StripOptions;

use crate::cli::Cli;

/// Where the source comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::File(path) => write!(f, "'{}'", path.display()),
            Input::Stdin => f.write_str("stdin"),
        }
    }
}

/// Where the result goes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub input: Input,
    pub output: Output,
    pub max_size: usize,
    pub options: StripOptions,
    pub dump_tokens: bool,
    pub verbose: bool,
}

impl Config {
    /// Apply defaults: stdin input writes to stdout, file input overwrites
    /// the file. An explicit `-` always means stdout.
    pub fn from_cli(cli: Cli) -> Self {
        let input = match cli.file {
            Some(path) if !cli.stdin => Input::File(path),
            _ => Input::Stdin,
        };
        let output = match (cli.output, &input) {
            (Some(path), _) if path.as_os_str() == "-" => Output::Stdout,
            (Some(path), _) => Output::File(path),
            (None, Input::File(path)) => Output::File(path.clone()),
            (None, Input::Stdin) => Output::Stdout,
        };
        let mut options = StripOptions::default();
        if cli.elide_optional_types {
            options = options.elide_optional_types();
        }
        Config {
            input,
            output,
            max_size: cli.max_size,
            options,
            dump_tokens: cli.dump_tokens,
            verbose: cli.verbose,
        }
    }
}
