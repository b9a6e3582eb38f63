//! CLI error type.

use std::io;
use std::path::PathBuf;

use detype_strip::StripError;
use thiserror::Error;

/// Anything that stops the CLI. `main` prints it as `error: …` and exits 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot write stdout: {0}")]
    WriteStdout(#[source] io::Error),

    #[error("{origin} is not valid UTF-8")]
    InvalidUtf8 { origin: String },

    #[error("{origin} is too large (max {max} bytes)")]
    TooLarge { origin: String, max: usize },

    #[error("type stripping failed: {0}")]
    Strip(#[from] StripError),
}
