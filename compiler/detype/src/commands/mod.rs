//! Command handlers.
//!
//! `run` dispatches on the resolved [`Config`]. Handlers take their stdin and
//! stdout as parameters so tests can drive them in memory.

mod dump;
mod strip;

use std::io::{Read, Write};

pub use dump::dump_tokens;
pub use strip::strip_file;

use crate::{CliError, Config};

/// Run one invocation.
pub fn run(config: &Config, stdin: impl Read, stdout: impl Write) -> Result<(), CliError> {
    if config.dump_tokens {
        dump_tokens(config, stdin, stdout)
    } else {
        strip_file(config, stdin, stdout)
    }
}
