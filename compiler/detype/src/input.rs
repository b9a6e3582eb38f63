//! Reading the source and writing the result.
//!
//! The whole source is read into memory, bounded by the size limit, before
//! the core runs.

use std::fs::{self, File};
use std::io::{self, Read, Write};

use tracing::debug;

use crate::config::{Input, Output};
use crate::CliError;

/// Read all of `input` (from `stdin` when it is [`Input::Stdin`]).
///
/// Fails if more than `max_size` bytes are available or the bytes are not
/// UTF-8.
pub fn read_source(input: &Input, max_size: usize, stdin: impl Read) -> Result<String, CliError> {
    let bytes = match input {
        Input::File(path) => {
            let file = File::open(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            read_bounded(file, max_size).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?
        }
        Input::Stdin => read_bounded(stdin, max_size).map_err(CliError::ReadStdin)?,
    };
    if bytes.len() > max_size {
        return Err(CliError::TooLarge {
            origin: input.to_string(),
            max: max_size,
        });
    }
    debug!(%input, bytes = bytes.len(), "read source");
    String::from_utf8(bytes).map_err(|_| CliError::InvalidUtf8 {
        origin: input.to_string(),
    })
}

/// Read at most `max_size + 1` bytes, enough to tell "too large" apart.
fn read_bounded(reader: impl Read, max_size: usize) -> io::Result<Vec<u8>> {
    let limit = u64::try_from(max_size).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write `text` to `output` (to `stdout` when it is [`Output::Stdout`]).
pub fn write_output(output: &Output, text: &str, mut stdout: impl Write) -> Result<(), CliError> {
    match output {
        Output::File(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        Output::Stdout => stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::WriteStdout),
    }
}
