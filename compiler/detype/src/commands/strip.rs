//! Default command: strip types and write the result.

use std::io::{Read, Write};

use tracing::debug;

use crate::config::Output;
use crate::input::{read_source, write_output};
use crate::{CliError, Config};

/// Read the source, strip it, write the output.
///
/// When the output is a file, a completion line naming it goes to `stdout`.
pub fn strip_file(config: &Config, stdin: impl Read, mut stdout: impl Write) -> Result<(), CliError> {
    let source = read_source(&config.input, config.max_size, stdin)?;
    let stripped = detype_strip::strip_types_with(&source, &config.options)?;
    debug!(
        bytes_in = source.len(),
        bytes_out = stripped.len(),
        "strip complete"
    );
    write_output(&config.output, &stripped, &mut stdout)?;
    if let Output::File(path) = &config.output {
        writeln!(
            stdout,
            "Type stripping complete. Output written to: {}",
            path.display()
        )
        .map_err(CliError::WriteStdout)?;
    }
    Ok(())
}
