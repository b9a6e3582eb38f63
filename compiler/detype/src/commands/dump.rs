//! `--dump-tokens`: print the token sequence.

use std::io::{self, Read, Write};

use detype_lexer::TokenList;

use crate::input::read_source;
use crate::{CliError, Config};

/// Lex the source and print one token per line to `stdout`.
///
/// Always writes to `stdout`, never to the configured output file.
pub fn dump_tokens(config: &Config, stdin: impl Read, mut stdout: impl Write) -> Result<(), CliError> {
    let source = read_source(&config.input, config.max_size, stdin)?;
    let tokens = detype_strip::tokenize(&source)?;
    write_dump(&mut stdout, &config.input.to_string(), &tokens, &source)
        .map_err(CliError::WriteStdout)
}

fn write_dump(out: &mut impl Write, origin: &str, tokens: &TokenList, source: &str) -> io::Result<()> {
    writeln!(out, "Tokens for {origin} ({} tokens):", tokens.len())?;
    for token in tokens {
        writeln!(
            out,
            "  {:<12} {:>4}:{:<10} {:?}",
            token.kind.name(),
            token.line,
            token.span.to_string(),
            token.text(source)
        )?;
    }
    out.flush()
}
