//! Removes TypeScript/Flow type syntax from source text.
//!
//! Two strictly sequential passes:
//!
//! ```text
//! &str ──► detype_lexer::tokenize ──► TokenList ──► Stripper ──► Emitter ──► String
//! ```
//!
//! The stripper reads the tokens and the original text, emits retained
//! spans verbatim and elides type-only ones. It is lexical, not a parser:
//! the rules are heuristics and malformed input still yields best-effort
//! output.
//!
//! ```
//! let js = detype_strip::strip_types("let x: number = 5;").unwrap();
//! assert_eq!(js, "let x = 5;");
//! ```

pub mod classify;
mod cursor;
mod emitter;
mod error;
mod options;
mod stripper;

pub use cursor::{Nesting, Scan, Stop, TokenCursor};
pub use detype_lexer::{Token, TokenKind, TokenList};
pub use emitter::Emitter;
pub use error::{InvalidInput, StripError};
pub use options::{OptionalAnnotation, StripOptions};

use stripper::Stripper;
use tracing::debug;

/// Tokenize `source`.
pub fn tokenize(source: &str) -> Result<TokenList, StripError> {
    Ok(detype_lexer::tokenize(source)?)
}

/// Strip `tokens` (lexed from `source`) with default options.
pub fn strip(tokens: &TokenList, source: &str) -> Result<String, StripError> {
    strip_with(tokens, source, &StripOptions::default())
}

/// Strip `tokens` (lexed from `source`).
pub fn strip_with(
    tokens: &TokenList,
    source: &str,
    options: &StripOptions,
) -> Result<String, StripError> {
    let output = Stripper::new(tokens, source, *options)?.run()?;
    debug!(
        tokens = tokens.len(),
        bytes_in = source.len(),
        bytes_out = output.len(),
        "stripped"
    );
    Ok(output)
}

/// Tokenize and strip `source` with default options.
pub fn strip_types(source: &str) -> Result<String, StripError> {
    strip_types_with(source, &StripOptions::default())
}

/// Tokenize and strip `source`. The token sequence is dropped before
/// returning.
pub fn strip_types_with(source: &str, options: &StripOptions) -> Result<String, StripError> {
    let tokens = tokenize(source)?;
    strip_with(&tokens, source, options)
}
