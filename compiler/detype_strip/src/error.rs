//! Strip error taxonomy.
//!
//! `Ok(String)` is success. Malformed TypeScript is never an error: every
//! heuristic falls back to best-effort output. Only an unusable input buffer
//! and allocation exhaustion are reported.

use detype_lexer::{BufferKind, LexError};
use thiserror::Error;

/// Why the input was rejected before any work was done.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum InvalidInput {
    #[error("input is empty")]
    Empty,
    #[error("input is {len} bytes, too large to index")]
    TooLarge { len: usize },
}

/// Failure to produce stripped output. Partial output is discarded.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum StripError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("out of memory growing the {buffer} to {requested}")]
    OutOfMemory { buffer: BufferKind, requested: usize },
}

impl From<LexError> for StripError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::EmptyInput => StripError::InvalidInput(InvalidInput::Empty),
            LexError::InputTooLarge { len } => StripError::InvalidInput(InvalidInput::TooLarge { len }),
            LexError::OutOfMemory { buffer, requested } => {
                StripError::OutOfMemory { buffer, requested }
            }
        }
    }
}
