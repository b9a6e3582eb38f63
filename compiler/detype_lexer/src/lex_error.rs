//! Lexer error types.
//!
//! The lexer never rejects malformed TypeScript. The only failures are an
//! unusable input buffer and allocation exhaustion while growing one of the
//! owned buffers.

use std::fmt;

use thiserror::Error;

/// Which growable buffer ran out of memory.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BufferKind {
    /// The padded working copy of the source.
    Source,
    /// The token sequence.
    Tokens,
    /// The stripped output text.
    Output,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferKind::Source => "source buffer",
            BufferKind::Tokens => "token sequence",
            BufferKind::Output => "output buffer",
        })
    }
}

/// Failure to produce a token sequence.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexError {
    /// Zero-length source.
    #[error("source is empty")]
    EmptyInput,
    /// Source does not fit the `u32` span offsets.
    #[error("source is {len} bytes, which exceeds the {max} byte limit", max = u32::MAX)]
    InputTooLarge { len: usize },
    /// Growing a buffer failed.
    #[error("out of memory growing the {buffer} to {requested} elements")]
    OutOfMemory { buffer: BufferKind, requested: usize },
}

impl LexError {
    /// Allocation failure for `buffer` while reserving room for `requested` elements.
    pub fn out_of_memory(buffer: BufferKind, requested: usize) -> Self {
        LexError::OutOfMemory { buffer, requested }
    }
}
