//! Owned, zero-terminated copy of the input.
//!
//! The lexer looks up to two bytes ahead (`/*`, `//`, `?:`) and ten bytes
//! ahead for keyword checks. Copying the source into a buffer that ends in
//! at least one `0x00` and is padded with zeros to a multiple of 64 bytes
//! means every such read near the end lands on a zero instead of needing a
//! length check. The copy is the only up-front allocation besides the token
//! list, and it is reserved fallibly.

use crate::lex_error::{BufferKind, LexError};
use crate::Cursor;

/// Padding granularity.
const ALIGN: usize = 64;

/// Input text plus its zero-terminated working copy.
///
/// ```text
/// buf: | source bytes ... | 0x00 | 0x00 ... |
///      0             source_len     padded to ALIGN
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The caller's text; token spans index into it.
    source: &'src str,
    /// Source bytes followed by the zero terminator and padding.
    buf: Vec<u8>,
    source_len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Copy `source` into a padded, zero-terminated buffer.
    ///
    /// Rejects empty input and input longer than `u32::MAX` bytes; reports
    /// allocation failure as [`LexError::OutOfMemory`].
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        let len = source.len();
        if len == 0 {
            return Err(LexError::EmptyInput);
        }
        let source_len = u32::try_from(len).map_err(|_| LexError::InputTooLarge { len })?;

        // At least one terminator byte, then up to the next ALIGN multiple.
        let padded = (len + 1).next_multiple_of(ALIGN);
        let mut buf = Vec::new();
        buf.try_reserve_exact(padded)
            .map_err(|_| LexError::out_of_memory(BufferKind::Source, padded))?;
        buf.extend_from_slice(source.as_bytes());
        buf.resize(padded, 0);

        Ok(SourceBuffer {
            source,
            buf,
            source_len,
        })
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Never true for a constructed buffer.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
