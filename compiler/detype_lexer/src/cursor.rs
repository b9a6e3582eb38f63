//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Single-byte reads past the source end return `0x00` from the padding.
//! End of input is positional (`pos >= source_len`), so a literal NUL in
//! the source is just another code byte.
//!
//! The body scans (`eat_through_*`) jump with `memchr` instead of stepping.

use crate::byte_class::is_space;

/// Position in a zero-terminated, padded byte buffer. [`Copy`], so
/// lookahead is done on a copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes, terminator, padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize) == Some(&0),
            "buffer must be zero-terminated"
        );
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Byte at absolute offset `i`; `0x00` beyond the buffer.
    #[inline]
    pub fn byte_at(&self, i: usize) -> u8 {
        self.buf.get(i).copied().unwrap_or(0)
    }

    /// Byte before the current one, `None` at offset 0.
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.pos.checked_sub(1).map(|i| self.byte_at(i as usize))
    }

    /// Closest byte before the cursor that is not whitespace.
    ///
    /// Raw bytes: the closing quote of a literal or the end of a comment
    /// counts like any other byte.
    pub fn previous_non_space(&self) -> Option<u8> {
        self.buf[..self.pos as usize]
            .iter()
            .rev()
            .copied()
            .find(|&b| !is_space(b))
    }

    /// Whether the source (not the padding) continues with `needle`.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.buf
            .get(self.pos as usize..self.source_len as usize)
            .is_some_and(|rest| rest.starts_with(needle))
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Length of the UTF-8 sequence introduced by `lead`; 1 for ASCII and
    /// for bytes that cannot lead a sequence.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole character, stopping at the source end.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Unread source bytes.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        self.buf
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or(&[])
    }

    /// Move `found` bytes ahead, or to end of input when nothing was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by rest().len(), which fits in u32"
    )]
    fn jump(&mut self, found: Option<usize>) {
        self.pos = match found {
            Some(off) => (self.pos + off as u32).min(self.source_len),
            None => self.source_len,
        };
    }

    /// Line comment body: through the next `\n`, or to end of input.
    pub fn eat_through_newline(&mut self) {
        let found = memchr::memchr(b'\n', self.rest()).map(|off| off + 1);
        self.jump(found);
    }

    /// Block comment body: through the next `*/`, or to end of input.
    pub fn eat_through_block_comment_end(&mut self) {
        let found = memchr::memmem::find(self.rest(), b"*/").map(|off| off + 2);
        self.jump(found);
    }

    /// Literal body: through the closing `quote`, skipping `\`-escaped bytes.
    ///
    /// Returns `false` when the literal is unterminated and the cursor has
    /// run to end of input.
    pub fn eat_through_quote(&mut self, quote: u8) -> bool {
        while let Some(off) = memchr::memchr2(quote, b'\\', self.rest()) {
            if self.rest()[off] == quote {
                self.jump(Some(off + 1));
                return true;
            }
            self.jump(Some(off + 2));
        }
        self.jump(None);
        false
    }
}

#[cfg(test)]
mod tests;
