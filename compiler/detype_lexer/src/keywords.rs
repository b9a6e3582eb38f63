//! Type-syntax keyword recognition.
//!
//! Five keywords open type-only syntax: `interface`, `type`, `implements`,
//! `as` and `private`. Each is recognised only with boundary checks so that
//! identifiers containing them stay code:
//!
//! | Keyword | Before | After |
//! |---|---|---|
//! | `interface`, `private` | not an identifier byte or `.` | not an identifier byte, or EOF |
//! | `type` | not an identifier byte or `.` | a space, more spaces, then an identifier start |
//! | `implements` | not an identifier byte or `.` | a space |
//! | `as` | a space | a space |
//!
//! Dispatch is on the first byte, so a non-keyword costs one comparison.

use crate::byte_class::{is_ident_byte, is_ident_start};
use crate::{Cursor, TokenKind};

/// Recognise a keyword at the cursor.
///
/// Returns the kind and byte length of the keyword. Does not move the cursor.
#[inline]
pub(crate) fn keyword_at(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    match cursor.current() {
        b'i' => interface(cursor).or_else(|| implements(cursor)),
        b't' => type_alias(cursor),
        b'p' => private(cursor),
        b'a' => as_assertion(cursor),
        _ => None,
    }
}

fn interface(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    word(cursor, b"interface", TokenKind::Interface)
}

fn private(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    word(cursor, b"private", TokenKind::Private)
}

fn implements(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    const KW: &[u8] = b"implements";
    (leading_boundary(cursor) && cursor.starts_with(KW) && byte_after(cursor, KW) == b' ')
        .then_some((TokenKind::Implements, len(KW)))
}

/// `type Name`: a space and then an identifier must follow.
///
/// Rejects `type = 1`, `type;` and `type(x)` where `type` is a variable.
fn type_alias(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    const KW: &[u8] = b"type";
    if !(leading_boundary(cursor) && cursor.starts_with(KW) && byte_after(cursor, KW) == b' ') {
        return None;
    }
    let mut i = cursor.pos() as usize + KW.len();
    while cursor.byte_at(i) == b' ' || cursor.byte_at(i) == b'\t' {
        i += 1;
    }
    is_ident_start(cursor.byte_at(i)).then_some((TokenKind::TypeAlias, len(KW)))
}

fn as_assertion(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    const KW: &[u8] = b"as";
    (cursor.previous() == Some(b' ') && cursor.starts_with(KW) && byte_after(cursor, KW) == b' ')
        .then_some((TokenKind::As, len(KW)))
}

/// A whole word: boundary on both sides.
fn word(cursor: &Cursor<'_>, kw: &[u8], kind: TokenKind) -> Option<(TokenKind, u32)> {
    (leading_boundary(cursor) && cursor.starts_with(kw) && !is_ident_byte(byte_after(cursor, kw)))
        .then_some((kind, len(kw)))
}

/// The byte before the cursor cannot continue an identifier or member access.
#[inline]
fn leading_boundary(cursor: &Cursor<'_>) -> bool {
    match cursor.previous() {
        None => true,
        Some(b) => !is_ident_byte(b) && b != b'.',
    }
}

/// Byte right after `kw` at the cursor; `0x00` at EOF.
#[inline]
fn byte_after(cursor: &Cursor<'_>, kw: &[u8]) -> u8 {
    cursor.byte_at(cursor.pos() as usize + kw.len())
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "keywords are at most 10 bytes"
)]
#[inline]
const fn len(kw: &[u8]) -> u32 {
    kw.len() as u32
}
