//! Byte classification shared by the lexer and the stripper.
//!
//! All classes are ASCII-only. Bytes of multi-byte UTF-8 sequences are never
//! whitespace or identifier bytes, so they always fall through to `Code`.

/// ASCII whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Bytes that continue an identifier: `[A-Za-z0-9_$]`.
#[inline]
pub const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Bytes that may start an identifier: `[A-Za-z_$]`.
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

/// Bytes after which a `:` introduces a type annotation.
///
/// Alphanumerics, `_`, `)` and `]`: `x: T`, `f(): T`, `[a, b]: T`.
#[inline]
pub const fn ends_annotated(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b')' || b == b']'
}
