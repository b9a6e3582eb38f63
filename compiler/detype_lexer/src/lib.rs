//! Byte-level tokenizer for TypeScript/Flow type stripping.
//!
//! Standalone: depends on no other `detype_*` crate. Produces a flat
//! [`TokenList`] whose spans partition the input exactly; classification of
//! `<`/`>` as generic or comparison is left to the consumer.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer (zero-terminated, padded to 64 bytes)
//!              │
//!              ▼
//!          Cursor ──► Lexer (Code / InString / InBlockComment / InLineComment)
//!                          │
//!                          ▼
//!                      TokenList (… , Eof)
//! ```

pub mod byte_class;
mod cursor;
pub mod growth;
mod keywords;
mod lex_error;
mod lexer;
mod source_buffer;
mod span;
mod token;

pub use cursor::Cursor;
pub use lex_error::{BufferKind, LexError};
pub use lexer::{is_annotation_colon, tokenize, Lexer};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Span, Token};

    const _: [(); 8] = [(); std::mem::size_of::<Span>()];
    const _: [(); 16] = [(); std::mem::size_of::<Token>()];
}
