//! Four-state lexer producing the flat token sequence.
//!
//! States: [`LexState::Code`], [`LexState::InString`],
//! [`LexState::InBlockComment`] and [`LexState::InLineComment`]. In `Code`
//! the lexer classifies one position at a time; an opening quote or comment
//! marker switches state, and the body state emits the whole literal or
//! comment as one token before returning to `Code`.
//!
//! Generic-vs-comparison is not decided here: `<` and `>` are
//! always emitted as `AngleOpen`/`AngleClose` and the stripper looks ahead.

use crate::byte_class::ends_annotated;
use crate::growth::MIN_CAPACITY;
use crate::keywords::keyword_at;
use crate::{Cursor, LexError, SourceBuffer, Span, Token, TokenKind, TokenList};

/// Lexer state between tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LexState {
    /// Classifying ordinary source.
    Code,
    /// After an opening quote; `quote` closes the literal.
    InString { quote: u8 },
    /// After `/*`.
    InBlockComment,
    /// After `//`.
    InLineComment,
}

/// Tokenize `source` into a token sequence ending in [`TokenKind::Eof`].
///
/// Fails only on empty input, on input too large for `u32` spans, or when a
/// buffer cannot grow.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let buffer = SourceBuffer::new(source)?;
    Lexer::new(&buffer)?.run()
}

/// Single-use lexer over a [`SourceBuffer`].
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// Source bytes, for counting newlines inside tokens.
    source: &'a [u8],
    tokens: TokenList,
    /// Line of the next token's first byte (1-based).
    line: u32,
}

impl<'a> Lexer<'a> {
    /// Prepare a lexer, reserving the initial token capacity.
    pub fn new(buffer: &'a SourceBuffer<'_>) -> Result<Self, LexError> {
        // Most tokens are single characters; start at a quarter and double.
        let capacity = (buffer.len() as usize / 4).max(MIN_CAPACITY);
        Ok(Self {
            cursor: buffer.cursor(),
            source: buffer.source().as_bytes(),
            tokens: TokenList::with_capacity(capacity)?,
            line: 1,
        })
    }

    /// Lex the whole buffer.
    pub fn run(mut self) -> Result<TokenList, LexError> {
        let mut state = LexState::Code;
        let mut start = 0;
        loop {
            state = match state {
                LexState::Code => {
                    start = self.cursor.pos();
                    if self.cursor.is_eof() {
                        self.push(TokenKind::Eof, start)?;
                        return Ok(self.tokens);
                    }
                    self.code(start)?
                }
                LexState::InString { quote } => {
                    self.cursor.eat_through_quote(quote);
                    self.push(TokenKind::String, start)?;
                    LexState::Code
                }
                LexState::InBlockComment => {
                    self.cursor.eat_through_block_comment_end();
                    self.push(TokenKind::BlockComment, start)?;
                    LexState::Code
                }
                LexState::InLineComment => {
                    self.cursor.eat_through_newline();
                    self.push(TokenKind::LineComment, start)?;
                    LexState::Code
                }
            };
        }
    }

    /// Classify the token starting at `start` in `Code` state.
    ///
    /// Either pushes a complete token and stays in `Code`, or consumes an
    /// opener and returns the body state that will finish the token.
    fn code(&mut self, start: u32) -> Result<LexState, LexError> {
        let kind = match self.cursor.current() {
            quote @ (b'"' | b'\'' | b'`') if self.cursor.previous() != Some(b'\\') => {
                self.cursor.advance();
                return Ok(LexState::InString { quote });
            }
            b'/' if self.cursor.peek() == b'*' => {
                self.cursor.advance_n(2);
                return Ok(LexState::InBlockComment);
            }
            b'/' if self.cursor.peek() == b'/' => {
                self.cursor.advance_n(2);
                return Ok(LexState::InLineComment);
            }
            b'?' if self.cursor.peek() == b':' => {
                self.cursor.advance_n(2);
                TokenKind::Optional
            }
            b':' => {
                let kind = if is_annotation_colon(self.cursor.previous_non_space()) {
                    TokenKind::Colon
                } else {
                    TokenKind::Code
                };
                self.cursor.advance();
                kind
            }
            b'<' => self.single(TokenKind::AngleOpen),
            b'>' => self.single(TokenKind::AngleClose),
            b'=' => self.single(TokenKind::Equals),
            _ => {
                if let Some((kind, len)) = keyword_at(&self.cursor) {
                    self.cursor.advance_n(len);
                    kind
                } else {
                    self.cursor.advance_char();
                    TokenKind::Code
                }
            }
        };
        self.push(kind, start)?;
        Ok(LexState::Code)
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Push the token `start..pos` and advance the line counter past it.
    fn push(&mut self, kind: TokenKind, start: u32) -> Result<(), LexError> {
        let span = Span::new(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, span, self.line))?;
        self.line += newlines_in(&self.source[span.to_range()]);
        Ok(())
    }
}

/// A `:` is a type-annotation colon when the nearest preceding
/// non-whitespace byte ends an identifier, a call, or an index/tuple.
///
/// `x: T`, `f(): T` and `[a]: T` qualify; `"key": v` and `{ : }` do not.
#[inline]
pub fn is_annotation_colon(previous_non_space: Option<u8>) -> bool {
    previous_non_space.is_some_and(ends_annotated)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "a token is at most u32::MAX bytes long"
)]
fn newlines_in(bytes: &[u8]) -> u32 {
    match bytes {
        [b] => u32::from(*b == b'\n'),
        _ => memchr::memchr_iter(b'\n', bytes).count() as u32,
    }
}
