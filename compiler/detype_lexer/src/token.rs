//! Token model: kinds, tokens, and the flat token sequence.
//!
//! The sequence is a partition of the source: spans are strictly increasing,
//! non-overlapping and gap-free, and their concatenation reproduces the
//! input byte-for-byte. The final token is always an empty [`TokenKind::Eof`].

use std::fmt;
use std::ops::Index;

use crate::growth;
use crate::lex_error::{BufferKind, LexError};
use crate::span::Span;

/// Classification of a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A single retained character (the default classification).
    Code,
    /// A quoted or template literal, delimiters included.
    String,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,
    /// `// ...` through its newline, or to end of input.
    LineComment,
    /// `interface` keyword.
    Interface,
    /// `type` keyword opening a type alias.
    TypeAlias,
    /// `implements` keyword.
    Implements,
    /// `as` keyword of a type assertion.
    As,
    /// `private` modifier.
    Private,
    /// `:` introducing a type annotation.
    Colon,
    /// `?:` optional marker.
    Optional,
    /// `<`, generic or comparison.
    AngleOpen,
    /// `>`, generic or comparison.
    AngleClose,
    /// `=`.
    Equals,
    /// End of input. Always last, always empty.
    Eof,
}

impl TokenKind {
    /// Human-readable name, used by token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Code => "Code",
            TokenKind::String => "String",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::LineComment => "LineComment",
            TokenKind::Interface => "Interface",
            TokenKind::TypeAlias => "TypeAlias",
            TokenKind::Implements => "Implements",
            TokenKind::As => "As",
            TokenKind::Private => "Private",
            TokenKind::Colon => "Colon",
            TokenKind::Optional => "Optional",
            TokenKind::AngleOpen => "AngleOpen",
            TokenKind::AngleClose => "AngleClose",
            TokenKind::Equals => "Equals",
            TokenKind::Eof => "Eof",
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// `Code`, literals and comments are variable; everything else always
    /// spans the same bytes.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Interface => Some("interface"),
            TokenKind::TypeAlias => Some("type"),
            TokenKind::Implements => Some("implements"),
            TokenKind::As => Some("as"),
            TokenKind::Private => Some("private"),
            TokenKind::Colon => Some(":"),
            TokenKind::Optional => Some("?:"),
            TokenKind::AngleOpen => Some("<"),
            TokenKind::AngleClose => Some(">"),
            TokenKind::Equals => Some("="),
            TokenKind::Eof => Some(""),
            TokenKind::Code
            | TokenKind::String
            | TokenKind::BlockComment
            | TokenKind::LineComment => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of source text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line of the token's first byte. Diagnostics only.
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    /// Source text of this token.
    ///
    /// `source` must be the text the token was lexed from.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.to_range()]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.kind, self.line, self.span)
    }
}

/// The flat, ordered token sequence for one source text.
///
/// Produced once by the lexer and read-only afterwards. Owned by a single
/// strip invocation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Empty list with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Result<Self, LexError> {
        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(capacity)
            .map_err(|_| LexError::out_of_memory(BufferKind::Tokens, capacity))?;
        Ok(TokenList { tokens })
    }

    /// Append a token, doubling capacity when full.
    pub fn push(&mut self, token: Token) -> Result<(), LexError> {
        growth::reserve(&mut self.tokens, 1)
            .map_err(|(requested, _)| LexError::out_of_memory(BufferKind::Tokens, requested))?;
        self.tokens.push(token);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds in order, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
