//! Token cursor for the stripper.
//!
//! Moves forward only. Lookahead is done with [`TokenCursor::scan`], which
//! never moves the cursor; a skip is then applied as one half-open range
//! with [`TokenCursor::consume_to`]. Reading past the last token yields a
//! synthetic `Eof`, so a token list without its terminator is still safe.

use std::ops::Range;

use detype_lexer::byte_class::is_space;
use detype_lexer::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Which delimiters a scan tracks as nesting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nesting {
    /// Depth stays zero.
    None,
    /// `{` opens, `}` closes (Code tokens only).
    Braces,
    /// `<` opens, `>` closes.
    Angles,
    /// `<`, `(` and `[` open; `>`, `)` and `]` close. Type expressions.
    Type,
}

impl Nesting {
    /// Depth change for `token`: `1` opens, `-1` closes, `0` otherwise.
    fn delta(self, token: Token, text: &str) -> i8 {
        match (self, token.kind) {
            (Nesting::Angles | Nesting::Type, TokenKind::AngleOpen) => 1,
            (Nesting::Angles | Nesting::Type, TokenKind::AngleClose) => -1,
            (Nesting::Braces, TokenKind::Code) => match text {
                "{" => 1,
                "}" => -1,
                _ => 0,
            },
            (Nesting::Type, TokenKind::Code) => match text {
                "(" | "[" => 1,
                ")" | "]" => -1,
                _ => 0,
            },
            _ => 0,
        }
    }
}

/// Verdict of a scan predicate for one token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stop {
    /// Keep scanning.
    Continue,
    /// End the scan before this token.
    Before,
    /// End the scan after this token.
    Through,
}

/// Outcome of [`TokenCursor::scan`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scan {
    /// Exclusive end of the scanned range.
    pub end: usize,
    /// Index of the token the predicate stopped on; `None` if the scan ran
    /// into `Eof`.
    pub stopped_at: Option<usize>,
}

impl Scan {
    #[inline]
    pub fn found(&self) -> bool {
        self.stopped_at.is_some()
    }
}

/// Forward-only cursor over a token sequence and its source text.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    source: &'t str,
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t TokenList, source: &'t str) -> Self {
        TokenCursor {
            tokens: tokens.as_slice(),
            source,
            pos: 0,
        }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Token at absolute `index`, or `Eof` past the end.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexed sources are at most u32::MAX bytes"
    )]
    pub fn token(&self, index: usize) -> Token {
        match self.tokens.get(index) {
            Some(&token) => token,
            None => {
                let end = self.source.len() as u32;
                let line = self.tokens.last().map_or(1, |t| t.line);
                Token::new(TokenKind::Eof, Span::point(end), line)
            }
        }
    }

    /// Current token.
    #[inline]
    pub fn peek(&self) -> Token {
        self.token(self.pos)
    }

    /// Token `offset` places after the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Token {
        self.token(self.pos.saturating_add(offset))
    }

    /// Source text of `token`; empty if the span does not fit the source.
    #[inline]
    pub fn text(&self, token: Token) -> &'t str {
        self.source.get(token.span.to_range()).unwrap_or("")
    }

    /// Whether `token` is a single whitespace character.
    #[inline]
    pub fn is_whitespace(&self, token: Token) -> bool {
        token.kind == TokenKind::Code && self.text(token).bytes().all(is_space)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Move past the current token. Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Walk forward from `from` without moving the cursor.
    ///
    /// `pred` sees each token with its text and the nesting depth *before*
    /// that token is applied. The scan ends when `pred` stops it or at `Eof`,
    /// which is never included in the range.
    pub fn scan(
        &self,
        from: usize,
        nesting: Nesting,
        mut pred: impl FnMut(Token, &str, u32) -> Stop,
    ) -> Scan {
        let mut depth = 0u32;
        let mut index = from;
        loop {
            let token = self.token(index);
            if token.kind == TokenKind::Eof {
                return Scan {
                    end: index,
                    stopped_at: None,
                };
            }
            let text = self.text(token);
            match pred(token, text, depth) {
                Stop::Continue => {}
                Stop::Before => {
                    return Scan {
                        end: index,
                        stopped_at: Some(index),
                    }
                }
                Stop::Through => {
                    return Scan {
                        end: index + 1,
                        stopped_at: Some(index),
                    }
                }
            }
            match nesting.delta(token, text) {
                1 => depth += 1,
                -1 => depth = depth.saturating_sub(1),
                _ => {}
            }
            index += 1;
        }
    }

    /// Scan from the current token and consume the scanned range.
    pub fn skip_until(
        &mut self,
        nesting: Nesting,
        pred: impl FnMut(Token, &str, u32) -> Stop,
    ) -> Scan {
        let scan = self.scan(self.pos, nesting, pred);
        self.consume_to(scan.end);
        scan
    }

    /// Consume tokens up to (not including) `end` and return the range.
    ///
    /// `end` never moves the cursor backwards or past `Eof`. A list without
    /// a trailing `Eof` can be consumed to its full length.
    pub fn consume_to(&mut self, end: usize) -> Range<usize> {
        let limit = match self.tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => self.tokens.len() - 1,
            _ => self.tokens.len(),
        };
        let end = end.clamp(self.pos, limit.max(self.pos));
        let range = self.pos..end;
        if !range.is_empty() {
            trace!(start = range.start, end = range.end, "consume");
        }
        self.pos = end;
        range
    }

    /// Index of the first token at or after `from` that is not whitespace.
    pub fn next_significant(&self, from: usize) -> usize {
        let mut index = from;
        while self.is_whitespace(self.token(index)) {
            index += 1;
        }
        index
    }

    /// Nearest token before the current one that is not whitespace.
    pub fn previous_significant(&self) -> Option<Token> {
        self.tokens[..self.pos.min(self.tokens.len())]
            .iter()
            .rev()
            .copied()
            .find(|&t| !self.is_whitespace(t))
    }

    /// Source text of the tokens in `range`, concatenated.
    pub fn range_text(&self, range: Range<usize>) -> &'t str {
        if range.is_empty() {
            return "";
        }
        let start = self.token(range.start).span.start as usize;
        let end = self.token(range.end - 1).span.end as usize;
        self.source.get(start..end).unwrap_or("")
    }
}
