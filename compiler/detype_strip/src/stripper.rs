//! The strip loop: one forward pass over the token sequence.
//!
//! Each token either passes through verbatim or opens a type-only construct
//! that is consumed as a single range. The cursor only moves forward; a skip
//! stops *before* the token that ended it, which is then handled normally.
//!
//! | Token | Action |
//! |---|---|
//! | `Code`, `String`, comments, `Equals`, unconsumed `AngleClose` | emit |
//! | `Interface` | elide through the body `{…}`, or through the line end |
//! | `TypeAlias` | elide through `;`, or up to the line end |
//! | `Colon` | elide the annotation, keeping whitespace before its terminator |
//! | `AngleOpen` | elide a generic list, or emit `<` |
//! | `Implements` | emit a space, elide up to `{` |
//! | `As` | emit a space, elide the asserted type |
//! | `Optional` | emit `:` (or elide the annotation, see [`OptionalAnnotation`]) |
//! | `Private` | elide with trailing whitespace |

use detype_lexer::{TokenKind, TokenList};
use tracing::{debug, trace};

use crate::classify::{annotation_end, classify_angle, is_type_name_part, AngleClass};
use crate::cursor::{Nesting, Stop, TokenCursor};
use crate::{Emitter, OptionalAnnotation, StripError, StripOptions};

/// Single-use stripper over one token sequence.
pub(crate) struct Stripper<'t> {
    cursor: TokenCursor<'t>,
    emitter: Emitter,
    options: StripOptions,
}

impl<'t> Stripper<'t> {
    pub(crate) fn new(
        tokens: &'t TokenList,
        source: &'t str,
        options: StripOptions,
    ) -> Result<Self, StripError> {
        Ok(Stripper {
            cursor: TokenCursor::new(tokens, source),
            emitter: Emitter::with_capacity(source.len())?,
            options,
        })
    }

    pub(crate) fn run(mut self) -> Result<String, StripError> {
        loop {
            let token = self.cursor.peek();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Code
                | TokenKind::String
                | TokenKind::BlockComment
                | TokenKind::LineComment
                | TokenKind::Equals
                | TokenKind::AngleClose => self.emit_current()?,
                TokenKind::Interface => self.interface(),
                TokenKind::TypeAlias => self.type_alias(),
                TokenKind::Colon => self.annotation(),
                TokenKind::AngleOpen => self.angle()?,
                TokenKind::Implements => self.implements()?,
                TokenKind::As => self.assertion()?,
                TokenKind::Optional => self.optional()?,
                TokenKind::Private => self.private(),
            }
        }
        Ok(self.emitter.finish())
    }

    fn emit_current(&mut self) -> Result<(), StripError> {
        let text = self.cursor.text(self.cursor.peek());
        self.emitter.push_str(text)?;
        self.cursor.advance();
        Ok(())
    }

    /// `interface Name … { … }`, or `interface Name …` up to the line end.
    ///
    /// Braces are counted on code only; braces in strings and comments do
    /// not affect the match. An unmatched body runs to end of input.
    fn interface(&mut self) {
        let start = self.cursor.position();
        let head = self.cursor.scan(start, Nesting::None, |token, text, _| {
            match (token.kind, text) {
                (TokenKind::Code, "{") => Stop::Before,
                (TokenKind::Code, "\n") | (TokenKind::LineComment, _) => Stop::Through,
                _ => Stop::Continue,
            }
        });
        let end = match head.stopped_at {
            Some(open) if self.cursor.text(self.cursor.token(open)) == "{" => {
                self.cursor
                    .scan(open, Nesting::Braces, |token, text, depth| {
                        if token.kind == TokenKind::Code && text == "}" && depth == 1 {
                            Stop::Through
                        } else {
                            Stop::Continue
                        }
                    })
                    .end
            }
            _ => head.end,
        };
        let range = self.cursor.consume_to(end);
        debug!(
            line = self.cursor.token(range.start).line,
            tokens = range.len(),
            "elided interface"
        );
    }

    /// `type Name = …;` through the `;`, or up to (not including) the line end.
    ///
    /// A `\r` right before the `\n` belongs to the line end and is kept.
    fn type_alias(&mut self) {
        let start = self.cursor.position();
        let scan = self.cursor.scan(start, Nesting::None, |token, text, _| {
            match (token.kind, text) {
                (TokenKind::Code, ";") => Stop::Through,
                (TokenKind::Code, "\n") | (TokenKind::LineComment, _) => Stop::Before,
                _ => Stop::Continue,
            }
        });
        let mut end = scan.end;
        let at_newline = scan
            .stopped_at
            .is_some_and(|i| self.cursor.text(self.cursor.token(i)) == "\n");
        if at_newline && end > start && self.cursor.text(self.cursor.token(end - 1)) == "\r" {
            end -= 1;
        }
        let range = self.cursor.consume_to(end);
        debug!(
            line = self.cursor.token(start).line,
            tokens = range.len(),
            "elided type alias"
        );
    }

    /// `: Type` after a name, a call or an index.
    ///
    /// The whitespace run right before the terminator stays, so
    /// `x: number = 5` becomes `x = 5`.
    fn annotation(&mut self) {
        let start = self.cursor.position();
        let scan = self.cursor.scan(start + 1, Nesting::Type, annotation_end);
        let mut end = scan.end;
        while end > start + 1 && self.cursor.is_whitespace(self.cursor.token(end - 1)) {
            end -= 1;
        }
        let range = self.cursor.consume_to(end);
        trace!(
            start = range.start,
            end = range.end,
            text = self.cursor.range_text(range.clone()),
            "elided annotation"
        );
    }

    fn angle(&mut self) -> Result<(), StripError> {
        match classify_angle(&self.cursor) {
            AngleClass::Generic { close } => {
                self.cursor.consume_to(close + 1);
                Ok(())
            }
            AngleClass::Comparison => self.emit_current(),
        }
    }

    /// `implements A, B {` keeps one space and resumes at the `{`.
    fn implements(&mut self) -> Result<(), StripError> {
        self.emitter.push_str(" ")?;
        let scan = self.cursor.skip_until(Nesting::None, |token, text, _| {
            if token.kind == TokenKind::Code && text == "{" {
                Stop::Before
            } else {
                Stop::Continue
            }
        });
        trace!(found_body = scan.found(), "elided implements clause");
        Ok(())
    }

    /// `x as Foo.Bar<T>` keeps `x` and one space.
    fn assertion(&mut self) -> Result<(), StripError> {
        self.emitter.push_str(" ")?;
        self.cursor.advance();
        let cursor = self.cursor;
        let type_start = cursor.next_significant(cursor.position());
        let mut end = type_start;
        loop {
            let token = cursor.token(end);
            if is_type_name_part(&cursor, token) {
                end += 1;
            } else if token.kind == TokenKind::AngleOpen {
                let args = cursor.scan(end + 1, Nesting::Angles, |token, _, depth| {
                    if token.kind == TokenKind::AngleClose && depth == 0 {
                        Stop::Through
                    } else {
                        Stop::Continue
                    }
                });
                end = args.end;
                if !args.found() {
                    break;
                }
            } else {
                break;
            }
        }
        let range = self.cursor.consume_to(end);
        trace!(text = cursor.range_text(range), "elided type assertion");
        Ok(())
    }

    fn optional(&mut self) -> Result<(), StripError> {
        match self.options.optional_annotation {
            OptionalAnnotation::Keep => {
                self.emitter.push_str(":")?;
                self.cursor.advance();
            }
            OptionalAnnotation::Elide => self.annotation(),
        }
        Ok(())
    }

    fn private(&mut self) {
        let mut offset = 1;
        while self.cursor.is_whitespace(self.cursor.peek_at(offset)) {
            offset += 1;
        }
        self.cursor.consume_to(self.cursor.position() + offset);
    }
}

#[cfg(test)]
mod tests;
