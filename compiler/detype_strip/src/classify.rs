//! Pure classification predicates over the token cursor.
//!
//! None of these move the cursor. Each answers one question the stripper
//! needs lookahead or lookbehind for, so each is testable on its own.

use detype_lexer::byte_class::{is_ident_byte, is_ident_start};
use detype_lexer::{Token, TokenKind};
use tracing::trace;

use crate::cursor::{Nesting, Stop, TokenCursor};

/// How a `<` at the cursor is read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AngleClass {
    /// Type parameter/argument list closed by the `>` at `close`.
    Generic { close: usize },
    /// Less-than operator.
    Comparison,
}

/// Whether the `<` at the cursor could open a generic list.
///
/// The nearest non-whitespace token before it must end a name or a call
/// (`f<`, `Foo<`, `g()<`), and the first non-whitespace token after it must
/// start an identifier (`<T`, not `< 0`).
pub fn generic_candidate(cursor: &TokenCursor<'_>) -> bool {
    let before = cursor.previous_significant().is_some_and(|t| {
        t.kind == TokenKind::Code
            && cursor
                .text(t)
                .bytes()
                .next()
                .is_some_and(|b| is_ident_byte(b) || b == b')')
    });
    if !before {
        return false;
    }
    let first = cursor.token(cursor.next_significant(cursor.position() + 1));
    starts_identifier(cursor, first)
}

/// Index of the `>` matching the `<` at `open`.
///
/// Gives up at a `;` or `{` before the match, and at end of input.
pub fn find_generic_close(cursor: &TokenCursor<'_>, open: usize) -> Option<usize> {
    let scan = cursor.scan(open + 1, Nesting::Angles, |token, text, depth| {
        match token.kind {
            TokenKind::AngleClose if depth == 0 => Stop::Through,
            TokenKind::Code if text == ";" || text == "{" => Stop::Before,
            _ => Stop::Continue,
        }
    });
    scan.stopped_at
        .filter(|&i| cursor.token(i).kind == TokenKind::AngleClose)
}

/// Whether what follows the `>` at `close` confirms a generic list.
///
/// Accepted: `(` (call or parameter list), `{` (class body), `=` (alias
/// body or default) and `=>`. An `=` glued to the `>` is the `>=`
/// operator unless a `>` follows it directly (`>=>`).
pub fn is_generic_follower(cursor: &TokenCursor<'_>, close: usize) -> bool {
    let index = cursor.next_significant(close + 1);
    let next = cursor.token(index);
    match next.kind {
        TokenKind::Equals if next.span.start == cursor.token(close).span.end => {
            let after = cursor.token(index + 1);
            after.kind == TokenKind::AngleClose && after.span.start == next.span.end
        }
        TokenKind::Equals => true,
        TokenKind::Code => matches!(cursor.text(next), "(" | "{"),
        _ => false,
    }
}

/// Decide whether the `<` at the cursor opens a generic list.
pub fn classify_angle(cursor: &TokenCursor<'_>) -> AngleClass {
    let open = cursor.position();
    let class = if generic_candidate(cursor) {
        match find_generic_close(cursor, open) {
            Some(close) if is_generic_follower(cursor, close) => AngleClass::Generic { close },
            _ => AngleClass::Comparison,
        }
    } else {
        AngleClass::Comparison
    };
    trace!(open, ?class, "classify `<`");
    class
}

/// Code token whose first byte may start an identifier.
fn starts_identifier(cursor: &TokenCursor<'_>, token: Token) -> bool {
    token.kind == TokenKind::Code
        && cursor
            .text(token)
            .bytes()
            .next()
            .is_some_and(is_ident_start)
}

/// Code token that can appear in the type after `as`: `[A-Za-z0-9_$.]`.
pub fn is_type_name_part(cursor: &TokenCursor<'_>, token: Token) -> bool {
    token.kind == TokenKind::Code
        && cursor
            .text(token)
            .bytes()
            .next()
            .is_some_and(|b| is_ident_byte(b) || b == b'.')
}

/// Where a `:` annotation's type ends, for use with [`Nesting::Type`].
///
/// At depth zero the type stops before `,` `;` `{` `}` a newline, a line
/// comment, `=`, and any unmatched closer (`)` `]` `>`).
pub fn annotation_end(token: Token, text: &str, depth: u32) -> Stop {
    if depth > 0 {
        return Stop::Continue;
    }
    match token.kind {
        TokenKind::Equals | TokenKind::LineComment | TokenKind::AngleClose => Stop::Before,
        TokenKind::Code => match text {
            "," | ";" | "{" | "}" | ")" | "]" | "\n" => Stop::Before,
            _ => Stop::Continue,
        },
        _ => Stop::Continue,
    }
}
