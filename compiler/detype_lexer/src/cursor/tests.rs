#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn advance_and_eof() {
    let buf = SourceBuffer::new("ab").unwrap();
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn peek_at_end_reads_padding() {
    let buf = SourceBuffer::new("a").unwrap();
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
}

// === Lookback ===

#[test]
fn previous_byte() {
    let buf = SourceBuffer::new("ab").unwrap();
    let mut cursor = buf.cursor();
    assert_eq!(cursor.previous(), None);
    cursor.advance();
    assert_eq!(cursor.previous(), Some(b'a'));
}

#[test]
fn previous_non_space_skips_all_whitespace() {
    let buf = SourceBuffer::new("x \t\n\r :").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance_n(6);
    assert_eq!(cursor.current(), b':');
    assert_eq!(cursor.previous_non_space(), Some(b'x'));
}

#[test]
fn previous_non_space_at_start() {
    let buf = SourceBuffer::new("  :").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert_eq!(cursor.previous_non_space(), None);
}

// === Matching ===

#[test]
fn starts_with_respects_source_end() {
    let buf = SourceBuffer::new("typ").unwrap();
    let cursor = buf.cursor();
    assert!(cursor.starts_with(b"typ"));
    assert!(!cursor.starts_with(b"type"));
}

// === Character Width ===

#[test]
fn advance_char_multibyte() {
    let buf = SourceBuffer::new("é€😀x").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'x');
}

// === Body Scans ===

#[test]
fn newline_scan_includes_newline() {
    let buf = SourceBuffer::new("// hi\nx").unwrap();
    let mut cursor = buf.cursor();
    cursor.eat_through_newline();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn newline_scan_stops_at_eof() {
    let buf = SourceBuffer::new("// hi").unwrap();
    let mut cursor = buf.cursor();
    cursor.eat_through_newline();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_scan() {
    let buf = SourceBuffer::new("/* a\n*b */c").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    cursor.eat_through_block_comment_end();
    assert_eq!(cursor.current(), b'c');
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    let buf = SourceBuffer::new("/* open").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    cursor.eat_through_block_comment_end();
    assert!(cursor.is_eof());
}

#[test]
fn quote_scan_handles_escapes() {
    let buf = SourceBuffer::new(r#""a\"b\\"c"#).unwrap();
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.eat_through_quote(b'"'));
    assert_eq!(cursor.current(), b'c');
}

#[test]
fn quote_scan_trailing_backslash_stays_in_bounds() {
    let buf = SourceBuffer::new("'ab\\").unwrap();
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.eat_through_quote(b'\''));
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 4);
}

mod proptest_scans {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quote_scan_never_passes_source_end(body in "[a-z\\\\\"' ]{0,40}") {
            let text = format!("\"{body}");
            let buf = SourceBuffer::new(&text).unwrap();
            let mut cursor = buf.cursor();
            cursor.advance();
            cursor.eat_through_quote(b'"');
            prop_assert!(cursor.pos() as usize <= text.len());
        }
    }
}
