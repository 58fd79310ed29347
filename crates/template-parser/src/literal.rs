//! Go rune and string literal recognition.
//!
//! These functions only find literal boundaries, so that delimiters inside a
//! literal are never counted by the expression scanner. Escape sequences are
//! recognized by shape and are not decoded.
//!
//! Raw strings accept the same escape shapes as interpreted strings. Go
//! itself does not process escapes in raw strings; the only observable
//! difference here is that `` \` `` still closes a raw string, because `` ` ``
//! is not a named escape.

use crate::Cursor;

/// Characters allowed after `\` in a named escape.
const NAMED_ESCAPES: &[char] = &['a', 'b', 'f', 'n', 'r', 't', 'v', '\\', '\'', '"'];

/// Consumes one string literal, interpreted (`"…"`) or raw (`` `…` ``).
///
/// Returns the literal text including its quotes. Leaves the cursor
/// untouched and returns `None` if there is no complete literal here.
pub fn string_literal<'src>(cursor: &mut Cursor<'src>) -> Option<&'src str> {
    interpreted_string(cursor).or_else(|| raw_string(cursor))
}

/// Consumes one rune literal such as `'a'`, `'\n'` or `'é'`.
pub fn rune_literal<'src>(cursor: &mut Cursor<'src>) -> Option<&'src str> {
    let start = cursor.position();
    if !cursor.eat("'") {
        return None;
    }
    if !(escape(cursor) || cursor.bump_if(|c| c != '\'').is_some()) || !cursor.eat("'") {
        cursor.reset(start);
        return None;
    }
    Some(cursor.slice_from(start))
}

/// Consumes one string or rune literal, trying strings first.
pub fn literal<'src>(cursor: &mut Cursor<'src>) -> Option<&'src str> {
    string_literal(cursor).or_else(|| rune_literal(cursor))
}

/// Returns true if `c` can open a literal.
#[inline]
pub fn is_literal_start(c: char) -> bool {
    matches!(c, '"' | '`' | '\'')
}

fn interpreted_string<'src>(cursor: &mut Cursor<'src>) -> Option<&'src str> {
    quoted(cursor, '"', |c| c != '\n' && c != '"')
}

fn raw_string<'src>(cursor: &mut Cursor<'src>) -> Option<&'src str> {
    quoted(cursor, '`', |c| c != '`')
}

/// Consumes `quote`, then escapes or characters accepted by `plain` until a
/// closing `quote`.
fn quoted<'src>(
    cursor: &mut Cursor<'src>,
    quote: char,
    plain: impl Fn(char) -> bool,
) -> Option<&'src str> {
    let start = cursor.position();
    if cursor.peek() != Some(quote) {
        return None;
    }
    cursor.bump();

    loop {
        if cursor.peek() == Some(quote) {
            cursor.bump();
            return Some(cursor.slice_from(start));
        }
        if escape(cursor) || cursor.bump_if(&plain).is_some() {
            continue;
        }
        // End of input, or a character the literal cannot contain.
        cursor.reset(start);
        return None;
    }
}

/// Consumes one escape sequence.
fn escape(cursor: &mut Cursor<'_>) -> bool {
    let rest = cursor.rest().as_bytes();
    if rest.first() != Some(&b'\\') {
        return false;
    }

    let len = match rest.get(1).copied() {
        Some(b'u') if hex_digits(&rest[2..], 4) => 6,
        Some(b'U') if hex_digits(&rest[2..], 8) => 10,
        Some(c) if NAMED_ESCAPES.contains(&(c as char)) => 2,
        Some(b'0'..=b'7') if octal_digits(&rest[1..], 3) => 4,
        Some(b'x') if hex_digits(&rest[2..], 2) => 4,
        _ => return false,
    };

    // Every byte of an escape is ASCII, so each one is a single column.
    for _ in 0..len {
        cursor.bump();
    }
    true
}

fn hex_digits(bytes: &[u8], count: usize) -> bool {
    bytes.len() >= count && bytes[..count].iter().all(u8::is_ascii_hexdigit)
}

fn octal_digits(bytes: &[u8], count: usize) -> bool {
    bytes.len() >= count && bytes[..count].iter().all(|b| (b'0'..=b'7').contains(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_rune(input: &str) -> Option<&str> {
        rune_literal(&mut Cursor::new(input))
    }

    fn lex_string(input: &str) -> Option<&str> {
        string_literal(&mut Cursor::new(input))
    }

    #[test]
    fn test_rune_literal_with_escaped_newline() {
        assert_eq!(lex_rune(r"'\n' "), Some(r"'\n'"));
    }

    #[test]
    fn test_rune_literals() {
        assert_eq!(lex_rune("'a'"), Some("'a'"));
        assert_eq!(lex_rune("'}'"), Some("'}'"));
        assert_eq!(lex_rune("'日'"), Some("'日'"));
        assert_eq!(lex_rune(r"'\''"), Some(r"'\''"));
        assert_eq!(lex_rune(r"'\\'"), Some(r"'\\'"));
        assert_eq!(lex_rune(r"'\x7f'"), Some(r"'\x7f'"));
        assert_eq!(lex_rune(r"'\101'"), Some(r"'\101'"));
        assert_eq!(lex_rune(r"'ዤ'"), Some(r"'ዤ'"));
        assert_eq!(lex_rune(r"'\U00101234'"), Some(r"'\U00101234'"));
        assert_eq!(lex_rune(r"'\u00e9'"), Some(r"'\u00e9'"));
    }

    #[test]
    fn test_named_escapes() {
        for name in ['a', 'b', 'f', 'n', 'r', 't', 'v'] {
            let rune = format!("'\\{name}'");
            assert_eq!(lex_rune(&rune), Some(rune.as_str()));
        }
        assert_eq!(lex_string(r#""\a\b\f\r\t\v" x"#), Some(r#""\a\b\f\r\t\v""#));
    }

    #[test]
    fn test_little_u_escape() {
        // The brace belongs to the literal, not to an enclosing expression.
        assert_eq!(lex_string(r#""\u0041}" }"#), Some(r#""\u0041}""#));
        // Too few hex digits: the backslash is a plain character, leaving
        // more than one value between the quotes.
        assert_eq!(lex_rune(r"'\u12'"), None);
        assert_eq!(lex_rune(r"'\u12g4'"), None);
    }

    #[test]
    fn test_rune_literal_failures() {
        assert_eq!(lex_rune("''"), None);
        assert_eq!(lex_rune("'ab'"), None);
        assert_eq!(lex_rune("'a"), None);
        // The escaped quote cannot also close the literal.
        assert_eq!(lex_rune(r"'\'"), None);
        assert_eq!(lex_rune("a'"), None);
    }

    #[test]
    fn test_failed_rune_leaves_cursor() {
        let mut cursor = Cursor::new("'ab'");
        assert_eq!(rune_literal(&mut cursor), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_string_literal_with_escaped_newline() {
        assert_eq!(lex_string(r#""\n" "#), Some(r#""\n""#));
    }

    #[test]
    fn test_raw_literal_with_escape_shape() {
        assert_eq!(lex_string("`\\n` "), Some("`\\n`"));
    }

    #[test]
    fn test_interpreted_strings() {
        assert_eq!(lex_string(r#""""#), Some(r#""""#));
        assert_eq!(lex_string(r#""{ not a brace }" x"#), Some(r#""{ not a brace }""#));
        assert_eq!(lex_string(r#""say \"hi\"""#), Some(r#""say \"hi\"""#));
        assert_eq!(lex_string(r#""é\U0001F600\x41\101""#), Some(r#""é\U0001F600\x41\101""#));
        // An unknown escape is just a backslash followed by text.
        assert_eq!(lex_string(r#""\q""#), Some(r#""\q""#));
    }

    #[test]
    fn test_interpreted_string_failures() {
        assert_eq!(lex_string(r#""abc"#), None);
        assert_eq!(lex_string("\"line\nbreak\""), None);
        assert_eq!(lex_string(r#""ends with escape\""#), None);
    }

    #[test]
    fn test_raw_strings() {
        assert_eq!(lex_string("`multi\nline`"), Some("`multi\nline`"));
        assert_eq!(lex_string("`\"}\"`"), Some("`\"}\"`"));
        assert_eq!(lex_string("`\\`"), Some("`\\`"));
        assert_eq!(lex_string("`open"), None);
    }

    #[test]
    fn test_literal_prefers_strings() {
        let mut cursor = Cursor::new(r#""a" 'b'"#);
        assert_eq!(literal(&mut cursor), Some(r#""a""#));
        assert_eq!(literal(&mut cursor), None);
        cursor.bump();
        assert_eq!(literal(&mut cursor), Some("'b'"));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_literal_advances_position() {
        let mut cursor = Cursor::new("`a\nb`c");
        literal(&mut cursor);
        assert_eq!(cursor.position(), source_map::Position::new(5, 1, 2));
    }
}
