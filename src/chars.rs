//! Codepoint classes shared by the reader, the lexer and the printer.

pub(crate) const BOM: char = '\u{FEFF}';
pub(crate) const CR: char = '\r';
pub(crate) const LF: char = '\n';

/// Bare words that would lex as keywords in older grammars and are therefore
/// rejected as identifiers.
pub(crate) const DISALLOWED_IDENTIFIERS: [&str; 6] = ["true", "false", "null", "inf", "-inf", "nan"];

/// Codepoints that may never appear in a document, even inside strings.
pub(crate) fn is_disallowed(c: u32) -> bool {
    c <= 0x08
        || (0x0E..=0x1F).contains(&c)
        || c == 0x7F
        || (0xD800..=0xDFFF).contains(&c)
        || (0x200E..=0x200F).contains(&c)
        || (0x202A..=0x202E).contains(&c)
        || (0x2066..=0x2069).contains(&c)
}

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

pub(crate) fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\r' | '\n' | '\u{0085}' | '\u{000C}' | '\u{2028}' | '\u{2029}'
    )
}

pub(crate) fn is_equals_sign(c: char) -> bool {
    matches!(c, '=' | '\u{FE66}' | '\u{FF1D}' | '\u{1F7F0}')
}

pub(crate) fn is_special(c: char) -> bool {
    matches!(
        c,
        '\\' | '/' | '(' | ')' | '{' | '}' | ';' | '[' | ']' | '"' | '#'
    )
}

/// Any codepoint that may appear inside a bare identifier.
///
/// Every `char` is a Unicode scalar value, so only the structural classes
/// and the byte order mark need excluding.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c != BOM
        && !is_whitespace(c)
        && !is_newline(c)
        && !is_special(c)
        && !is_equals_sign(c)
        && !is_disallowed(c as u32)
}

/// An identifier codepoint that cannot also start a number.
pub(crate) fn is_unambiguous_identifier_char(c: char) -> bool {
    c != '-' && c != '+' && c != '.' && !is_digit(c) && is_identifier_char(c)
}

pub(crate) fn is_disallowed_identifier(s: &str) -> bool {
    DISALLOWED_IDENTIFIERS.contains(&s)
}

#[inline]
pub(crate) fn is_sign(c: char) -> bool {
    c == '-' || c == '+'
}

#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub(crate) fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}

#[inline]
pub(crate) fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// Returns `true` if `s` would lex back as the very same bare identifier.
///
/// Besides the character classes this rejects anything that would be routed
/// to number lexing (`1a`, `-1`, `.5`, `+.5`) and the reserved keyword
/// spellings.
pub(crate) fn is_valid_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !s.chars().all(is_identifier_char) || is_disallowed_identifier(s) {
        return false;
    }

    let second = chars.next();
    let third = chars.next();
    if is_sign(first) {
        match second {
            Some(c) if is_digit(c) => false,
            Some('.') => !third.is_some_and(is_digit),
            _ => true,
        }
    } else if first == '.' {
        !second.is_some_and(is_digit)
    } else {
        !is_digit(first)
    }
}
