//! Tokenizer.
//!
//! [`Lexer`] pulls codepoints from a [`CodepointReader`] and hands out one
//! [`Token`] at a time, with a single token of lookahead. All string-level
//! work happens here: escapes, raw-string hash counting and multi-line
//! dedenting. The parser only ever sees finished string values.

use log::trace;
use num_bigint::BigInt;
use std::fmt;

use crate::chars::{
    is_binary_digit, is_digit, is_disallowed_identifier, is_equals_sign, is_hex_digit,
    is_identifier_char, is_newline, is_octal_digit, is_sign, is_unambiguous_identifier_char,
    is_whitespace, BOM, CR, LF,
};
use crate::number::{Decimal, Number, Radix};
use crate::reader::CodepointReader;
use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    Bom,
    /// `//` up to and including the line break.
    SingleLineComment,
    MultiLineComment,
    Slashdash,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Escline,
    Newline,
    Whitespace,
    Equals(char),
    /// Bare identifier, quoted or raw string.
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bom => f.write_str("byte order mark"),
            Token::SingleLineComment => f.write_str("comment"),
            Token::MultiLineComment => f.write_str("multi-line comment"),
            Token::Slashdash => f.write_str("'/-'"),
            Token::OpenParen => f.write_str("'('"),
            Token::CloseParen => f.write_str("')'"),
            Token::OpenBrace => f.write_str("'{'"),
            Token::CloseBrace => f.write_str("'}'"),
            Token::Semicolon => f.write_str("';'"),
            Token::Escline => f.write_str("'\\'"),
            Token::Newline => f.write_str("newline"),
            Token::Whitespace => f.write_str("whitespace"),
            Token::Equals(c) => write!(f, "'{}'", c),
            Token::String(s) => write!(f, "string \"{}\"", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Bool(b) => write!(f, "#{}", b),
            Token::Null => f.write_str("#null"),
        }
    }
}

pub(crate) struct Lexer<'a> {
    reader: CodepointReader<'a>,
    peeked: Option<Option<Token>>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Lexer {
            reader: CodepointReader::new(input),
            peeked: None,
        }
    }

    /// Consumes the next token; `None` at end of input.
    pub(crate) fn next(&mut self) -> Result<Option<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    pub(crate) fn peek(&mut self) -> Result<Option<&Token>> {
        if self.peeked.is_none() {
            let token = self.read_token()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    /// Diagnostic at the current read position. Invalidates the input.
    pub(crate) fn error(&mut self, message: &str) -> Error {
        self.reader.error(message)
    }

    fn read_token(&mut self) -> Result<Option<Token>> {
        let c = match self.reader.read()? {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match c {
            BOM => Token::Bom,
            '/' => match self.reader.read()? {
                Some('/') => self.single_line_comment()?,
                Some('*') => self.multi_line_comment()?,
                Some('-') => Token::Slashdash,
                _ => return Err(self.reader.error("'/', '*' or '-' expected after '/'")),
            },
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            ';' => Token::Semicolon,
            '"' => self.quoted_string()?,
            '#' => match self.reader.peek(1)? {
                Some('#') | Some('"') => self.raw_string()?,
                _ => self.keyword()?,
            },
            '\\' => self.escline()?,
            c if is_newline(c) => {
                self.skip_lf_after(c)?;
                Token::Newline
            }
            c if is_whitespace(c) => Token::Whitespace,
            c if is_equals_sign(c) => Token::Equals(c),
            c if is_digit(c) || (is_sign(c) && self.reader.peek(1)?.is_some_and(is_digit)) => {
                self.number(c)?
            }
            c if self.starts_identifier(c)? => self.identifier(c)?,
            c => return Err(self.reader.error(&format!("invalid character '{}'", c))),
        };

        trace!(
            "token {:?} ending at {}:{}",
            token,
            self.reader.line(),
            self.reader.column()
        );
        Ok(Some(token))
    }

    // Completes a CR LF pair after a CR has been read.
    fn skip_lf_after(&mut self, c: char) -> Result<()> {
        if c == CR && self.reader.peek(1)? == Some(LF) {
            self.reader.read()?;
        }
        Ok(())
    }

    fn single_line_comment(&mut self) -> Result<Token> {
        loop {
            match self.reader.read()? {
                None => break,
                Some(c) if is_newline(c) => {
                    self.skip_lf_after(c)?;
                    break;
                }
                Some(_) => {}
            }
        }
        Ok(Token::SingleLineComment)
    }

    fn multi_line_comment(&mut self) -> Result<Token> {
        let mut depth = 1usize;
        loop {
            match self.reader.read()? {
                None => {
                    return Err(self
                        .reader
                        .error("unexpected end of file inside multi-line comment"))
                }
                Some('/') if self.reader.peek(1)? == Some('*') => {
                    self.reader.read()?;
                    depth += 1;
                }
                Some('*') if self.reader.peek(1)? == Some('/') => {
                    self.reader.read()?;
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Token::MultiLineComment);
                    }
                }
                Some(_) => {}
            }
        }
    }

    // `\`, whitespace and block comments, then a line comment, a newline or EOF.
    fn escline(&mut self) -> Result<Token> {
        loop {
            match self.reader.peek(1)? {
                None => break,
                Some(c) if is_whitespace(c) => {
                    self.reader.read()?;
                }
                Some(c) if is_newline(c) => {
                    self.reader.read()?;
                    self.skip_lf_after(c)?;
                    break;
                }
                Some('/') => match self.reader.peek(2)? {
                    Some('/') => {
                        self.reader.read()?;
                        self.reader.read()?;
                        self.single_line_comment()?;
                        break;
                    }
                    Some('*') => {
                        self.reader.read()?;
                        self.reader.read()?;
                        self.multi_line_comment()?;
                    }
                    _ => return Err(self.error_ahead("invalid character in escaped line")),
                },
                Some(_) => return Err(self.error_ahead("invalid character in escaped line")),
            }
        }
        Ok(Token::Escline)
    }

    // Points at the codepoint after the last one read.
    fn error_ahead(&mut self, message: &str) -> Error {
        let (line, column) = (self.reader.line(), self.reader.column() + 1);
        self.reader.error_at(message, line, column)
    }

    fn starts_identifier(&mut self, c: char) -> Result<bool> {
        if is_sign(c) {
            return Ok(match self.reader.peek(1)? {
                Some('.') => !self.reader.peek(2)?.is_some_and(is_digit),
                next => !next.is_some_and(is_digit),
            });
        }
        if c == '.' {
            return Ok(!self.reader.peek(1)?.is_some_and(is_digit));
        }
        Ok(is_unambiguous_identifier_char(c))
    }

    fn identifier(&mut self, first: char) -> Result<Token> {
        // legacy `r#"..."#` spelling of a raw string
        if first == 'r' && self.reader.peek(1)? == Some('#') {
            if let Some('#') | Some('"') = self.reader.peek(2)? {
                self.reader.read()?;
                return self.raw_string();
            }
        }

        let mut value = String::new();
        value.push(first);
        while let Some(c) = self.reader.peek(1)? {
            if !is_identifier_char(c) {
                break;
            }
            value.push(c);
            self.reader.read()?;
        }

        if is_disallowed_identifier(&value) {
            let length = value.chars().count();
            let (line, column) = (self.reader.line(), self.reader.column() + 1 - length);
            return Err(self.reader.error_at(
                "keyword used as identifier, use a quoted string instead",
                line,
                column,
            ));
        }

        Ok(Token::String(value))
    }

    fn keyword(&mut self) -> Result<Token> {
        let mut word = String::new();
        while let Some(c) = self.reader.peek(1)? {
            if !is_identifier_char(c) {
                break;
            }
            word.push(c);
            self.reader.read()?;
        }

        Ok(match word.as_str() {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            "null" => Token::Null,
            "inf" => Token::Number(Number::PositiveInfinity),
            "-inf" => Token::Number(Number::NegativeInfinity),
            "nan" => Token::Number(Number::NaN),
            _ => {
                let length = word.chars().count();
                let (line, column) = (self.reader.line(), self.reader.column() - length);
                return Err(self
                    .reader
                    .error_at(&format!("invalid value #{}", word), line, column));
            }
        })
    }

    fn quoted_string(&mut self) -> Result<Token> {
        if let Some(c) = self.reader.peek(1)? {
            if is_newline(c) {
                self.reader.read()?;
                self.skip_lf_after(c)?;
                return self.multi_line_quoted_string();
            }
        }

        let mut value = String::new();
        loop {
            match self.reader.peek(1)? {
                Some(c) if is_newline(c) => {
                    return Err(self.error_ahead(
                        "unexpected newline inside quoted string, escape it or use a multi-line quoted string",
                    ))
                }
                _ => {}
            }
            match self.reader.read()? {
                Some('"') => return Ok(Token::String(value)),
                c => self.string_character(&mut value, c)?,
            }
        }
    }

    fn multi_line_quoted_string(&mut self) -> Result<Token> {
        let mut lines = Vec::new();
        let mut current = String::new();
        loop {
            match self.reader.read()? {
                Some('"') => break,
                Some(c) if is_newline(c) => {
                    self.skip_lf_after(c)?;
                    lines.push(std::mem::take(&mut current));
                }
                c => self.string_character(&mut current, c)?,
            }
        }
        self.dedent(lines, &current).map(Token::String)
    }

    fn string_character(&mut self, out: &mut String, c: Option<char>) -> Result<()> {
        match c {
            None => Err(self.reader.error("unexpected end of file inside quoted string")),
            Some('\\') => self.escape(out),
            Some(c) => {
                out.push(c);
                Ok(())
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<()> {
        let escaped = match self.reader.read()? {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('b') => '\u{08}',
            Some('f') => '\u{0C}',
            Some('r') => '\r',
            Some('n') => '\n',
            Some('t') => '\t',
            Some('s') => ' ',
            Some('u') => self.unicode_escape()?,
            Some(c) if is_whitespace(c) || is_newline(c) => {
                while let Some(c) = self.reader.peek(1)? {
                    if !is_whitespace(c) && !is_newline(c) {
                        break;
                    }
                    self.reader.read()?;
                }
                return Ok(());
            }
            Some(c) => {
                return Err(self
                    .reader
                    .error(&format!("invalid escape sequence '\\{}'", c)))
            }
            None => return Err(self.reader.error("unexpected end of file inside quoted string")),
        };
        out.push(escaped);
        Ok(())
    }

    fn unicode_escape(&mut self) -> Result<char> {
        if self.reader.read()? != Some('{') {
            return Err(self.reader.error("'{' expected at start of unicode escape"));
        }

        let mut hex = String::new();
        loop {
            match self.reader.read()? {
                Some('}') => break,
                Some(c) if is_hex_digit(c) && hex.len() < 6 => hex.push(c),
                Some(_) if hex.len() == 6 => {
                    return Err(self.reader.error("'}' expected at end of unicode escape"))
                }
                _ => return Err(self.reader.error("unexpected character in unicode escape")),
            }
        }

        if hex.is_empty() {
            return Err(self
                .reader
                .error("at least one digit is required for a unicode escape"));
        }

        let codepoint = u32::from_str_radix(&hex, 16)
            .map_err(|_| Error::internal(&format!("unparsable unicode escape '{}'", hex)))?;
        match char::from_u32(codepoint) {
            Some(c) => Ok(c),
            None => {
                let (line, column) = (self.reader.line(), self.reader.column() - hex.len());
                Err(self.reader.error_at(
                    &format!("invalid unicode value U+{:X}", codepoint),
                    line,
                    column,
                ))
            }
        }
    }

    // Called with the first `#` already consumed.
    fn raw_string(&mut self) -> Result<Token> {
        let mut hashes = 1;
        while self.reader.peek(1)? == Some('#') {
            self.reader.read()?;
            hashes += 1;
        }

        if self.reader.read()? != Some('"') {
            return Err(self.reader.error("a quote is required to start a raw string"));
        }

        let multi_line = match self.reader.peek(1)? {
            Some(c) if is_newline(c) => {
                self.reader.read()?;
                self.skip_lf_after(c)?;
                true
            }
            _ => false,
        };

        let mut lines = Vec::new();
        let mut current = String::new();
        loop {
            let c = match self.reader.peek(1)? {
                None => return Err(self.error_ahead("unexpected end of file inside raw string")),
                Some(c) if is_newline(c) && !multi_line => {
                    return Err(self.error_ahead(
                        "unexpected newline inside raw string, use a multi-line raw string",
                    ))
                }
                Some(c) => c,
            };
            self.reader.read()?;

            if c == '"' {
                let mut closing = 0;
                while closing < hashes && self.reader.peek(1)? == Some('#') {
                    self.reader.read()?;
                    closing += 1;
                }
                if closing == hashes {
                    if self.reader.peek(1)? == Some('#') {
                        return Err(self.error_ahead("raw string closed with too many '#'"));
                    }
                    break;
                }
                // fewer hashes than opened are content
                current.push('"');
                current.extend(std::iter::repeat('#').take(closing));
            } else if is_newline(c) {
                self.skip_lf_after(c)?;
                lines.push(std::mem::take(&mut current));
            } else {
                current.push(c);
            }
        }

        if multi_line {
            self.dedent(lines, &current).map(Token::String)
        } else {
            Ok(Token::String(current))
        }
    }

    // The whitespace-only last line is the indentation every other line must
    // start with. Lines made only of whitespace become empty.
    fn dedent(&mut self, lines: Vec<String>, last_line: &str) -> Result<String> {
        if let Some(column) = last_line.chars().position(|c| !is_whitespace(c)) {
            let line = self.reader.line();
            return Err(self.reader.error_at(
                "last line of a multi-line string must only contain whitespaces",
                line,
                column + 1,
            ));
        }

        let first_line = self.reader.line() - lines.len();
        let mut dedented = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            if line.chars().all(is_whitespace) {
                dedented.push("");
            } else if let Some(rest) = line.strip_prefix(last_line) {
                dedented.push(rest);
            } else {
                return Err(self.reader.error_in_line(
                    "multi-line string indentation must match last line",
                    first_line + i,
                    1,
                    line,
                ));
            }
        }
        Ok(dedented.join("\n"))
    }

    fn number(&mut self, first: char) -> Result<Token> {
        let negative = first == '-';
        let first_digit = if is_digit(first) {
            first
        } else {
            self.reader
                .read()?
                .ok_or_else(|| Error::internal("digit expected after sign"))?
        };

        if first_digit == '0' {
            let radix = match self.reader.peek(1)? {
                Some('x') => Some((Radix::Hexadecimal, is_hex_digit as fn(char) -> bool)),
                Some('o') => Some((Radix::Octal, is_octal_digit as fn(char) -> bool)),
                Some('b') => Some((Radix::Binary, is_binary_digit as fn(char) -> bool)),
                _ => None,
            };
            if let Some((radix, is_radix_digit)) = radix {
                self.reader.read()?;
                return self.radix_integer(negative, radix, is_radix_digit);
            }
        }

        let mut text = String::new();
        if negative {
            text.push('-');
        }
        text.push(first_digit);
        self.digits(&mut text, is_digit)?;

        let mut decimal = false;
        if self.reader.peek(1)? == Some('.') {
            self.reader.read()?;
            decimal = true;
            text.push('.');
            if !self.reader.peek(1)?.is_some_and(is_digit) {
                return Err(self.error_ahead("digit expected immediately after '.'"));
            }
            self.digits(&mut text, is_digit)?;
        }

        let mut exponent_at = None;
        if let Some(e @ ('e' | 'E')) = self.reader.peek(1)? {
            self.reader.read()?;
            decimal = true;
            exponent_at = Some((self.reader.line(), self.reader.column() + 1));
            text.push(e);
            if let Some(sign) = self.reader.peek(1)?.filter(|&c| is_sign(c)) {
                self.reader.read()?;
                text.push(sign);
            }
            if !self.reader.peek(1)?.is_some_and(is_digit) {
                return Err(self.error_ahead("digit expected at start of exponent"));
            }
            self.digits(&mut text, is_digit)?;
        }

        self.check_number_end()?;

        if decimal {
            match text.parse::<Decimal>() {
                Ok(d) => Ok(Token::Number(Number::Decimal(d))),
                Err(e) => Err(match exponent_at {
                    Some((line, column)) => self.reader.error_at(e.message(), line, column),
                    None => self.error(e.message()),
                }),
            }
        } else {
            let value = BigInt::parse_bytes(text.as_bytes(), 10)
                .ok_or_else(|| Error::internal(&format!("unparsable integer '{}'", text)))?;
            Ok(Token::Number(Number::integer(value)))
        }
    }

    fn radix_integer(
        &mut self,
        negative: bool,
        radix: Radix,
        is_radix_digit: fn(char) -> bool,
    ) -> Result<Token> {
        if !self.reader.peek(1)?.is_some_and(is_radix_digit) {
            return Err(self.error_ahead("digit expected at start of number"));
        }
        let mut digits = String::new();
        self.digits(&mut digits, is_radix_digit)?;
        self.check_number_end()?;

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix.value())
            .ok_or_else(|| Error::internal(&format!("unparsable integer '{}'", digits)))?;
        let value = if negative { -magnitude } else { magnitude };
        Ok(Token::Number(Number::integer_with_radix(value, radix)))
    }

    // Digits matching the predicate, with underscores dropped.
    fn digits(&mut self, out: &mut String, is_valid_digit: fn(char) -> bool) -> Result<()> {
        while let Some(c) = self.reader.peek(1)? {
            if is_valid_digit(c) {
                out.push(c);
            } else if c != '_' {
                break;
            }
            self.reader.read()?;
        }
        Ok(())
    }

    fn check_number_end(&mut self) -> Result<()> {
        match self.reader.peek(1)? {
            Some(c) if is_identifier_char(c) => {
                Err(self.error_ahead(&format!("unexpected character '{}' after number", c)))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(input.as_bytes());
        let mut out = Vec::new();
        while let Some(token) = lexer.next()? {
            out.push(token);
        }
        Ok(out)
    }

    fn single(input: &str) -> Token {
        let mut all = tokens(input).unwrap();
        assert_eq!(all.len(), 1, "expected one token for {:?}, got {:?}", input, all);
        all.remove(0)
    }

    fn string(input: &str) -> String {
        match single(input) {
            Token::String(s) => s,
            other => panic!("expected a string, got {:?}", other),
        }
    }

    fn error(input: &str) -> Error {
        tokens(input).unwrap_err()
    }

    #[test]
    fn test_punctuation_and_space() {
        assert_eq!(
            tokens("(){};= \t\r\n\n").unwrap(),
            vec![
                Token::OpenParen,
                Token::CloseParen,
                Token::OpenBrace,
                Token::CloseBrace,
                Token::Semicolon,
                Token::Equals('='),
                Token::Whitespace,
                Token::Whitespace,
                Token::Newline,
                Token::Newline,
            ]
        );
        assert_eq!(single("\u{FF1D}"), Token::Equals('\u{FF1D}'));
        assert_eq!(single("\u{FEFF}"), Token::Bom);
    }

    #[test]
    fn test_peek_caches_one_token() {
        let mut lexer = Lexer::new(b"a b");
        assert_eq!(lexer.peek().unwrap(), Some(&Token::String("a".into())));
        assert_eq!(lexer.peek().unwrap(), Some(&Token::String("a".into())));
        assert_eq!(lexer.next().unwrap(), Some(Token::String("a".into())));
        assert_eq!(lexer.next().unwrap(), Some(Token::Whitespace));
        assert_eq!(lexer.next().unwrap(), Some(Token::String("b".into())));
        assert_eq!(lexer.peek().unwrap(), None);
        assert_eq!(lexer.next().unwrap(), None);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            tokens("// hi\r\nx").unwrap(),
            vec![Token::SingleLineComment, Token::String("x".into())]
        );
        assert_eq!(single("/* a /* nested */ b */"), Token::MultiLineComment);
        assert_eq!(single("/-"), Token::Slashdash);
        assert_eq!(
            error("/* open /* */").message(),
            "unexpected end of file inside multi-line comment"
        );
        assert_eq!(error("/x").message(), "'/', '*' or '-' expected after '/'");
    }

    #[test]
    fn test_escline() {
        assert_eq!(single("\\   // trailing\n"), Token::Escline);
        assert_eq!(single("\\ /* c */ \n"), Token::Escline);
        assert_eq!(single("\\"), Token::Escline);
        assert_eq!(error("\\ x").message(), "invalid character in escaped line");
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(string("foo-bar"), "foo-bar");
        assert_eq!(string("-foo"), "-foo");
        assert_eq!(string(".bar"), ".bar");
        assert_eq!(string("+.baz"), "+.baz");
        assert_eq!(string("ノード"), "ノード");

        let err = error("node true");
        assert_eq!(
            err.message(),
            "keyword used as identifier, use a quoted string instead"
        );
        assert_eq!(err.column(), Some(6));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(single("#true"), Token::Bool(true));
        assert_eq!(single("#false"), Token::Bool(false));
        assert_eq!(single("#null"), Token::Null);
        assert_eq!(single("#inf"), Token::Number(Number::PositiveInfinity));
        assert_eq!(single("#-inf"), Token::Number(Number::NegativeInfinity));
        assert_eq!(single("#nan"), Token::Number(Number::NaN));

        let err = error("#maybe");
        assert_eq!(err.message(), "invalid value #maybe");
        assert_eq!(err.column(), Some(1));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(string(r#""hello world""#), "hello world");
        assert_eq!(string(r#""\"\\\b\f\r\n\t\s""#), "\"\\\u{08}\u{0C}\r\n\t ");
        assert_eq!(string(r#""\u{1F408}\u{e9}""#), "🐈é");
        assert_eq!(string("\"a\\   \n   b\""), "ab");
        assert_eq!(string("\"\""), "");

        assert_eq!(error(r#""\q""#).message(), "invalid escape sequence '\\q'");
        assert_eq!(error(r#""\u{D800}""#).message(), "invalid unicode value U+D800");
        assert_eq!(
            error(r#""\u{}""#).message(),
            "at least one digit is required for a unicode escape"
        );
        assert_eq!(
            error(r#""\u{1234567}""#).message(),
            "'}' expected at end of unicode escape"
        );
        assert_eq!(
            error("\"abc").message(),
            "unexpected end of file inside quoted string"
        );

        let err = error("\"ab\ncd\"");
        assert_eq!(
            err.message(),
            "unexpected newline inside quoted string, escape it or use a multi-line quoted string"
        );
        assert_eq!((err.line(), err.column()), (Some(1), Some(4)));
    }

    #[test]
    fn test_multi_line_strings() {
        assert_eq!(string("\"\n    Hello,\n    World!\n    \""), "Hello,\nWorld!");
        assert_eq!(string("\"\r\n  a\r\n\r\n    b\r\n  \""), "a\n\n  b");
        assert_eq!(string("\"\n  a\n   \n  b\n  \""), "a\n\nb");
        assert_eq!(string("\"\n\""), "");

        let err = error("\"\n  a\n  b\"");
        assert_eq!(
            err.message(),
            "last line of a multi-line string must only contain whitespaces"
        );
        assert_eq!((err.line(), err.column()), (Some(3), Some(3)));

        let err = error("\"\n    a\n  b\n    \"");
        assert_eq!(
            err.message(),
            "multi-line string indentation must match last line"
        );
        assert_eq!((err.line(), err.column()), (Some(3), Some(1)));
        assert!(err.to_string().contains("\n  b\n▲\n╯"));
    }

    #[test]
    fn test_raw_strings() {
        assert_eq!(string(r##"#"a\nb"#"##), "a\\nb");
        assert_eq!(string(r###"##"a"#b"##"###), "a\"#b");
        assert_eq!(string(r##"#"""#"##), "\"");
        assert_eq!(string(r##"r#"a"b"#"##), "a\"b");
        assert_eq!(string("#\"\n  raw\\n\n  \"#"), "raw\\n");

        assert_eq!(
            error(r###"#"abc"##"###).message(),
            "raw string closed with too many '#'"
        );
        assert_eq!(
            error("#\"abc").message(),
            "unexpected end of file inside raw string"
        );
        assert_eq!(
            error("#\"a\nb\"#").message(),
            "unexpected newline inside raw string, use a multi-line raw string"
        );
        assert_eq!(
            error("##x").message(),
            "a quote is required to start a raw string"
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(single("42"), Token::Number(Number::from(42)));
        assert_eq!(single("-1_000"), Token::Number(Number::from(-1000)));
        assert_eq!(single("+7"), Token::Number(Number::from(7)));
        assert_eq!(
            single("0xFF"),
            Token::Number(Number::integer_with_radix(255, Radix::Hexadecimal))
        );
        assert_eq!(
            single("-0o17"),
            Token::Number(Number::integer_with_radix(-15, Radix::Octal))
        );
        assert_eq!(
            single("0b1_0"),
            Token::Number(Number::integer_with_radix(2, Radix::Binary))
        );
        assert_eq!(
            single("0b1_"),
            Token::Number(Number::integer_with_radix(1, Radix::Binary))
        );
    }

    #[test]
    fn test_decimals() {
        let decimal = |s: &str| Token::Number(Number::Decimal(s.parse().unwrap()));
        assert_eq!(single("1.5"), decimal("1.5"));
        assert_eq!(single("-0.25e-3"), decimal("-0.25e-3"));
        assert_eq!(single("1_0.0_1E+2"), decimal("10.01e2"));
    }

    #[test]
    fn test_number_errors() {
        let err = error("0x_1");
        assert_eq!(err.message(), "digit expected at start of number");
        assert_eq!(err.column(), Some(3));

        assert_eq!(error("1.").message(), "digit expected immediately after '.'");
        assert_eq!(error("1.e5").message(), "digit expected immediately after '.'");
        assert_eq!(error("1e").message(), "digit expected at start of exponent");
        assert_eq!(error("1e+").message(), "digit expected at start of exponent");
        assert_eq!(error("12abc").message(), "unexpected character 'a' after number");
        assert_eq!(error("0x1g").message(), "unexpected character 'g' after number");
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(error("[").message(), "invalid character '['");
    }
}
