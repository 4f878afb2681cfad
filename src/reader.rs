//! Codepoint-level input for the lexer.
//!
//! [`CodepointReader`] reassembles UTF-8 sequences from raw bytes, rejects
//! codepoints that may never appear in a document and keeps track of the
//! current line and column. It offers exactly two codepoints of lookahead.
//!
//! Producing a diagnostic consumes the rest of the current source line so the
//! snippet can show it in full. After that the reader is invalidated and any
//! further `read`/`peek` is an internal error.

use std::collections::VecDeque;

use crate::chars::{is_disallowed, is_newline, CR, LF};
use crate::{Error, Result};

const MAX_PEEKS: usize = 2;
const REPLACEMENT: char = '\u{FFFD}';

enum RawDecode {
    Eof,
    Codepoint(u32),
    Malformed(usize),
}

pub(crate) struct CodepointReader<'a> {
    input: &'a [u8],
    offset: usize,
    peeked: VecDeque<Option<char>>,
    current_line: String,
    line: usize,
    column: usize,
    invalidated: bool,
}

impl<'a> CodepointReader<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        CodepointReader {
            input,
            offset: 0,
            peeked: VecDeque::with_capacity(MAX_PEEKS),
            current_line: String::new(),
            line: 1,
            column: 0,
            invalidated: false,
        }
    }

    /// The line of the last codepoint read, starting at 1.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// The column of the last codepoint read; 0 before the first one on a line.
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Looks `n` codepoints ahead without consuming anything. `None` is EOF.
    pub(crate) fn peek(&mut self, n: usize) -> Result<Option<char>> {
        self.ensure_valid("peek")?;

        if n == 0 || n > MAX_PEEKS {
            return Err(Error::internal(&format!(
                "Error while peeking: n should be between 1 and {} included, got {}",
                MAX_PEEKS, n
            )));
        }

        while self.peeked.len() < n {
            let c = self.decode_next()?;
            self.peeked.push_back(c);
        }

        Ok(self.peeked[n - 1])
    }

    pub(crate) fn read(&mut self) -> Result<Option<char>> {
        self.ensure_valid("read")?;

        let c = match self.peeked.pop_front() {
            Some(c) => c,
            None => self.decode_next()?,
        };
        if let Some(c) = c {
            self.update_position(c)?;
        }

        Ok(c)
    }

    /// Builds a diagnostic at the current position and invalidates the reader.
    pub(crate) fn error(&mut self, message: &str) -> Error {
        self.error_at(message, self.line, self.column)
    }

    pub(crate) fn error_at(&mut self, message: &str, line: usize, column: usize) -> Error {
        self.invalidate();
        Error::parse(line, column, message, &self.current_line)
    }

    /// Builds a diagnostic for a line other than the current one.
    pub(crate) fn error_in_line(
        &mut self,
        message: &str,
        line: usize,
        column: usize,
        source_line: &str,
    ) -> Error {
        self.invalidate();
        Error::parse(line, column, message, source_line)
    }

    fn update_position(&mut self, c: char) -> Result<()> {
        if is_newline(c) {
            // CR LF is a single line break, counted on the LF
            if c != CR || self.peek(1)? != Some(LF) {
                self.current_line.clear();
                self.line += 1;
                self.column = 0;
            }
        } else {
            self.current_line.push(c);
            self.column += 1;
        }
        Ok(())
    }

    fn decode_next(&mut self) -> Result<Option<char>> {
        let start = self.offset;
        match self.decode_raw() {
            RawDecode::Eof => Ok(None),
            RawDecode::Malformed(offset) => {
                let column = self.pending_column();
                Err(self.error_at(
                    &format!("invalid UTF-8 sequence at byte offset {}", offset),
                    self.line,
                    column,
                ))
            }
            RawDecode::Codepoint(cp) => match char::from_u32(cp) {
                Some(c) if !is_disallowed(cp) => Ok(Some(c)),
                _ => {
                    // rewind so the snippet shows the codepoint in place
                    self.offset = start;
                    let column = self.pending_column();
                    Err(self.error_at(
                        &format!("invalid codepoint U+{:04X}", cp),
                        self.line,
                        column,
                    ))
                }
            },
        }
    }

    // Column of the codepoint being decoded, past anything already peeked.
    fn pending_column(&self) -> usize {
        self.column + self.peeked.len() + 1
    }

    fn decode_raw(&mut self) -> RawDecode {
        let start = self.offset;
        let first = match self.input.get(start) {
            Some(&b) => b,
            None => return RawDecode::Eof,
        };

        let (len, init) = match first {
            0x00..=0x7F => (1, u32::from(first)),
            b if b & 0xE0 == 0xC0 => (2, u32::from(b & 0x1F)),
            b if b & 0xF0 == 0xE0 => (3, u32::from(b & 0x0F)),
            b if b & 0xF8 == 0xF0 => (4, u32::from(b & 0x07)),
            _ => return RawDecode::Malformed(start),
        };

        let mut codepoint = init;
        for i in 1..len {
            match self.input.get(start + i) {
                Some(&b) if b & 0xC0 == 0x80 => codepoint = (codepoint << 6) | u32::from(b & 0x3F),
                _ => return RawDecode::Malformed(start),
            }
        }

        self.offset += len;
        RawDecode::Codepoint(codepoint)
    }

    // Finishes the current line for display; never fails.
    fn invalidate(&mut self) {
        if self.invalidated {
            return;
        }
        self.invalidated = true;

        while let Some(c) = self.peeked.pop_front() {
            match c {
                Some(c) if !is_newline(c) => self.current_line.push(c),
                _ => return,
            }
        }

        loop {
            match self.decode_raw() {
                RawDecode::Codepoint(cp) => match char::from_u32(cp) {
                    Some(c) if is_newline(c) => return,
                    Some(c) if !is_disallowed(cp) => self.current_line.push(c),
                    _ => self.current_line.push(REPLACEMENT),
                },
                RawDecode::Eof | RawDecode::Malformed(_) => return,
            }
        }
    }

    fn ensure_valid(&self, action: &str) -> Result<()> {
        if self.invalidated {
            Err(Error::internal(&format!(
                "Trying to {} from an invalidated reader",
                action
            )))
        } else {
            Ok(())
        }
    }
}
