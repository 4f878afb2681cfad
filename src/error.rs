//! Error types for KDL parsing and printing.
//!
//! Parsing is all-or-nothing: the first fatal condition aborts the parse and is
//! reported through a single [`Error`] value. There is no recovery mode.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: the input violates a lexical or grammatical rule (bad
//!   escape, unterminated string or comment, unexpected token, disallowed
//!   codepoint, malformed number)
//! - **Internal Errors**: the implementation reached a state the grammar should
//!   have made unreachable; these indicate a bug, not bad input
//! - **I/O Errors**: reading from or writing to a stream failed
//!
//! ## Error Context
//!
//! Parse errors carry the line and column of the offending codepoint and a
//! snippet of the source line with a caret under that column:
//!
//! ```text
//! Error line 1 - digit expected at start of number:
//! node 0x_1
//!        ▲
//! ───────╯
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use kdl_doc::parse;
//!
//! let err = parse("node 0x_1").unwrap_err();
//! assert!(err.is_parse());
//! assert_eq!(err.line(), Some(1));
//! assert_eq!(err.column(), Some(8));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing KDL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not valid KDL.
    ///
    /// `snippet` holds the offending source line followed by the caret marker.
    #[error("Error line {line} - {message}:\n{snippet}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
        snippet: String,
    },

    /// The parser reached a state that valid grammar handling makes unreachable.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Reading the input or writing the printed document failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a parse error, rendering the caret snippet under `column`.
    ///
    /// Columns are 1-based; a column of 0 puts the caret at the start of the line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_doc::Error;
    ///
    /// let err = Error::parse(3, 5, "unexpected token", "node }");
    /// let text = err.to_string();
    /// assert!(text.starts_with("Error line 3 - unexpected token:"));
    /// assert!(text.contains("node }\n    ▲\n────╯"));
    /// ```
    pub fn parse(line: usize, column: usize, message: &str, source_line: &str) -> Self {
        let offset = column.saturating_sub(1);
        let snippet = format!(
            "{}\n{}▲\n{}╯",
            source_line,
            " ".repeat(offset),
            "─".repeat(offset)
        );
        Error::Parse {
            line,
            column,
            message: message.to_string(),
            snippet,
        }
    }

    /// Creates an internal error.
    pub fn internal(msg: &str) -> Self {
        Error::Internal(msg.to_string())
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors caused by invalid input.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns `true` for errors that indicate a bug in the parser.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    /// The 1-based line of a parse error.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The 1-based column of a parse error.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Error::Parse { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// The bare message, without position or snippet.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::Parse { message, .. } => message,
            Error::Internal(msg) | Error::Io(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_points_at_column() {
        let err = Error::parse(1, 1, "oops", "abc");
        assert_eq!(err.to_string(), "Error line 1 - oops:\nabc\n▲\n╯");
    }

    #[test]
    fn test_accessors() {
        let err = Error::parse(2, 7, "bad", "line");
        assert!(err.is_parse());
        assert!(!err.is_internal());
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.column(), Some(7));
        assert_eq!(err.message(), "bad");

        let internal = Error::internal("unreachable");
        assert!(internal.is_internal());
        assert_eq!(internal.line(), None);
        assert_eq!(internal.to_string(), "Internal error: unreachable");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: Error = io.into();
        assert_eq!(err, Error::io("stream closed"));
        assert_eq!(err.to_string(), "IO error: stream closed");
    }
}
