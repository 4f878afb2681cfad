//! Configuration options for printing KDL.
//!
//! This module provides types to customize the canonical output:
//!
//! - [`PrinterOptions`]: Main configuration struct
//! - [`ExponentChar`]: Case of the exponent marker in decimals
//!
//! Options derive serde traits with `#[serde(default)]`, so a partial
//! configuration can be loaded from any serde format and the rest falls back to
//! the defaults.
//!
//! ## Examples
//!
//! ```rust
//! use kdl_doc::{parse, to_string_with_options, PrinterOptions};
//!
//! let doc = parse("node 1 key=#null { child; }").unwrap();
//!
//! let options = PrinterOptions::new()
//!     .with_indent("  ")
//!     .with_print_null_properties(false)
//!     .with_print_semicolons(true);
//! let text = to_string_with_options(&doc, options);
//! assert_eq!(text, "node 1 {\n  child;\n};\n");
//!
//! let options: PrinterOptions = serde_json::from_str(r#"{"indent": "    "}"#).unwrap();
//! assert_eq!(options.indent, "    ");
//! assert!(options.print_null_arguments);
//! ```

use serde::{Deserialize, Serialize};

/// The exponent marker used when a decimal is printed in scientific notation.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::ExponentChar;
///
/// assert_eq!(ExponentChar::Upper.as_char(), 'E');
/// assert_eq!(ExponentChar::Lower.as_char(), 'e');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExponentChar {
    #[default]
    Upper,
    Lower,
}

impl ExponentChar {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ExponentChar::Upper => 'E',
            ExponentChar::Lower => 'e',
        }
    }
}

/// Configuration options for the canonical printer.
///
/// The defaults print one tab per nesting level, `\n` line breaks, null
/// arguments and properties, no empty child blocks and no semicolons.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::{ExponentChar, PrinterOptions};
///
/// let options = PrinterOptions::new()
///     .with_newline("\r\n")
///     .with_exponent_char(ExponentChar::Lower)
///     .with_print_empty_children(true);
/// assert_eq!(options.indent, "\t");
/// assert_eq!(options.newline, "\r\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterOptions {
    /// Repeated once per nesting level.
    pub indent: String,
    pub newline: String,
    pub print_null_arguments: bool,
    pub print_null_properties: bool,
    /// Print `{}` for a present but empty child block instead of dropping it.
    pub print_empty_children: bool,
    pub print_semicolons: bool,
    pub exponent_char: ExponentChar,
    /// Keep the `0x`/`0o`/`0b` form integers were written in; otherwise print base 10.
    pub respect_radix: bool,
    pub uppercase_hex: bool,
    /// Print strings containing `"` or `\` as raw strings instead of escaping.
    pub raw_strings: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            indent: "\t".to_string(),
            newline: "\n".to_string(),
            print_null_arguments: true,
            print_null_properties: true,
            print_empty_children: false,
            print_semicolons: false,
            exponent_char: ExponentChar::default(),
            respect_radix: true,
            uppercase_hex: false,
            raw_strings: false,
        }
    }
}

impl PrinterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indents with the given number of spaces.
    #[must_use]
    pub fn with_indent_spaces(self, spaces: usize) -> Self {
        self.with_indent(" ".repeat(spaces))
    }

    #[must_use]
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    #[must_use]
    pub fn with_print_null_arguments(mut self, print: bool) -> Self {
        self.print_null_arguments = print;
        self
    }

    #[must_use]
    pub fn with_print_null_properties(mut self, print: bool) -> Self {
        self.print_null_properties = print;
        self
    }

    #[must_use]
    pub fn with_print_empty_children(mut self, print: bool) -> Self {
        self.print_empty_children = print;
        self
    }

    #[must_use]
    pub fn with_print_semicolons(mut self, print: bool) -> Self {
        self.print_semicolons = print;
        self
    }

    #[must_use]
    pub fn with_exponent_char(mut self, exponent_char: ExponentChar) -> Self {
        self.exponent_char = exponent_char;
        self
    }

    #[must_use]
    pub fn with_respect_radix(mut self, respect: bool) -> Self {
        self.respect_radix = respect;
        self
    }

    #[must_use]
    pub fn with_uppercase_hex(mut self, uppercase: bool) -> Self {
        self.uppercase_hex = uppercase;
        self
    }

    #[must_use]
    pub fn with_raw_strings(mut self, raw: bool) -> Self {
        self.raw_strings = raw;
        self
    }
}
