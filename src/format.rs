//! KDL Syntax Reference
//!
//! This module documents the KDL syntax accepted by [`parse`](crate::parse) and
//! produced by [`Printer`](crate::Printer).
//!
//! # Overview
//!
//! A KDL document is a sequence of nodes. Each node has a name, any number of
//! positional arguments, any number of named properties and an optional block
//! of child nodes:
//!
//! ```text
//! package (semver)"1.0.0" license=MIT {
//!     dependency serde features=derive
//!     dependency "num-bigint"
//! }
//! ```
//!
//! # Nodes
//!
//! ```text
//! node := slashdash? type? name (node-space (prop | arg))* node-space? children? terminator
//! ```
//!
//! **Rules**:
//! - A node ends with a newline, `;`, a `//` comment or the end of input
//! - The last node inside `{ }` may leave out its terminator: `parent { child }`
//! - `{` may follow the name or the last entry with or without a space
//! - `node {}` has an empty child block; `node` has none. The two are different
//!   documents and print differently when empty blocks are printed
//! - Node space between entries is whitespace, block comments and escaped line
//!   breaks (`\` at the end of a line), so a node may span several lines:
//!
//! ```text
//! command "cargo" \
//!     "test" \  // the rest of this line is a comment
//!     release=#true
//! ```
//!
//! # Properties
//!
//! Properties are written `key=value`. Whitespace around `=` is allowed. When
//! a key appears more than once on a node the last value wins:
//!
//! ```text
//! node key=1 key=2    // one property, key=2
//! ```
//!
//! Besides `=` the look-alikes `﹦` (U+FE66), `＝` (U+FF1D) and `🟰` (U+1F7F0)
//! are accepted.
//!
//! # Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Null | `#null` | `value #null` |
//! | Boolean | `#true`, `#false` | `enabled #true` |
//! | Integer | digits, optional sign, `0x`/`0o`/`0b` prefix | `0xFF`, `-1_000` |
//! | Decimal | fraction and/or exponent | `1.5`, `6.02e23` |
//! | Special numbers | `#inf`, `#-inf`, `#nan` | `limit #inf` |
//! | String | bare identifier, `"quoted"` or `#"raw"#` | `name`, `"a b"` |
//!
//! The bare words `true`, `false`, `null`, `inf`, `-inf` and `nan` are
//! rejected; write the `#` keyword or quote them.
//!
//! ## Numbers
//!
//! - Underscores may appear anywhere after the first digit and are ignored
//! - A radix prefix must be followed by a digit: `0x_1` is an error
//! - `.` must be followed by a digit, and so must `e`/`E` after its optional sign
//! - A number may not run straight into identifier characters: `12px` is an error
//! - Values are arbitrary precision; integers remember their radix
//! - A decimal's scale (fraction digits minus exponent) must fit in an `i64`;
//!   `1e99999999999999999999` is an "exponent out of range" error
//!
//! ## Bare Identifiers
//!
//! Any run of codepoints except whitespace, newlines, `\ / ( ) { } ; [ ] " #`
//! and the equals signs. An identifier may not look like the start of a number:
//! `-foo`, `.bar` and `+.baz` are identifiers, `-1` and `.5` are not.
//!
//! ## Quoted Strings
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\"` `\\` | quote, backslash |
//! | `\n` `\r` `\t` | newline, carriage return, tab |
//! | `\b` `\f` `\s` | backspace, form feed, space |
//! | `\u{1F408}` | Unicode scalar value, 1 to 6 hex digits |
//! | `\` + whitespace | skips all following whitespace and newlines |
//!
//! A quoted string may not contain a literal newline unless it is multi-line.
//!
//! ## Raw Strings
//!
//! `#"..."#` takes its content literally. Use more `#` when the content holds
//! `"#`: `##"say "#hi""##`. Closing with more `#` than the opening is an error.
//! The older `r#"..."#` spelling is also accepted.
//!
//! ## Multi-line Strings
//!
//! A string whose opening quote is directly followed by a newline is
//! multi-line. Its last line must hold only whitespace; that whitespace is the
//! indentation removed from every other line. Lines consisting only of
//! whitespace become empty lines. The first and last line breaks are not part
//! of the value:
//!
//! ```text
//! text "
//!     Hello,
//!       World!
//!     "
//! ```
//!
//! holds `"Hello,\n  World!"`. Raw strings follow the same rule without
//! escape processing.
//!
//! # Type Annotations
//!
//! `(type)` before a node name or a value annotates it. The annotation is kept
//! verbatim and has no meaning to the parser:
//!
//! ```text
//! (author)person birthday=(date)"1990-01-01" age=(u8)34
//! ```
//!
//! An annotation in front of a property key is an error: write
//! `key=(type)value`, not `(type)key=value`.
//!
//! # Comments
//!
//! - `//` runs to the end of the line
//! - `/* */` block comments nest
//! - `/-` (slashdash) comments out the next node, argument, property or child
//!   block. The commented element must still be valid KDL
//!
//! ```text
//! /-disabled-node 1 2
//! node 1 /-2 3 /-key=4 /-{ child }
//! ```
//!
//! # Canonical Output
//!
//! | Aspect | Default | Option |
//! |--------|---------|--------|
//! | Indentation | one tab per level | [`indent`](crate::PrinterOptions::indent) |
//! | Line break | `\n` | [`newline`](crate::PrinterOptions::newline) |
//! | Null arguments | printed | [`print_null_arguments`](crate::PrinterOptions::print_null_arguments) |
//! | Null properties | printed | [`print_null_properties`](crate::PrinterOptions::print_null_properties) |
//! | Empty child block | dropped | [`print_empty_children`](crate::PrinterOptions::print_empty_children) |
//! | `;` after nodes | no | [`print_semicolons`](crate::PrinterOptions::print_semicolons) |
//! | Exponent marker | `E` | [`exponent_char`](crate::PrinterOptions::exponent_char) |
//! | Integer radix | as written | [`respect_radix`](crate::PrinterOptions::respect_radix) |
//!
//! Properties print sorted by name. Strings print bare when they read back as
//! the same bare identifier and quoted otherwise. Decimals print in plain
//! notation unless the exponent is positive or the value is below `1E-6`.
//! An empty document prints as a single line break.
//!
//! # Errors
//!
//! The first error stops the parse. The message names the line and carries a
//! snippet pointing at the column:
//!
//! ```text
//! Error line 2 - closing brace expected:
//! node {
//!       ▲
//! ──────╯
//! ```
