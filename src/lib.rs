//! # kdl_doc
//!
//! A parser, document model and canonical printer for the KDL document language.
//!
//! ## What is KDL?
//!
//! KDL is a node-oriented configuration and data language. A document is a list
//! of nodes; each node has a name, positional arguments, named properties and an
//! optional block of children. Values can carry free-form type annotations.
//!
//! ```text
//! package (semver)"1.0.0" license=MIT {
//!     dependency serde features=derive
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Strict**: rejects disallowed codepoints, bare keywords and misplaced
//!   annotations, with a line/column snippet for every error
//! - **Exact Numbers**: integers and decimals are arbitrary precision; integers
//!   remember whether they were written in hex, octal or binary
//! - **Immutable Model**: [`Document`], [`Node`] and [`Value`] are plain values
//!   built with `with_*` methods or a [`NodeBuilder`]
//! - **Canonical Output**: printing is deterministic and configurable through
//!   [`PrinterOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use kdl_doc::{parse, to_string};
//!
//! let doc = parse("server port=8080 { tls #true }").unwrap();
//!
//! let server = doc.get("server").unwrap();
//! assert_eq!(server.get("port").and_then(|v| v.as_i64()), Some(8080));
//!
//! assert_eq!(to_string(&doc), "server port=8080 {\n\ttls #true\n}\n");
//! ```
//!
//! ### Building Documents
//!
//! ```rust
//! use kdl_doc::{Document, Node, Value};
//!
//! let doc = Document::new().with_node(
//!     Node::builder("user")
//!         .with_argument("alice")
//!         .with_property("age", 30)
//!         .with_property("email", Value::null())
//!         .build(),
//! );
//! assert_eq!(doc.to_string(), "user alice age=30 email=#null\n");
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first error. See [`Error`] for the categories and
//! [`format`] for the accepted syntax.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: document
//! sizes at `debug`, individual tokens at `trace`. Nothing is printed unless the
//! application installs a logger.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`roundtrip.rs`** - Parse a file or stdin and print it canonically
//! - **`custom_options.rs`** - Tweaking the printer output
//!
//! Run any example with: `cargo run --example <name>`

mod chars;
mod lexer;
mod parser;
mod reader;

pub mod error;
pub mod format;
pub mod map;
pub mod node;
pub mod number;
pub mod options;
pub mod printer;
pub mod value;

pub use error::{Error, Result};
pub use map::Properties;
pub use node::{Document, Node, NodeBuilder};
pub use number::{Decimal, Number, Radix};
pub use options::{ExponentChar, PrinterOptions};
pub use printer::Printer;
pub use value::{Value, ValueKind};

use log::debug;
use std::io;

use parser::Parser;

/// Parse a KDL document from a string.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::parse;
///
/// let doc = parse("a 1; b 2").unwrap();
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.nodes()[1].arguments()[0].as_i64(), Some(2));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with the line, column and a source snippet if the
/// input is not valid KDL.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Document> {
    from_slice(s.as_bytes())
}

/// Parse a KDL document from UTF-8 bytes.
///
/// Invalid UTF-8 is reported as a parse error at the offending position.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::from_slice;
///
/// let doc = from_slice(b"node \"value\"").unwrap();
/// assert_eq!(doc.nodes()[0].arguments()[0].as_str(), Some("value"));
///
/// assert!(from_slice(b"node \xff").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid KDL.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    debug!("parsing {} bytes of KDL", v.len());
    Parser::new(v).parse()
}

/// Parse a KDL document from an I/O stream.
///
/// The stream is read to the end before parsing starts.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"a { b; }")).unwrap();
/// assert_eq!(doc.nodes()[0].children().map(|c| c.len()), Some(1));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same errors as
/// [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Print a document in canonical form with the default options.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::{parse, to_string};
///
/// let doc = parse("node   0x1F /* gone */ z=1 a=\"x y\"").unwrap();
/// assert_eq!(to_string(&doc), "node 0x1f a=\"x y\" z=1\n");
/// ```
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, PrinterOptions::default())
}

/// Print a document in canonical form with custom options.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::{parse, to_string_with_options, PrinterOptions};
///
/// let doc = parse("a { b }").unwrap();
/// let options = PrinterOptions::new().with_indent_spaces(4);
/// assert_eq!(to_string_with_options(&doc, options), "a {\n    b\n}\n");
/// ```
#[must_use]
pub fn to_string_with_options(document: &Document, options: PrinterOptions) -> String {
    Printer::new(options).print(document)
}

/// Print a document to a writer with the default options.
///
/// # Examples
///
/// ```rust
/// use kdl_doc::{parse, to_writer};
///
/// let doc = parse("node #true").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"node #true\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, PrinterOptions::default())
}

/// Print a document to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    document: &Document,
    options: PrinterOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(document, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}
