//! Canonical KDL output.
//!
//! The printer walks a [`Document`] depth first and emits one line per node.
//! Output is canonical rather than format preserving: comments and original
//! spacing are gone, properties come out sorted by name and strings are only
//! quoted when a bare identifier would not read back as the same string.
//!
//! ## Usage
//!
//! The crate-root helpers wrap this type:
//!
//! ```rust
//! use kdl_doc::{parse, to_string};
//!
//! let doc = parse("node   b=2 a=1 \"bare\"   // comment").unwrap();
//! assert_eq!(to_string(&doc), "node bare a=1 b=2\n");
//! ```
//!
//! ## Direct Printer Usage
//!
//! ```rust
//! use kdl_doc::{parse, Printer, PrinterOptions};
//!
//! let printer = Printer::new(PrinterOptions::new().with_print_empty_children(true));
//! let doc = parse("a {}").unwrap();
//! assert_eq!(printer.print(&doc), "a {\n}\n");
//! ```

use log::debug;

use crate::chars::{is_disallowed, is_newline, is_valid_bare_identifier};
use crate::node::{Document, Node};
use crate::options::PrinterOptions;
use crate::value::{Value, ValueKind};

/// Prints documents with a fixed set of [`PrinterOptions`].
#[derive(Clone, Debug, Default)]
pub struct Printer {
    options: PrinterOptions,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Printer { options }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Prints a whole document. An empty document prints as a single newline.
    pub fn print(&self, document: &Document) -> String {
        let mut context = PrintContext::new(&self.options);
        context.print_nodes(document);
        debug!(
            "printed {} top-level nodes into {} bytes",
            document.len(),
            context.output.len()
        );
        context.output
    }

    /// A single node and its children, without the trailing terminator.
    pub(crate) fn node_to_string(&self, node: &Node) -> String {
        let mut context = PrintContext::new(&self.options);
        context.print_node(node);
        context.output
    }

    pub(crate) fn value_to_string(&self, value: &Value) -> String {
        let mut context = PrintContext::new(&self.options);
        context.print_value(value);
        context.output
    }
}

struct PrintContext<'a> {
    output: String,
    options: &'a PrinterOptions,
    depth: usize,
}

impl<'a> PrintContext<'a> {
    fn new(options: &'a PrinterOptions) -> Self {
        PrintContext {
            output: String::with_capacity(256),
            options,
            depth: 0,
        }
    }

    fn print_nodes(&mut self, document: &Document) {
        if document.is_empty() && self.depth == 0 {
            self.output.push_str(&self.options.newline);
            return;
        }

        for node in document {
            self.print_indentation();
            self.print_node(node);
            if self.options.print_semicolons {
                self.output.push(';');
            }
            self.output.push_str(&self.options.newline);
        }
    }

    fn print_node(&mut self, node: &Node) {
        self.print_type(node.ty());
        self.write_string(node.name());

        for argument in node.arguments() {
            if self.options.print_null_arguments || !argument.is_null() {
                self.output.push(' ');
                self.print_value(argument);
            }
        }

        for (name, value) in node.properties().sorted() {
            if self.options.print_null_properties || !value.is_null() {
                self.output.push(' ');
                self.write_string(name);
                self.output.push('=');
                self.print_value(value);
            }
        }

        if let Some(children) = node.children() {
            if !children.is_empty() || self.options.print_empty_children {
                self.output.push_str(" {");
                self.output.push_str(&self.options.newline);
                self.depth += 1;
                self.print_nodes(children);
                self.depth -= 1;
                self.print_indentation();
                self.output.push('}');
            }
        }
    }

    fn print_value(&mut self, value: &Value) {
        self.print_type(value.ty());
        match value.kind() {
            ValueKind::Null => self.output.push_str("#null"),
            ValueKind::Bool(true) => self.output.push_str("#true"),
            ValueKind::Bool(false) => self.output.push_str("#false"),
            ValueKind::Number(n) => {
                let text = n.render(
                    self.options.respect_radix,
                    self.options.uppercase_hex,
                    self.options.exponent_char.as_char(),
                );
                self.output.push_str(&text);
            }
            ValueKind::String(s) => self.write_string(s),
        }
    }

    fn print_type(&mut self, ty: Option<&str>) {
        if let Some(ty) = ty {
            self.output.push('(');
            self.write_string(ty);
            self.output.push(')');
        }
    }

    fn print_indentation(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str(&self.options.indent);
        }
    }

    fn write_string(&mut self, s: &str) {
        if is_valid_bare_identifier(s) {
            self.output.push_str(s);
        } else if self.options.raw_strings && suits_raw_string(s) {
            self.write_raw_string(s);
        } else {
            self.write_quoted_string(s);
        }
    }

    fn write_quoted_string(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{08}' => self.output.push_str("\\b"),
                '\u{0C}' => self.output.push_str("\\f"),
                c if c.is_control() || is_newline(c) || is_disallowed(c as u32) => {
                    self.output.push_str(&format!("\\u{{{:x}}}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    // One more `#` than the longest run following any quote in the content.
    fn write_raw_string(&mut self, s: &str) {
        let mut longest = 0;
        let mut run = None;
        for c in s.chars() {
            run = match (c, run) {
                ('"', _) => Some(0),
                ('#', Some(n)) => Some(n + 1),
                _ => None,
            };
            if let Some(n) = run {
                longest = longest.max(n);
            }
        }

        let hashes = "#".repeat(longest + 1);
        self.output.push_str(&hashes);
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
        self.output.push_str(&hashes);
    }
}

// Raw strings cannot escape anything, so they only pay off for content with
// quotes or backslashes and nothing that needs an escape.
fn suits_raw_string(s: &str) -> bool {
    s.contains(|c| c == '"' || c == '\\')
        && !s
            .chars()
            .any(|c| c.is_control() || is_newline(c) || is_disallowed(c as u32))
}
