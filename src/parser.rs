//! Recursive-descent parser.
//!
//! The grammar is driven entirely by the lexer's one-token lookahead. Every
//! production either consumes what it recognizes and reports success, or
//! leaves the token stream untouched. Slashdashed elements go through the same
//! productions as live ones and are dropped afterwards, so they must still be
//! well formed.

use log::{debug, trace};

use crate::lexer::{Lexer, Token};
use crate::map::Properties;
use crate::node::{Document, Node};
use crate::value::{Value, ValueKind};
use crate::{Error, Result};

const TYPED_PROPERTY_KEY: &str =
    "type annotation belongs on the property value, write key=(type)value";

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
}

struct ParsedNode {
    node: Node,
    terminated: bool,
}

enum Entry {
    Argument(Value),
    Property(String, Value),
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Parser {
            lexer: Lexer::new(input),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Document> {
        let document = self.document()?;
        debug!("parsed document with {} top-level nodes", document.len());
        Ok(document)
    }

    fn document(&mut self) -> Result<Document> {
        self.accept(|t| *t == Token::Bom)?;
        let nodes = self.nodes(true)?;

        match self.lexer.peek()? {
            None => Ok(Document::from(nodes)),
            Some(Token::CloseBrace) => Err(self.lexer.error("unexpected closing brace")),
            Some(token) => {
                let message = format!("unexpected {}", token);
                Err(self.lexer.error(&message))
            }
        }
    }

    fn nodes(&mut self, terminator_required: bool) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            while self.line_space()? {}

            let parsed = match self.node()? {
                Some(parsed) => parsed,
                None => break,
            };
            nodes.push(parsed.node);

            if !parsed.terminated {
                if !terminator_required {
                    break;
                }
                if self.peek_is(&Token::CloseBrace)? {
                    return Err(self.lexer.error("unexpected closing brace"));
                }
                return Err(self.lexer.error("node terminator expected"));
            }
        }
        Ok(nodes)
    }

    fn line_space(&mut self) -> Result<bool> {
        if self.peek_is(&Token::Slashdash)? {
            self.lexer.next()?;
            while self.plain_node_space()? {}

            match self.node()? {
                None => {
                    return Err(self
                        .lexer
                        .error("a node is required after a slashdash ('/-')"))
                }
                // the last node of a block may leave out its terminator
                Some(parsed) if !parsed.terminated && !self.peek_is(&Token::CloseBrace)? => {
                    return Err(self.lexer.error("node terminator expected"))
                }
                Some(parsed) => trace!("discarded node {}", parsed.node.name()),
            }
            return Ok(true);
        }

        let mut found = false;
        while self.accept(|t| {
            matches!(
                t,
                Token::Newline
                    | Token::Whitespace
                    | Token::MultiLineComment
                    | Token::SingleLineComment
            )
        })? {
            found = true;
        }
        Ok(found)
    }

    fn whitespace(&mut self) -> Result<bool> {
        self.accept(|t| matches!(t, Token::Whitespace | Token::MultiLineComment))
    }

    fn plain_node_space(&mut self) -> Result<bool> {
        let mut found = false;
        while self.whitespace()? {
            found = true;
        }

        if self.peek_is(&Token::Escline)? {
            self.lexer.next()?;
            while self.whitespace()? {}
            return Ok(true);
        }

        Ok(found)
    }

    // Node space, optionally followed by a slashdashed entry or child block.
    fn node_space(&mut self) -> Result<bool> {
        let mut found = false;
        while self.plain_node_space()? {
            found = true;
        }
        if !found {
            return Ok(false);
        }

        if self.peek_is(&Token::Slashdash)? {
            self.lexer.next()?;
            while self.plain_node_space()? {}
            if self.peek_is(&Token::OpenBrace)? {
                let discarded = self.children()?;
                trace!("discarded child block of {} nodes", discarded.len());
            } else {
                self.discarded_entry()?;
            }
        }

        Ok(true)
    }

    fn node_spaces(&mut self) -> Result<()> {
        while self.node_space()? {}
        Ok(())
    }

    fn node(&mut self) -> Result<Option<ParsedNode>> {
        let node = match self.base_node()? {
            Some(node) => node,
            None => return Ok(None),
        };
        self.node_spaces()?;
        let terminated = self.terminator()?;
        Ok(Some(ParsedNode { node, terminated }))
    }

    fn base_node(&mut self) -> Result<Option<Node>> {
        let ty = self.type_annotation()?;
        self.node_spaces()?;

        let name = match self.string()? {
            Some(name) => name,
            None if ty.is_none() => return Ok(None),
            None => return Err(self.lexer.error("node name expected")),
        };

        let mut entries = Vec::new();
        let mut children = None;

        loop {
            match self.lexer.peek()? {
                Some(Token::Whitespace | Token::MultiLineComment | Token::Escline) => {
                    self.node_spaces()?
                }
                Some(Token::OpenBrace) => {
                    children = Some(self.children()?);
                    break;
                }
                _ => break,
            }

            match self.lexer.peek()? {
                Some(Token::String(_)) => {
                    let key = self.expect_string()?;
                    if self.peek_is_equals()? {
                        self.lexer.next()?;
                        let value = self.property_value(&key)?;
                        entries.push(Entry::Property(key, value));
                    } else {
                        entries.push(Entry::Argument(Value::from(key)));
                    }
                }
                Some(Token::Equals(_)) => {
                    self.lexer.next()?;
                    let entry = self.equals_after_argument(entries.pop())?;
                    entries.push(entry);
                }
                Some(Token::OpenBrace) => {
                    children = Some(self.children()?);
                    break;
                }
                _ => {
                    if let Some(value) = self.value()? {
                        if self.peek_is_equals()? {
                            return Err(self.misplaced_equals(&value));
                        }
                        entries.push(Entry::Argument(value));
                    }
                }
            }
        }

        let mut arguments = Vec::new();
        let mut properties = Properties::new();
        for entry in entries {
            match entry {
                Entry::Argument(value) => arguments.push(value),
                Entry::Property(key, value) => {
                    properties.insert(key, value);
                }
            }
        }

        let builder = Node::builder(name).with_optional_type(ty);
        let builder = match children {
            Some(children) => builder.with_children(children),
            None => builder,
        };
        Ok(Some(
            builder
                .build()
                .with_arguments(arguments)
                .with_properties(properties),
        ))
    }

    // `key =value`: the key was already recorded as an argument.
    fn equals_after_argument(&mut self, previous: Option<Entry>) -> Result<Entry> {
        match previous {
            Some(Entry::Argument(value)) if value.ty().is_none() => match value.into_kind() {
                ValueKind::String(key) => {
                    let value = self.property_value(&key)?;
                    Ok(Entry::Property(key, value))
                }
                _ => Err(self.lexer.error("unexpected equals sign")),
            },
            Some(Entry::Argument(value)) => Err(self.misplaced_equals(&value)),
            _ => Err(self.lexer.error("unexpected equals sign")),
        }
    }

    fn misplaced_equals(&mut self, value: &Value) -> Error {
        if value.ty().is_some() && value.is_string() {
            self.lexer.error(TYPED_PROPERTY_KEY)
        } else {
            self.lexer.error("unexpected equals sign")
        }
    }

    // A slashdashed argument or property.
    fn discarded_entry(&mut self) -> Result<()> {
        if let Some(key) = self.string()? {
            self.node_spaces()?;
            if self.peek_is_equals()? {
                self.lexer.next()?;
                self.property_value(&key)?;
            }
            trace!("discarded entry {}", key);
            return Ok(());
        }

        match self.value()? {
            Some(value) => {
                if self.peek_is_equals()? {
                    return Err(self.misplaced_equals(&value));
                }
                trace!("discarded argument {}", value);
                Ok(())
            }
            None => Err(self.lexer.error("property or argument expected")),
        }
    }

    fn property_value(&mut self, key: &str) -> Result<Value> {
        match self.value()? {
            Some(value) => Ok(value),
            None => {
                let message = format!("value expected for property {}", key);
                Err(self.lexer.error(&message))
            }
        }
    }

    fn children(&mut self) -> Result<Document> {
        self.lexer.next()?;
        let nodes = self.nodes(false)?;

        if !self.accept(|t| *t == Token::CloseBrace)? {
            return Err(self.lexer.error("closing brace expected"));
        }
        Ok(Document::from(nodes))
    }

    // End of input counts as a terminator but is not consumed.
    fn terminator(&mut self) -> Result<bool> {
        if self.lexer.peek()?.is_none() {
            return Ok(true);
        }
        self.accept(|t| {
            matches!(
                t,
                Token::SingleLineComment | Token::Newline | Token::Semicolon
            )
        })
    }

    fn value(&mut self) -> Result<Option<Value>> {
        let ty = self.type_annotation()?;
        self.node_spaces()?;

        let is_value = matches!(
            self.lexer.peek()?,
            Some(Token::Number(_) | Token::Bool(_) | Token::Null | Token::String(_))
        );
        if !is_value {
            return match ty {
                Some(_) => Err(self.lexer.error("value expected after type")),
                None => Ok(None),
            };
        }

        let kind = match self.lexer.next()? {
            Some(Token::Number(n)) => ValueKind::Number(n),
            Some(Token::Bool(b)) => ValueKind::Bool(b),
            Some(Token::Null) => ValueKind::Null,
            Some(Token::String(s)) => ValueKind::String(s),
            _ => return Err(Error::internal("value token expected")),
        };
        Ok(Some(Value::new(kind).with_optional_type(ty)))
    }

    fn type_annotation(&mut self) -> Result<Option<String>> {
        if !self.peek_is(&Token::OpenParen)? {
            return Ok(None);
        }
        self.lexer.next()?;

        self.node_spaces()?;
        let ty = match self.string()? {
            Some(ty) => ty,
            None => return Err(self.lexer.error("type expected")),
        };
        self.node_spaces()?;

        if !self.accept(|t| *t == Token::CloseParen)? {
            return Err(self.lexer.error("closing parentheses expected"));
        }
        Ok(Some(ty))
    }

    fn string(&mut self) -> Result<Option<String>> {
        if matches!(self.lexer.peek()?, Some(Token::String(_))) {
            self.expect_string().map(Some)
        } else {
            Ok(None)
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.lexer.next()? {
            Some(Token::String(s)) => Ok(s),
            _ => Err(Error::internal("string token expected")),
        }
    }

    fn peek_is(&mut self, token: &Token) -> Result<bool> {
        Ok(self.lexer.peek()? == Some(token))
    }

    fn peek_is_equals(&mut self) -> Result<bool> {
        Ok(matches!(self.lexer.peek()?, Some(Token::Equals(_))))
    }

    // Consumes the next token if it satisfies the predicate.
    fn accept(&mut self, predicate: impl Fn(&Token) -> bool) -> Result<bool> {
        let matched = self.lexer.peek()?.is_some_and(predicate);
        if matched {
            self.lexer.next()?;
        }
        Ok(matched)
    }
}
