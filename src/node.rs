//! Documents and nodes.
//!
//! Both types are immutable values. Editing means building a new value, either
//! through the `with_*` functional updates or through a [`NodeBuilder`]
//! obtained from [`Node::builder`] or [`Node::to_builder`].
//!
//! A node without a child block and a node with an empty `{}` block are
//! different values: [`Node::children`] returns `None` for the first and an
//! empty [`Document`] for the second.
//!
//! ## Examples
//!
//! ```rust
//! use kdl_doc::{Document, Node};
//!
//! let node = Node::builder("server")
//!     .with_argument("main")
//!     .with_property("port", 8080)
//!     .with_child(Node::new("tls"))
//!     .build();
//!
//! let doc = Document::from(vec![node]);
//! assert_eq!(doc.to_string(), "server main port=8080 {\n\ttls\n}\n");
//!
//! let edited = doc.nodes()[0].clone().with_name("proxy");
//! assert_eq!(edited.name(), "proxy");
//! assert_eq!(doc.nodes()[0].name(), "server");
//! ```

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::map::Properties;
use crate::printer::Printer;
use crate::value::Value;
use crate::{Error, Result};

/// An ordered sequence of nodes: a whole file or the contents of a child block.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Document(Vec<Node>);

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Document(Vec::new())
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }

    /// The first node with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.0.iter().find(|n| n.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    /// Returns a copy of this document with `node` appended.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.0.push(node);
        self
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Document(nodes)
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Document(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

/// Canonical text with the default printer options.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::default().print(self))
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for node in &self.0 {
            seq.serialize_element(node)?;
        }
        seq.end()
    }
}

/// A named node with its arguments, properties and optional child block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    ty: Option<String>,
    name: String,
    arguments: Vec<Value>,
    properties: Properties,
    children: Option<Document>,
}

impl Node {
    /// A bare node: no type, arguments, properties or child block.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            ty: None,
            name: name.into(),
            arguments: Vec::new(),
            properties: Properties::new(),
            children: None,
        }
    }

    #[must_use]
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            node: Node::new(name),
        }
    }

    /// A builder seeded with a copy of this node.
    #[must_use]
    pub fn to_builder(&self) -> NodeBuilder {
        NodeBuilder { node: self.clone() }
    }

    #[must_use]
    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    #[must_use]
    pub fn children(&self) -> Option<&Document> {
        self.children.as_ref()
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_type(self, ty: impl Into<String>) -> Self {
        Node {
            ty: Some(ty.into()),
            ..self
        }
    }

    #[must_use]
    pub fn without_type(self) -> Self {
        Node { ty: None, ..self }
    }

    #[must_use]
    pub fn with_arguments(self, arguments: Vec<Value>) -> Self {
        Node { arguments, ..self }
    }

    #[must_use]
    pub fn with_properties(self, properties: Properties) -> Self {
        Node { properties, ..self }
    }

    #[must_use]
    pub fn with_children(self, children: Document) -> Self {
        Node {
            children: Some(children),
            ..self
        }
    }

    #[must_use]
    pub fn without_children(self) -> Self {
        Node {
            children: None,
            ..self
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::default().node_to_string(self))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Node", 5)?;
        s.serialize_field("type", &self.ty)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("arguments", &self.arguments)?;
        s.serialize_field("properties", &self.properties)?;
        s.serialize_field("children", &self.children)?;
        s.end()
    }
}

/// Incremental construction of a [`Node`].
#[derive(Clone, Debug)]
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.node.name = name.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.node.ty = Some(ty.into());
        self
    }

    pub(crate) fn with_optional_type(mut self, ty: Option<String>) -> Self {
        self.node.ty = ty;
        self
    }

    #[must_use]
    pub fn with_argument(mut self, value: impl Into<Value>) -> Self {
        self.node.arguments.push(value.into());
        self
    }

    /// Sets a property; a later value for the same name wins.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.node.properties.insert(name, value);
        self
    }

    /// Appends a child, creating the child block if there is none yet.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.node
            .children
            .get_or_insert_with(Document::new)
            .0
            .push(child);
        self
    }

    /// Replaces the child block. An empty document still counts as a block.
    #[must_use]
    pub fn with_children(mut self, children: Document) -> Self {
        self.node.children = Some(children);
        self
    }

    #[must_use]
    pub fn without_children(mut self) -> Self {
        self.node.children = None;
        self
    }

    #[must_use]
    pub fn build(self) -> Node {
        self.node
    }
}
