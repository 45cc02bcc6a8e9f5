//! Document node definitions.
//!
//! The core AST node type for Tsumugi template documents. A document is a
//! strict tree: each parent exclusively owns its ordered children, and no
//! node carries both children and a literal value.

use serde::{Deserialize, Serialize};

use crate::{Attribute, Location, NodeType, script};

/// A node in a Tsumugi document AST.
///
/// The variant tag is the single source of truth for classification;
/// capability accessors like [`Node::children`] and [`Node::value`] are
/// derived from it. The serde representation matches the parser's JSON:
/// a `type` field tags each node with its kebab-case kind.
///
/// # Example
///
/// ```rust
/// use tsumugi_ast::{Attribute, Node};
///
/// let document = Node::root(vec![
///     Node::frontmatter("const title = \"Home\";"),
///     Node::element("h1", vec![Attribute::expression("id", "title")], vec![
///         Node::text("Welcome"),
///     ]),
/// ]);
///
/// assert!(document.is_parent());
/// assert_eq!(document.children().map(<[Node]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Top-level document container.
    Root(RootNode),
    /// Leading `---` script block.
    Frontmatter(LiteralNode),
    /// Doctype declaration.
    Doctype(LiteralNode),
    /// HTML comment.
    Comment(LiteralNode),
    /// Raw text content.
    Text(LiteralNode),
    /// `{...}` expression wrapping child nodes.
    Expression(ExpressionNode),
    /// Standard HTML element.
    Element(TagNode),
    /// Custom element (hyphenated tag name).
    CustomElement(TagNode),
    /// Component (capitalized or dotted tag name).
    Component(TagNode),
    /// Fragment (`<>` or an explicit Fragment tag).
    Fragment(TagNode),
}

/// Payload of a root node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootNode {
    /// Top-level nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Source location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,
}

/// Payload of a literal node (frontmatter, doctype, comment, text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralNode {
    /// Raw literal content, stored unescaped.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Source location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,
}

/// Payload of an expression node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionNode {
    /// Nodes between the braces, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Source location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,
}

/// Shared payload of the tag-like node kinds.
///
/// The parser always emits `attributes` and `children` for tag-like
/// nodes, even when empty, and the shorthand fragment form has an empty
/// `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNode {
    /// Tag name as written in source.
    #[serde(default)]
    pub name: String,

    /// Attributes in source order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<Node>,

    /// Source location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,
}

impl Node {
    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Self::Root(RootNode {
            children,
            position: None,
        })
    }

    /// Creates a frontmatter node holding the raw script-block text.
    pub fn frontmatter(value: impl Into<String>) -> Self {
        Self::Frontmatter(LiteralNode {
            value: value.into(),
            position: None,
        })
    }

    /// Creates a doctype node.
    pub fn doctype(value: impl Into<String>) -> Self {
        Self::Doctype(LiteralNode {
            value: value.into(),
            position: None,
        })
    }

    /// Creates a comment node holding the text between `<!--` and `-->`.
    pub fn comment(value: impl Into<String>) -> Self {
        Self::Comment(LiteralNode {
            value: value.into(),
            position: None,
        })
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(LiteralNode {
            value: value.into(),
            position: None,
        })
    }

    /// Creates an expression node wrapping the given children.
    pub fn expression(children: Vec<Node>) -> Self {
        Self::Expression(ExpressionNode {
            children,
            position: None,
        })
    }

    /// Creates an element node.
    pub fn element(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Self::Element(TagNode::new(name, attributes, children))
    }

    /// Creates a custom-element node.
    pub fn custom_element(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Self::CustomElement(TagNode::new(name, attributes, children))
    }

    /// Creates a component node.
    pub fn component(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Self::Component(TagNode::new(name, attributes, children))
    }

    /// Creates a fragment node. The shorthand form `<>` has an empty name.
    pub fn fragment(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Self::Fragment(TagNode::new(name, attributes, children))
    }

    /// Sets the source location.
    pub fn with_position(mut self, position: Location) -> Self {
        match &mut self {
            Node::Root(root) => root.position = Some(position),
            Node::Frontmatter(literal)
            | Node::Doctype(literal)
            | Node::Comment(literal)
            | Node::Text(literal) => literal.position = Some(position),
            Node::Expression(expression) => expression.position = Some(position),
            Node::Element(tag)
            | Node::CustomElement(tag)
            | Node::Component(tag)
            | Node::Fragment(tag) => tag.position = Some(position),
        }
        self
    }

    /// Returns the type tag of this node.
    #[inline]
    pub const fn node_type(&self) -> NodeType {
        match self {
            Node::Root(_) => NodeType::Root,
            Node::Frontmatter(_) => NodeType::Frontmatter,
            Node::Doctype(_) => NodeType::Doctype,
            Node::Comment(_) => NodeType::Comment,
            Node::Text(_) => NodeType::Text,
            Node::Expression(_) => NodeType::Expression,
            Node::Element(_) => NodeType::Element,
            Node::CustomElement(_) => NodeType::CustomElement,
            Node::Component(_) => NodeType::Component,
            Node::Fragment(_) => NodeType::Fragment,
        }
    }

    // === Exact-kind predicates ===

    /// Returns true if this is the root node.
    #[inline]
    pub const fn is_root(&self) -> bool {
        matches!(self, Node::Root(_))
    }

    /// Returns true if this is a frontmatter node.
    #[inline]
    pub const fn is_frontmatter(&self) -> bool {
        matches!(self, Node::Frontmatter(_))
    }

    /// Returns true if this is a doctype node.
    #[inline]
    pub const fn is_doctype(&self) -> bool {
        matches!(self, Node::Doctype(_))
    }

    /// Returns true if this is a comment node.
    #[inline]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// Returns true if this is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns true if this is an expression node.
    #[inline]
    pub const fn is_expression(&self) -> bool {
        matches!(self, Node::Expression(_))
    }

    /// Returns true if this is an element node.
    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a custom-element node.
    #[inline]
    pub const fn is_custom_element(&self) -> bool {
        matches!(self, Node::CustomElement(_))
    }

    /// Returns true if this is a component node.
    #[inline]
    pub const fn is_component(&self) -> bool {
        matches!(self, Node::Component(_))
    }

    /// Returns true if this is a fragment node.
    #[inline]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Node::Fragment(_))
    }

    // === Capability predicates ===

    /// Returns true if this node carries an ordered children sequence.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        self.node_type().is_parent()
    }

    /// Returns true if this node carries a single literal value.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        self.node_type().is_literal()
    }

    /// Returns true if this node carries a tag name and attributes.
    #[inline]
    pub const fn is_tag_like(&self) -> bool {
        self.node_type().is_tag_like()
    }

    /// Returns true if this is a text node containing only whitespace.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(text) if text.value.trim().is_empty())
    }

    /// Returns true if this is a frontmatter node whose script contains
    /// nothing but whitespace and comments.
    pub fn is_empty_frontmatter(&self) -> bool {
        matches!(self, Node::Frontmatter(frontmatter)
            if script::strip_comments(&frontmatter.value).is_empty())
    }

    // === Capability accessors ===

    /// Returns the children of a parent node.
    #[inline]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Expression(expression) => Some(&expression.children),
            Node::Element(tag)
            | Node::CustomElement(tag)
            | Node::Component(tag)
            | Node::Fragment(tag) => Some(&tag.children),
            _ => None,
        }
    }

    /// Returns true if this node has at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(|children| !children.is_empty())
    }

    /// Returns the literal value of a literal node.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Frontmatter(literal)
            | Node::Doctype(literal)
            | Node::Comment(literal)
            | Node::Text(literal) => Some(&literal.value),
            _ => None,
        }
    }

    /// Returns the tag name of a tag-like node.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.as_tag().map(|tag| tag.name.as_str())
    }

    /// Returns the attributes of a tag-like node.
    #[inline]
    pub fn attributes(&self) -> Option<&[Attribute]> {
        self.as_tag().map(|tag| tag.attributes.as_slice())
    }

    /// Returns the shared tag payload of a tag-like node.
    #[inline]
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Node::Element(tag)
            | Node::CustomElement(tag)
            | Node::Component(tag)
            | Node::Fragment(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the source location, when the parser recorded one.
    #[inline]
    pub fn position(&self) -> Option<&Location> {
        match self {
            Node::Root(root) => root.position.as_ref(),
            Node::Frontmatter(literal)
            | Node::Doctype(literal)
            | Node::Comment(literal)
            | Node::Text(literal) => literal.position.as_ref(),
            Node::Expression(expression) => expression.position.as_ref(),
            Node::Element(tag)
            | Node::CustomElement(tag)
            | Node::Component(tag)
            | Node::Fragment(tag) => tag.position.as_ref(),
        }
    }
}

impl TagNode {
    /// Creates a new tag payload.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
            position: None,
        }
    }
}
