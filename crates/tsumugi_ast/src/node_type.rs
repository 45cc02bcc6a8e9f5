//! Node type definitions for the Tsumugi document AST.
//!
//! The type tags match the JSON emitted by the template parser, which uses
//! kebab-case names (`custom-element`, etc.).

use serde::{Deserialize, Serialize};

/// Node types for the Tsumugi document AST.
///
/// Every node in a parsed document carries exactly one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum NodeType {
    // Document structure
    /// Root document node.
    Root,
    /// Leading `---` script block.
    Frontmatter,

    // Literal content
    /// Doctype declaration.
    Doctype,
    /// HTML comment.
    Comment,
    /// Raw text content.
    Text,

    // Embedded expressions
    /// `{...}` expression containing child nodes.
    Expression,

    // Tag-like nodes
    /// Standard HTML element.
    Element,
    /// Custom element (hyphenated tag name).
    CustomElement,
    /// Component (capitalized or dotted tag name).
    Component,
    /// Fragment (`<>` or an explicit Fragment tag).
    Fragment,
}

impl NodeType {
    /// Returns true if this node type carries an ordered children sequence.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(
            self,
            NodeType::Root
                | NodeType::Expression
                | NodeType::Element
                | NodeType::CustomElement
                | NodeType::Component
                | NodeType::Fragment
        )
    }

    /// Returns true if this node type carries a single literal value
    /// instead of children.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            NodeType::Frontmatter | NodeType::Doctype | NodeType::Comment | NodeType::Text
        )
    }

    /// Returns true if this node type additionally carries a tag name and
    /// attributes. Tag-like node types are always parents.
    #[inline]
    pub const fn is_tag_like(&self) -> bool {
        matches!(
            self,
            NodeType::Element | NodeType::CustomElement | NodeType::Component | NodeType::Fragment
        )
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same casing as serde serialization
        let name = match self {
            NodeType::Root => "root",
            NodeType::Frontmatter => "frontmatter",
            NodeType::Doctype => "doctype",
            NodeType::Comment => "comment",
            NodeType::Text => "text",
            NodeType::Expression => "expression",
            NodeType::Element => "element",
            NodeType::CustomElement => "custom-element",
            NodeType::Component => "component",
            NodeType::Fragment => "fragment",
        };
        write!(f, "{}", name)
    }
}
