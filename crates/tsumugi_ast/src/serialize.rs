//! Serialization of document trees back to source text.
//!
//! Serialization is deterministic and reproduces stored literal and raw
//! text byte-for-byte: no escaping, no attribute reordering, no
//! whitespace normalization.

use crate::{Attribute, AttributeKind, Node, TagNode};

/// Options controlling serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Write childless tags as `<name />` instead of `<name></name>`.
    pub self_close: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { self_close: true }
    }
}

/// Serializes a node tree to source text with default options.
pub fn serialize(node: &Node) -> String {
    serialize_with_options(node, &SerializeOptions::default())
}

/// Serializes a node tree to source text.
pub fn serialize_with_options(node: &Node, options: &SerializeOptions) -> String {
    let mut output = String::new();
    write_node(&mut output, node, options);
    output
}

fn write_node(output: &mut String, node: &Node, options: &SerializeOptions) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                write_node(output, child, options);
            }
        }
        Node::Frontmatter(frontmatter) => {
            output.push_str("---");
            output.push_str(&frontmatter.value);
            output.push_str("---\n\n");
        }
        Node::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(&comment.value);
            output.push_str("-->");
        }
        Node::Expression(expression) => {
            output.push('{');
            for child in &expression.children {
                write_node(output, child, options);
            }
            output.push('}');
        }
        Node::Text(literal) | Node::Doctype(literal) => {
            output.push_str(&literal.value);
        }
        Node::Element(tag)
        | Node::CustomElement(tag)
        | Node::Component(tag)
        | Node::Fragment(tag) => {
            write_tag(output, tag, options);
        }
    }
}

fn write_tag(output: &mut String, tag: &TagNode, options: &SerializeOptions) {
    output.push('<');
    output.push_str(&tag.name);
    for attribute in &tag.attributes {
        write_attribute(output, attribute);
    }

    // The self-close form applies uniformly to every childless tag,
    // regardless of whether the tag is conventionally void in HTML.
    if tag.children.is_empty() && options.self_close {
        output.push_str(" />");
        return;
    }

    output.push('>');
    for child in &tag.children {
        write_node(output, child, options);
    }
    output.push_str("</");
    output.push_str(&tag.name);
    output.push('>');
}

fn write_attribute(output: &mut String, attribute: &Attribute) {
    output.push(' ');
    match attribute.kind {
        AttributeKind::Empty => {
            output.push_str(&attribute.name);
        }
        AttributeKind::Expression => {
            output.push_str(&attribute.name);
            output.push_str("={");
            output.push_str(&attribute.value);
            output.push('}');
        }
        AttributeKind::Quoted => {
            output.push_str(&attribute.name);
            output.push('=');
            output.push_str(&attribute.raw);
        }
        AttributeKind::TemplateLiteral => {
            output.push_str(&attribute.name);
            output.push_str("=`");
            output.push_str(&attribute.value);
            output.push('`');
        }
        AttributeKind::Shorthand => {
            output.push('{');
            output.push_str(&attribute.name);
            output.push('}');
        }
        AttributeKind::Spread => {
            output.push_str("{...");
            output.push_str(&attribute.name);
            output.push('}');
        }
    }
}
