//! # tsumugi_ast
//!
//! Document AST types for the Tsumugi template toolkit.
//!
//! This crate models the tree the Tsumugi parser emits for a template
//! document: node and attribute types with their JSON interchange form,
//! capability classification derived from node tags, an async visitor
//! layer, and a serializer that reconstructs source text from a tree.
//!
//! ## Architecture
//!
//! - Nodes are plain owned values; trees deserialize straight from the
//!   parser's JSON with `serde`
//! - Capabilities (parent, literal, tag-like) are derived from the node
//!   tag, never stored
//! - Traversal is async and shallow by default, with an opt-in
//!   recursive walk
//!
//! ## Example
//!
//! ```rust
//! use tsumugi_ast::{Node, serialize};
//!
//! let document = Node::root(vec![Node::element(
//!     "h1",
//!     vec![],
//!     vec![Node::text("Hello")],
//! )]);
//!
//! assert_eq!(serialize(&document), "<h1>Hello</h1>");
//! ```

mod attribute;
mod diagnostic;
mod document;
mod error;
mod node;
mod node_type;
mod serialize;
mod span;

pub mod script;
pub mod visitor;

pub use attribute::{Attribute, AttributeKind};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use document::{ParseResult, load_document};
pub use error::AstError;
pub use node::{ExpressionNode, LiteralNode, Node, RootNode, TagNode};
pub use node_type::NodeType;
pub use serialize::{SerializeOptions, serialize, serialize_with_options};
pub use span::{Location, Position};

// Re-export commonly used visitor items for convenience
pub use visitor::{Visit, VisitError, VisitResult, visit_level, walk, walk_tree};
