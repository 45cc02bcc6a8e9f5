//! Source position types.
//!
//! Positions are produced by the template parser and carried through the
//! AST unchanged. They never influence classification, walking, or
//! serialization.

use serde::{Deserialize, Serialize};

/// A point in source text.
///
/// Uses 1-indexed lines and columns, plus a 0-indexed byte offset, matching
/// the position points the parser emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// Byte offset from the start of the source (0-indexed).
    pub offset: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A source location covering a node or attribute.
///
/// The end point is absent for locations the parser only anchors at their
/// start (attributes, some literal nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position, when the parser recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Location {
    /// Creates a new location with a start and end.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Creates a location anchored only at its start.
    #[inline]
    pub const fn point(start: Position) -> Self {
        Self { start, end: None }
    }
}
