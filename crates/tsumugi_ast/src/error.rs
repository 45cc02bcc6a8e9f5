//! Error types for loading AST documents.

use thiserror::Error;

/// Errors that can occur while loading an AST document.
#[derive(Debug, Error)]
pub enum AstError {
    /// The document JSON does not describe a valid AST.
    #[error("invalid AST document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("failed to read AST document: {0}")]
    Io(#[from] std::io::Error),
}
