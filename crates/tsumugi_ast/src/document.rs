//! Loading parse results from their JSON interchange form.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::AstError;
use crate::node::Node;

/// A parsed document: the AST plus any diagnostics the parser attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The document tree, rooted at a [`Node::Root`].
    pub ast: Node,

    /// Diagnostics reported while parsing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Wraps a bare AST with no diagnostics.
    pub fn from_ast(ast: Node) -> Self {
        Self {
            ast,
            diagnostics: Vec::new(),
        }
    }

    /// Whether any diagnostic reports an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Loads a parse result from its JSON interchange form.
///
/// Accepts either a full parse result (`{"ast": ..., "diagnostics": ...}`)
/// or a bare root node, which loads with no diagnostics.
pub fn load_document(input: &str) -> Result<ParseResult, AstError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    if value.get("ast").is_some() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(ParseResult::from_ast(serde_json::from_value(value)?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diagnostic::DiagnosticCode;

    #[test]
    fn test_load_bare_root_node() {
        let result = load_document(r#"{"type":"root","children":[{"type":"text","value":"hi"}]}"#)
            .unwrap();

        assert!(result.ast.is_root());
        assert_eq!(result.ast.children().map(<[Node]>::len), Some(1));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_load_full_parse_result() {
        let input = r#"{
            "ast": { "type": "root", "children": [] },
            "diagnostics": [
                { "code": 2002, "severity": "warning", "text": "unclosed tag: div" }
            ]
        }"#;

        let result = load_document(input).unwrap();

        assert!(result.ast.is_root());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::UNCLOSED_HTML_TAG);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_has_errors() {
        let mut result = ParseResult::from_ast(Node::root(vec![]));
        assert!(!result.has_errors());

        result
            .diagnostics
            .push(Diagnostic::new(DiagnosticCode::UNTERMINATED_STRING, "string never ends"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let error = load_document("{not json").unwrap_err();
        assert!(matches!(error, AstError::InvalidDocument(_)));
    }

    #[test]
    fn test_load_rejects_unknown_node_type() {
        assert!(load_document(r#"{"type":"slot"}"#).is_err());
    }

    #[test]
    fn test_serialization_omits_empty_diagnostics() {
        let result = ParseResult::from_ast(Node::root(vec![]));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["ast"]["type"], "root");
        assert!(json.get("diagnostics").is_none());
    }

    #[test]
    fn test_parse_result_round_trip() {
        let result = ParseResult {
            ast: Node::root(vec![Node::element("p", vec![], vec![])]),
            diagnostics: vec![Diagnostic::new(DiagnosticCode::WARNING, "generic warning")],
        };

        let json = serde_json::to_string(&result).unwrap();
        let restored = load_document(&json).unwrap();

        assert_eq!(restored, result);
    }
}
