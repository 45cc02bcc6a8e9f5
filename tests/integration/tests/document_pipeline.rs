//! End-to-end tests for the document pipeline
//!
//! Loads parser output from fixtures, walks the whole tree, and
//! reconstructs the template source.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tsumugi_ast::{
    Attribute, Node, NodeType, ParseResult, Visit, VisitResult, load_document, serialize,
    visit_level, walk_tree,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(name: &str) -> ParseResult {
    let input = std::fs::read_to_string(fixtures_dir().join(name)).unwrap();
    load_document(&input).unwrap()
}

/// Tallies every visited node by kind.
#[derive(Default)]
struct Inventory {
    counts: Mutex<HashMap<NodeType, usize>>,
    whitespace: Mutex<usize>,
}

#[async_trait::async_trait]
impl Visit for Inventory {
    async fn visit(&self, node: &Node, _: Option<&Node>, _: Option<usize>) -> VisitResult {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(node.node_type())
            .or_default() += 1;
        if node.is_whitespace() {
            *self.whitespace.lock().unwrap() += 1;
        }
        Ok(())
    }
}

mod blog_post {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn walk_tree_visits_every_node() {
        let document = load_fixture("blog_post.json");

        let inventory = Inventory::default();
        walk_tree(&inventory, &document.ast).await.unwrap();

        assert_eq!(*inventory.whitespace.lock().unwrap(), 10);

        let counts = inventory.counts.into_inner().unwrap();
        assert_eq!(counts[&NodeType::Root], 1);
        assert_eq!(counts[&NodeType::Frontmatter], 1);
        assert_eq!(counts[&NodeType::Doctype], 1);
        assert_eq!(counts[&NodeType::Comment], 1);
        assert_eq!(counts[&NodeType::Text], 13);
        assert_eq!(counts[&NodeType::Expression], 2);
        assert_eq!(counts[&NodeType::Element], 4);
        assert_eq!(counts[&NodeType::CustomElement], 1);
        assert_eq!(counts[&NodeType::Component], 1);
        assert_eq!(counts.values().sum::<usize>(), 25);
    }

    #[tokio::test]
    async fn visit_level_stays_shallow() {
        let document = load_fixture("blog_post.json");

        let inventory = Inventory::default();
        visit_level(&inventory, &document.ast).await.unwrap();

        let counts = inventory.counts.into_inner().unwrap();
        assert_eq!(counts.values().sum::<usize>(), 6);
        // The component sits below the first level
        assert!(!counts.contains_key(&NodeType::Component));
    }

    #[test]
    fn serializes_back_to_source() {
        let document = load_fixture("blog_post.json");
        let expected = std::fs::read_to_string(fixtures_dir().join("blog_post.txt")).unwrap();

        assert_eq!(serialize(&document.ast), expected);
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let document = load_fixture("blog_post.json");

        let json = serde_json::to_string(&document).unwrap();
        let restored = load_document(&json).unwrap();

        assert_eq!(restored, document);
    }
}

mod parse_results {
    use pretty_assertions::assert_eq;

    use super::*;
    use tsumugi_ast::{Diagnostic, DiagnosticCode};

    #[test]
    fn carries_parser_diagnostics() {
        let input = r#"{
            "ast": { "type": "root" },
            "diagnostics": [
                { "code": 2001, "severity": "warning", "text": "comment never closed" }
            ]
        }"#;

        let document = load_document(input).unwrap();

        assert_eq!(document.diagnostics.len(), 1);
        assert_eq!(
            document.diagnostics[0].code,
            DiagnosticCode::UNTERMINATED_HTML_COMMENT
        );
        assert!(!document.has_errors());
    }

    #[test]
    fn error_diagnostics_are_detected() {
        let mut document = ParseResult::from_ast(Node::root(vec![]));
        document.diagnostics.push(Diagnostic::new(
            DiagnosticCode::FRAGMENT_SHORTHAND_ATTRS,
            "attributes are not allowed on <>",
        ));

        assert!(document.has_errors());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn component_with_mixed_attributes() {
        let card = Node::component(
            "Card",
            vec![
                Attribute::quoted("title", "Hi", "\"Hi\""),
                Attribute::shorthand("open"),
            ],
            vec![Node::text("body")],
        );

        insta::assert_snapshot!(serialize(&card), @r#"<Card title="Hi" {open}>body</Card>"#);
    }
}
