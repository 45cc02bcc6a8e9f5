//! Attribute definitions for tag-like nodes.

use serde::{Deserialize, Serialize};

use crate::Location;

/// The syntactic form of an attribute.
///
/// The kind fully determines how an attribute serializes back to source;
/// no attribute mixes forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum AttributeKind {
    /// Bare name with no value (`disabled`).
    Empty,
    /// Expression value (`name={expr}`).
    Expression,
    /// Quoted value (`name="text"` or `name='text'`).
    Quoted,
    /// Template literal value (`` name=`text` ``).
    TemplateLiteral,
    /// Shorthand expression (`{name}`).
    Shorthand,
    /// Spread expression (`{...name}`).
    Spread,
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeKind::Empty => "empty",
            AttributeKind::Expression => "expression",
            AttributeKind::Quoted => "quoted",
            AttributeKind::TemplateLiteral => "template-literal",
            AttributeKind::Shorthand => "shorthand",
            AttributeKind::Spread => "spread",
        };
        write!(f, "{}", name)
    }
}

/// An attribute on a tag-like node.
///
/// `value` and `raw` are always present in the parser's JSON, even when
/// empty. `raw` holds the source text of a quoted or template-literal
/// value including its delimiters; for other kinds it is empty. The
/// parser tags attribute objects with a constant `"type"` field, which
/// deserialization ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Syntactic form of this attribute.
    pub kind: AttributeKind,

    /// Attribute name, including any namespace prefix (`client:load`).
    pub name: String,

    /// Attribute value without delimiters.
    #[serde(default)]
    pub value: String,

    /// Source text of the value including delimiters, for quoted and
    /// template-literal attributes.
    #[serde(default)]
    pub raw: String,

    /// Source location of the attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,
}

impl Attribute {
    /// Creates a new attribute of the given kind.
    pub fn new(kind: AttributeKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: value.into(),
            raw: String::new(),
            position: None,
        }
    }

    /// Creates a bare attribute with no value.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(AttributeKind::Empty, name, "")
    }

    /// Creates an expression attribute (`name={value}`).
    pub fn expression(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(AttributeKind::Expression, name, value)
    }

    /// Creates a quoted attribute.
    ///
    /// `raw` is the source text of the value including its original quote
    /// characters, which serialization reproduces verbatim.
    pub fn quoted(
        name: impl Into<String>,
        value: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        let mut attribute = Self::new(AttributeKind::Quoted, name, value);
        attribute.raw = raw.into();
        attribute
    }

    /// Creates a template-literal attribute (`` name=`value` ``).
    pub fn template_literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(AttributeKind::TemplateLiteral, name, value)
    }

    /// Creates a shorthand attribute (`{name}`).
    pub fn shorthand(name: impl Into<String>) -> Self {
        Self::new(AttributeKind::Shorthand, name, "")
    }

    /// Creates a spread attribute (`{...name}`).
    pub fn spread(name: impl Into<String>) -> Self {
        Self::new(AttributeKind::Spread, name, "")
    }

    /// Sets the source location.
    pub fn with_position(mut self, position: Location) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty() {
        let attribute = Attribute::empty("disabled");

        assert_eq!(attribute.kind, AttributeKind::Empty);
        assert_eq!(attribute.name, "disabled");
        assert!(attribute.value.is_empty());
        assert!(attribute.raw.is_empty());
    }

    #[test]
    fn test_expression() {
        let attribute = Attribute::expression("count", "items.length");

        assert_eq!(attribute.kind, AttributeKind::Expression);
        assert_eq!(attribute.value, "items.length");
    }

    #[test]
    fn test_quoted_keeps_raw() {
        let attribute = Attribute::quoted("class", "hero", "\"hero\"");

        assert_eq!(attribute.kind, AttributeKind::Quoted);
        assert_eq!(attribute.value, "hero");
        assert_eq!(attribute.raw, "\"hero\"");
    }

    #[test]
    fn test_shorthand_and_spread_have_no_value() {
        let shorthand = Attribute::shorthand("name");
        let spread = Attribute::spread("props");

        assert_eq!(shorthand.kind, AttributeKind::Shorthand);
        assert!(shorthand.value.is_empty());
        assert_eq!(spread.kind, AttributeKind::Spread);
        assert!(spread.value.is_empty());
    }

    #[test]
    fn test_with_position() {
        let attribute =
            Attribute::empty("id").with_position(Location::point(Position::new(1, 6, 5)));

        assert_eq!(attribute.position.unwrap().start.offset, 5);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&AttributeKind::TemplateLiteral).unwrap();
        assert_eq!(json, "\"template-literal\"");
    }

    #[test]
    fn test_kind_display_matches_serialization() {
        let kinds = [
            AttributeKind::Empty,
            AttributeKind::Expression,
            AttributeKind::Quoted,
            AttributeKind::TemplateLiteral,
            AttributeKind::Shorthand,
            AttributeKind::Spread,
        ];

        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_deserialization_from_parser_json() {
        // Attribute objects from the parser carry a constant "type" field.
        let json = r#"{
            "type": "attribute",
            "kind": "quoted",
            "name": "class",
            "value": "hero",
            "raw": "\"hero\"",
            "position": {"start": {"line": 1, "column": 6, "offset": 5}}
        }"#;

        let attribute: Attribute = serde_json::from_str(json).unwrap();

        assert_eq!(attribute.kind, AttributeKind::Quoted);
        assert_eq!(attribute.name, "class");
        assert_eq!(attribute.value, "hero");
        assert_eq!(attribute.raw, "\"hero\"");
        assert!(attribute.position.is_some());
    }

    #[test]
    fn test_deserialization_defaults_missing_value_and_raw() {
        let attribute: Attribute =
            serde_json::from_str(r#"{"kind": "empty", "name": "disabled"}"#).unwrap();

        assert!(attribute.value.is_empty());
        assert!(attribute.raw.is_empty());
        assert!(attribute.position.is_none());
    }

    #[test]
    fn test_serialization_always_emits_value_and_raw() {
        let attribute = Attribute::empty("hidden");
        let json = serde_json::to_value(&attribute).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["kind"], "empty");
        assert_eq!(object["value"], "");
        assert_eq!(object["raw"], "");
        assert!(!object.contains_key("position"));
    }
}
