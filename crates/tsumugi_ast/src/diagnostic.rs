//! Diagnostic types attached to parse results.
//!
//! Diagnostics are produced by the template parser; this crate only
//! models them and carries them alongside the AST.

use serde::{Deserialize, Serialize};

use crate::span::Location;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - the document could not be fully parsed.
    #[default]
    Error,
    /// Warning - the document parsed but should be reviewed.
    Warning,
    /// Information - informational message.
    Information,
    /// Hint - stylistic suggestion.
    Hint,
}

/// A stable numeric code identifying a parser condition.
///
/// Codes are grouped by thousands: `1xxx` errors, `2xxx` warnings,
/// `3xxx` informational, `4xxx` hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticCode(pub u16);

impl DiagnosticCode {
    /// Generic parse error.
    pub const ERROR: Self = Self(1000);
    /// A `/* */` comment in a script block is never closed.
    pub const UNTERMINATED_JS_COMMENT: Self = Self(1001);
    /// A shorthand fragment (`<>`) carries attributes.
    pub const FRAGMENT_SHORTHAND_ATTRS: Self = Self(1002);
    /// A component is rendered without a matching import.
    pub const UNMATCHED_IMPORT: Self = Self(1003);
    /// A `slot` attribute appears where it is not supported.
    pub const UNSUPPORTED_SLOT_ATTRIBUTE: Self = Self(1004);
    /// A string literal is never closed.
    pub const UNTERMINATED_STRING: Self = Self(1005);

    /// Generic warning.
    pub const WARNING: Self = Self(2000);
    /// An HTML comment is never closed.
    pub const UNTERMINATED_HTML_COMMENT: Self = Self(2001);
    /// A tag is opened but never closed.
    pub const UNCLOSED_HTML_TAG: Self = Self(2002);
    /// A directive that has been replaced by a newer form.
    pub const DEPRECATED_DIRECTIVE: Self = Self(2003);
    /// A directive with no effect in its position.
    pub const IGNORED_DIRECTIVE: Self = Self(2004);
    /// An expression the parser cannot evaluate.
    pub const UNSUPPORTED_EXPRESSION: Self = Self(2005);
    /// A `set:*` directive on an element that also has children.
    pub const SET_WITH_CHILDREN: Self = Self(2006);
    /// A `define:vars` directive in an unsupported position.
    pub const CANNOT_DEFINE_VARS: Self = Self(2007);
    /// A spread attribute the parser cannot expand.
    pub const INVALID_SPREAD: Self = Self(2008);
    /// A character that is invalid in its position.
    pub const UNEXPECTED_CHARACTER: Self = Self(2009);
    /// A script marked to rerun cannot be rerun.
    pub const CANNOT_RERUN: Self = Self(2010);

    /// Generic informational message.
    pub const INFO: Self = Self(3000);

    /// Generic hint.
    pub const HINT: Self = Self(4000);

    /// The severity implied by this code's range.
    pub const fn severity(self) -> Severity {
        match self.0 {
            1000..=1999 => Severity::Error,
            2000..=2999 => Severity::Warning,
            3000..=3999 => Severity::Information,
            _ => Severity::Hint,
        }
    }
}

/// A diagnostic message from the template parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The condition this diagnostic reports.
    pub code: DiagnosticCode,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The diagnostic message.
    pub text: String,

    /// Optional suggestion for resolving the condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Line/column location in the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the severity implied by its code.
    pub fn new(code: DiagnosticCode, text: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            text: text.into(),
            hint: None,
            location: None,
        }
    }

    /// Overrides the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets a resolution hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Whether this diagnostic reports an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
