//! Widget kind tag

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Characters allowed in a kind tag (e.g. "CHART_WIDGET", "acme.map:v2")
static KIND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.:\-]+$").expect("kind pattern is valid"));

/// Rejected kind tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid widget kind {0:?}: expected non-empty [A-Za-z0-9_.:-]")]
pub struct InvalidWidgetKind(pub String);

/// Opaque tag identifying a widget family.
///
/// Kinds are an open set: new families are added by independent widget
/// modules, so this is a validated string rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WidgetKind(String);

impl WidgetKind {
    /// Create a kind, validating the tag
    pub fn new(tag: impl Into<String>) -> Result<Self, InvalidWidgetKind> {
        let tag = tag.into();
        if KIND_PATTERN.is_match(&tag) {
            Ok(Self(tag))
        } else {
            Err(InvalidWidgetKind(tag))
        }
    }

    /// Create a kind from a built-in tag literal.
    ///
    /// Built-in tags are checked in debug builds only.
    pub fn from_static(tag: &'static str) -> Self {
        debug_assert!(KIND_PATTERN.is_match(tag), "invalid built-in kind {tag:?}");
        Self(tag.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WidgetKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WidgetKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WidgetKind {
    type Error = InvalidWidgetKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for WidgetKind {
    type Error = InvalidWidgetKind;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_kinds() {
        assert!(WidgetKind::new("CHART_WIDGET").is_ok());
        assert!(WidgetKind::new("acme.map:v2-beta").is_ok());
    }

    #[test]
    fn test_invalid_kinds() {
        assert_eq!(
            WidgetKind::new(""),
            Err(InvalidWidgetKind(String::new()))
        );
        assert!(WidgetKind::new("TEXT WIDGET").is_err());
        assert!(WidgetKind::new("TEXT/WIDGET").is_err());
    }

    #[test]
    fn test_kind_serializes_as_plain_string() {
        let kind = WidgetKind::from_static("TEXT_WIDGET");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"TEXT_WIDGET\"");

        let parsed: WidgetKind = serde_json::from_str("\"BUTTON_WIDGET\"").unwrap();
        assert_eq!(parsed.as_str(), "BUTTON_WIDGET");

        assert!(serde_json::from_str::<WidgetKind>("\"\"").is_err());
    }
}
