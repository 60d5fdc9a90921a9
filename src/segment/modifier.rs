//! Style modifiers: opaque `{name, properties}` directives attached to segments.
//!
//! The engine never interprets modifier properties visually — that belongs to
//! the style collaborator. Here they matter for two things only: deep
//! equality (merge eligibility in the optimizer) and serialization
//! (fingerprinting). The one name the engine recognizes is the raw-content
//! directive, which marks trusted markup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Modifier name marking trusted-markup (raw) content.
pub const RAW_CONTENT: &str = "raw-content";

/// An opaque style directive: a name plus a deep-comparable property bag.
///
/// Equality is order-sensitive and deep: two modifiers are equal iff their
/// names match and their property values are structurally identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    name: String,
    properties: Value,
}

impl Modifier {
    /// Create a modifier with the given name and properties.
    pub fn new(name: impl Into<String>, properties: Value) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Create a property-less modifier (a bare flag).
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }

    /// The raw-content (trusted markup) directive.
    pub fn raw_content() -> Self {
        Self::flag(RAW_CONTENT)
    }

    /// Modifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property bag.
    pub fn properties(&self) -> &Value {
        &self.properties
    }

    /// Whether this is the raw-content directive.
    pub fn is_raw_content(&self) -> bool {
        self.name == RAW_CONTENT
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_modifiers() {
        let a = Modifier::new("bold", json!({ "weight": 700 }));
        let b = Modifier::new("bold", json!({ "weight": 700 }));
        assert_eq!(a, b);
    }

    #[test]
    fn different_properties_not_equal() {
        let a = Modifier::new("bold", json!({ "weight": 700 }));
        let b = Modifier::new("bold", json!({ "weight": 400 }));
        assert_ne!(a, b);
    }

    #[test]
    fn different_names_not_equal() {
        let a = Modifier::flag("bold");
        let b = Modifier::flag("italic");
        assert_ne!(a, b);
    }

    #[test]
    fn nested_properties_compared_deeply() {
        let a = Modifier::new("font", json!({ "face": { "family": "mono", "size": 12 } }));
        let b = Modifier::new("font", json!({ "face": { "family": "mono", "size": 12 } }));
        let c = Modifier::new("font", json!({ "face": { "family": "mono", "size": 14 } }));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn flag_has_null_properties() {
        let m = Modifier::flag("dim");
        assert_eq!(m.properties(), &Value::Null);
    }

    #[test]
    fn raw_content_detection() {
        assert!(Modifier::raw_content().is_raw_content());
        assert!(!Modifier::flag("bold").is_raw_content());
    }

    #[test]
    fn serializes_name_and_properties() {
        let m = Modifier::new("color", json!({ "fg": "red" }));
        let serialized = serde_json::to_string(&m).unwrap();
        assert!(serialized.contains("color"));
        assert!(serialized.contains("red"));
    }
}
