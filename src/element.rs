//! The wrapped element under inspection.
//!
//! A `WrappedElement` is the single child the inspector attaches to: a
//! component name, the parameter names its definition declares, and the
//! property bag it was actually constructed with. The inspector reads it
//! and never mutates it.
//!
//! Declared parameters are caller-supplied. For hosts that only have a
//! textual signature at hand, [`WrappedElement::from_signature`] recovers
//! the names with a best-effort scan (see [`crate::discover::parse_signature`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::discover::parse_signature;

/// A UI element plus the metadata the inspector needs to introspect it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WrappedElement {
    /// Component name, shown as the wrapper panel title.
    pub name: String,
    /// Declared parameter names, in declaration order.
    #[serde(default)]
    pub schema: Vec<String>,
    /// Properties actually supplied at construction time. Iteration
    /// order is insertion order.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl WrappedElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: Vec::new(),
            props: Map::new(),
        }
    }

    /// Declare the element's parameter names explicitly.
    pub fn with_schema<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema = names.into_iter().map(Into::into).collect();
        self
    }

    /// Supply one property.
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Build an element whose declared parameters are scraped from a
    /// textual definition signature. Best-effort; an unparsable
    /// signature yields an empty schema rather than an error.
    pub fn from_signature(name: impl Into<String>, signature: &str) -> Self {
        Self {
            name: name.into(),
            schema: parse_signature(signature),
            props: Map::new(),
        }
    }

    /// Look up a supplied property. `None` means the key was declared
    /// but never supplied — displayed as `undefined`, not classified.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_preserves_prop_insertion_order() {
        let element = WrappedElement::new("UserCard")
            .with_prop("name", json!("Alice"))
            .with_prop("age", json!(30))
            .with_prop("active", json!(true));

        let keys: Vec<&String> = element.props.keys().collect();
        assert_eq!(keys, ["name", "age", "active"]);
    }

    #[test]
    fn test_from_signature_fills_schema() {
        let element = WrappedElement::from_signature("Badge", "({ label, color })");
        assert_eq!(element.schema, ["label", "color"]);
        assert!(element.props.is_empty());
    }

    #[test]
    fn test_prop_absent_key() {
        let element = WrappedElement::new("Badge").with_prop("label", json!("hi"));
        assert!(element.prop("label").is_some());
        assert!(element.prop("color").is_none());
    }

    #[test]
    fn test_element_round_trips_through_json() {
        let element = WrappedElement::new("UserCard")
            .with_schema(["name", "age"])
            .with_prop("name", json!("Alice"));

        let text = serde_json::to_string(&element).unwrap();
        let back: WrappedElement = serde_json::from_str(&text).unwrap();
        assert_eq!(back, element);
    }
}
