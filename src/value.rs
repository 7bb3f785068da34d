//! Shallow kind classification for inspected property values.
//!
//! Values flow through the inspector as `serde_json::Value` trees.
//! Classification looks only at the outermost constructor and never
//! traverses, so it is total over arbitrarily large inputs.

use std::fmt;

use serde_json::Value;

/// Semantic kind of an inspected value, as shown in the Type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Null,
    String,
    Number,
    Boolean,
    Object,
}

impl Kind {
    /// Display tag matching the runtime's own primitive naming.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value into its display kind.
///
/// Priority order: ordered sequences are `array`, the null sentinel is
/// `null`, primitives report their own tag, and anything else is a
/// generic `object`.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Array(_) => Kind::Array,
        Value::Null => Kind::Null,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::Bool(_) => Kind::Boolean,
        Value::Object(_) => Kind::Object,
    }
}

/// Canonical leaf text for a non-container value.
///
/// Strings are quoted; numbers, booleans and null use their JSON form.
pub fn format_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}
