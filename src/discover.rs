//! Property discovery: which row keys does the inspector table show?
//!
//! The authoritative set is the union of the element's declared
//! parameter names and the keys actually present in its property bag.
//! Declared names come first in declaration order, then supplied keys
//! that were not declared, in first-appearance order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::WrappedElement;

/// Captures the parameter list between the first matched paren pair.
static PARAM_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("param list pattern is valid"));

/// Produce the ordered set of property names for an element.
///
/// Never fails: an empty schema and an empty property bag yield an
/// empty vec. Duplicates collapse to the first occurrence.
pub fn discover(element: &WrappedElement) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for declared in &element.schema {
        if !names.iter().any(|n| n == declared) {
            names.push(declared.clone());
        }
    }
    for key in element.props.keys() {
        if !names.iter().any(|n| n == key) {
            names.push(key.clone());
        }
    }
    names
}

/// Best-effort extraction of declared parameter names from a textual
/// definition signature.
///
/// Takes the substring inside the first paren pair, splits on commas,
/// strips braces (destructuring syntax) and whitespace, and drops empty
/// tokens. This is a syntax-level scan, not a parser: default values
/// containing commas or nested parentheses will misparse. That is a
/// documented limitation of the legacy convenience path; hosts that
/// need exact names should supply the schema explicitly.
pub fn parse_signature(signature: &str) -> Vec<String> {
    let Some(captures) = PARAM_LIST.captures(signature) else {
        return Vec::new();
    };
    captures[1]
        .split(',')
        .map(|token| {
            token
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '{' && *c != '}')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
