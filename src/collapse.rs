//! Collapsible value tree: per-path expand/collapse state and the
//! flattener that turns a nested value into visible rows.
//!
//! Paths are strings identifying a node's position in the nested value,
//! e.g. `user.address[0]`. A path absent from the state map is collapsed;
//! this bounds the initial render of deep structures to one level.
//! Entries accumulate as the user toggles and are never pruned — stale
//! paths for values that disappeared are harmless.

use std::collections::HashMap;

use serde_json::Value;

use crate::value::format_leaf;

/// Depth at which flattening stops and emits an elision marker instead
/// of recursing further. Owned JSON values cannot be cyclic, so this
/// bound exists only to keep pathological nesting renderable.
pub const MAX_DEPTH: usize = 32;

/// Disclosure glyph for a collapsed node.
pub const GLYPH_COLLAPSED: char = '▶';
/// Disclosure glyph for an expanded node.
pub const GLYPH_EXPANDED: char = '▼';

/// Per-path collapse state, created empty on inspector mount.
#[derive(Debug, Default)]
pub struct CollapseState {
    collapsed: HashMap<String, bool>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node at `path` is collapsed. Unvisited paths are
    /// collapsed by default.
    pub fn is_collapsed(&self, path: &str) -> bool {
        self.collapsed.get(path).copied().unwrap_or(true)
    }

    /// Flip the collapse state for `path`.
    pub fn toggle(&mut self, path: &str) {
        let entry = self.collapsed.entry(path.to_string()).or_insert(true);
        *entry = !*entry;
    }
}

/// One visible line of a flattened value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRow {
    /// Set for collapsible headers: clicking the row toggles this path.
    pub toggle_path: Option<String>,
    /// Display text, without indentation.
    pub text: String,
    /// Nesting depth, used for indentation.
    pub depth: usize,
}

impl ValueRow {
    fn header(path: &str, text: String, depth: usize) -> Self {
        Self {
            toggle_path: Some(path.to_string()),
            text,
            depth,
        }
    }

    fn leaf(text: String, depth: usize) -> Self {
        Self {
            toggle_path: None,
            text,
            depth,
        }
    }
}

/// Flatten a value into display rows, honoring collapse state.
///
/// `path` is the node's position key and `label` its terminal label
/// (the property name at the root, an index or key below it). Container
/// nodes produce a header row carrying their toggle path; expanded
/// containers are followed by their children one depth level down.
/// A root-level primitive renders bare; child primitives render as
/// `label: value`.
pub fn flatten(
    path: &str,
    label: &str,
    value: &Value,
    depth: usize,
    state: &CollapseState,
) -> Vec<ValueRow> {
    let mut rows = Vec::new();
    push_rows(&mut rows, path, label, value, depth, state);
    rows
}

fn push_rows(
    rows: &mut Vec<ValueRow>,
    path: &str,
    label: &str,
    value: &Value,
    depth: usize,
    state: &CollapseState,
) {
    if depth >= MAX_DEPTH {
        rows.push(ValueRow::leaf("…".to_string(), depth));
        return;
    }

    match value {
        Value::Array(items) => {
            let collapsed = state.is_collapsed(path);
            let glyph = if collapsed { GLYPH_COLLAPSED } else { GLYPH_EXPANDED };
            rows.push(ValueRow::header(
                path,
                format!("{glyph} {label}: [{}]", items.len()),
                depth,
            ));
            if !collapsed {
                for (index, item) in items.iter().enumerate() {
                    let child_path = format!("{path}[{index}]");
                    push_rows(rows, &child_path, &index.to_string(), item, depth + 1, state);
                }
            }
        }
        Value::Object(map) => {
            let collapsed = state.is_collapsed(path);
            let glyph = if collapsed { GLYPH_COLLAPSED } else { GLYPH_EXPANDED };
            rows.push(ValueRow::header(
                path,
                format!("{glyph} {label}: {}", map.len()),
                depth,
            ));
            if !collapsed {
                for (key, child) in map {
                    let child_path = format!("{path}.{key}");
                    push_rows(rows, &child_path, key, child, depth + 1, state);
                }
            }
        }
        leaf => {
            let text = if depth == 0 {
                format_leaf(leaf)
            } else {
                format!("{label}: {}", format_leaf(leaf))
            };
            rows.push(ValueRow::leaf(text, depth));
        }
    }
}
