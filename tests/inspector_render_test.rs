//! Rendering tests for the inspector view.
//!
//! Renders through a `TestBackend` and asserts on buffer contents:
//! trigger always present, table only while visible, Type column
//! classification, the literal `undefined` for declared-but-missing
//! props, and the collapsible Value column.

mod common;

use common::{buffer_text, click, draw, find_area, new_terminal};
use propscope::app::InspectorApp;
use propscope::element::WrappedElement;
use propscope::ui::interaction::ClickAction;
use serde_json::json;

fn sample_app() -> InspectorApp {
    InspectorApp::new(
        WrappedElement::new("UserCard")
            .with_schema(["name", "age", "color"])
            .with_prop("name", json!("Alice"))
            .with_prop("age", json!(30))
            .with_prop("items", json!([1, 2])),
    )
}

#[test]
fn test_hidden_state_renders_trigger_only() {
    let mut terminal = new_terminal();
    let mut app = sample_app();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("[PI]"), "trigger badge missing:\n{text}");
    assert!(text.contains("UserCard"), "wrapper title missing:\n{text}");
    assert!(!text.contains("Props Inspector"));
    assert!(!text.contains("Prop Name"));
}

#[test]
fn test_trigger_click_shows_table() {
    let mut terminal = new_terminal();
    let mut app = sample_app();
    draw(&mut terminal, &mut app);

    let (x, y) = find_area(&app, |a| *a == ClickAction::ToggleOverlay);
    click(&mut app, x, y);
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("Props Inspector"));
    assert!(text.contains("Prop Name"));
    assert!(text.contains("Type"));
    assert!(text.contains("Prop Value"));
}

#[test]
fn test_rows_show_classified_types_and_values() {
    let mut terminal = new_terminal();
    let mut app = sample_app();
    app.overlay.toggle();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("name"));
    assert!(text.contains("string"));
    assert!(text.contains("\"Alice\""));
    assert!(text.contains("age"));
    assert!(text.contains("number"));
    assert!(text.contains("30"));
    // Undeclared but supplied key is discovered too.
    assert!(text.contains("items"));
    assert!(text.contains("array"));
}

#[test]
fn test_declared_but_missing_prop_renders_undefined() {
    let mut terminal = new_terminal();
    let mut app = sample_app();
    app.overlay.toggle();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("color"));
    // Literal text in both the Type and the Value cell, never
    // classified as object.
    assert_eq!(text.matches("undefined").count(), 2, "{text}");
}

#[test]
fn test_nested_array_expands_to_indexed_children() {
    let mut terminal = new_terminal();
    let mut app = sample_app();
    app.overlay.toggle();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("▶ items: [2]"), "{text}");
    assert!(!text.contains("0: 1"));

    let (x, y) = find_area(&app, |a| {
        *a == ClickAction::ToggleCollapse("items".to_string())
    });
    click(&mut app, x, y);
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("▼ items: [2]"), "{text}");
    assert!(text.contains("0: 1"), "{text}");
    assert!(text.contains("1: 2"), "{text}");

    // A second toggle collapses the children again.
    let (x, y) = find_area(&app, |a| {
        *a == ClickAction::ToggleCollapse("items".to_string())
    });
    click(&mut app, x, y);
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("▶ items: [2]"), "{text}");
    assert!(!text.contains("0: 1"));
}

#[test]
fn test_nested_object_header_shows_key_count() {
    let mut terminal = new_terminal();
    let mut app = InspectorApp::new(
        WrappedElement::new("Profile")
            .with_prop("user", json!({"name": "Alice", "age": 30, "active": true})),
    );
    app.overlay.toggle();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("▶ user: 3"), "{text}");
    assert!(text.contains("object"));
}

#[test]
fn test_null_prop_is_classified_not_undefined() {
    let mut terminal = new_terminal();
    let mut app =
        InspectorApp::new(WrappedElement::new("Note").with_prop("note", json!(null)));
    app.overlay.toggle();
    draw(&mut terminal, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("null"));
    assert!(!text.contains("undefined"));
}
