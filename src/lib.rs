//! Propscope - a props-inspector overlay for ratatui UIs
//!
//! Attach an inspector to a rendered element and examine the
//! properties it was constructed with: a collapsible value tree,
//! shallow kind classification, and pointer-resizable columns, toggled
//! from a trigger badge and dismissed by clicking outside.
//!
//! This library exposes modules for use in integration tests and by
//! embedding applications; `src/main.rs` is a self-contained demo.

pub mod app;
pub mod collapse;
pub mod discover;
pub mod element;
pub mod error;
pub mod overlay;
pub mod resize;
pub mod terminal;
pub mod ui;
pub mod value;
