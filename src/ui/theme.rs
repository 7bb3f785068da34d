//! Color theme constants for the inspector UI
//!
//! Cosmetic only: any restyle is fine as long as table semantics stay
//! intact.

use ratatui::style::Color;

/// Primary border color for panels and the overlay frame.
pub const COLOR_BORDER: Color = Color::Rgb(74, 109, 124); // #4A6D7C

/// Header row background in the inspector table.
pub const COLOR_HEADER_BG: Color = Color::Rgb(30, 42, 48);

/// Header and title text.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (wrapper placeholder, hints).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Resize handle at a column's right edge.
pub const COLOR_HANDLE: Color = Color::Rgb(127, 140, 141); // #7F8C8D

/// Trigger badge in its idle state.
pub const COLOR_TRIGGER: Color = Color::Gray;

/// Trigger badge while the overlay is visible.
pub const COLOR_TRIGGER_ACTIVE: Color = Color::LightCyan;

/// Monospace "console" value text in the Value column.
pub const COLOR_VALUE: Color = Color::LightGreen;

/// The literal `undefined` shown for declared-but-missing props.
pub const COLOR_UNDEFINED: Color = Color::DarkGray;

/// Background for the overlay surface.
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(10, 15, 35);
