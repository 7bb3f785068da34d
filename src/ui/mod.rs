//! UI rendering for the props inspector.
//!
//! The inspector occupies the whole frame: the wrapped element's panel
//! with the trigger badge next to it, and the props table overlay on
//! top while visible. Hit areas are registered during rendering and
//! consumed by the event loop (see [`interaction`]).

mod inspector;
pub mod interaction;
mod theme;

pub use inspector::{render_inspector, OVERLAY_TITLE, TRIGGER_LABEL};
pub use theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_HANDLE, COLOR_HEADER, COLOR_HEADER_BG, COLOR_OVERLAY_BG,
    COLOR_TRIGGER, COLOR_TRIGGER_ACTIVE, COLOR_UNDEFINED, COLOR_VALUE,
};

use ratatui::Frame;

use crate::app::InspectorApp;

/// Render the full UI for one frame.
///
/// Clears the hit area registry first so registered areas always match
/// what is on screen.
pub fn render(frame: &mut Frame, app: &mut InspectorApp) {
    app.hit_areas.clear();
    render_inspector(frame, frame.area(), app);
}
