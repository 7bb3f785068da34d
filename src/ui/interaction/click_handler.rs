//! Click action handler for the pointer interaction system.
//!
//! Processes click actions dispatched from the hit area registry,
//! translating them into inspector state mutations.

use super::hit_area::ClickAction;
use crate::app::InspectorApp;

/// Handle a click action by updating inspector state.
///
/// Called from the event loop when a pointer-down lands on a registered
/// hit area. `pointer_x` is the column of the originating mouse event,
/// needed to anchor a resize drag.
pub fn handle_click_action(app: &mut InspectorApp, action: ClickAction, pointer_x: u16) {
    app.mark_dirty();

    match action {
        ClickAction::ToggleOverlay => {
            app.overlay.toggle();
            tracing::debug!(visible = app.overlay.is_visible(), "Click: ToggleOverlay");
        }
        ClickAction::ToggleCollapse(path) => {
            app.collapse.toggle(&path);
            tracing::debug!(
                path,
                collapsed = app.collapse.is_collapsed(&path),
                "Click: ToggleCollapse"
            );
        }
        ClickAction::BeginResize(column) => {
            app.resizer.begin_drag(pointer_x, column);
            tracing::debug!(?column, pointer_x, "Click: BeginResize");
        }
    }
}
