//! Overlay visibility lifecycle with outside-click dismissal.
//!
//! The controller cycles between `Hidden` and `Visible` for the
//! inspector's entire mounted lifetime. While visible, the rendered
//! overlay and trigger/wrapper surfaces are recorded each frame;
//! a pointer-down landing outside both dismisses the overlay. The
//! surface record exists iff the overlay is visible, which is the
//! scoped equivalent of attaching the outside-click listener only
//! while visible.

use ratatui::layout::Rect;

/// The two regions a pointer-down may land on without dismissing the
/// overlay: the overlay itself and the trigger/wrapper around the
/// inspected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    pub overlay: Rect,
    pub wrapper: Rect,
}

impl Surfaces {
    fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.overlay, x, y) || rect_contains(self.wrapper, x, y)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Owns overlay visibility. Initial state is hidden.
#[derive(Debug, Default)]
pub struct OverlayController {
    visible: bool,
    surfaces: Option<Surfaces>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Trigger click: hidden becomes visible and vice versa.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.surfaces = None;
        }
        tracing::debug!(visible = self.visible, "overlay toggled");
    }

    /// Record the rendered surfaces for outside-click testing. Called
    /// during render; ignored while hidden so the record can never
    /// outlive visibility.
    pub fn record_surfaces(&mut self, surfaces: Surfaces) {
        if self.visible {
            self.surfaces = Some(surfaces);
        }
    }

    /// Handle a pointer-down that hit no interactive area. Returns true
    /// if the overlay was dismissed. Inert while hidden, and until the
    /// first frame after becoming visible has recorded surfaces.
    pub fn dismiss_if_outside(&mut self, x: u16, y: u16) -> bool {
        if !self.visible {
            return false;
        }
        let Some(surfaces) = self.surfaces else {
            return false;
        };
        if surfaces.contains(x, y) {
            return false;
        }
        self.visible = false;
        self.surfaces = None;
        tracing::debug!(x, y, "overlay dismissed by outside click");
        true
    }
}
