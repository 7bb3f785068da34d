//! Hit area system for pointer interactions.
//!
//! Components register clickable regions while rendering, and the event
//! loop queries the registry to decide what a mouse event should do.
//! The registry is cleared at the start of every render cycle, so hit
//! areas always describe the frame currently on screen.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::resize::ColumnId;

/// Action triggered by a pointer-down on a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle the inspector overlay (the trigger control).
    ToggleOverlay,
    /// Toggle collapse state for the value-tree node at this path.
    ToggleCollapse(String),
    /// Begin a column resize drag on this column's handle.
    BeginResize(ColumnId),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks.
    pub rect: Rect,
    /// The action to trigger when this area is clicked.
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area.
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
///
/// Areas registered later sit on top for overlapping regions, so the
/// overlay's areas win over anything rendered beneath it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state. Call at the
    /// start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Find the action for the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Update hover tracking from a mouse move. Returns true when the
    /// hovered area changed and a redraw is needed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self
            .areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Hover style for a rect, if that rect is the hovered area.
    pub fn hover_style_for(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
