//! Inspector application state and event handling.
//!
//! One `InspectorApp` is mounted per wrapped element. All state
//! mutations happen synchronously inside the key/mouse handlers; each
//! shared piece of state (widths, collapse map, visibility) is owned by
//! exactly one component and mutated only through it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::collapse::CollapseState;
use crate::element::WrappedElement;
use crate::overlay::OverlayController;
use crate::resize::ColumnResizer;
use crate::ui::interaction::{handle_click_action, HitAreaRegistry};

/// Mounted inspector instance attached to a single wrapped element.
#[derive(Debug)]
pub struct InspectorApp {
    /// The element under inspection. Read-only from the inspector's
    /// point of view.
    pub element: WrappedElement,
    pub overlay: OverlayController,
    pub collapse: CollapseState,
    pub resizer: ColumnResizer,
    pub hit_areas: HitAreaRegistry,
    /// Last known pointer position, for hover styling.
    pub pointer: Option<(u16, u16)>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl InspectorApp {
    /// Mount the inspector over an element. Collapse state starts
    /// empty, the overlay hidden, column widths at their defaults.
    pub fn new(element: WrappedElement) -> Self {
        Self {
            element,
            overlay: OverlayController::new(),
            collapse: CollapseState::new(),
            resizer: ColumnResizer::new(),
            hit_areas: HitAreaRegistry::new(),
            pointer: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the pointer currently sits inside `rect`.
    pub fn pointer_over(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|(x, y)| {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
    }

    /// Global keybinds: `q` or Ctrl+C quits the demo.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Dispatch a mouse event.
    ///
    /// Pointer-down hit-tests the registered areas first; a miss is
    /// then offered to the overlay's outside-click dismissal. Drag
    /// moves feed the active resize session, pointer-up ends it, and
    /// plain moves update hover state.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let (x, y) = (event.column, event.row);
        self.pointer = Some((x, y));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(x, y) {
                    handle_click_action(self, action, x);
                } else if self.overlay.dismiss_if_outside(x, y) {
                    // Hiding the overlay tears down any in-flight drag.
                    self.resizer.end_drag();
                    self.mark_dirty();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.resizer.drag_to(x) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.resizer.end_drag();
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(x, y) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }
}
