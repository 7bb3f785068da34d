//! Common test utilities for integration tests.
//!
//! Helpers for rendering the inspector into a `TestBackend`, reading
//! the buffer back as text, and driving pointer interactions against
//! the registered hit areas.

#![allow(dead_code)]

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use propscope::app::InspectorApp;
use propscope::ui;
use propscope::ui::interaction::ClickAction;
use ratatui::{backend::TestBackend, Terminal};

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 30;

pub fn new_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal")
}

/// Render one frame and clear the dirty flag, like the event loop does.
pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut InspectorApp) {
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("draw frame");
    app.needs_redraw = false;
}

/// Buffer contents as text, one line per terminal row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find a point whose topmost hit area matches the predicate. Panics
/// if no registered area matches, which means the expected control was
/// not rendered.
pub fn find_area<F>(app: &InspectorApp, predicate: F) -> (u16, u16)
where
    F: Fn(&ClickAction) -> bool,
{
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if let Some(action) = app.hit_areas.hit_test(x, y) {
                if predicate(&action) {
                    return (x, y);
                }
            }
        }
    }
    panic!("no hit area matched the predicate");
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

/// Left pointer-down at the given position.
pub fn click(app: &mut InspectorApp, x: u16, y: u16) {
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
}

/// Left-button drag move to the given position.
pub fn drag(app: &mut InspectorApp, x: u16, y: u16) {
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x, y));
}

/// Left pointer-up at the given position.
pub fn release(app: &mut InspectorApp, x: u16, y: u16) {
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y));
}
