//! Inspector view: the trigger control, the wrapped-element panel, and
//! the props table overlay.
//!
//! The view is pure composition: discovery supplies the row keys,
//! classification fills the Type column, and the collapse flattener
//! drives each Value cell. Interactive regions (trigger, resize
//! handles, collapse headers) are registered as hit areas while
//! rendering, so the event loop always hit-tests against the frame on
//! screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::InspectorApp;
use crate::collapse::{flatten, ValueRow};
use crate::discover::discover;
use crate::overlay::Surfaces;
use crate::resize::{ColumnId, ColumnWidths};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_HANDLE, COLOR_HEADER, COLOR_HEADER_BG, COLOR_OVERLAY_BG,
    COLOR_TRIGGER, COLOR_TRIGGER_ACTIVE, COLOR_UNDEFINED, COLOR_VALUE,
};

/// Text of the trigger badge.
pub const TRIGGER_LABEL: &str = "[PI]";

/// Title shown on the overlay border.
pub const OVERLAY_TITLE: &str = " Props Inspector ";

/// Glyph drawn on column resize handles.
const HANDLE_GLYPH: &str = "║";

/// Cells of indentation per nesting level in the Value column.
const INDENT_WIDTH: usize = 2;

/// Render the whole inspector: wrapper panel with trigger always, the
/// overlay table only while visible.
pub fn render_inspector(frame: &mut Frame, area: Rect, app: &mut InspectorApp) {
    let wrapper = render_wrapper(frame, area, app);

    if app.overlay.is_visible() {
        let overlay = overlay_rect(area);
        render_overlay(frame, overlay, app);
        app.overlay.record_surfaces(Surfaces { overlay, wrapper });
    }
}

/// Render the wrapped element's panel plus the trigger badge next to
/// it. Returns the combined wrapper surface used for outside-click
/// containment.
fn render_wrapper(frame: &mut Frame, area: Rect, app: &mut InspectorApp) -> Rect {
    let panel = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(10).min(44),
        height: area.height.saturating_sub(2).min(7),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", app.element.name),
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "(wrapped element output)",
            Style::default().fg(COLOR_DIM),
        ))),
        inner,
    );

    let trigger = Rect {
        x: (panel.x + panel.width + 1).min(area.x + area.width.saturating_sub(1)),
        y: panel.y,
        width: (TRIGGER_LABEL.len() as u16).min(area.width),
        height: 1,
    };
    let trigger_style = if app.overlay.is_visible() {
        Style::default()
            .fg(COLOR_TRIGGER_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else if app.pointer_over(trigger) {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TRIGGER)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(TRIGGER_LABEL, trigger_style))),
        trigger,
    );
    app.hit_areas.register(
        trigger,
        ClickAction::ToggleOverlay,
        Some(Style::default().add_modifier(Modifier::BOLD)),
    );

    panel.union(trigger)
}

/// Centered overlay rect within the available area.
fn overlay_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(76);
    let height = area.height.saturating_sub(3).min(20);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn render_overlay(frame: &mut Frame, overlay: Rect, app: &mut InspectorApp) {
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_OVERLAY_BG))
        .title(Span::styled(
            OVERLAY_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    render_table(frame, inner, app);
}

fn render_table(frame: &mut Frame, inner: Rect, app: &mut InspectorApp) {
    if inner.width < 3 || inner.height < 2 {
        return;
    }

    let widths = rendered_widths(app.resizer.widths(), inner.width);
    let origins = column_origins(inner.x, widths);

    render_header_row(frame, inner, app, widths, origins);

    let names = discover(&app.element);
    let bottom = inner.y + inner.height;
    let mut y = inner.y + 1;

    for name in names {
        if y >= bottom {
            break;
        }
        let (type_cell, value_rows) = match app.element.prop(&name) {
            Some(value) => (
                Span::styled(
                    crate::value::classify(value).as_str(),
                    Style::default().fg(COLOR_HEADER),
                ),
                flatten(&name, &name, value, 0, &app.collapse),
            ),
            // Absent key: displayed literally, never classified.
            None => (
                Span::styled("undefined", Style::default().fg(COLOR_UNDEFINED)),
                vec![ValueRow {
                    toggle_path: None,
                    text: "undefined".to_string(),
                    depth: 0,
                }],
            ),
        };

        render_cell_line(
            frame,
            Rect::new(origins[0], y, widths[0], 1),
            Span::styled(name.clone(), Style::default().fg(COLOR_HEADER)),
        );
        render_cell_line(frame, Rect::new(origins[1], y, widths[1], 1), type_cell);

        let remaining = bottom - y;
        for (offset, row) in value_rows.iter().take(remaining as usize).enumerate() {
            let line_y = y + offset as u16;
            render_value_row(frame, app, row, origins[2], line_y, widths[2]);
        }
        y += (value_rows.len().max(1) as u16).min(remaining);
    }
}

fn render_header_row(
    frame: &mut Frame,
    inner: Rect,
    app: &mut InspectorApp,
    widths: [u16; 3],
    origins: [u16; 3],
) {
    for (index, column) in ColumnId::ALL.iter().enumerate() {
        let cell = Rect::new(origins[index], inner.y, widths[index], 1);
        if cell.width == 0 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                column.label(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().bg(COLOR_HEADER_BG)),
            cell,
        );

        // 1-cell drag handle at the column's right edge.
        let handle = Rect::new(cell.x + cell.width - 1, cell.y, 1, 1);
        let handle_style = if app.pointer_over(handle) {
            Style::default().fg(COLOR_HEADER).bg(COLOR_HEADER_BG)
        } else {
            Style::default().fg(COLOR_HANDLE).bg(COLOR_HEADER_BG)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(HANDLE_GLYPH, handle_style))),
            handle,
        );
        app.hit_areas.register(
            handle,
            ClickAction::BeginResize(*column),
            Some(Style::default().fg(COLOR_HEADER)),
        );
    }
}

fn render_value_row(
    frame: &mut Frame,
    app: &mut InspectorApp,
    row: &ValueRow,
    x: u16,
    y: u16,
    width: u16,
) {
    if width == 0 {
        return;
    }
    let indent = (row.depth * INDENT_WIDTH).min(width as usize - 1) as u16;
    let cell = Rect::new(x + indent, y, width - indent, 1);

    let base = if row.toggle_path.is_some() {
        Style::default().fg(COLOR_HEADER)
    } else if row.text == "undefined" {
        Style::default().fg(COLOR_UNDEFINED)
    } else {
        Style::default().fg(COLOR_VALUE)
    };
    let style = if row.toggle_path.is_some() && app.pointer_over(cell) {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(row.text.clone(), style))),
        cell,
    );

    if let Some(path) = &row.toggle_path {
        // Hit area covers the visible header text, not the blank tail.
        let text_width = (row.text.width() as u16).min(cell.width);
        let hit = Rect::new(cell.x, cell.y, text_width.max(1), 1);
        app.hit_areas.register(
            hit,
            ClickAction::ToggleCollapse(path.clone()),
            Some(Style::default().add_modifier(Modifier::UNDERLINED)),
        );
    }
}

fn render_cell_line(frame: &mut Frame, cell: Rect, span: Span<'_>) {
    if cell.width == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(Line::from(span)), cell);
}

/// Map stored column widths onto the available terminal cells,
/// proportionally to the stored values. Negative stored widths count as
/// zero here; the stored value itself is left untouched so resize math
/// stays exact.
fn rendered_widths(widths: &ColumnWidths, available: u16) -> [u16; 3] {
    let stored: Vec<i64> = ColumnId::ALL
        .iter()
        .map(|c| i64::from(widths.get(*c).max(0)))
        .collect();
    let total: i64 = stored.iter().sum();
    if total == 0 {
        let third = available / 3;
        return [third, third, available - 2 * third];
    }
    let first = (i64::from(available) * stored[0] / total) as u16;
    let second = (i64::from(available) * stored[1] / total) as u16;
    [first, second, available - first - second]
}

fn column_origins(x: u16, widths: [u16; 3]) -> [u16; 3] {
    [x, x + widths[0], x + widths[0] + widths[1]]
}
