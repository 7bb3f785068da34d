//! Column widths and the pointer-drag resize gesture.
//!
//! Widths live in abstract units (the stored value is authoritative;
//! the renderer maps it onto available terminal cells). They are
//! mutable only through [`ColumnResizer`], and only while a drag
//! session is active. The `Option<DragSession>` doubles as the scoped
//! listener handle: move events mutate widths iff it is `Some`, and
//! every exit path clears it.

/// Identifier for one of the three inspector table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    PropName,
    Type,
    PropValue,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [ColumnId; 3] = [ColumnId::PropName, ColumnId::Type, ColumnId::PropValue];

    /// Header label for the column.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnId::PropName => "Prop Name",
            ColumnId::Type => "Type",
            ColumnId::PropValue => "Prop Value",
        }
    }
}

/// Width of each column in stored units. Defaults match the original
/// inspector: 200 / 100 / 300.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    prop_name: i32,
    kind: i32,
    prop_value: i32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            prop_name: 200,
            kind: 100,
            prop_value: 300,
        }
    }
}

impl ColumnWidths {
    pub fn get(&self, column: ColumnId) -> i32 {
        match column {
            ColumnId::PropName => self.prop_name,
            ColumnId::Type => self.kind,
            ColumnId::PropValue => self.prop_value,
        }
    }

    fn set(&mut self, column: ColumnId, width: i32) {
        match column {
            ColumnId::PropName => self.prop_name = width,
            ColumnId::Type => self.kind = width,
            ColumnId::PropValue => self.prop_value = width,
        }
    }
}

/// Transient state of an in-progress resize gesture.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    column: ColumnId,
    start_x: u16,
    start_width: i32,
}

/// Owns column widths and the single active drag session.
#[derive(Debug, Default)]
pub struct ColumnResizer {
    widths: ColumnWidths,
    drag: Option<DragSession>,
}

impl ColumnResizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    pub fn width(&self, column: ColumnId) -> i32 {
        self.widths.get(column)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag session, capturing the column's current width and
    /// the pointer's starting x. Sole state-mutating entry reachable
    /// from a pointer-down on a resize handle. Single-pointer
    /// assumption: a second down during a session does not occur.
    pub fn begin_drag(&mut self, x: u16, column: ColumnId) {
        self.drag = Some(DragSession {
            column,
            start_x: x,
            start_width: self.widths.get(column),
        });
        tracing::debug!(?column, x, "resize drag started");
    }

    /// Apply a pointer move at horizontal position `x`. Returns true if
    /// a width changed. No-op when no session is active.
    ///
    /// The new width is exactly `start_width + (x - start_x)`, with no
    /// clamping: widths may go to zero, negative, or arbitrarily large.
    /// Candidate clamp if usability ever wins over fidelity:
    /// `new_width.max(20)`.
    pub fn drag_to(&mut self, x: u16) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        let new_width = session.start_width + (i32::from(x) - i32::from(session.start_x));
        if self.widths.get(session.column) == new_width {
            return false;
        }
        self.widths.set(session.column, new_width);
        true
    }

    /// End the active session. No further width changes occur until
    /// the next `begin_drag`.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("resize drag ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths() {
        let widths = ColumnWidths::default();
        assert_eq!(widths.get(ColumnId::PropName), 200);
        assert_eq!(widths.get(ColumnId::Type), 100);
        assert_eq!(widths.get(ColumnId::PropValue), 300);
    }

    #[test]
    fn test_resize_linearity() {
        let mut resizer = ColumnResizer::new();
        let w0 = resizer.width(ColumnId::Type);

        resizer.begin_drag(50, ColumnId::Type);
        assert!(resizer.drag_to(65));
        assert_eq!(resizer.width(ColumnId::Type), w0 + 15);

        // Other columns untouched.
        assert_eq!(resizer.width(ColumnId::PropName), 200);
        assert_eq!(resizer.width(ColumnId::PropValue), 300);
    }

    #[test]
    fn test_drag_left_can_go_negative() {
        let mut resizer = ColumnResizer::new();
        resizer.begin_drag(200, ColumnId::Type);
        assert!(resizer.drag_to(50));
        assert_eq!(resizer.width(ColumnId::Type), 100 - 150);
    }

    #[test]
    fn test_moves_relative_to_start_not_cumulative() {
        let mut resizer = ColumnResizer::new();
        resizer.begin_drag(10, ColumnId::PropName);
        resizer.drag_to(20);
        resizer.drag_to(30);
        resizer.drag_to(15);
        // Each move recomputes from the captured start width.
        assert_eq!(resizer.width(ColumnId::PropName), 205);
    }

    #[test]
    fn test_no_mutation_without_session() {
        let mut resizer = ColumnResizer::new();
        assert!(!resizer.drag_to(500));
        assert_eq!(*resizer.widths(), ColumnWidths::default());
    }

    #[test]
    fn test_end_drag_detaches() {
        let mut resizer = ColumnResizer::new();
        resizer.begin_drag(10, ColumnId::PropValue);
        assert!(resizer.is_dragging());
        resizer.drag_to(12);
        resizer.end_drag();
        assert!(!resizer.is_dragging());

        // Later moves are ignored until a new session begins.
        assert!(!resizer.drag_to(100));
        assert_eq!(resizer.width(ColumnId::PropValue), 302);
    }

    #[test]
    fn test_drag_to_same_position_reports_unchanged() {
        let mut resizer = ColumnResizer::new();
        resizer.begin_drag(10, ColumnId::Type);
        assert!(!resizer.drag_to(10));
    }
}
