//! Geometric primitives for dialog layout.
//!
//! Two coordinate spaces are involved when translating a dialog:
//!
//! - [`SourceRect`] - a rectangle in dialog units, as written in the resource script
//! - [`GridCell`] - a placement on the target grid container
//!
//! Both share the screen convention of an origin at the top-left corner with
//! X growing rightward and Y growing downward:
//!
//! ```text
//!   (0,0) ────────► +X / column
//!     │
//!     │
//!     ▼
//!    +Y / row
//! ```

use std::fmt;

/// A rectangle in dialog units.
///
/// Values are signed as in the resource format; controls may sit partly
/// outside the dialog.
///
/// # Examples
///
/// ```
/// # use rcgtk_core::geometry::SourceRect;
/// let rect = SourceRect::new(8, 12, 120, 10);
/// assert_eq!(rect.x(), 8);
/// assert_eq!(rect.height(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl SourceRect {
    /// Creates a new source rectangle from its top-left corner and extent.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for SourceRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A placement on the target grid: column, row and the spans along each axis.
///
/// Spans are never zero. Constructing a cell with a zero span yields a span of
/// one so every element occupies at least one grid cell.
///
/// # Examples
///
/// ```
/// # use rcgtk_core::geometry::GridCell;
/// let cell = GridCell::new(1, 3, 15, 0);
/// assert_eq!(cell.column(), 1);
/// assert_eq!(cell.row_span(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    column: u32,
    row: u32,
    column_span: u32,
    row_span: u32,
}

impl GridCell {
    /// Creates a grid cell, clamping both spans to a minimum of one.
    pub fn new(column: u32, row: u32, column_span: u32, row_span: u32) -> Self {
        Self {
            column,
            row,
            column_span: column_span.max(1),
            row_span: row_span.max(1),
        }
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column_span(&self) -> u32 {
        self.column_span
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_accessors() {
        let rect = SourceRect::new(1, 2, 3, 4);

        assert_eq!(rect.x(), 1);
        assert_eq!(rect.y(), 2);
        assert_eq!(rect.width(), 3);
        assert_eq!(rect.height(), 4);
        assert_eq!(rect.to_string(), "1, 2, 3, 4");
    }

    #[test]
    fn test_source_rect_negative_origin() {
        let rect = SourceRect::new(-4, -2, 30, 8);

        assert_eq!(rect.x(), -4);
        assert_eq!(rect.to_string(), "-4, -2, 30, 8");
    }

    #[test]
    fn test_grid_cell_clamps_spans() {
        let cell = GridCell::new(2, 5, 0, 0);

        assert_eq!(cell.column(), 2);
        assert_eq!(cell.row(), 5);
        assert_eq!(cell.column_span(), 1);
        assert_eq!(cell.row_span(), 1);
    }

    #[test]
    fn test_grid_cell_default_occupies_one_cell() {
        let cell = GridCell::default();

        assert_eq!(cell, GridCell::new(0, 0, 1, 1));
    }
}
