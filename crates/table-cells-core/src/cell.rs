use serde::{Deserialize, Serialize};

/// Position of a lattice node: indices into the horizontal and vertical
/// grid-line lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

/// A validated table cell.
///
/// Pixel bounds are suitable for a direct crop of the source image
/// (`top..bottom`, `left..right`). Grid indices are zero-based and
/// end-exclusive, so a single cell has `row_end == row_start + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRectangle {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl CellRectangle {
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn row_span(&self) -> usize {
        self.row_end - self.row_start
    }

    #[inline]
    pub fn col_span(&self) -> usize {
        self.col_end - self.col_start
    }

    /// True when the cell covers more than one grid row or column.
    #[inline]
    pub fn is_merged(&self) -> bool {
        self.row_span() > 1 || self.col_span() > 1
    }
}
