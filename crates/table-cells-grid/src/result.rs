use serde::{Deserialize, Serialize};
use table_cells_core::CellRectangle;

use crate::NoCellsReason;

/// Per-run diagnostics of the grid reconstruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSummary {
    /// Clustered horizontal line positions (y), ascending.
    pub horizontal_lines: Vec<i32>,
    /// Clustered vertical line positions (x), ascending.
    pub vertical_lines: Vec<i32>,
    /// Raw intersection pixels.
    pub intersection_pixels: usize,
    /// Distinct intersections snapped onto the grid.
    pub lattice_nodes: usize,
    /// Candidate rectangles evaluated by the search.
    pub candidates: u64,
    /// The search stopped at `max_candidate_checks`.
    pub truncated: bool,
}

/// Output of a table grid detection run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGridResult {
    /// Validated cells in discovery order (row by row, left to right).
    pub cells: Vec<CellRectangle>,
    pub summary: GridSummary,
    /// Set whenever `cells` is empty.
    pub reason: Option<NoCellsReason>,
}

impl TableGridResult {
    pub(crate) fn empty(reason: NoCellsReason, summary: GridSummary) -> Self {
        Self {
            cells: Vec::new(),
            summary,
            reason: Some(reason),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of grid rows (spaces between horizontal lines).
    pub fn grid_rows(&self) -> usize {
        self.summary.horizontal_lines.len().saturating_sub(1)
    }

    /// Number of grid columns (spaces between vertical lines).
    pub fn grid_cols(&self) -> usize {
        self.summary.vertical_lines.len().saturating_sub(1)
    }

    /// Cells, or the reason there are none.
    pub fn into_cells(self) -> Result<Vec<CellRectangle>, NoCellsReason> {
        match self.reason {
            Some(reason) if self.cells.is_empty() => Err(reason),
            _ => Ok(self.cells),
        }
    }
}
