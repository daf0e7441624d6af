//! Greedy search for border-validated cells on the lattice.
//!
//! For every lattice node taken as a top-left corner, right borders are
//! tried nearest first and, for each, bottom lines nearest first. The first
//! rectangle whose bottom corners exist and whose four borders pass the
//! continuity check is accepted, and the search moves on to the next
//! top-left corner. Single-span cells therefore win over spanning ones.

use table_cells_core::CellRectangle;

use crate::continuity::{continuity_deficit, LinePixels};
use crate::lattice::Lattice;
use crate::TableGridParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Cells found by [`assemble_cells`] with search statistics.
#[derive(Clone, Debug, Default)]
pub struct AssembleOutput {
    pub cells: Vec<CellRectangle>,
    /// Candidate rectangles evaluated.
    pub candidates: u64,
    /// The search hit `max_candidate_checks` before finishing.
    pub truncated: bool,
}

struct BorderCheck<'a> {
    pixels: &'a LinePixels,
    jitter: i32,
    tolerance_x: i32,
    tolerance_y: i32,
}

impl BorderCheck<'_> {
    fn vertical(&self, col: i32, top: i32, bottom: i32) -> bool {
        let score = self.pixels.vertical_score(col, top, bottom, self.jitter);
        continuity_deficit(score, top, bottom) <= self.tolerance_y
    }

    fn horizontal(&self, row: i32, left: i32, right: i32) -> bool {
        let score = self.pixels.horizontal_score(row, left, right, self.jitter);
        continuity_deficit(score, left, right) <= self.tolerance_x
    }

    fn rectangle(&self, top: i32, bottom: i32, left: i32, right: i32) -> bool {
        self.vertical(left, top, bottom)
            && self.vertical(right, top, bottom)
            && self.horizontal(top, left, right)
            && self.horizontal(bottom, left, right)
    }
}

/// Search `lattice` for cells whose borders are present in `pixels`.
///
/// Returns an empty list when either axis has fewer than two lines.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip_all,
        fields(
            rows = lattice.horizontal_lines().len(),
            cols = lattice.vertical_lines().len(),
            nodes = lattice.node_count()
        )
    )
)]
pub fn assemble_cells(
    lattice: &Lattice,
    pixels: &LinePixels,
    params: &TableGridParams,
) -> AssembleOutput {
    let h = lattice.horizontal_lines();
    let v = lattice.vertical_lines();
    let mut out = AssembleOutput::default();
    if h.len() < 2 || v.len() < 2 {
        return out;
    }

    let check = BorderCheck {
        pixels,
        jitter: params.jitter,
        tolerance_x: params.line_tolerance_x,
        tolerance_y: params.line_tolerance_y,
    };
    let limit = params.max_candidate_checks;
    let last_row = h.len() - 1;

    'rows: for row in 0..last_row {
        let bucket = lattice.row_bucket(row);
        if bucket.len() < 2 {
            continue;
        }
        let top = h[row];

        for (k, &col_left) in bucket[..bucket.len() - 1].iter().enumerate() {
            let left = v[col_left];

            'corner: for &col_right in &bucket[k + 1..] {
                let right = v[col_right];

                for below in (row + 1)..=last_row {
                    if limit.is_some_and(|l| out.candidates >= l) {
                        out.truncated = true;
                        break 'rows;
                    }
                    out.candidates += 1;

                    if !(lattice.contains(below, col_left) && lattice.contains(below, col_right)) {
                        continue;
                    }
                    let bottom = h[below];
                    if check.rectangle(top, bottom, left, right) {
                        out.cells.push(CellRectangle {
                            top,
                            bottom,
                            left,
                            right,
                            row_start: row,
                            row_end: below,
                            col_start: col_left,
                            col_end: col_right,
                        });
                        break 'corner;
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_cells_core::PixelCoords;

    /// Full-length lines at the given positions, plus their intersections.
    fn grid(rows: &[i32], cols: &[i32]) -> (Lattice, LinePixels) {
        let (w, hgt) = (*cols.last().unwrap(), *rows.last().unwrap());
        let mut px = PixelCoords::default();
        for &r in rows {
            for c in 0..=w {
                px.push(r, c);
            }
        }
        for &c in cols {
            for r in 0..=hgt {
                px.push(r, c);
            }
        }
        let nodes: PixelCoords = rows
            .iter()
            .flat_map(|&r| cols.iter().map(move |&c| (r, c)))
            .collect();
        (
            Lattice::snap(rows, cols, &nodes, 10),
            LinePixels::new([&px]),
        )
    }

    #[test]
    fn regular_grid_yields_single_cells_in_row_order() {
        let (lattice, pixels) = grid(&[0, 40, 80], &[0, 30, 70]);
        let out = assemble_cells(&lattice, &pixels, &TableGridParams::default());
        assert!(!out.truncated);
        let idx: Vec<_> = out
            .cells
            .iter()
            .map(|c| (c.row_start, c.col_start, c.row_span(), c.col_span()))
            .collect();
        assert_eq!(idx, vec![(0, 0, 1, 1), (0, 1, 1, 1), (1, 0, 1, 1), (1, 1, 1, 1)]);
        assert_eq!(out.cells[1].left, 30);
        assert_eq!(out.cells[1].right, 70);
        assert_eq!(out.cells[3].top, 40);
        assert_eq!(out.cells[3].bottom, 80);
    }

    #[test]
    fn single_line_axis_has_no_cells() {
        let (lattice, pixels) = grid(&[0], &[0, 30, 70]);
        let out = assemble_cells(&lattice, &pixels, &TableGridParams::default());
        assert!(out.cells.is_empty());
        assert_eq!(out.candidates, 0);
    }

    #[test]
    fn missing_bottom_corner_extends_the_span() {
        let rows = [0, 40, 80];
        let cols = [0, 30];
        let (_, pixels) = grid(&rows, &cols);
        // No node at (40, 30): the cell must close on the next line down.
        let nodes: PixelCoords = [(0, 0), (0, 30), (40, 0), (80, 0), (80, 30)]
            .into_iter()
            .collect();
        let lattice = Lattice::snap(&rows, &cols, &nodes, 10);
        let out = assemble_cells(&lattice, &pixels, &TableGridParams::default());
        assert_eq!(out.cells.len(), 1);
        let cell = out.cells[0];
        assert_eq!((cell.top, cell.bottom), (0, 80));
        assert_eq!((cell.row_start, cell.row_end), (0, 2));
    }

    #[test]
    fn candidate_cap_truncates_search() {
        let (lattice, pixels) = grid(&[0, 40, 80], &[0, 30, 70]);
        let params = TableGridParams {
            max_candidate_checks: Some(2),
            ..TableGridParams::default()
        };
        let out = assemble_cells(&lattice, &pixels, &params);
        assert!(out.truncated);
        assert_eq!(out.candidates, 2);
        assert_eq!(out.cells.len(), 2);
    }
}
