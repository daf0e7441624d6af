#![allow(dead_code)]

use table_cells_core::{Mask, MaskKind};
use table_cells_grid::TableMasks;

/// Line masks of a synthetic bordered table.
pub struct SyntheticTable {
    pub horizontal: Mask,
    pub vertical: Mask,
    pub intersection: Mask,
}

impl SyntheticTable {
    /// Full-length lines of the given thickness at each row and column
    /// position. The image is sized to fit the last line.
    pub fn new(rows: &[i32], cols: &[i32], thickness: i32) -> Self {
        assert!(thickness > 0, "line thickness must be positive");
        let width = (*cols.iter().max().expect("cols") + thickness) as usize;
        let height = (*rows.iter().max().expect("rows") + thickness) as usize;

        let mut horizontal = Mask::new(width, height);
        for &r in rows {
            for dr in 0..thickness {
                for c in 0..width {
                    horizontal.set((r + dr) as usize, c, 255);
                }
            }
        }
        let mut vertical = Mask::new(width, height);
        for &c in cols {
            for dc in 0..thickness {
                for r in 0..height {
                    vertical.set(r, (c + dc) as usize, 255);
                }
            }
        }
        let intersection = Mask::and(&horizontal.view(), &vertical.view(), MaskKind::Vertical)
            .expect("same size");
        Self {
            horizontal,
            vertical,
            intersection,
        }
    }

    /// Clear vertical-line pixels in column `col` for rows `rows`.
    pub fn cut_vertical(&mut self, col: i32, rows: std::ops::Range<i32>) {
        for r in rows {
            self.vertical.set(r as usize, col as usize, 0);
        }
        self.refresh_intersection();
    }

    /// Clear horizontal-line pixels in row `row` for columns `cols`.
    pub fn cut_horizontal(&mut self, row: i32, cols: std::ops::Range<i32>) {
        for c in cols {
            self.horizontal.set(row as usize, c as usize, 0);
        }
        self.refresh_intersection();
    }

    fn refresh_intersection(&mut self) {
        self.intersection = Mask::and(
            &self.horizontal.view(),
            &self.vertical.view(),
            MaskKind::Vertical,
        )
        .expect("same size");
    }

    pub fn masks(&self) -> TableMasks<'_> {
        TableMasks {
            horizontal: self.horizontal.view(),
            vertical: self.vertical.view(),
            intersection: self.intersection.view(),
        }
    }
}

pub const ROWS: [i32; 4] = [0, 50, 100, 150];
pub const COLS: [i32; 4] = [0, 60, 120, 180];
