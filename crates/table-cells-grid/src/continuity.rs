//! Border continuity scoring against raw line pixels.
//!
//! A border at primary position `p` spanning `[lo, hi)` along the secondary
//! axis scores the number of distinct secondary values observed among line
//! pixels whose primary coordinate is within `p ± jitter`. A perfect border
//! scores `hi - lo`.

use std::collections::HashMap;

use table_cells_core::PixelCoords;

/// Direct form of the score over parallel coordinate arrays.
///
/// `primary[i]` and `secondary[i]` describe one pixel. This scans every
/// pixel; [`LinePixels`] answers the same query from an index.
pub fn continuity_score(
    primary: &[i32],
    secondary: &[i32],
    p: i32,
    lo: i32,
    hi: i32,
    jitter: i32,
) -> usize {
    if hi <= lo || jitter < 0 {
        return 0;
    }
    let mut seen = vec![false; (hi - lo) as usize];
    let mut count = 0;
    for (&a, &b) in primary.iter().zip(secondary) {
        if a.abs_diff(p) <= jitter.unsigned_abs() && (lo..hi).contains(&b) {
            let slot = &mut seen[(b - lo) as usize];
            if !*slot {
                *slot = true;
                count += 1;
            }
        }
    }
    count
}

/// Shortfall of `score` against a perfect border over `[lo, hi)`.
#[inline]
pub fn continuity_deficit(score: usize, lo: i32, hi: i32) -> i32 {
    let expected = (hi - lo).max(0);
    expected - score as i32
}

/// Line pixels indexed along both axes for repeated border queries.
#[derive(Clone, Debug, Default)]
pub struct LinePixels {
    /// row -> sorted distinct columns
    by_row: HashMap<i32, Vec<i32>>,
    /// col -> sorted distinct rows
    by_col: HashMap<i32, Vec<i32>>,
    len: usize,
}

impl LinePixels {
    /// Index the union of one or more pixel sets.
    pub fn new<'a>(sources: impl IntoIterator<Item = &'a PixelCoords>) -> Self {
        let mut by_row: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut by_col: HashMap<i32, Vec<i32>> = HashMap::new();
        for coords in sources {
            for (row, col) in coords.iter() {
                by_row.entry(row).or_default().push(col);
                by_col.entry(col).or_default().push(row);
            }
        }
        let mut len = 0;
        for values in by_row.values_mut() {
            values.sort_unstable();
            values.dedup();
            len += values.len();
        }
        for values in by_col.values_mut() {
            values.sort_unstable();
            values.dedup();
        }
        Self {
            by_row,
            by_col,
            len,
        }
    }

    /// Number of distinct pixels indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Score of a vertical border at column `col` over rows `[top, bottom)`.
    pub fn vertical_score(&self, col: i32, top: i32, bottom: i32, jitter: i32) -> usize {
        indexed_score(&self.by_col, col, top, bottom, jitter)
    }

    /// Score of a horizontal border at row `row` over columns `[left, right)`.
    pub fn horizontal_score(&self, row: i32, left: i32, right: i32, jitter: i32) -> usize {
        indexed_score(&self.by_row, row, left, right, jitter)
    }
}

fn indexed_score(
    index: &HashMap<i32, Vec<i32>>,
    p: i32,
    lo: i32,
    hi: i32,
    jitter: i32,
) -> usize {
    if hi <= lo || jitter < 0 {
        return 0;
    }
    let mut seen = vec![false; (hi - lo) as usize];
    let mut count = 0;
    for q in p.saturating_sub(jitter)..=p.saturating_add(jitter) {
        let Some(values) = index.get(&q) else {
            continue;
        };
        let start = values.partition_point(|&v| v < lo);
        for &v in values[start..].iter().take_while(|&&v| v < hi) {
            let slot = &mut seen[(v - lo) as usize];
            if !*slot {
                *slot = true;
                count += 1;
            }
        }
    }
    count
}
