//! Foreground pixel extraction.

use crate::MaskView;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Foreground pixels of a mask as two parallel sequences.
///
/// `rows[i]` and `cols[i]` describe the same pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelCoords {
    pub rows: Vec<i32>,
    pub cols: Vec<i32>,
}

impl PixelCoords {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, row: i32, col: i32) {
        self.rows.push(row);
        self.cols.push(col);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(row, col)` pairs in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Append all pixels of `other`, keeping its order.
    pub fn extend_from(&mut self, other: &PixelCoords) {
        self.rows.extend_from_slice(&other.rows);
        self.cols.extend_from_slice(&other.cols);
    }
}

impl FromIterator<(i32, i32)> for PixelCoords {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        let mut out = PixelCoords::default();
        for (row, col) in iter {
            out.push(row, col);
        }
        out
    }
}

/// Collect every foreground pixel of `mask` in row-major order.
///
/// An all-background mask yields an empty result; callers decide how to
/// report it.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(mask), fields(width = mask.width, height = mask.height))
)]
pub fn extract_points(mask: &MaskView<'_>) -> PixelCoords {
    let count = mask.data.iter().filter(|&&v| v > 0).count();
    let mut out = PixelCoords::with_capacity(count);
    log::trace!(
        "{}x{} mask: {count} foreground pixels",
        mask.width,
        mask.height
    );
    if count == 0 || mask.width == 0 {
        return out;
    }
    for (row, line) in mask.data.chunks_exact(mask.width).enumerate() {
        for (col, &v) in line.iter().enumerate() {
            if v > 0 {
                out.push(row as i32, col as i32);
            }
        }
    }
    out
}
