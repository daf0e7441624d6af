//! Line-mask extraction from a grayscale table image.
//!
//! Dark table lines on a light page become foreground after inversion and a
//! local-mean threshold. An opening with a long horizontal (vertical)
//! rectangular kernel keeps only horizontal (vertical) strokes.

use image::GrayImage;
use serde::{Deserialize, Serialize};
use table_cells_core::{Mask, MaskKind};
use table_cells_grid::TableMasks;

use crate::detect::DetectError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Binarization and line extraction settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessParams {
    /// Threshold window is `(2 * block_radius + 1)` pixels square.
    pub block_radius: u32,
    /// A pixel is foreground when its inverted value exceeds the window mean
    /// minus `offset`. Negative values demand contrast above the mean.
    pub offset: i32,
    /// Length of the opening kernel. Strokes shorter than this vanish.
    pub kernel_len: usize,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            block_radius: 7,
            offset: -10,
            kernel_len: 25,
        }
    }
}

/// All intermediate masks of one image.
#[derive(Clone, Debug)]
pub struct PreprocessedMasks {
    pub binary: Mask,
    pub horizontal: Mask,
    pub vertical: Mask,
    /// Union of the two line masks.
    pub table: Mask,
    pub intersection: Mask,
}

impl PreprocessedMasks {
    pub fn masks(&self) -> TableMasks<'_> {
        TableMasks {
            horizontal: self.horizontal.view(),
            vertical: self.vertical.view(),
            intersection: self.intersection.view(),
        }
    }
}

/// Run binarization and both openings.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(gray, params), fields(width = gray.width(), height = gray.height()))
)]
pub fn preprocess(
    gray: &GrayImage,
    params: &PreprocessParams,
) -> Result<PreprocessedMasks, DetectError> {
    if params.kernel_len == 0 {
        return Err(DetectError::InvalidParams(
            "kernel_len must be positive".to_string(),
        ));
    }
    let binary = adaptive_threshold_inverted(gray, params.block_radius, params.offset);
    let horizontal = open_axis(&binary, params.kernel_len, Axis::Horizontal);
    let vertical = open_axis(&binary, params.kernel_len, Axis::Vertical);
    let table = Mask::saturating_add(&horizontal.view(), &vertical.view(), MaskKind::Vertical)?;
    let intersection = Mask::and(&horizontal.view(), &vertical.view(), MaskKind::Vertical)?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "masks {}x{}: binary={} horizontal={} vertical={} intersection={}",
            binary.width,
            binary.height,
            foreground(&binary),
            foreground(&horizontal),
            foreground(&vertical),
            foreground(&intersection)
        );
    }
    Ok(PreprocessedMasks {
        binary,
        horizontal,
        vertical,
        table,
        intersection,
    })
}

fn foreground(mask: &Mask) -> usize {
    mask.data.iter().filter(|&&v| v > 0).count()
}

/// Threshold the inverted image against its local box mean.
///
/// This is the mean variant of adaptive thresholding: every pixel in the
/// window has the same weight, unlike a Gaussian-weighted window.
pub fn adaptive_threshold_inverted(gray: &GrayImage, block_radius: u32, offset: i32) -> Mask {
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let src = gray.as_raw();
    let mut out = Mask::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // Summed-area table of the inverted image, one row/col of padding.
    let stride = w + 1;
    let mut integral = vec![0u64; stride * (h + 1)];
    for y in 0..h {
        let mut row_sum = 0u64;
        for x in 0..w {
            row_sum += u64::from(255 - src[y * w + x]);
            integral[(y + 1) * stride + x + 1] = integral[y * stride + x + 1] + row_sum;
        }
    }

    let r = block_radius as usize;
    for y in 0..h {
        let y0 = y.saturating_sub(r);
        let y1 = (y + r + 1).min(h);
        for x in 0..w {
            let x0 = x.saturating_sub(r);
            let x1 = (x + r + 1).min(w);
            let sum = integral[y1 * stride + x1] + integral[y0 * stride + x0]
                - integral[y0 * stride + x1]
                - integral[y1 * stride + x0];
            let area = ((y1 - y0) * (x1 - x0)) as i64;
            let value = i64::from(255 - src[y * w + x]);
            // value > mean - offset, kept in integers.
            if value * area > sum as i64 - i64::from(offset) * area {
                out.data[y * w + x] = 255;
            }
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Erode then dilate with a `kernel_len x 1` (or `1 x kernel_len`) kernel.
fn open_axis(mask: &Mask, kernel_len: usize, axis: Axis) -> Mask {
    let eroded = window_filter(mask, kernel_len, axis, true);
    window_filter(&eroded, kernel_len, axis, false)
}

/// Centered 1-D window over `axis`. Erosion keeps a pixel when the whole
/// in-image part of its window is foreground; dilation when any of it is.
fn window_filter(mask: &Mask, kernel_len: usize, axis: Axis, erode: bool) -> Mask {
    let (w, h) = (mask.width, mask.height);
    let mut out = Mask::new(w, h);
    if kernel_len <= 1 {
        out.data.copy_from_slice(&mask.data);
        return out;
    }
    let half = kernel_len / 2;
    let (lines, len) = match axis {
        Axis::Horizontal => (h, w),
        Axis::Vertical => (w, h),
    };
    let index = |line: usize, t: usize| match axis {
        Axis::Horizontal => line * w + t,
        Axis::Vertical => t * w + line,
    };

    let mut prefix = vec![0usize; len + 1];
    for line in 0..lines {
        for t in 0..len {
            prefix[t + 1] = prefix[t] + usize::from(mask.data[index(line, t)] > 0);
        }
        for t in 0..len {
            let lo = t.saturating_sub(half);
            let hi = (t + kernel_len - half).min(len);
            let count = prefix[hi] - prefix[lo];
            let keep = if erode { count == hi - lo } else { count > 0 };
            if keep {
                out.data[index(line, t)] = 255;
            }
        }
    }
    out
}
