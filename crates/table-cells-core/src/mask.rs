use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised when wrapping raw mask buffers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error("invalid mask buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },

    #[error(
        "{kind} mask is {got_width}x{got_height}, expected {expected_width}x{expected_height}"
    )]
    SizeMismatch {
        kind: MaskKind,
        expected_width: usize,
        expected_height: usize,
        got_width: usize,
        got_height: usize,
    },
}

/// Which of the three preprocessing masks a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    Horizontal,
    Vertical,
    Intersection,
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaskKind::Horizontal => "horizontal-line",
            MaskKind::Vertical => "vertical-line",
            MaskKind::Intersection => "intersection",
        };
        f.write_str(name)
    }
}

/// Borrowed single-channel mask. Any non-zero byte is foreground.
#[derive(Clone, Copy, Debug)]
pub struct MaskView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> MaskView<'a> {
    /// Wrap a row-major buffer, checking its length against the dimensions.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, MaskError> {
        let expected = width.checked_mul(height).ok_or(MaskError::InvalidBuffer {
            expected: usize::MAX,
            got: data.len(),
        })?;
        if data.len() != expected {
            return Err(MaskError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.height || col >= self.width {
            return 0;
        }
        self.data[row * self.width + col]
    }

    /// Fail with `SizeMismatch` unless `other` has the same dimensions.
    pub fn ensure_same_size(&self, other: &MaskView<'_>, kind: MaskKind) -> Result<(), MaskError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(MaskError::SizeMismatch {
            kind,
            expected_width: self.width,
            expected_height: self.height,
            got_width: other.width,
            got_height: other.height,
        })
    }
}

/// Owned counterpart of [`MaskView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    /// All-background mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, MaskError> {
        MaskView::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn view(&self) -> MaskView<'_> {
        MaskView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < self.height && col < self.width {
            self.data[row * self.width + col] = value;
        }
    }

    /// Pixel-wise AND of two masks of the same size. `kind` names `b` in a
    /// size mismatch.
    pub fn and(a: &MaskView<'_>, b: &MaskView<'_>, kind: MaskKind) -> Result<Mask, MaskError> {
        a.ensure_same_size(b, kind)?;
        let data = a
            .data
            .iter()
            .zip(b.data)
            .map(|(&x, &y)| if x > 0 && y > 0 { 255 } else { 0 })
            .collect();
        Ok(Mask {
            width: a.width,
            height: a.height,
            data,
        })
    }

    /// Pixel-wise saturating sum, i.e. the union of two binary masks.
    pub fn saturating_add(
        a: &MaskView<'_>,
        b: &MaskView<'_>,
        kind: MaskKind,
    ) -> Result<Mask, MaskError> {
        a.ensure_same_size(b, kind)?;
        let data = a
            .data
            .iter()
            .zip(b.data)
            .map(|(&x, &y)| x.saturating_add(y))
            .collect();
        Ok(Mask {
            width: a.width,
            height: a.height,
            data,
        })
    }
}
