use std::path::Path;

use table_cells_core::MaskError;
use table_cells_grid::{TableGridDetector, TableGridError, TableGridParams, TableGridResult};

use crate::preprocess::{preprocess, PreprocessParams, PreprocessedMasks};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Grid(#[from] TableGridError),

    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Masks and grid result of one image.
#[derive(Clone, Debug)]
pub struct TableDetection {
    pub masks: PreprocessedMasks,
    pub result: TableGridResult,
}

/// Load any image format supported by `image` from disk.
pub fn load_image(path: &Path) -> Result<image::DynamicImage, DetectError> {
    Ok(image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?)
}

/// Run preprocessing and the grid detector end-to-end.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, pre, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn detect_table(
    img: &image::GrayImage,
    pre: &PreprocessParams,
    params: TableGridParams,
) -> Result<TableDetection, DetectError> {
    let detector = TableGridDetector::new(params)?;
    let masks = preprocess(img, pre)?;
    let result = detector.detect(&masks.masks())?;
    Ok(TableDetection { masks, result })
}

/// Convenience overload using default preprocessing and grid parameters.
pub fn detect_table_default(img: &image::GrayImage) -> Result<TableDetection, DetectError> {
    detect_table(img, &PreprocessParams::default(), TableGridParams::default())
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<image::GrayImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidGrayDimensions { width, height })
}

pub fn detect_table_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    pre: &PreprocessParams,
    params: TableGridParams,
) -> Result<TableDetection, DetectError> {
    let img = gray_image_from_slice(width, height, pixels)?;
    detect_table(&img, pre, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_gray_buffer() {
        let err = gray_image_from_slice(4, 4, &[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            DetectError::InvalidGrayBuffer {
                expected: 16,
                got: 15
            }
        ));
    }

    #[test]
    fn blank_page_reports_empty_masks() {
        let pixels = vec![255u8; 64 * 48];
        let found = detect_table_from_gray_u8(
            64,
            48,
            &pixels,
            &PreprocessParams::default(),
            TableGridParams::default(),
        )
        .unwrap();
        assert!(found.result.cells.is_empty());
        assert!(matches!(
            found.result.reason,
            Some(table_cells_grid::NoCellsReason::EmptyInput { .. })
        ));
    }

    #[test]
    fn invalid_grid_params_fail_before_preprocessing() {
        let img = image::GrayImage::new(8, 8);
        let params = TableGridParams {
            margin_y: -1,
            ..TableGridParams::default()
        };
        let err = detect_table(&img, &PreprocessParams::default(), params).unwrap_err();
        assert!(matches!(
            err,
            DetectError::Grid(TableGridError::InvalidParams(_))
        ));
    }
}
