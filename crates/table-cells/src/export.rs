//! Writing cell crops and intermediate masks to disk.
//!
//! Crop names are derived from grid indices only, so re-running on the same
//! image overwrites the same files.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, GrayImage, RgbImage};
use table_cells_core::{CellRectangle, Mask};

use crate::detect::DetectError;
use crate::preprocess::PreprocessedMasks;

/// `<stem>_r<row_start>-<row_end>_c<col_start>-<col_end>.png`
pub fn cell_file_name(stem: &str, cell: &CellRectangle) -> String {
    format!(
        "{stem}_r{}-{}_c{}-{}.png",
        cell.row_start, cell.row_end, cell.col_start, cell.col_end
    )
}

/// Crop `cell` out of `img`, clamped to the image. `None` if nothing is
/// left after clamping.
pub fn crop_cell(img: &RgbImage, cell: &CellRectangle) -> Option<RgbImage> {
    let left = clamp_coord(cell.left, img.width());
    let right = clamp_coord(cell.right, img.width());
    let top = clamp_coord(cell.top, img.height());
    let bottom = clamp_coord(cell.bottom, img.height());
    if right <= left || bottom <= top {
        return None;
    }
    Some(imageops::crop_imm(img, left, top, right - left, bottom - top).to_image())
}

fn clamp_coord(v: i32, max: u32) -> u32 {
    let max = i32::try_from(max).unwrap_or(i32::MAX);
    v.clamp(0, max).unsigned_abs()
}

/// Save one crop per cell into `dir` (created if missing).
///
/// Returns the written paths in cell order; cells with an empty crop are
/// skipped with a warning.
pub fn export_cells(
    img: &RgbImage,
    cells: &[CellRectangle],
    dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>, DetectError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(cells.len());
    for cell in cells {
        let Some(crop) = crop_cell(img, cell) else {
            log::warn!("skipping empty crop for cell {cell:?}");
            continue;
        };
        let path = dir.join(cell_file_name(stem, cell));
        crop.save(&path)?;
        written.push(path);
    }
    log::info!("wrote {} cell crops to {}", written.len(), dir.display());
    Ok(written)
}

/// Save a binary mask as an 8-bit grayscale PNG.
pub fn save_mask(mask: &Mask, path: &Path) -> Result<(), DetectError> {
    let img = GrayImage::from_raw(mask.width as u32, mask.height as u32, mask.data.clone())
        .ok_or(DetectError::InvalidGrayDimensions {
            width: mask.width as u32,
            height: mask.height as u32,
        })?;
    img.save(path)?;
    Ok(())
}

/// Dump every intermediate mask into `dir`.
pub fn save_masks(masks: &PreprocessedMasks, dir: &Path) -> Result<Vec<PathBuf>, DetectError> {
    fs::create_dir_all(dir)?;
    let named = [
        ("binary.png", &masks.binary),
        ("horizontal_line.png", &masks.horizontal),
        ("vertical_line.png", &masks.vertical),
        ("table.png", &masks.table),
        ("intersection.png", &masks.intersection),
    ];
    let mut written = Vec::with_capacity(named.len());
    for (name, mask) in named {
        let path = dir.join(name);
        save_mask(mask, &path)?;
        written.push(path);
    }
    Ok(written)
}
