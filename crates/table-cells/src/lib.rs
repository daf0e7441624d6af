//! High-level facade crate for the `table-cells-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core and grid crates
//! - (feature-gated) end-to-end helpers that turn a table photo or scan into
//!   line masks, run the grid detector on them and export the cell crops.
//!
//! ## Quickstart
//!
//! ```no_run
//! use table_cells::detect;
//! use table_cells::TableGridParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("table.png")?.decode()?.to_luma8();
//! let pre = table_cells::preprocess::PreprocessParams::default();
//!
//! let found = detect::detect_table(&img, &pre, TableGridParams::default())?;
//! println!("cells: {}", found.result.cells.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `table_cells::core`: masks, pixel extraction, cell records, logger.
//! - `table_cells::grid`: line clustering, continuity scoring, cell search.
//! - `table_cells::preprocess` (feature `image`): binarization and line masks.
//! - `table_cells::detect` (feature `image`): end-to-end helpers from
//!   `image::GrayImage`.
//! - `table_cells::export` (feature `image`): crops and mask dumps.

pub use table_cells_core as core;
pub use table_cells_grid as grid;

pub use table_cells_core::{CellRectangle, Mask, MaskKind, MaskView};
pub use table_cells_grid::{
    LineAnchor, NoCellsReason, TableGridDetector, TableGridError, TableGridParams,
    TableGridResult, TableMasks,
};

#[cfg(feature = "image")]
pub mod detect;
#[cfg(feature = "image")]
pub mod export;
#[cfg(feature = "image")]
pub mod preprocess;
