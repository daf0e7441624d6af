//! Core types and utilities for bordered-table cell detection.
//!
//! This crate is intentionally small. It knows about binary masks, the
//! foreground pixels they contain, and the cell records the grid search
//! produces. It does *not* depend on any concrete image library.

mod cell;
mod mask;
mod points;

pub use cell::{CellRectangle, GridIndex};
pub use mask::{Mask, MaskError, MaskKind, MaskView};
pub use points::{extract_points, PixelCoords};
