//! Cell grid reconstruction for bordered tables.
//!
//! Input is three binary masks derived from a table scan: horizontal-line
//! pixels, vertical-line pixels and their intersections. The detector
//!
//! 1. clusters intersection rows/columns into grid lines ([`cluster_axis`]),
//! 2. snaps intersections onto the grid ([`Lattice`]),
//! 3. searches the lattice for rectangles whose four borders are present in
//!    the line masks ([`assemble_cells`], [`LinePixels`]).
//!
//! ```
//! use table_cells_core::{Mask, MaskKind};
//! use table_cells_grid::{TableGridDetector, TableGridParams, TableMasks};
//!
//! # fn main() -> Result<(), table_cells_grid::TableGridError> {
//! let (w, h) = (61, 51);
//! let mut horizontal = Mask::new(w, h);
//! let mut vertical = Mask::new(w, h);
//! for c in 0..w {
//!     horizontal.set(0, c, 255);
//!     horizontal.set(50, c, 255);
//! }
//! for r in 0..h {
//!     vertical.set(r, 0, 255);
//!     vertical.set(r, 60, 255);
//! }
//! let intersection = Mask::and(&horizontal.view(), &vertical.view(), MaskKind::Vertical)?;
//!
//! let detector = TableGridDetector::new(TableGridParams::default())?;
//! let result = detector.detect(&TableMasks {
//!     horizontal: horizontal.view(),
//!     vertical: vertical.view(),
//!     intersection: intersection.view(),
//! })?;
//! assert_eq!(result.cells.len(), 1);
//! # Ok(())
//! # }
//! ```

mod assembler;
mod cluster;
mod continuity;
mod detector;
mod error;
mod lattice;
mod params;
mod result;

pub use assembler::{assemble_cells, AssembleOutput};
pub use cluster::{cluster_axis, AxisClusters};
pub use continuity::{continuity_deficit, continuity_score, LinePixels};
pub use detector::{TableGridDetector, TableMasks, TablePoints};
pub use error::{NoCellsReason, TableGridError};
pub use lattice::Lattice;
pub use params::{LineAnchor, TableGridParams};
pub use result::{GridSummary, TableGridResult};
