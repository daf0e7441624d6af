use serde::{Deserialize, Serialize};
use table_cells_core::{MaskError, MaskKind};

/// Errors returned by the table grid detector.
#[derive(thiserror::Error, Debug)]
pub enum TableGridError {
    #[error(transparent)]
    Mask(#[from] MaskError),
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

/// Why a completed run produced no cells.
///
/// These are valid terminal states rather than failures; the detector
/// returns them inside the result.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoCellsReason {
    #[error("{mask} mask has no foreground pixels")]
    EmptyInput { mask: MaskKind },
    #[error(
        "degenerate grid: {horizontal} horizontal and {vertical} vertical lines (need at least 2 each)"
    )]
    DegenerateGrid { horizontal: usize, vertical: usize },
    #[error("no cell passed the border checks ({candidates} candidates tried)")]
    NoCellsFound { candidates: u64 },
}
