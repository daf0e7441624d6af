use serde::{Deserialize, Serialize};

use crate::TableGridError;

/// Which coordinate of a run of close points becomes the grid line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAnchor {
    /// Last (largest) coordinate of each run. The maximum input value is
    /// always a line.
    #[default]
    RunEnd,
    /// First (smallest) coordinate of each run.
    RunStart,
}

/// Parameters of the table grid detector.
///
/// All distances are in pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGridParams {
    /// Minimal gap between two x coordinates to count as distinct vertical
    /// lines.
    pub margin_x: i32,

    /// Minimal gap between two y coordinates to count as distinct horizontal
    /// lines.
    pub margin_y: i32,

    /// Snapping tolerance between a raw intersection pixel and a grid line.
    /// A pixel snaps when its distance is strictly below this value.
    pub dot_margin: i32,

    /// Allowed deficit of a horizontal border (top/bottom of a cell).
    pub line_tolerance_x: i32,

    /// Allowed deficit of a vertical border (left/right of a cell).
    pub line_tolerance_y: i32,

    /// Perpendicular window, in pixels on each side, within which line
    /// pixels count towards a border.
    pub jitter: i32,

    pub anchor: LineAnchor,

    /// Upper bound on evaluated candidate rectangles. `None` disables the
    /// cap.
    pub max_candidate_checks: Option<u64>,
}

impl Default for TableGridParams {
    fn default() -> Self {
        Self {
            margin_x: 10,
            margin_y: 10,
            dot_margin: 10,
            line_tolerance_x: 10,
            line_tolerance_y: 10,
            jitter: 3,
            anchor: LineAnchor::RunEnd,
            max_candidate_checks: Some(5_000_000),
        }
    }
}

impl TableGridParams {
    /// Largest accepted `jitter`. Each border check visits `2 * jitter + 1`
    /// rows or columns of the pixel index.
    pub const MAX_JITTER: i32 = 1024;

    pub fn validate(&self) -> Result<(), TableGridError> {
        let positive = [
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("dot_margin", self.dot_margin),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(TableGridError::InvalidParams(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("line_tolerance_x", self.line_tolerance_x),
            ("line_tolerance_y", self.line_tolerance_y),
            ("jitter", self.jitter),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(TableGridError::InvalidParams(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.jitter > Self::MAX_JITTER {
            return Err(TableGridError::InvalidParams(format!(
                "jitter must be at most {}, got {}",
                Self::MAX_JITTER,
                self.jitter
            )));
        }
        Ok(())
    }
}
