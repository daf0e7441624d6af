use log::{debug, info, warn};
use table_cells_core::{extract_points, MaskKind, MaskView, PixelCoords};

use crate::assembler::assemble_cells;
use crate::cluster::cluster_axis;
use crate::continuity::LinePixels;
use crate::lattice::Lattice;
use crate::{GridSummary, NoCellsReason, TableGridError, TableGridParams, TableGridResult};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// The three preprocessing masks of one table image.
#[derive(Clone, Copy, Debug)]
pub struct TableMasks<'a> {
    pub horizontal: MaskView<'a>,
    pub vertical: MaskView<'a>,
    /// Pixel-wise AND of the two line masks.
    pub intersection: MaskView<'a>,
}

impl TableMasks<'_> {
    fn validate(&self) -> Result<(), TableGridError> {
        self.horizontal
            .ensure_same_size(&self.vertical, MaskKind::Vertical)?;
        self.horizontal
            .ensure_same_size(&self.intersection, MaskKind::Intersection)?;
        Ok(())
    }
}

/// Foreground pixels of the three masks.
#[derive(Clone, Debug, Default)]
pub struct TablePoints {
    pub horizontal: PixelCoords,
    pub vertical: PixelCoords,
    pub intersection: PixelCoords,
}

impl TablePoints {
    pub fn from_masks(masks: &TableMasks<'_>) -> Self {
        Self {
            horizontal: extract_points(&masks.horizontal),
            vertical: extract_points(&masks.vertical),
            intersection: extract_points(&masks.intersection),
        }
    }
}

/// Bordered-table cell detector.
///
/// Holds only parameters; one instance can serve many images, also from
/// several threads.
#[derive(Clone, Debug)]
pub struct TableGridDetector {
    params: TableGridParams,
}

impl TableGridDetector {
    pub fn new(params: TableGridParams) -> Result<Self, TableGridError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &TableGridParams {
        &self.params
    }

    /// Detect cells from the three preprocessing masks.
    pub fn detect(&self, masks: &TableMasks<'_>) -> Result<TableGridResult, TableGridError> {
        masks.validate()?;
        let points = TablePoints::from_masks(masks);
        Ok(self.detect_from_points(&points))
    }

    /// Detect cells from already extracted foreground pixels.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip_all,
            fields(
                horizontal = points.horizontal.len(),
                vertical = points.vertical.len(),
                intersection = points.intersection.len()
            )
        )
    )]
    pub fn detect_from_points(&self, points: &TablePoints) -> TableGridResult {
        let p = &self.params;
        let mut summary = GridSummary {
            intersection_pixels: points.intersection.len(),
            ..GridSummary::default()
        };

        let inputs = [
            (MaskKind::Horizontal, &points.horizontal),
            (MaskKind::Vertical, &points.vertical),
            (MaskKind::Intersection, &points.intersection),
        ];
        for (mask, coords) in inputs {
            if coords.is_empty() {
                let reason = NoCellsReason::EmptyInput { mask };
                warn!("{reason}");
                return TableGridResult::empty(reason, summary);
            }
        }

        let rows = cluster_axis(&points.intersection.rows, p.margin_y, p.anchor);
        let cols = cluster_axis(&points.intersection.cols, p.margin_x, p.anchor);
        summary.horizontal_lines = rows.map(|c| c.lines).unwrap_or_default();
        summary.vertical_lines = cols.map(|c| c.lines).unwrap_or_default();
        debug!(
            "grid lines: {} horizontal {:?}, {} vertical {:?}",
            summary.horizontal_lines.len(),
            summary.horizontal_lines,
            summary.vertical_lines.len(),
            summary.vertical_lines
        );

        if summary.horizontal_lines.len() < 2 || summary.vertical_lines.len() < 2 {
            let reason = NoCellsReason::DegenerateGrid {
                horizontal: summary.horizontal_lines.len(),
                vertical: summary.vertical_lines.len(),
            };
            warn!("{reason}");
            return TableGridResult::empty(reason, summary);
        }

        let lattice = Lattice::snap(
            &summary.horizontal_lines,
            &summary.vertical_lines,
            &points.intersection,
            p.dot_margin,
        );
        summary.lattice_nodes = lattice.node_count();
        debug!("lattice nodes: {}", summary.lattice_nodes);

        let pixels = LinePixels::new([&points.horizontal, &points.vertical]);
        let out = assemble_cells(&lattice, &pixels, p);
        summary.candidates = out.candidates;
        summary.truncated = out.truncated;
        if out.truncated {
            warn!(
                "cell search stopped after {} candidates; result is partial",
                out.candidates
            );
        }

        if out.cells.is_empty() {
            let reason = NoCellsReason::NoCellsFound {
                candidates: out.candidates,
            };
            warn!("{reason}");
            return TableGridResult::empty(reason, summary);
        }

        info!(
            "found {} cells on a {}x{} grid",
            out.cells.len(),
            summary.horizontal_lines.len() - 1,
            summary.vertical_lines.len() - 1
        );
        TableGridResult {
            cells: out.cells,
            summary,
            reason: None,
        }
    }
}
