//! Snapping raw intersection pixels onto the clustered grid.

use std::collections::BTreeSet;

use table_cells_core::{GridIndex, PixelCoords};

use crate::cluster::nearest_line;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Confirmed grid intersections, bucketed by horizontal line.
///
/// Built once per run and only read during the cell search.
#[derive(Clone, Debug, Default)]
pub struct Lattice {
    horizontal: Vec<i32>,
    vertical: Vec<i32>,
    /// Per horizontal line: ascending vertical-line indices with a node.
    buckets: Vec<Vec<usize>>,
    nodes: usize,
}

impl Lattice {
    /// Snap every intersection pixel to its nearest horizontal and vertical
    /// line. A pixel contributes a node only if both distances are strictly
    /// below `dot_margin`; repeated nodes are recorded once.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip_all,
            fields(rows = horizontal.len(), cols = vertical.len(), pixels = intersections.len())
        )
    )]
    pub fn snap(
        horizontal: &[i32],
        vertical: &[i32],
        intersections: &PixelCoords,
        dot_margin: i32,
    ) -> Self {
        let mut nodes = BTreeSet::new();
        for (row, col) in intersections.iter() {
            let Some(r) = nearest_line(horizontal, row, dot_margin) else {
                continue;
            };
            let Some(c) = nearest_line(vertical, col, dot_margin) else {
                continue;
            };
            nodes.insert(GridIndex { row: r, col: c });
        }

        // BTreeSet order is (row, col), so each bucket fills ascending.
        let mut buckets = vec![Vec::new(); horizontal.len()];
        for node in &nodes {
            buckets[node.row].push(node.col);
        }

        Self {
            horizontal: horizontal.to_vec(),
            vertical: vertical.to_vec(),
            buckets,
            nodes: nodes.len(),
        }
    }

    #[inline]
    pub fn horizontal_lines(&self) -> &[i32] {
        &self.horizontal
    }

    #[inline]
    pub fn vertical_lines(&self) -> &[i32] {
        &self.vertical
    }

    /// Number of distinct lattice nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Vertical-line indices of the nodes on horizontal line `row`.
    #[inline]
    pub fn row_bucket(&self, row: usize) -> &[usize] {
        self.buckets.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row_bucket(row).binary_search(&col).is_ok()
    }
}
