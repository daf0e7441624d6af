//! 1-D clustering of intersection coordinates into grid lines.

use serde::{Deserialize, Serialize};

use crate::LineAnchor;

/// Output of [`cluster_axis`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisClusters {
    /// Input coordinates, sorted ascending.
    #[serde(skip)]
    pub sorted: Vec<i32>,
    /// Representative line positions, strictly ascending.
    pub lines: Vec<i32>,
}

impl AxisClusters {
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reduce coordinates along one axis to grid-line positions.
///
/// Consecutive sorted values more than `margin` apart start a new line.
/// With [`LineAnchor::RunEnd`] each line sits at the largest coordinate of its
/// run, with [`LineAnchor::RunStart`] at the smallest.
///
/// Returns `None` when `coords` is empty (no lines on this axis).
pub fn cluster_axis(coords: &[i32], margin: i32, anchor: LineAnchor) -> Option<AxisClusters> {
    if coords.is_empty() {
        return None;
    }
    let mut sorted = coords.to_vec();
    sorted.sort_unstable();

    let mut lines = Vec::new();
    if anchor == LineAnchor::RunStart {
        lines.push(sorted[0]);
    }
    for pair in sorted.windows(2) {
        if pair[1] - pair[0] > margin {
            match anchor {
                LineAnchor::RunEnd => lines.push(pair[0]),
                LineAnchor::RunStart => lines.push(pair[1]),
            }
        }
    }
    if anchor == LineAnchor::RunEnd {
        lines.push(sorted[sorted.len() - 1]);
    }

    Some(AxisClusters { sorted, lines })
}

/// Binary search for the line nearest to `coord` in an ascending list.
///
/// Accepts the line only if it lies strictly within `tolerance`. Ties
/// resolve to the lower line.
pub(crate) fn nearest_line(lines: &[i32], coord: i32, tolerance: i32) -> Option<usize> {
    let pos = lines.partition_point(|&l| l < coord);
    let below = pos.checked_sub(1).map(|i| (i, coord - lines[i]));
    let above = lines.get(pos).map(|&l| (pos, l - coord));
    let best = match (below, above) {
        (Some(b), Some(a)) => {
            if a.1 < b.1 {
                a
            } else {
                b
            }
        }
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => return None,
    };
    (best.1 < tolerance).then_some(best.0)
}
