//! Path post-processing.

use crate::core::{GridCoord, Point};

/// Reduce a grid path to its start, end, and turning points.
///
/// A cell is kept when the step leading into it differs from the step
/// leaving it.
pub fn simplify_grid_path(path: &[GridCoord]) -> Vec<GridCoord> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut simplified = vec![path[0]];
    for window in path.windows(3) {
        let incoming = window[1] - window[0];
        let outgoing = window[2] - window[1];
        if incoming != outgoing {
            simplified.push(window[1]);
        }
    }
    if let Some(&last) = path.last() {
        simplified.push(last);
    }
    simplified
}

/// Calculate total path length
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
