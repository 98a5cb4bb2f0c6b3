//! Distance metrics used as both step cost and heuristic.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Diagonal step weight of the octile metric.
pub const OCTILE_DIAGONAL: f64 = 1.4;

/// Distance function between two points.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Sum of absolute axis differences (4-connected grids)
    Manhattan,
    /// Diagonal-then-straight distance (8-connected grids)
    #[default]
    Octile,
    /// Straight-line distance
    Euclidean,
    /// Caller-supplied function
    #[serde(skip)]
    Custom(fn(Point, Point) -> f64),
}

impl DistanceMetric {
    /// Distance from `from` to `to` under this metric.
    #[inline]
    pub fn distance(&self, from: Point, to: Point) -> f64 {
        match self {
            DistanceMetric::Manhattan => manhattan(from, to),
            DistanceMetric::Octile => octile(from, to),
            DistanceMetric::Euclidean => from.distance(&to),
            DistanceMetric::Custom(f) => f(from, to),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Octile => "octile",
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Custom(_) => "custom",
        }
    }
}

/// Manhattan (taxicab) distance.
#[inline]
pub fn manhattan(from: Point, to: Point) -> f64 {
    (to.x - from.x).abs() + (to.y - from.y).abs()
}

/// Octile distance with diagonal weight [`OCTILE_DIAGONAL`].
#[inline]
pub fn octile(from: Point, to: Point) -> f64 {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    OCTILE_DIAGONAL * dx.min(dy) + (dx - dy).abs()
}
