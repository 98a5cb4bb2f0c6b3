//! Default value functions for serde deserialization.

use crate::core::DistanceMetric;
use crate::pathfinding::NeighborStrategy;

pub fn enabled() -> bool {
    true
}

pub fn cell_size() -> f64 {
    1.0
}

pub fn neighbor_strategy() -> NeighborStrategy {
    NeighborStrategy::EightWay
}

pub fn distance() -> DistanceMetric {
    DistanceMetric::Octile
}
