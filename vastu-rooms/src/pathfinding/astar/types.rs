//! A* pathfinding types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{DistanceMetric, Point};
use crate::error::PathError;
use crate::mapping::{LinkId, RoomPoint};
use crate::pathfinding::simplify::path_length;

/// A node in the A* open set.
///
/// `key` identifies the search state (a grid cell, or a link traversal).
#[derive(Clone, Debug)]
pub(super) struct AStarNode<K> {
    pub key: K,
    pub g_cost: f64, // Cost from start
    pub h_cost: f64, // Heuristic estimate to goal
}

impl<K> AStarNode<K> {
    #[inline]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

impl<K: PartialEq> Eq for AStarNode<K> {}

impl<K: PartialEq> PartialEq for AStarNode<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: PartialEq> Ord for AStarNode<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; smaller h wins ties
        other
            .f_cost()
            .partial_cmp(&self.f_cost())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .h_cost
                    .partial_cmp(&self.h_cost)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl<K: PartialEq> PartialOrd for AStarNode<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How grid cells connect to their neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborStrategy {
    /// Orthogonal moves only
    FourWay,
    /// Orthogonal and diagonal moves
    #[default]
    EightWay,
}

/// Pathfinding configuration
///
/// A configuration passed to a single query replaces the pathfinder's
/// defaults entirely; use struct update syntax to change only some fields.
#[derive(Clone, Copy, Debug)]
pub struct PathfindingConfig {
    /// World size of one search grid cell
    pub cell_size: f64,
    /// Grid connectivity
    pub neighbor_strategy: NeighborStrategy,
    /// Step cost and heuristic
    pub distance: DistanceMetric,
    /// Heuristic penalty added when the path changes direction
    pub turn_penalty: f64,
    /// Allow diagonal moves between two non-walkable corner cells
    pub allow_corner_crossing: bool,
    /// Compute traversal graph costs on demand instead of failing
    pub auto_compute_graph_costs: bool,
    /// Reduce room paths to start, end, and turning points
    pub simplify_paths: bool,
    /// Snap endpoints whose cell is not walkable to the nearest adjacent cell
    pub snap_to_nearest_cell: bool,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            neighbor_strategy: NeighborStrategy::EightWay,
            distance: DistanceMetric::Octile,
            turn_penalty: 0.0,
            allow_corner_crossing: false,
            auto_compute_graph_costs: false,
            simplify_paths: true,
            snap_to_nearest_cell: true,
        }
    }
}

impl PathfindingConfig {
    /// Create with a custom cell size
    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cell_size,
            ..Default::default()
        }
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<(), PathError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(PathError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.turn_penalty.is_finite() && self.turn_penalty >= 0.0) {
            return Err(PathError::InvalidConfig(format!(
                "turn_penalty must be non-negative, got {}",
                self.turn_penalty
            )));
        }
        Ok(())
    }
}

/// A link traversal chosen by the link-level search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkAction {
    /// Link being traversed
    pub link: LinkId,
    /// Where the link is entered
    pub entrance: RoomPoint,
    /// Where the link is left
    pub exit: RoomPoint,
}

/// Result of a path search.
///
/// Running out of candidates is not an error: it yields `NotFound`.
#[derive(Clone, Debug, PartialEq)]
pub enum PathResult<T> {
    /// A path was found
    Found {
        /// Number of nodes expanded during search
        nodes_visited: usize,
        /// Path steps from start to goal
        path: Vec<T>,
        /// Total path cost
        cost: f64,
    },
    /// No path exists
    NotFound {
        /// Number of nodes expanded during search
        nodes_visited: usize,
    },
}

impl<T> PathResult<T> {
    /// Successful search with nothing to traverse
    pub(crate) fn empty() -> Self {
        PathResult::Found {
            nodes_visited: 0,
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// Whether a path was found
    pub fn is_success(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    /// Number of nodes expanded during search
    pub fn nodes_visited(&self) -> usize {
        match self {
            PathResult::Found { nodes_visited, .. } | PathResult::NotFound { nodes_visited } => {
                *nodes_visited
            }
        }
    }

    /// Path steps, if found
    pub fn path(&self) -> Option<&[T]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound { .. } => None,
        }
    }

    /// Path cost, if found
    pub fn cost(&self) -> Option<f64> {
        match self {
            PathResult::Found { cost, .. } => Some(*cost),
            PathResult::NotFound { .. } => None,
        }
    }

    /// Consume the result, returning the path if found
    pub fn into_path(self) -> Option<Vec<T>> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound { .. } => None,
        }
    }
}

impl PathResult<Point> {
    /// Polyline length of the path in world units
    pub fn length(&self) -> f64 {
        self.path().map(path_length).unwrap_or(0.0)
    }
}
