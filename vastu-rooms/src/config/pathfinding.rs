//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use crate::core::DistanceMetric;
use crate::pathfinding::{NeighborStrategy, PathfindingConfig};

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// World size of one search grid cell
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f64,

    /// Grid connectivity (`four_way` or `eight_way`)
    #[serde(default = "defaults::neighbor_strategy")]
    pub neighbor_strategy: NeighborStrategy,

    /// Step cost and heuristic (`manhattan`, `octile` or `euclidean`)
    #[serde(default = "defaults::distance")]
    pub distance: DistanceMetric,

    /// Heuristic penalty per direction change (0=disabled)
    #[serde(default)]
    pub turn_penalty: f64,

    /// Allow diagonal moves between two non-walkable corner cells
    #[serde(default)]
    pub allow_corner_crossing: bool,

    /// Compute traversal graph costs on first use
    #[serde(default)]
    pub auto_compute_graph_costs: bool,

    /// Keep only start, end, and turning points of room paths
    #[serde(default = "defaults::enabled")]
    pub simplify_paths: bool,

    /// Snap endpoints to an adjacent walkable cell
    #[serde(default = "defaults::enabled")]
    pub snap_to_nearest_cell: bool,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        let config = PathfindingConfig::default();
        Self {
            cell_size: config.cell_size,
            neighbor_strategy: config.neighbor_strategy,
            distance: config.distance,
            turn_penalty: config.turn_penalty,
            allow_corner_crossing: config.allow_corner_crossing,
            auto_compute_graph_costs: config.auto_compute_graph_costs,
            simplify_paths: config.simplify_paths,
            snap_to_nearest_cell: config.snap_to_nearest_cell,
        }
    }
}

impl PathfindingSection {
    /// Convert to PathfindingConfig
    pub fn to_pathfinding_config(&self) -> PathfindingConfig {
        PathfindingConfig {
            cell_size: self.cell_size,
            neighbor_strategy: self.neighbor_strategy,
            distance: self.distance,
            turn_penalty: self.turn_penalty,
            allow_corner_crossing: self.allow_corner_crossing,
            auto_compute_graph_costs: self.auto_compute_graph_costs,
            simplify_paths: self.simplify_paths,
            snap_to_nearest_cell: self.snap_to_nearest_cell,
        }
    }
}
