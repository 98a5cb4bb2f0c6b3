//! Hierarchical path planning over rooms and links.
//!
//! - **Room search**: grid A* between two points of one room
//! - **Link search**: A* over links, weighted by a [`TraversalGraph`]
//! - **Composition**: link actions stitched with in-room paths
//!
//! ```rust,ignore
//! use vastu_rooms::pathfinding::{AStarPathfinder, Pathfinder, PathfindingConfig, TraversalGraph};
//!
//! let astar = AStarPathfinder::new(PathfindingConfig::with_cell_size(0.5));
//! let mut graph = TraversalGraph::new(map);
//! graph.compute_costs(&astar)?;
//!
//! let result = astar.map_point_to_point(&graph, start, goal, None)?;
//! if let Some(path) = result.path() {
//!     println!("Path found with {} waypoints", path.len());
//! }
//! ```

pub mod astar;
pub mod simplify;
mod traits;
pub mod traversal_graph;

pub use astar::{AStarPathfinder, LinkAction, NeighborStrategy, PathResult, PathfindingConfig};
pub use simplify::{path_length, simplify_grid_path};
pub use traits::Pathfinder;
pub use traversal_graph::{CostTable, TraversalGraph};
