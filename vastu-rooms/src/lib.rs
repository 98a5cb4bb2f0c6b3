//! # Vastu-Rooms: Hierarchical Room Pathfinding
//!
//! Path planning over an indoor floor plan described as rooms connected by
//! links (doors). Searches run at three levels:
//!
//! - **Room**: grid A* between two points inside one room
//! - **Map**: A* over links, using precomputed costs of crossing each room
//! - **End-to-end**: link search stitched together with room searches
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_rooms::core::Point;
//! use vastu_rooms::{AStarPathfinder, Link, Pathfinder, Room, RoomMap, TraversalGraph};
//!
//! let kitchen = Room::rect("kitchen", Point::new(0.0, 0.0), Point::new(4.0, 4.0)).unwrap();
//! let hall = Room::rect("hall", Point::new(4.0, 0.0), Point::new(10.0, 2.0)).unwrap();
//! let door = Link::door(
//!     "kitchen_hall",
//!     (&kitchen, Point::new(3.9, 1.0)),
//!     (&hall, Point::new(4.1, 1.0)),
//! )
//! .unwrap();
//!
//! let map = RoomMap::new(vec![kitchen, hall], vec![door]).unwrap();
//! let pathfinder = AStarPathfinder::with_defaults();
//! let mut graph = TraversalGraph::new(map);
//! graph.compute_costs(&pathfinder).unwrap();
//!
//! let result = pathfinder
//!     .map_point_to_point(&graph, Point::new(1.0, 3.0), Point::new(9.0, 1.0), None)
//!     .unwrap();
//! assert!(result.is_success());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Geometry primitives (points, bounds, segment predicates, metrics)
//! - [`mapping`]: Rooms, links, the room map and the id registry
//! - [`pathfinding`]: A* searches and the traversal cost graph
//! - [`config`]: YAML configuration
//! - [`io`]: JSON records for rooms, links, maps and graphs
//!
//! ## Data Flow
//!
//! ```text
//!   Rooms + Links ──► RoomMap ──► TraversalGraph ──► compute_costs()
//!                                       │             (room searches
//!                                       │              between links)
//!                                       ▼
//!   src, dest ─────────────────► link search ──► room search per leg
//!                                                        │
//!                                                        ▼
//!                                                  PathResult<Point>
//! ```
//!
//! ## Coordinate Frame
//!
//! Map coordinates follow ROS REP-103: X right, Y up, counter-clockwise
//! positive. Polygon rooms are wound counter-clockwise.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod mapping;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::{ConfigLoadError, RoomsConfig};
pub use error::{GeometryError, GraphError, MapError, PathError, RecordError};
pub use mapping::{Link, LinkId, Registry, Room, RoomId, RoomMap};
pub use pathfinding::{
    AStarPathfinder, CostTable, LinkAction, NeighborStrategy, PathResult, Pathfinder,
    PathfindingConfig, TraversalGraph,
};
