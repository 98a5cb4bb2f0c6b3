//! Pathfinder trait.

use crate::core::Point;
use crate::error::PathError;
use crate::mapping::{Room, RoomId};

use super::astar::{LinkAction, PathResult, PathfindingConfig};
use super::traversal_graph::TraversalGraph;

/// Hierarchical path search over rooms and links.
///
/// `conf`, when given, replaces the pathfinder's own configuration for that
/// call. Errors report unusable inputs; a search that simply finds no path
/// returns [`PathResult::NotFound`].
pub trait Pathfinder: Send + Sync {
    /// Path between two points inside one room.
    fn room_point_to_point(
        &self,
        room: &Room,
        src: Point,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError>;

    /// Sequence of link traversals leading from one room to another.
    fn map_room_to_room(
        &self,
        graph: &TraversalGraph,
        src: &RoomId,
        dest: &RoomId,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<LinkAction>, PathError>;

    /// Path from a point to the entrance of a room.
    fn map_point_to_room(
        &self,
        graph: &TraversalGraph,
        src: Point,
        dest: &RoomId,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError>;

    /// Path from a room to a point.
    fn map_room_to_point(
        &self,
        graph: &TraversalGraph,
        src: &RoomId,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError>;

    /// Path between two points anywhere on the map.
    fn map_point_to_point(
        &self,
        graph: &TraversalGraph,
        src: Point,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError>;
}
