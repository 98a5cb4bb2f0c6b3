//! A* pathfinding.
//!
//! Searches run at three levels:
//! - inside a room, on a grid laid over the room shape
//! - across the map, over the links of a [`TraversalGraph`]
//! - end to end, by stitching link actions with in-room paths

mod compose;
mod grid;
mod link_search;
mod room_search;
mod types;

pub use types::{LinkAction, NeighborStrategy, PathResult, PathfindingConfig};

use log::debug;

use crate::core::Point;
use crate::error::{GraphError, MapError, PathError};
use crate::mapping::{Room, RoomId};

use super::traits::Pathfinder;
use super::traversal_graph::TraversalGraph;

/// A* pathfinder
///
/// Holds only its default configuration; every search keeps its working
/// state locally, so one instance can serve concurrent queries.
#[derive(Clone, Debug, Default)]
pub struct AStarPathfinder {
    config: PathfindingConfig,
}

impl AStarPathfinder {
    /// Create a new pathfinder
    pub fn new(config: PathfindingConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Default configuration used when a query passes none
    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    fn resolve<'a>(
        &'a self,
        conf: Option<&'a PathfindingConfig>,
    ) -> Result<&'a PathfindingConfig, PathError> {
        let config = conf.unwrap_or(&self.config);
        config.validate()?;
        Ok(config)
    }

    /// Make sure the graph has costs, computing them if allowed.
    fn prepare_graph(
        &self,
        graph: &TraversalGraph,
        config: &PathfindingConfig,
    ) -> Result<(), PathError> {
        if graph.is_initialized() {
            return Ok(());
        }
        if !config.auto_compute_graph_costs {
            debug!("[AStar] FAILED: traversal graph is not initialized");
            return Err(GraphError::Uninitialized.into());
        }
        debug!("[AStar] computing traversal graph costs on demand");
        graph.ensure_costs(self)?;
        Ok(())
    }
}

impl Pathfinder for AStarPathfinder {
    fn room_point_to_point(
        &self,
        room: &Room,
        src: Point,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError> {
        let config = self.resolve(conf)?;
        room_search::search_room(room, src, dest, config)
    }

    fn map_room_to_room(
        &self,
        graph: &TraversalGraph,
        src: &RoomId,
        dest: &RoomId,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<LinkAction>, PathError> {
        let config = self.resolve(conf)?;
        self.prepare_graph(graph, config)?;
        link_search::search_links(graph, src, dest, config)
    }

    fn map_point_to_room(
        &self,
        graph: &TraversalGraph,
        src: Point,
        dest: &RoomId,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError> {
        let config = self.resolve(conf)?;
        self.prepare_graph(graph, config)?;

        let map = graph.map();
        if !map.contains_room(dest) {
            return Err(MapError::RoomNotInMap(dest.clone()).into());
        }
        let start_room = map
            .point_to_room(src)
            .ok_or(PathError::OriginOutsideMap(src))?;

        // Already there
        if start_room.id() == dest {
            return Ok(PathResult::empty());
        }

        match link_search::search_links(graph, start_room.id(), dest, config)? {
            PathResult::Found {
                nodes_visited,
                path,
                ..
            } => compose::compose(map, &path, Some(src), None, nodes_visited, config),
            PathResult::NotFound { nodes_visited } => Ok(PathResult::NotFound { nodes_visited }),
        }
    }

    fn map_room_to_point(
        &self,
        graph: &TraversalGraph,
        src: &RoomId,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError> {
        let config = self.resolve(conf)?;
        self.prepare_graph(graph, config)?;

        let map = graph.map();
        if !map.contains_room(src) {
            return Err(MapError::RoomNotInMap(src.clone()).into());
        }
        let end_room = map
            .point_to_room(dest)
            .ok_or(PathError::DestinationOutsideMap(dest))?;

        if end_room.id() == src {
            return Ok(PathResult::empty());
        }

        match link_search::search_links(graph, src, end_room.id(), config)? {
            PathResult::Found {
                nodes_visited,
                path,
                ..
            } => compose::compose(map, &path, None, Some(dest), nodes_visited, config),
            PathResult::NotFound { nodes_visited } => Ok(PathResult::NotFound { nodes_visited }),
        }
    }

    fn map_point_to_point(
        &self,
        graph: &TraversalGraph,
        src: Point,
        dest: Point,
        conf: Option<&PathfindingConfig>,
    ) -> Result<PathResult<Point>, PathError> {
        let config = self.resolve(conf)?;
        self.prepare_graph(graph, config)?;

        let map = graph.map();
        let start_room = map
            .point_to_room(src)
            .ok_or(PathError::OriginOutsideMap(src))?;
        let end_room = map
            .point_to_room(dest)
            .ok_or(PathError::DestinationOutsideMap(dest))?;

        if start_room.id() == end_room.id() {
            return room_search::search_room(start_room, src, dest, config);
        }

        match link_search::search_links(graph, start_room.id(), end_room.id(), config)? {
            PathResult::Found {
                nodes_visited,
                path,
                ..
            } => compose::compose(map, &path, Some(src), Some(dest), nodes_visited, config),
            PathResult::NotFound { nodes_visited } => Ok(PathResult::NotFound { nodes_visited }),
        }
    }
}
