//! Grid A* inside a single room.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::{GridCoord, Point};
use crate::error::PathError;
use crate::mapping::Room;
use crate::pathfinding::simplify::simplify_grid_path;

use super::grid::RoomGrid;
use super::types::{AStarNode, PathResult, PathfindingConfig};

/// Find a path between two points of the same room.
pub(super) fn search_room(
    room: &Room,
    src: Point,
    dest: Point,
    config: &PathfindingConfig,
) -> Result<PathResult<Point>, PathError> {
    trace!(
        "[AStar] room '{}': ({:.2},{:.2}) -> ({:.2},{:.2})",
        room.id(),
        src.x,
        src.y,
        dest.x,
        dest.y
    );

    for point in [src, dest] {
        if !room.contains(point) {
            debug!(
                "[AStar] FAILED: ({:.2},{:.2}) outside room '{}'",
                point.x,
                point.y,
                room.id()
            );
            return Err(PathError::PointOutsideRoom {
                point,
                room: room.id().clone(),
            });
        }
    }

    let grid = RoomGrid::from_room(room, config.cell_size);
    let node_at = |point: Point| {
        grid.node_at(point, config.snap_to_nearest_cell)
            .ok_or_else(|| PathError::NoGridNode {
                point,
                room: room.id().clone(),
            })
    };
    let start = node_at(src)?;
    let goal = node_at(dest)?;
    let goal_world = grid.grid_to_world(goal);
    let metric = config.distance;

    let mut open_set = BinaryHeap::new();
    let mut closed_set = HashSet::new();
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut g_scores: HashMap<GridCoord, f64> = HashMap::new();

    open_set.push(AStarNode {
        key: start,
        g_cost: 0.0,
        h_cost: metric.distance(grid.grid_to_world(start), goal_world),
    });
    g_scores.insert(start, 0.0);

    let mut nodes_visited = 0;

    while let Some(current) = open_set.pop() {
        if !closed_set.insert(current.key) {
            continue;
        }
        nodes_visited += 1;
        let current_g = g_scores.get(&current.key).copied().unwrap_or(current.g_cost);

        // Goal reached
        if current.key == goal {
            let path = reconstruct_path(&grid, &came_from, goal, config.simplify_paths);
            trace!(
                "[AStar] SUCCESS: {} waypoints, cost={:.2}, nodes_visited={}",
                path.len(),
                current_g,
                nodes_visited
            );
            return Ok(PathResult::Found {
                nodes_visited,
                path,
                cost: current_g,
            });
        }

        let current_world = grid.grid_to_world(current.key);
        let incoming = came_from.get(&current.key).map(|&prev| current.key - prev);

        for neighbor in grid.neighbors(
            current.key,
            config.neighbor_strategy,
            config.allow_corner_crossing,
        ) {
            if closed_set.contains(&neighbor) {
                continue;
            }

            let neighbor_world = grid.grid_to_world(neighbor);
            let tentative_g = current_g + metric.distance(current_world, neighbor_world);
            let known_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative_g >= known_g {
                continue;
            }

            came_from.insert(neighbor, current.key);
            g_scores.insert(neighbor, tentative_g);

            let mut h = metric.distance(neighbor_world, goal_world);
            if config.turn_penalty != 0.0
                && incoming.is_some_and(|dir| dir != neighbor - current.key)
            {
                h += config.turn_penalty;
            }

            open_set.push(AStarNode {
                key: neighbor,
                g_cost: tentative_g,
                h_cost: h,
            });
        }
    }

    debug!(
        "[AStar] FAILED: NoPath in room '{}' after visiting {} nodes",
        room.id(),
        nodes_visited
    );
    Ok(PathResult::NotFound { nodes_visited })
}

fn reconstruct_path(
    grid: &RoomGrid,
    came_from: &HashMap<GridCoord, GridCoord>,
    goal: GridCoord,
    simplify: bool,
) -> Vec<Point> {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();

    if simplify {
        cells = simplify_grid_path(&cells);
    }
    cells.into_iter().map(|c| grid.grid_to_world(c)).collect()
}
