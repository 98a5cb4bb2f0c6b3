//! Stitching link actions and in-room paths into one world path.

use log::trace;

use crate::core::Point;
use crate::error::{MapError, PathError};
use crate::mapping::{RoomId, RoomMap};

use super::room_search::search_room;
use super::types::{LinkAction, PathResult, PathfindingConfig};

/// Accumulates the pieces of a composed path.
struct Stitch<'a> {
    map: &'a RoomMap,
    config: &'a PathfindingConfig,
    path: Vec<Point>,
    cost: f64,
    nodes_visited: usize,
}

impl Stitch<'_> {
    /// Append the in-room path from `from` to `to`.
    ///
    /// Returns `false` if the room search found no path.
    fn walk(&mut self, room: &RoomId, from: Point, to: Point) -> Result<bool, PathError> {
        let room = self
            .map
            .room(room.as_str())
            .ok_or_else(|| MapError::RoomNotInMap(room.clone()))?;

        match search_room(room, from, to, self.config)? {
            PathResult::Found {
                nodes_visited,
                path,
                cost,
            } => {
                self.nodes_visited += nodes_visited;
                self.cost += cost;
                self.path.extend(path);
                Ok(true)
            }
            PathResult::NotFound { nodes_visited } => {
                self.nodes_visited += nodes_visited;
                trace!("[AStar] no path inside room '{}'", room.id());
                Ok(false)
            }
        }
    }
}

/// Build the world path for a sequence of link actions.
///
/// `src`, when given, is walked to the first entrance; `dest`, when given,
/// is walked to from the last exit. Both start and end the path exactly,
/// ahead of and after the grid cells they snap to. The cost is the sum of
/// the in-room searches.
pub(super) fn compose(
    map: &RoomMap,
    actions: &[LinkAction],
    src: Option<Point>,
    dest: Option<Point>,
    link_nodes_visited: usize,
    config: &PathfindingConfig,
) -> Result<PathResult<Point>, PathError> {
    let mut stitch = Stitch {
        map,
        config,
        path: Vec::new(),
        cost: 0.0,
        nodes_visited: link_nodes_visited,
    };

    if let (Some(src), Some(first)) = (src, actions.first()) {
        if !stitch.walk(&first.entrance.room, src, first.entrance.point)? {
            return Ok(PathResult::NotFound {
                nodes_visited: stitch.nodes_visited,
            });
        }
    }

    for (i, action) in actions.iter().enumerate() {
        stitch.path.push(action.entrance.point);
        stitch.path.push(action.exit.point);

        let target = match actions.get(i + 1) {
            Some(next) => Some(next.entrance.point),
            None => dest,
        };
        if let Some(target) = target {
            if !stitch.walk(&action.exit.room, action.exit.point, target)? {
                return Ok(PathResult::NotFound {
                    nodes_visited: stitch.nodes_visited,
                });
            }
        }
    }

    if let Some(src) = src {
        if stitch.path.first() != Some(&src) {
            stitch.path.insert(0, src);
        }
    }
    if let Some(dest) = dest {
        if stitch.path.last() != Some(&dest) {
            stitch.path.push(dest);
        }
    }

    Ok(PathResult::Found {
        nodes_visited: stitch.nodes_visited,
        path: stitch.path,
        cost: stitch.cost,
    })
}
