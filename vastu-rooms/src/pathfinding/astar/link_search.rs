//! A* over links, using the traversal graph as edge weights.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{MapError, PathError};
use crate::mapping::{LinkId, RoomId};
use crate::pathfinding::traversal_graph::TraversalGraph;

use super::types::{AStarNode, LinkAction, PathResult, PathfindingConfig};

/// A link entered from a given room.
type LinkKey = (LinkId, RoomId);

/// Find the cheapest sequence of links from `src` to `dest`.
///
/// The graph must be initialized.
pub(super) fn search_links(
    graph: &TraversalGraph,
    src: &RoomId,
    dest: &RoomId,
    config: &PathfindingConfig,
) -> Result<PathResult<LinkAction>, PathError> {
    let map = graph.map();
    let dest_room = map
        .room(dest.as_str())
        .ok_or_else(|| MapError::RoomNotInMap(dest.clone()))?;
    if !map.contains_room(src) {
        return Err(MapError::RoomNotInMap(src.clone()).into());
    }

    if src == dest {
        return Ok(PathResult::empty());
    }

    trace!("[LinkSearch] {} -> {}", src, dest);

    let goal = dest_room.centroid();
    let metric = config.distance;

    let mut open_set = BinaryHeap::new();
    let mut closed_set: HashSet<LinkKey> = HashSet::new();
    let mut came_from: HashMap<LinkKey, LinkKey> = HashMap::new();
    let mut g_scores: HashMap<LinkKey, f64> = HashMap::new();
    let mut actions: HashMap<LinkKey, LinkAction> = HashMap::new();

    for link in map.links_from(src)? {
        let (Some(entrance), Some(exit)) = (link.entrance_in(src), link.exit_from(src)) else {
            continue;
        };
        let key = (link.id().clone(), src.clone());
        open_set.push(AStarNode {
            key: key.clone(),
            g_cost: 0.0,
            h_cost: link.cost() + metric.distance(exit.point, goal),
        });
        g_scores.insert(key.clone(), 0.0);
        actions.insert(
            key,
            LinkAction {
                link: link.id().clone(),
                entrance: entrance.clone(),
                exit: exit.clone(),
            },
        );
    }

    let mut nodes_visited = 0;

    while let Some(current) = open_set.pop() {
        if !closed_set.insert(current.key.clone()) {
            continue;
        }
        nodes_visited += 1;

        let current_g = g_scores.get(&current.key).copied().unwrap_or(current.g_cost);
        let Some(action) = actions.get(&current.key) else {
            continue;
        };
        let arrival = action.exit.room.clone();
        let via = action.link.clone();

        if &arrival == dest {
            let path = reconstruct_path(&came_from, &actions, current.key);
            trace!(
                "[LinkSearch] SUCCESS: {} links, cost={:.2}, nodes_visited={}",
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

        for next in map.links_from(&arrival)? {
            if next.id() == &via {
                continue;
            }
            let key = (next.id().clone(), arrival.clone());
            if closed_set.contains(&key) {
                continue;
            }
            let (Some(entrance), Some(exit)) = (next.entrance_in(&arrival), next.exit_from(&arrival))
            else {
                continue;
            };

            let edge = graph.cost_of(&arrival, &via, next.id())?;
            if !edge.is_finite() {
                continue;
            }

            let tentative_g = current_g + edge;
            let known_g = g_scores.get(&key).copied().unwrap_or(f64::INFINITY);
            if tentative_g >= known_g {
                continue;
            }

            let h = next.cost() + metric.distance(exit.point, goal);
            came_from.insert(key.clone(), current.key.clone());
            g_scores.insert(key.clone(), tentative_g);
            actions.insert(
                key.clone(),
                LinkAction {
                    link: next.id().clone(),
                    entrance: entrance.clone(),
                    exit: exit.clone(),
                },
            );
            open_set.push(AStarNode {
                key,
                g_cost: tentative_g,
                h_cost: h,
            });
        }
    }

    debug!(
        "[LinkSearch] FAILED: no link path {} -> {} after visiting {} nodes",
        src, dest, nodes_visited
    );
    Ok(PathResult::NotFound { nodes_visited })
}

fn reconstruct_path(
    came_from: &HashMap<LinkKey, LinkKey>,
    actions: &HashMap<LinkKey, LinkAction>,
    goal: LinkKey,
) -> Vec<LinkAction> {
    let mut keys = vec![goal.clone()];
    let mut current = goal;
    while let Some(prev) = came_from.get(&current) {
        keys.push(prev.clone());
        current = prev.clone();
    }
    keys.iter()
        .rev()
        .filter_map(|k| actions.get(k).cloned())
        .collect()
}
