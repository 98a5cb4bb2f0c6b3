//! Precomputed link-to-link traversal costs.
//!
//! For every room, the traversal graph stores the cost of walking from the
//! exit of each link leading into the room to the entrance of each other
//! link leaving it. The link-level search uses these costs as edge weights,
//! so room grids only need to be searched once per map instead of once per
//! query.
//!
//! ```rust,ignore
//! let mut graph = TraversalGraph::new(map);
//! graph.compute_costs(&AStarPathfinder::new(PathfindingConfig::with_cell_size(0.5)))?;
//! let cost = graph.cost_of(&"bar".into(), &"door_foo_bar".into(), &"door_bar_qux".into())?;
//! ```

use log::{debug, trace};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{GraphError, PathError};
use crate::mapping::{LinkId, RoomId, RoomMap};

use super::traits::Pathfinder;

/// Room -> incoming link -> outgoing link -> cost.
///
/// Pairs that cannot be connected inside the room have infinite cost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostTable(HashMap<RoomId, HashMap<LinkId, HashMap<LinkId, f64>>>);

impl CostTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room with no entries.
    pub fn insert_room(&mut self, room: RoomId) {
        self.0.entry(room).or_default();
    }

    /// Add an incoming link of a room with no outgoing entries.
    pub fn insert_incoming(&mut self, room: RoomId, incoming: LinkId) {
        self.0.entry(room).or_default().entry(incoming).or_default();
    }

    /// Set the cost of passing through `room` from `incoming` to `outgoing`.
    pub fn insert(&mut self, room: RoomId, incoming: LinkId, outgoing: LinkId, cost: f64) {
        self.0
            .entry(room)
            .or_default()
            .entry(incoming)
            .or_default()
            .insert(outgoing, cost);
    }

    /// Cost of passing through `room` from `incoming` to `outgoing`.
    pub fn get(
        &self,
        room: &RoomId,
        incoming: &LinkId,
        outgoing: &LinkId,
    ) -> Result<f64, GraphError> {
        self.0
            .get(room)
            .ok_or_else(|| GraphError::MissingRoom(room.clone()))?
            .get(incoming)
            .ok_or_else(|| GraphError::MissingIncoming {
                room: room.clone(),
                link: incoming.clone(),
            })?
            .get(outgoing)
            .copied()
            .ok_or_else(|| GraphError::MissingOutgoing {
                room: room.clone(),
                from: incoming.clone(),
                to: outgoing.clone(),
            })
    }

    /// Raw nested map.
    pub fn as_map(&self) -> &HashMap<RoomId, HashMap<LinkId, HashMap<LinkId, f64>>> {
        &self.0
    }

    /// Check that every room, incoming link and outgoing link of `map` has
    /// an entry.
    pub fn validate(&self, map: &RoomMap) -> Result<(), GraphError> {
        for room in map.rooms() {
            let Some(room_costs) = self.0.get(room.id()) else {
                return Err(GraphError::MissingRoom(room.id().clone()));
            };
            let outgoing = map.links_from(room.id()).unwrap_or_default();
            for incoming in map.links_to(room.id()).unwrap_or_default() {
                if !room_costs.contains_key(incoming.id()) {
                    return Err(GraphError::MissingIncoming {
                        room: room.id().clone(),
                        link: incoming.id().clone(),
                    });
                }
                for out in outgoing.iter().filter(|out| out.id() != incoming.id()) {
                    self.get(room.id(), incoming.id(), out.id())?;
                }
            }
        }
        Ok(())
    }
}

impl From<HashMap<RoomId, HashMap<LinkId, HashMap<LinkId, f64>>>> for CostTable {
    fn from(map: HashMap<RoomId, HashMap<LinkId, HashMap<LinkId, f64>>>) -> Self {
        Self(map)
    }
}

/// A room map together with its link traversal costs.
///
/// The graph starts uninitialized; link-level searches require costs, either
/// computed with [`TraversalGraph::compute_costs`] or supplied with
/// [`TraversalGraph::set_costs`].
#[derive(Debug)]
pub struct TraversalGraph {
    map: Arc<RoomMap>,
    costs: OnceLock<CostTable>,
}

impl TraversalGraph {
    /// Create an uninitialized graph over `map`.
    pub fn new(map: impl Into<Arc<RoomMap>>) -> Self {
        Self {
            map: map.into(),
            costs: OnceLock::new(),
        }
    }

    /// Create a graph with a known cost table.
    pub fn with_costs(map: impl Into<Arc<RoomMap>>, costs: CostTable) -> Result<Self, GraphError> {
        let mut graph = Self::new(map);
        graph.set_costs(costs)?;
        Ok(graph)
    }

    /// The underlying room map.
    pub fn map(&self) -> &Arc<RoomMap> {
        &self.map
    }

    /// Whether costs are available.
    pub fn is_initialized(&self) -> bool {
        self.costs.get().is_some()
    }

    /// The cost table, if initialized.
    pub fn costs(&self) -> Option<&CostTable> {
        self.costs.get()
    }

    /// Compute every link-to-link cost with `pathfinder`.
    ///
    /// Any search error aborts the computation and leaves the graph
    /// uninitialized.
    pub fn compute_costs<P: Pathfinder + ?Sized>(&mut self, pathfinder: &P) -> Result<(), PathError> {
        self.costs.take();
        let table = compute_table(&self.map, pathfinder)?;
        self.costs = OnceLock::from(table);
        Ok(())
    }

    /// Return the cost table, computing it first if the graph is
    /// uninitialized.
    pub fn ensure_costs<P: Pathfinder + ?Sized>(&self, pathfinder: &P) -> Result<&CostTable, PathError> {
        if let Some(costs) = self.costs.get() {
            return Ok(costs);
        }
        let table = compute_table(&self.map, pathfinder)?;
        Ok(self.costs.get_or_init(|| table))
    }

    /// Replace the cost table.
    ///
    /// An incomplete table leaves the graph uninitialized.
    pub fn set_costs(&mut self, costs: CostTable) -> Result<(), GraphError> {
        self.costs.take();
        if let Err(e) = costs.validate(&self.map) {
            debug!("[TraversalGraph] rejected cost table: {}", e);
            return Err(e);
        }
        self.costs = OnceLock::from(costs);
        Ok(())
    }

    /// Drop the cost table.
    pub fn clear_costs(&mut self) {
        self.costs.take();
    }

    /// Cost of passing through `room` from `incoming` to `outgoing`.
    pub fn cost_of(
        &self,
        room: &RoomId,
        incoming: &LinkId,
        outgoing: &LinkId,
    ) -> Result<f64, GraphError> {
        self.costs
            .get()
            .ok_or(GraphError::Uninitialized)?
            .get(room, incoming, outgoing)
    }
}

fn compute_table<P: Pathfinder + ?Sized>(map: &RoomMap, pathfinder: &P) -> Result<CostTable, PathError> {
    let mut table = CostTable::new();
    let mut pairs = 0;

    for room in map.rooms() {
        table.insert_room(room.id().clone());
        let outgoing = map.links_from(room.id())?;

        for incoming in map.links_to(room.id())? {
            table.insert_incoming(room.id().clone(), incoming.id().clone());
            let Some(start) = incoming.exit_in(room.id()) else {
                continue;
            };

            for out in outgoing.iter().filter(|out| out.id() != incoming.id()) {
                let Some(end) = out.entrance_in(room.id()) else {
                    continue;
                };
                let cost = pathfinder
                    .room_point_to_point(room, start.point, end.point, None)?
                    .cost()
                    .unwrap_or(f64::INFINITY);
                trace!(
                    "[TraversalGraph] {}: {} -> {} = {:.2}",
                    room.id(),
                    incoming.id(),
                    out.id(),
                    cost
                );
                table.insert(
                    room.id().clone(),
                    incoming.id().clone(),
                    out.id().clone(),
                    cost,
                );
                pairs += 1;
            }
        }
    }

    debug!(
        "[TraversalGraph] computed {} link pairs over {} rooms",
        pairs,
        map.room_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::mapping::{Link, Room};
    use crate::pathfinding::{AStarPathfinder, PathfindingConfig};
    use approx::assert_relative_eq;

    fn three_room_map() -> RoomMap {
        let rooms = vec![
            Room::rect("foo", Point::new(0.0, 0.0), Point::new(3.0, 3.0)).unwrap(),
            Room::rect("bar", Point::new(3.0, 0.0), Point::new(6.0, 6.0)).unwrap(),
            Room::rect("qux", Point::new(0.0, 3.0), Point::new(3.0, 6.0)).unwrap(),
        ];
        let door = |id: &str, a: usize, pa: (f64, f64), b: usize, pb: (f64, f64)| {
            Link::door(id, (&rooms[a], pa.into()), (&rooms[b], pb.into())).unwrap()
        };
        let links = vec![
            door("door_foo_bar", 0, (2.9, 1.0), 1, (3.1, 1.0)),
            door("door_bar_qux", 1, (3.1, 5.0), 2, (2.9, 5.0)),
            door("door_foo_qux", 0, (2.0, 2.9), 2, (2.0, 3.1)),
        ];
        RoomMap::new(rooms, links).unwrap()
    }

    fn pathfinder() -> AStarPathfinder {
        AStarPathfinder::new(PathfindingConfig::with_cell_size(0.5))
    }

    fn ids(room: &str, a: &str, b: &str) -> (RoomId, LinkId, LinkId) {
        (room.into(), a.into(), b.into())
    }

    #[test]
    fn test_compute_costs() {
        let mut graph = TraversalGraph::new(three_room_map());
        assert!(!graph.is_initialized());

        graph.compute_costs(&pathfinder()).unwrap();
        assert!(graph.is_initialized());

        let expected = [
            ("foo", "door_foo_bar", "door_foo_qux", 1.7),
            ("foo", "door_foo_qux", "door_foo_bar", 1.7),
            ("bar", "door_foo_bar", "door_bar_qux", 4.0),
            ("bar", "door_bar_qux", "door_foo_bar", 4.0),
            ("qux", "door_foo_qux", "door_bar_qux", 2.2),
            ("qux", "door_bar_qux", "door_foo_qux", 2.2),
        ];
        for (room, from, to, cost) in expected {
            let (room, from, to) = ids(room, from, to);
            assert_relative_eq!(graph.cost_of(&room, &from, &to).unwrap(), cost, epsilon = 1e-9);
        }
        // No entry for going back through the same link
        let (room, from, to) = ids("foo", "door_foo_bar", "door_foo_bar");
        assert!(matches!(
            graph.cost_of(&room, &from, &to),
            Err(GraphError::MissingOutgoing { .. })
        ));
    }

    #[test]
    fn test_compute_costs_is_idempotent() {
        let mut graph = TraversalGraph::new(three_room_map());
        graph.compute_costs(&pathfinder()).unwrap();
        let first = graph.costs().cloned();

        graph.compute_costs(&pathfinder()).unwrap();
        assert_eq!(graph.costs().cloned(), first);
    }

    #[test]
    fn test_uninitialized_lookup() {
        let graph = TraversalGraph::new(three_room_map());
        let (room, from, to) = ids("bar", "door_foo_bar", "door_bar_qux");
        assert_eq!(graph.cost_of(&room, &from, &to), Err(GraphError::Uninitialized));
    }

    #[test]
    fn test_ensure_costs_from_shared_reference() {
        let graph = TraversalGraph::new(three_room_map());
        let shared = &graph;
        shared.ensure_costs(&pathfinder()).unwrap();
        assert!(graph.is_initialized());
    }

    #[test]
    fn test_set_costs_validation() {
        let mut graph = TraversalGraph::new(three_room_map());

        let mut partial = CostTable::new();
        partial.insert_room("foo".into());
        assert!(graph.set_costs(partial).is_err());
        assert!(!graph.is_initialized());

        let mut full = CostTable::new();
        for (room, a, b) in [
            ("foo", "door_foo_bar", "door_foo_qux"),
            ("bar", "door_foo_bar", "door_bar_qux"),
            ("qux", "door_foo_qux", "door_bar_qux"),
        ] {
            full.insert(room.into(), a.into(), b.into(), 1.0);
            full.insert(room.into(), b.into(), a.into(), 1.0);
        }
        graph.set_costs(full).unwrap();
        assert!(graph.is_initialized());

        // A rejected table also clears the previous one
        assert!(graph.set_costs(CostTable::new()).is_err());
        assert!(!graph.is_initialized());
    }

    #[test]
    fn test_missing_entries_are_reported() {
        let mut table = CostTable::new();
        table.insert("bar".into(), "door_foo_bar".into(), "door_bar_qux".into(), 4.0);

        let (_, from, to) = ids("bar", "door_foo_bar", "door_bar_qux");
        assert_eq!(
            table.get(&"foo".into(), &from, &to),
            Err(GraphError::MissingRoom("foo".into()))
        );
        assert!(matches!(
            table.get(&"bar".into(), &to, &from),
            Err(GraphError::MissingIncoming { .. })
        ));
        assert!(matches!(
            table.get(&"bar".into(), &from, &from),
            Err(GraphError::MissingOutgoing { .. })
        ));
    }
}
