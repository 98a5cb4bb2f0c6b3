//! Plain-data records mirroring rooms, links, maps and graphs.
//!
//! Records are what gets serialized; converting a record back into an entity
//! goes through the regular constructors, so decoded entities are validated
//! exactly like hand-built ones.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{Bounds, CenterSize, Point};
use crate::error::RecordError;
use crate::mapping::{Link, LinkId, LinkKind, Room, RoomId, RoomMap, RoomPoint, RoomShape};
use crate::pathfinding::{CostTable, TraversalGraph};

/// Serialized room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RoomRecord {
    /// Axis-aligned rectangle
    Rect { id: RoomId, bounds: RectBounds },
    /// Simple polygon, counter-clockwise
    Poly { id: RoomId, vertices: Vec<Point> },
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        match room.shape() {
            RoomShape::Rect(bounds) => RoomRecord::Rect {
                id: room.id().clone(),
                bounds: RectBounds::from(*bounds),
            },
            RoomShape::Polygon(polygon) => RoomRecord::Poly {
                id: room.id().clone(),
                vertices: polygon.vertices().to_vec(),
            },
        }
    }
}

/// Extent of a rectangular room.
///
/// Written as corners so the room decodes to exactly the same boundary.
/// The center/size form is accepted when reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RectBounds {
    Corners { min: Point, max: Point },
    CenterSize(CenterSize),
}

impl From<Bounds> for RectBounds {
    fn from(bounds: Bounds) -> Self {
        RectBounds::Corners {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl From<RectBounds> for Bounds {
    fn from(bounds: RectBounds) -> Self {
        match bounds {
            RectBounds::Corners { min, max } => Bounds::from_corners(min, max),
            RectBounds::CenterSize(cs) => cs.into(),
        }
    }
}

impl RoomRecord {
    /// Identifier of the recorded room.
    pub fn id(&self) -> &RoomId {
        match self {
            RoomRecord::Rect { id, .. } | RoomRecord::Poly { id, .. } => id,
        }
    }

    /// Rebuild the room.
    pub fn into_room(self) -> Result<Room, RecordError> {
        let room = match self {
            RoomRecord::Rect { id, bounds } => Room::rect_from_bounds(id, bounds.into())?,
            RoomRecord::Poly { id, vertices } => Room::polygon(id, vertices)?,
        };
        Ok(room)
    }
}

/// Serialized link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LinkRecord {
    /// Two-way door
    Door {
        id: LinkId,
        point1: RoomPoint,
        point2: RoomPoint,
    },
}

impl From<&Link> for LinkRecord {
    fn from(link: &Link) -> Self {
        match link.kind() {
            LinkKind::Door { a, b } => LinkRecord::Door {
                id: link.id().clone(),
                point1: a.clone(),
                point2: b.clone(),
            },
        }
    }
}

impl LinkRecord {
    /// Rebuild the link, resolving room ids with `lookup`.
    pub fn into_link<F>(self, lookup: F) -> Result<Link, RecordError>
    where
        F: Fn(&RoomId) -> Option<Arc<Room>>,
    {
        match self {
            LinkRecord::Door { id, point1, point2 } => {
                let resolve = |p: &RoomPoint| {
                    lookup(&p.room).ok_or_else(|| RecordError::UnknownRoom {
                        link: id.clone(),
                        room: p.room.clone(),
                    })
                };
                let room1 = resolve(&point1)?;
                let room2 = resolve(&point2)?;
                Ok(Link::door(
                    id,
                    (&*room1, point1.point),
                    (&*room2, point2.point),
                )?)
            }
        }
    }
}

/// Serialized room map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    pub rooms: Vec<RoomRecord>,
    pub links: Vec<LinkRecord>,
}

impl From<&RoomMap> for MapRecord {
    fn from(map: &RoomMap) -> Self {
        Self {
            rooms: map.rooms().map(|r| RoomRecord::from(r.as_ref())).collect(),
            links: map.links().map(|l| LinkRecord::from(l.as_ref())).collect(),
        }
    }
}

impl MapRecord {
    /// Rebuild the map. Links resolve rooms among the recorded rooms.
    pub fn into_map(self) -> Result<RoomMap, RecordError> {
        let rooms = self
            .rooms
            .into_iter()
            .map(|r| r.into_room().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        let by_id: HashMap<RoomId, Arc<Room>> = rooms
            .iter()
            .map(|r| (r.id().clone(), Arc::clone(r)))
            .collect();
        let links = self
            .links
            .into_iter()
            .map(|l| l.into_link(|id| by_id.get(id).cloned()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoomMap::new(rooms, links)?)
    }
}

/// Cost table with infinite costs written as `null`.
pub type CostRecord = HashMap<RoomId, HashMap<LinkId, HashMap<LinkId, Option<f64>>>>;

/// Serialized traversal graph.
///
/// `costs` is absent for an uninitialized graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub map: MapRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostRecord>,
}

impl From<&TraversalGraph> for GraphRecord {
    fn from(graph: &TraversalGraph) -> Self {
        Self {
            map: MapRecord::from(graph.map().as_ref()),
            costs: graph.costs().map(encode_costs),
        }
    }
}

impl GraphRecord {
    /// Rebuild the graph; recorded costs are validated against the map.
    pub fn into_graph(self) -> Result<TraversalGraph, RecordError> {
        let map = self.map.into_map()?;
        match self.costs {
            Some(costs) => Ok(TraversalGraph::with_costs(map, decode_costs(costs))?),
            None => Ok(TraversalGraph::new(map)),
        }
    }
}

fn encode_costs(table: &CostTable) -> CostRecord {
    table
        .as_map()
        .iter()
        .map(|(room, incoming)| {
            let incoming = incoming
                .iter()
                .map(|(from, outgoing)| {
                    let outgoing = outgoing
                        .iter()
                        .map(|(to, &cost)| (to.clone(), cost.is_finite().then_some(cost)))
                        .collect();
                    (from.clone(), outgoing)
                })
                .collect();
            (room.clone(), incoming)
        })
        .collect()
}

fn decode_costs(record: CostRecord) -> CostTable {
    let mut table = CostTable::new();
    for (room, incoming) in record {
        table.insert_room(room.clone());
        for (from, outgoing) in incoming {
            table.insert_incoming(room.clone(), from.clone());
            for (to, cost) in outgoing {
                table.insert(
                    room.clone(),
                    from.clone(),
                    to,
                    cost.unwrap_or(f64::INFINITY),
                );
            }
        }
    }
    table
}
