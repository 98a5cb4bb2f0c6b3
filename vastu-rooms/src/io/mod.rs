//! JSON persistence for rooms, links, maps and traversal graphs.
//!
//! Record layout:
//! - Room: `{"id", "type": "rect", "bounds": {"min", "max"}}` (`{"center", "size"}`
//!   also read) or `{"id", "type": "poly", "vertices": [...]}`
//! - Link: `{"id", "type": "door", "point1": {"point", "room"}, "point2": {...}}`
//! - Map: `{"rooms": [...], "links": [...]}`
//! - Graph: `{"map": {...}, "costs": {room: {in_link: {out_link: cost}}}}`,
//!   where an unreachable pair has cost `null`

mod records;

pub use records::{CostRecord, GraphRecord, LinkRecord, MapRecord, RectBounds, RoomRecord};

use std::io::{Read, Write};
use std::path::Path;

use crate::error::RecordError;
use crate::mapping::{Link, Registry, Room, RoomMap};
use crate::pathfinding::TraversalGraph;

/// Encode a room as JSON
pub fn room_to_json(room: &Room) -> Result<String, RecordError> {
    Ok(serde_json::to_string(&RoomRecord::from(room))?)
}

/// Decode a room from JSON
pub fn room_from_json(json: &str) -> Result<Room, RecordError> {
    serde_json::from_str::<RoomRecord>(json)?.into_room()
}

/// Encode a link as JSON
pub fn link_to_json(link: &Link) -> Result<String, RecordError> {
    Ok(serde_json::to_string(&LinkRecord::from(link))?)
}

/// Decode a link from JSON, resolving its rooms in `registry`
pub fn link_from_json(json: &str, registry: &Registry) -> Result<Link, RecordError> {
    serde_json::from_str::<LinkRecord>(json)?.into_link(|id| registry.room(id.as_str()))
}

/// Encode a room map as JSON
pub fn map_to_json(map: &RoomMap) -> Result<String, RecordError> {
    Ok(serde_json::to_string(&MapRecord::from(map))?)
}

/// Decode a room map from JSON
pub fn map_from_json(json: &str) -> Result<RoomMap, RecordError> {
    serde_json::from_str::<MapRecord>(json)?.into_map()
}

/// Encode a traversal graph as JSON
pub fn graph_to_json(graph: &TraversalGraph) -> Result<String, RecordError> {
    Ok(serde_json::to_string(&GraphRecord::from(graph))?)
}

/// Decode a traversal graph from JSON
pub fn graph_from_json(json: &str) -> Result<TraversalGraph, RecordError> {
    serde_json::from_str::<GraphRecord>(json)?.into_graph()
}

/// Write a traversal graph as pretty-printed JSON
pub fn write_graph<W: Write>(graph: &TraversalGraph, writer: &mut W) -> Result<(), RecordError> {
    Ok(serde_json::to_writer_pretty(writer, &GraphRecord::from(graph))?)
}

/// Read a traversal graph from JSON
pub fn read_graph<R: Read>(reader: &mut R) -> Result<TraversalGraph, RecordError> {
    serde_json::from_reader::<_, GraphRecord>(reader)?.into_graph()
}

/// Save a traversal graph to a JSON file
pub fn save_graph(graph: &TraversalGraph, path: &Path) -> Result<(), RecordError> {
    let mut file = std::fs::File::create(path).map_err(|e| RecordError::Io(e.to_string()))?;
    write_graph(graph, &mut file)
}

/// Load a traversal graph from a JSON file
pub fn load_graph(path: &Path) -> Result<TraversalGraph, RecordError> {
    let mut file = std::fs::File::open(path).map_err(|e| RecordError::Io(e.to_string()))?;
    read_graph(&mut file)
}
