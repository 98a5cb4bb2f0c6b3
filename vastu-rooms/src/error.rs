//! Error types for VastuRooms

use thiserror::Error;

use crate::core::Point;
use crate::mapping::{LinkId, RoomId};

/// Room or link construction failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Polygonal room shape is invalid (not enough vertices: {0})")]
    TooFewVertices(usize),

    #[error("Polygonal room shape is invalid (self-intersection present)")]
    SelfIntersecting,

    #[error("Polygonal room shape is invalid (signed area is zero)")]
    ZeroArea,

    #[error("Rectangular room shape is invalid (would degenerate into a line segment)")]
    DegenerateRectangle,

    #[error("Room geometry contains a non-finite coordinate")]
    NonFinite,

    #[error("Link endpoint ({}, {}) is not inside room '{room}'", .point.x, .point.y)]
    EndpointOutsideRoom { point: Point, room: RoomId },

    #[error("Link endpoints must be in two distinct rooms (both in '{0}')")]
    SameRoom(RoomId),

    #[error("Duplicate room ID: '{0}'")]
    DuplicateRoomId(RoomId),

    #[error("Duplicate link ID: '{0}'")]
    DuplicateLinkId(LinkId),
}

/// Room map consistency or membership error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("Room map is invalid (duplicate room ID: '{0}')")]
    DuplicateRoom(RoomId),

    #[error("Room map is invalid (duplicate link ID: '{0}')")]
    DuplicateLink(LinkId),

    #[error("Room map is invalid (link '{link}' references unknown room ID '{room}')")]
    UnknownRoom { link: LinkId, room: RoomId },

    #[error("Room '{0}' is not part of this map")]
    RoomNotInMap(RoomId),
}

/// Traversal graph state or cost table error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Graph is not initialized")]
    Uninitialized,

    #[error("Room '{0}' not in graph")]
    MissingRoom(RoomId),

    #[error("Link '{link}' not connected to room '{room}'")]
    MissingIncoming { room: RoomId, link: LinkId },

    #[error("Link '{to}' unreachable from link '{from}' in room '{room}'")]
    MissingOutgoing {
        room: RoomId,
        from: LinkId,
        to: LinkId,
    },
}

/// A pathfinding query could not be run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Origin point ({}, {}) is outside of any room in the map", .0.x, .0.y)]
    OriginOutsideMap(Point),

    #[error("Destination point ({}, {}) is outside of any room in the map", .0.x, .0.y)]
    DestinationOutsideMap(Point),

    #[error("Point ({}, {}) is outside of room '{room}'", .point.x, .point.y)]
    PointOutsideRoom { point: Point, room: RoomId },

    #[error(
        "A* path search failed (no grid cell near ({}, {}) lies inside room '{room}')",
        .point.x, .point.y
    )]
    NoGridNode { point: Point, room: RoomId },

    #[error("Invalid pathfinding configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// An entity record could not be decoded.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Link '{link}' references unknown room ID '{room}'")]
    UnknownRoom { link: LinkId, room: RoomId },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
