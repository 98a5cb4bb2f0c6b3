//! Links: portals connecting two rooms.
//!
//! Doors are the only link kind today. A door is bidirectional, so both of
//! its endpoints are entrances and both are exits; which one is used depends
//! on the room the traversal starts from.

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::GeometryError;

use super::ids::{LinkId, RoomId};
use super::room::Room;

/// A point tagged with the room it lies in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomPoint {
    /// Position in world coordinates
    pub point: Point,
    /// Room the position belongs to
    pub room: RoomId,
}

impl RoomPoint {
    /// Create a room point.
    pub fn new(point: Point, room: impl Into<RoomId>) -> Self {
        Self {
            point,
            room: room.into(),
        }
    }
}

/// The kind-specific data of a link.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkKind {
    /// Two-way door between two rooms
    Door {
        /// Endpoint in the first room
        a: RoomPoint,
        /// Endpoint in the second room
        b: RoomPoint,
    },
}

/// A portal between two rooms.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    id: LinkId,
    kind: LinkKind,
    cost: f64,
}

impl Link {
    /// Create a door between `room_a` at `point_a` and `room_b` at `point_b`.
    ///
    /// # Errors
    /// - [`GeometryError::EndpointOutsideRoom`] if a point is outside its room
    /// - [`GeometryError::SameRoom`] if both rooms share an identifier
    pub fn door(
        id: impl Into<LinkId>,
        (room_a, point_a): (&Room, Point),
        (room_b, point_b): (&Room, Point),
    ) -> Result<Self, GeometryError> {
        for (room, point) in [(room_a, point_a), (room_b, point_b)] {
            if !point.is_finite() {
                return Err(GeometryError::NonFinite);
            }
            if !room.contains(point) {
                return Err(GeometryError::EndpointOutsideRoom {
                    point,
                    room: room.id().clone(),
                });
            }
        }
        if room_a.id() == room_b.id() {
            return Err(GeometryError::SameRoom(room_a.id().clone()));
        }

        Ok(Self {
            id: id.into(),
            kind: LinkKind::Door {
                a: RoomPoint::new(point_a, room_a.id().clone()),
                b: RoomPoint::new(point_b, room_b.id().clone()),
            },
            cost: point_a.distance(&point_b),
        })
    }

    /// The unique identifier of the link.
    #[inline]
    pub fn id(&self) -> &LinkId {
        &self.id
    }

    /// The kind-specific link data.
    #[inline]
    pub fn kind(&self) -> &LinkKind {
        &self.kind
    }

    /// Cost of passing through the link.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Points from which the link can be entered.
    pub fn entrances(&self) -> Vec<&RoomPoint> {
        match &self.kind {
            LinkKind::Door { a, b } => vec![a, b],
        }
    }

    /// Points at which the link can be left.
    pub fn exits(&self) -> Vec<&RoomPoint> {
        match &self.kind {
            LinkKind::Door { a, b } => vec![a, b],
        }
    }

    /// Entrance located in `room`, if any.
    pub fn entrance_in(&self, room: &RoomId) -> Option<&RoomPoint> {
        self.entrances().into_iter().find(|p| &p.room == room)
    }

    /// Exit located in `room`, if any.
    pub fn exit_in(&self, room: &RoomId) -> Option<&RoomPoint> {
        self.exits().into_iter().find(|p| &p.room == room)
    }

    /// Exit reached when entering the link from `room`.
    pub fn exit_from(&self, room: &RoomId) -> Option<&RoomPoint> {
        match &self.kind {
            LinkKind::Door { a, b } if &a.room == room => Some(b),
            LinkKind::Door { a, b } if &b.room == room => Some(a),
            LinkKind::Door { .. } => None,
        }
    }

    /// Entrance/exit pair for travelling from `src` directly into `dest`.
    pub fn path_between(&self, src: &RoomId, dest: &RoomId) -> Option<(&RoomPoint, &RoomPoint)> {
        let entrance = self.entrance_in(src)?;
        let exit = self.exit_from(src)?;
        (&exit.room == dest).then_some((entrance, exit))
    }

    /// Whether the link connects `src` to `dest` directly.
    pub fn is_connected(&self, src: &RoomId, dest: &RoomId) -> bool {
        self.path_between(src, dest).is_some()
    }
}
