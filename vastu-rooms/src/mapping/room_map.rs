//! The room map: rooms plus the links between them.
//!
//! A [`RoomMap`] is immutable after construction. It indexes, for every
//! room, the links that can be entered from it (`links_from`) and the links
//! that lead into it (`links_to`), and keeps an overall bounding box so that
//! point queries far outside the facility are rejected without touching any
//! room.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{Bounds, Point};
use crate::error::MapError;

use super::ids::{LinkId, RoomId};
use super::link::Link;
use super::room::Room;

/// A navigable space made of rooms and links.
#[derive(Clone, Debug)]
pub struct RoomMap {
    rooms: Vec<Arc<Room>>,
    links: Vec<Arc<Link>>,
    room_index: HashMap<RoomId, usize>,
    link_index: HashMap<LinkId, usize>,
    /// Room -> indices of links with an entrance in the room
    outgoing: HashMap<RoomId, Vec<usize>>,
    /// Room -> indices of links with an exit in the room
    incoming: HashMap<RoomId, Vec<usize>>,
    boundary: Bounds,
}

impl RoomMap {
    /// Build a map from a list of rooms and the links between them.
    ///
    /// # Errors
    /// - [`MapError::DuplicateRoom`] / [`MapError::DuplicateLink`] on repeated ids
    /// - [`MapError::UnknownRoom`] if a link endpoint names a room not in `rooms`
    pub fn new<R, L>(
        rooms: impl IntoIterator<Item = R>,
        links: impl IntoIterator<Item = L>,
    ) -> Result<Self, MapError>
    where
        R: Into<Arc<Room>>,
        L: Into<Arc<Link>>,
    {
        let mut map = Self {
            rooms: Vec::new(),
            links: Vec::new(),
            room_index: HashMap::new(),
            link_index: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            boundary: Bounds::empty(),
        };

        for room in rooms {
            let room: Arc<Room> = room.into();
            if map.room_index.contains_key(room.id()) {
                return Err(MapError::DuplicateRoom(room.id().clone()));
            }
            map.boundary = map.boundary.union(&room.boundary());
            map.room_index.insert(room.id().clone(), map.rooms.len());
            map.outgoing.insert(room.id().clone(), Vec::new());
            map.incoming.insert(room.id().clone(), Vec::new());
            map.rooms.push(room);
        }

        for link in links {
            let link: Arc<Link> = link.into();
            if map.link_index.contains_key(link.id()) {
                return Err(MapError::DuplicateLink(link.id().clone()));
            }
            let idx = map.links.len();

            for entrance in link.entrances() {
                map.outgoing
                    .get_mut(&entrance.room)
                    .ok_or_else(|| MapError::UnknownRoom {
                        link: link.id().clone(),
                        room: entrance.room.clone(),
                    })?
                    .push(idx);
            }
            for exit in link.exits() {
                map.incoming
                    .get_mut(&exit.room)
                    .ok_or_else(|| MapError::UnknownRoom {
                        link: link.id().clone(),
                        room: exit.room.clone(),
                    })?
                    .push(idx);
            }

            map.link_index.insert(link.id().clone(), idx);
            map.links.push(link);
        }

        debug!(
            "[RoomMap] built: {} rooms, {} links, bounds=({:.2},{:.2})-({:.2},{:.2})",
            map.rooms.len(),
            map.links.len(),
            map.boundary.min.x,
            map.boundary.min.y,
            map.boundary.max.x,
            map.boundary.max.y
        );

        Ok(map)
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Arc<Room>> {
        self.rooms.iter()
    }

    /// Links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = &Arc<Link>> {
        self.links.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Look up a room by id.
    pub fn room(&self, id: &str) -> Option<&Arc<Room>> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// Look up a link by id.
    pub fn link(&self, id: &str) -> Option<&Arc<Link>> {
        self.link_index.get(id).map(|&i| &self.links[i])
    }

    /// Whether the room is part of this map.
    pub fn contains_room(&self, id: &RoomId) -> bool {
        self.room_index.contains_key(id)
    }

    /// Bounding box of all rooms.
    pub fn boundary(&self) -> Bounds {
        self.boundary
    }

    /// Links that can be entered from `room`.
    pub fn links_from(&self, room: &RoomId) -> Result<Vec<&Arc<Link>>, MapError> {
        self.resolve(&self.outgoing, room)
    }

    /// Links that lead into `room`.
    pub fn links_to(&self, room: &RoomId) -> Result<Vec<&Arc<Link>>, MapError> {
        self.resolve(&self.incoming, room)
    }

    /// Rooms reachable from `room` through a single link.
    pub fn neighbors_of(&self, room: &RoomId) -> Result<Vec<&Arc<Room>>, MapError> {
        Ok(self
            .links_from(room)?
            .into_iter()
            .filter_map(|link| link.exit_from(room))
            .filter_map(|exit| self.room(exit.room.as_str()))
            .collect())
    }

    /// Find the room containing `point`, if any.
    ///
    /// Rooms are tested in insertion order; the first match wins.
    pub fn point_to_room(&self, point: Point) -> Option<&Arc<Room>> {
        if !self.boundary.contains(point) {
            return None;
        }
        // Cheap boundary test before the exact shape test
        self.rooms
            .iter()
            .find(|room| room.boundary().contains(point) && room.contains(point))
    }

    fn resolve(
        &self,
        index: &HashMap<RoomId, Vec<usize>>,
        room: &RoomId,
    ) -> Result<Vec<&Arc<Link>>, MapError> {
        index
            .get(room)
            .map(|ids| ids.iter().map(|&i| &self.links[i]).collect())
            .ok_or_else(|| MapError::RoomNotInMap(room.clone()))
    }
}
