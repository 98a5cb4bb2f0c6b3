//! Identifier registry for rooms and links.
//!
//! The registry only holds weak references: an id is reserved for as long
//! as the entity carrying it is alive somewhere, and becomes free again once
//! every `Arc` to it has been dropped.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::core::Point;
use crate::error::GeometryError;

use super::ids::{LinkId, RoomId};
use super::link::Link;
use super::room::Room;

/// Tracks live rooms and links by id.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: HashMap<RoomId, Weak<Room>>,
    links: HashMap<LinkId, Weak<Link>>,
    next_room: usize,
    next_link: usize,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room. Entries of dropped rooms are pruned first.
    ///
    /// Fails if another live room already uses the same id.
    pub fn add_room(&mut self, room: Room) -> Result<Arc<Room>, GeometryError> {
        self.rooms.retain(|_, room| room.strong_count() > 0);
        if self.room(room.id().as_str()).is_some() {
            return Err(GeometryError::DuplicateRoomId(room.id().clone()));
        }
        let room = Arc::new(room);
        self.rooms.insert(room.id().clone(), Arc::downgrade(&room));
        Ok(room)
    }

    /// Register a link. Entries of dropped links are pruned first.
    ///
    /// Fails if another live link already uses the same id.
    pub fn add_link(&mut self, link: Link) -> Result<Arc<Link>, GeometryError> {
        self.links.retain(|_, link| link.strong_count() > 0);
        if self.link(link.id().as_str()).is_some() {
            return Err(GeometryError::DuplicateLinkId(link.id().clone()));
        }
        let link = Arc::new(link);
        self.links.insert(link.id().clone(), Arc::downgrade(&link));
        Ok(link)
    }

    /// Live room with the given id.
    pub fn room(&self, id: &str) -> Option<Arc<Room>> {
        self.rooms.get(id).and_then(Weak::upgrade)
    }

    /// Live link with the given id.
    pub fn link(&self, id: &str) -> Option<Arc<Link>> {
        self.links.get(id).and_then(Weak::upgrade)
    }

    /// Create and register a rectangular room. A fresh id is generated if
    /// `id` is `None`.
    pub fn rect_room(
        &mut self,
        id: Option<RoomId>,
        p1: Point,
        p2: Point,
    ) -> Result<Arc<Room>, GeometryError> {
        let id = id.unwrap_or_else(|| self.fresh_room_id());
        self.add_room(Room::rect(id, p1, p2)?)
    }

    /// Create and register a polygonal room. A fresh id is generated if
    /// `id` is `None`.
    pub fn polygon_room(
        &mut self,
        id: Option<RoomId>,
        vertices: Vec<Point>,
    ) -> Result<Arc<Room>, GeometryError> {
        let id = id.unwrap_or_else(|| self.fresh_room_id());
        self.add_room(Room::polygon(id, vertices)?)
    }

    /// Create and register a door. A fresh id is generated if `id` is `None`.
    pub fn door(
        &mut self,
        id: Option<LinkId>,
        a: (&Room, Point),
        b: (&Room, Point),
    ) -> Result<Arc<Link>, GeometryError> {
        let id = id.unwrap_or_else(|| self.fresh_link_id());
        self.add_link(Link::door(id, a, b)?)
    }

    /// Drop entries whose entity no longer exists.
    pub fn prune(&mut self) {
        self.rooms.retain(|_, room| room.strong_count() > 0);
        self.links.retain(|_, link| link.strong_count() > 0);
    }

    fn fresh_room_id(&mut self) -> RoomId {
        loop {
            self.next_room += 1;
            let id = RoomId::new(format!("room_{}", self.next_room));
            if self.room(id.as_str()).is_none() {
                return id;
            }
        }
    }

    fn fresh_link_id(&mut self) -> LinkId {
        loop {
            self.next_link += 1;
            let id = LinkId::new(format!("link_{}", self.next_link));
            if self.link(id.as_str()).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_live_room_rejected() {
        let mut registry = Registry::new();
        let _a = registry
            .rect_room(Some("a".into()), Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        let dup = registry.rect_room(Some("a".into()), Point::new(2.0, 0.0), Point::new(3.0, 1.0));
        assert_eq!(dup.unwrap_err(), GeometryError::DuplicateRoomId("a".into()));
    }

    #[test]
    fn test_id_reusable_after_drop() {
        let mut registry = Registry::new();
        let a = registry
            .rect_room(Some("a".into()), Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        drop(a);
        assert!(registry.room("a").is_none());
        assert!(
            registry
                .rect_room(Some("a".into()), Point::new(2.0, 0.0), Point::new(3.0, 1.0))
                .is_ok()
        );
    }

    #[test]
    fn test_generated_ids_skip_used() {
        let mut registry = Registry::new();
        let _taken = registry
            .rect_room(Some("room_1".into()), Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        let generated = registry
            .rect_room(None, Point::new(2.0, 0.0), Point::new(3.0, 1.0))
            .unwrap();
        assert_eq!(generated.id().as_str(), "room_2");
    }

    #[test]
    fn test_door_registration() {
        let mut registry = Registry::new();
        let foo = registry
            .rect_room(Some("foo".into()), Point::new(0.0, 0.0), Point::new(3.0, 3.0))
            .unwrap();
        let bar = registry
            .rect_room(Some("bar".into()), Point::new(3.0, 0.0), Point::new(6.0, 6.0))
            .unwrap();
        let door = registry
            .door(None, (&*foo, Point::new(2.9, 1.0)), (&*bar, Point::new(3.1, 1.0)))
            .unwrap();

        assert_eq!(door.id().as_str(), "link_1");
        assert!(registry.link("link_1").is_some());
    }

    #[test]
    fn test_prune() {
        let mut registry = Registry::new();
        let a = registry
            .rect_room(None, Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        drop(a);
        registry.prune();
        assert!(registry.rooms.is_empty());
    }

    #[test]
    fn test_add_prunes_dropped_entries() {
        let mut registry = Registry::new();
        for _ in 0..5 {
            let room = registry
                .rect_room(None, Point::new(0.0, 0.0), Point::new(1.0, 1.0))
                .unwrap();
            drop(room);
        }
        let _kept = registry
            .rect_room(None, Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        assert_eq!(registry.rooms.len(), 1);

        let a = registry
            .rect_room(Some("a".into()), Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap();
        let b = registry
            .rect_room(Some("b".into()), Point::new(1.0, 0.0), Point::new(2.0, 1.0))
            .unwrap();
        let door = registry
            .door(None, (&*a, Point::new(1.0, 0.5)), (&*b, Point::new(1.0, 0.5)))
            .unwrap();
        drop(door);
        let _door = registry
            .door(None, (&*a, Point::new(1.0, 0.5)), (&*b, Point::new(1.0, 0.5)))
            .unwrap();
        assert_eq!(registry.links.len(), 1);
    }
}
