//! Shared floor plan for integration tests.
//!
//! ```text
//!  y=6 ┌─────────┬─────────┐
//!      │   qux   │         │
//!      │         ╪ bar_qux │
//!  y=3 ├─────────┤   bar   │
//!      │   foo   │         │      ┌───────┐
//!      │         ╪ foo_bar │      │ attic │
//!  y=0 └─────────┴─────────┘      └───────┘
//!     x=0       x=3       x=6   x=10    x=12
//! ```
//!
//! `attic` has no links. There is no door between foo and qux.

#![allow(dead_code)]

use vastu_rooms::core::Point;
use vastu_rooms::{AStarPathfinder, Link, PathfindingConfig, Room, RoomId, RoomMap, TraversalGraph};

pub const CELL_SIZE: f64 = 0.5;

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room::rect("foo", Point::new(0.0, 0.0), Point::new(3.0, 3.0)).unwrap(),
        Room::rect("bar", Point::new(3.0, 0.0), Point::new(6.0, 6.0)).unwrap(),
        Room::rect("qux", Point::new(0.0, 3.0), Point::new(3.0, 6.0)).unwrap(),
        Room::rect("attic", Point::new(10.0, 0.0), Point::new(12.0, 2.0)).unwrap(),
    ]
}

pub fn floor_plan() -> RoomMap {
    let rooms = rooms();
    let links = vec![
        Link::door(
            "foo_bar",
            (&rooms[0], Point::new(2.9, 1.0)),
            (&rooms[1], Point::new(3.1, 1.0)),
        )
        .unwrap(),
        Link::door(
            "bar_qux",
            (&rooms[1], Point::new(3.1, 5.0)),
            (&rooms[2], Point::new(2.9, 5.0)),
        )
        .unwrap(),
    ];
    RoomMap::new(rooms, links).unwrap()
}

pub fn config() -> PathfindingConfig {
    PathfindingConfig::with_cell_size(CELL_SIZE)
}

pub fn pathfinder() -> AStarPathfinder {
    AStarPathfinder::new(config())
}

/// Floor plan graph with its costs already computed.
pub fn graph() -> TraversalGraph {
    let mut graph = TraversalGraph::new(floor_plan());
    graph.compute_costs(&pathfinder()).unwrap();
    graph
}

pub fn room_id(id: &str) -> RoomId {
    RoomId::from(id)
}
