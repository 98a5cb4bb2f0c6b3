//! Rooms, links and the maps built from them.

mod ids;
mod link;
mod registry;
mod room;
mod room_map;

pub use ids::{LinkId, RoomId};
pub use link::{Link, LinkKind, RoomPoint};
pub use registry::Registry;
pub use room::{Polygon, Room, RoomShape};
pub use room_map::RoomMap;
