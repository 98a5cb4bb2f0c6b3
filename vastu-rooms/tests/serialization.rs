//! JSON records for rooms, links, maps and graphs.

mod common;

use approx::assert_relative_eq;
use common::{floor_plan, graph, pathfinder, room_id};
use vastu_rooms::core::Point;
use vastu_rooms::io::{self, MapRecord};
use vastu_rooms::{
    CostTable, Link, LinkId, Pathfinder, RecordError, Registry, Room, RoomMap, TraversalGraph,
};

fn link_id(id: &str) -> LinkId {
    LinkId::from(id)
}

#[test]
fn test_room_json_roundtrip() {
    let rect = Room::rect("foo", Point::new(3.0, 3.0), Point::new(0.0, 0.0)).unwrap();
    let decoded = io::room_from_json(&io::room_to_json(&rect).unwrap()).unwrap();
    assert_eq!(decoded.id(), rect.id());
    assert_eq!(decoded.boundary(), rect.boundary());

    let triangle = Room::polygon(
        "tri",
        vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)],
    )
    .unwrap();
    let decoded = io::room_from_json(&io::room_to_json(&triangle).unwrap()).unwrap();
    assert_eq!(decoded.vertices(), triangle.vertices());
    assert_relative_eq!(decoded.area(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_link_json_resolves_rooms() {
    let mut registry = Registry::new();
    let foo = registry
        .rect_room(Some("foo".into()), Point::new(0.0, 0.0), Point::new(3.0, 3.0))
        .unwrap();
    let bar = registry
        .rect_room(Some("bar".into()), Point::new(3.0, 0.0), Point::new(6.0, 6.0))
        .unwrap();
    let door = registry
        .door(
            Some("door".into()),
            (&*foo, Point::new(2.9, 1.0)),
            (&*bar, Point::new(3.1, 1.0)),
        )
        .unwrap();

    let json = io::link_to_json(&door).unwrap();
    let decoded = io::link_from_json(&json, &registry).unwrap();
    assert_eq!(&decoded, door.as_ref());

    // Rooms no longer alive cannot be resolved
    drop(foo);
    assert!(matches!(
        io::link_from_json(&json, &registry),
        Err(RecordError::UnknownRoom { .. })
    ));
}

#[test]
fn test_map_json_roundtrip() {
    let map = floor_plan();
    let decoded = io::map_from_json(&io::map_to_json(&map).unwrap()).unwrap();

    assert_eq!(decoded.room_count(), 4);
    assert_eq!(decoded.link_count(), 2);
    assert_eq!(MapRecord::from(&decoded), MapRecord::from(&map));
}

#[test]
fn test_map_json_roundtrip_exact_rect_edges() {
    let a = Room::rect("a", Point::new(0.0, 2.3), Point::new(1.1, 5.9)).unwrap();
    let b = Room::rect("b", Point::new(1.1, 2.3), Point::new(4.7, 5.9)).unwrap();
    // Door endpoints sit on the shared wall
    let door = Link::door("d", (&a, Point::new(1.1, 3.0)), (&b, Point::new(1.1, 3.0))).unwrap();
    let map = RoomMap::new(vec![a, b], vec![door]).unwrap();

    let decoded = io::map_from_json(&io::map_to_json(&map).unwrap()).unwrap();

    let b = decoded.room("b").unwrap();
    assert_eq!(b.boundary().min, Point::new(1.1, 2.3));
    assert_eq!(b.boundary().max, Point::new(4.7, 5.9));
    assert_eq!(MapRecord::from(&decoded), MapRecord::from(&map));
}

#[test]
fn test_map_json_rejects_dangling_link() {
    let json = r#"{
        "rooms": [
            {"id": "foo", "type": "rect", "bounds": {"center": {"x": 1.5, "y": 1.5}, "size": {"x": 3, "y": 3}}}
        ],
        "links": [
            {
                "id": "door",
                "type": "door",
                "point1": {"point": {"x": 2.9, "y": 1}, "room": "foo"},
                "point2": {"point": {"x": 3.1, "y": 1}, "room": "bar"}
            }
        ]
    }"#;

    assert!(matches!(
        io::map_from_json(json),
        Err(RecordError::UnknownRoom { .. })
    ));
}

#[test]
fn test_graph_json_keeps_costs() {
    let graph = graph();
    let decoded = io::graph_from_json(&io::graph_to_json(&graph).unwrap()).unwrap();

    assert!(decoded.is_initialized());
    assert_eq!(decoded.costs(), graph.costs());

    // Searches on the decoded graph match the original
    let pathfinder = pathfinder();
    let before = pathfinder
        .map_point_to_point(&graph, Point::new(0.0, 5.5), Point::new(0.0, 0.0), None)
        .unwrap();
    let after = pathfinder
        .map_point_to_point(&decoded, Point::new(0.0, 5.5), Point::new(0.0, 0.0), None)
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_uninitialized_graph_json() {
    let graph = TraversalGraph::new(floor_plan());
    let json = io::graph_to_json(&graph).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("costs").is_none());
    assert!(!io::graph_from_json(&json).unwrap().is_initialized());
}

#[test]
fn test_unreachable_cost_written_as_null() {
    let mut table = CostTable::new();
    table.insert_room(room_id("attic"));
    table.insert_incoming(room_id("foo"), link_id("foo_bar"));
    table.insert_incoming(room_id("qux"), link_id("bar_qux"));
    table.insert(room_id("bar"), link_id("foo_bar"), link_id("bar_qux"), f64::INFINITY);
    table.insert(room_id("bar"), link_id("bar_qux"), link_id("foo_bar"), 4.0);

    let mut graph = TraversalGraph::new(floor_plan());
    graph.set_costs(table).unwrap();

    let json = io::graph_to_json(&graph).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["costs"]["bar"]["foo_bar"]["bar_qux"].is_null());
    assert_eq!(value["costs"]["bar"]["bar_qux"]["foo_bar"], 4.0);

    let decoded = io::graph_from_json(&json).unwrap();
    let cost = decoded
        .cost_of(&room_id("bar"), &link_id("foo_bar"), &link_id("bar_qux"))
        .unwrap();
    assert!(cost.is_infinite());
}

#[test]
fn test_graph_file_roundtrip() {
    let graph = graph();
    let path = std::env::temp_dir().join(format!("vastu_rooms_graph_{}.json", std::process::id()));

    io::save_graph(&graph, &path).unwrap();
    let loaded = io::load_graph(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.costs(), graph.costs());
    assert!(matches!(
        io::load_graph(&path),
        Err(RecordError::Io(_))
    ));
}
