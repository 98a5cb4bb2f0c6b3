//! Plan a route through a small apartment.
//!
//! Builds a floor plan of four rooms, computes the traversal graph and
//! prints the path between two points.
//!
//! Usage:
//!   cargo run --example floor_plan
//!   cargo run --example floor_plan -- --from 1,1 --to 9,7 --output graph.json

use std::path::PathBuf;

use clap::Parser;

use vastu_rooms::core::Point;
use vastu_rooms::io::save_graph;
use vastu_rooms::{Pathfinder, PathResult, Registry, RoomMap, RoomsConfig, TraversalGraph};

/// Floor plan pathfinding example
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/rooms.yaml")]
    config: PathBuf,

    /// Start point as "x,y"
    #[arg(long, default_value = "1,1", value_parser = parse_point)]
    from: Point,

    /// Goal point as "x,y"
    #[arg(long, default_value = "9,7", value_parser = parse_point)]
    to: Point,

    /// Save the traversal graph as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

/// ```text
///  y=8 ┌──────────┬─────────┐
///      │ bedroom  │  bath   │
///      │          ╪         │
///  y=4 ├────╪─────┼────╪────┤
///      │ living   ╪ kitchen │
///  y=0 └──────────┴─────────┘
///     x=0        x=6      x=10
/// ```
fn apartment(registry: &mut Registry) -> Result<RoomMap, Box<dyn std::error::Error>> {
    let mut room = |id: &str, min: (f64, f64), max: (f64, f64)| {
        registry.rect_room(Some(id.into()), min.into(), max.into())
    };
    let living = room("living", (0.0, 0.0), (6.0, 4.0))?;
    let kitchen = room("kitchen", (6.0, 0.0), (10.0, 4.0))?;
    let bedroom = room("bedroom", (0.0, 4.0), (6.0, 8.0))?;
    let bath = room("bath", (6.0, 4.0), (10.0, 8.0))?;

    let doors = [
        (&living, (5.9, 2.0), &kitchen, (6.1, 2.0)),
        (&living, (2.0, 3.9), &bedroom, (2.0, 4.1)),
        (&bedroom, (5.9, 6.0), &bath, (6.1, 6.0)),
        (&kitchen, (8.0, 3.9), &bath, (8.0, 4.1)),
    ];
    let links = doors
        .into_iter()
        .map(|(a, pa, b, pb)| registry.door(None, (&**a, pa.into()), (&**b, pb.into())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RoomMap::new(vec![living, kitchen, bedroom, bath], links)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = if args.config.exists() {
        RoomsConfig::load(&args.config)?
    } else {
        println!("Config {} not found, using defaults", args.config.display());
        RoomsConfig::default()
    };
    let pathfinder = config.pathfinder()?;

    let mut registry = Registry::new();
    let map = apartment(&mut registry)?;
    println!("Map: {} rooms, {} links", map.room_count(), map.link_count());

    let mut graph = TraversalGraph::new(map);
    graph.compute_costs(&pathfinder)?;

    match pathfinder.map_point_to_point(&graph, args.from, args.to, None)? {
        PathResult::Found {
            nodes_visited,
            path,
            cost,
        } => {
            println!(
                "Path found: cost={:.2}, {} points, {} nodes visited",
                cost,
                path.len(),
                nodes_visited
            );
            for p in &path {
                println!("  ({:.2}, {:.2})", p.x, p.y);
            }
        }
        PathResult::NotFound { nodes_visited } => {
            println!("No path ({} nodes visited)", nodes_visited);
        }
    }

    if let Some(output) = &args.output {
        save_graph(&graph, output)?;
        println!("Saved traversal graph to {}", output.display());
    }

    Ok(())
}
