//! Search grid laid over a single room.

use crate::core::{GridCoord, Point};
use crate::mapping::Room;

use super::types::NeighborStrategy;

/// Uniform grid covering a room's boundary box.
///
/// A cell is a search node iff its center lies inside the room.
#[derive(Clone, Debug)]
pub(super) struct RoomGrid {
    origin: Point,
    cell_size: f64,
    width: i32,
    height: i32,
    /// Column-major node mask (`x * height + y`)
    nodes: Vec<bool>,
}

impl RoomGrid {
    /// Build the grid for `room`.
    pub fn from_room(room: &Room, cell_size: f64) -> Self {
        let bounds = room.boundary();
        let width = (bounds.width() / cell_size).round().max(0.0) as i32;
        let height = (bounds.height() / cell_size).round().max(0.0) as i32;

        let mut grid = Self {
            origin: bounds.min,
            cell_size,
            width,
            height,
            nodes: vec![false; (width as usize) * (height as usize)],
        };

        for x in 0..width {
            for y in 0..height {
                let center = grid.grid_to_world(GridCoord::new(x, y));
                if room.contains(center) {
                    grid.nodes[(x * height + y) as usize] = true;
                }
            }
        }

        grid
    }

    /// Build a grid from an explicit node mask, indexed `[x][y]`.
    #[cfg(test)]
    pub fn from_mask(origin: Point, cell_size: f64, mask: &[&[bool]]) -> Self {
        let width = mask.len() as i32;
        let height = mask.first().map_or(0, |col| col.len()) as i32;
        Self {
            origin,
            cell_size,
            width,
            height,
            nodes: mask.iter().flat_map(|col| col.iter().copied()).collect(),
        }
    }

    /// Grid dimensions in cells.
    #[cfg(test)]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Check if coordinates are within grid bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Whether `coord` is a search node.
    #[inline]
    pub fn is_node(&self, coord: GridCoord) -> bool {
        self.is_valid_coord(coord) && self.nodes[(coord.x * self.height + coord.y) as usize]
    }

    /// Cell containing a world point (may lie outside the grid).
    #[inline]
    pub fn world_to_grid(&self, point: Point) -> GridCoord {
        GridCoord::new(
            ((point.x - self.origin.x) / self.cell_size).floor() as i32,
            ((point.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }

    /// World position of a cell center.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> Point {
        Point::new(
            self.origin.x + (coord.x as f64 + 0.5) * self.cell_size,
            self.origin.y + (coord.y as f64 + 0.5) * self.cell_size,
        )
    }

    /// Search node for a world point.
    ///
    /// With `snap`, a point whose own cell is not a node falls back to the
    /// closest node among the surrounding 3x3 cells.
    pub fn node_at(&self, point: Point, snap: bool) -> Option<GridCoord> {
        let cell = self.world_to_grid(point);
        if self.is_node(cell) {
            return Some(cell);
        }
        if !snap {
            return None;
        }

        cell.neighbors_8()
            .into_iter()
            .filter(|c| self.is_node(*c))
            .map(|c| (c, self.grid_to_world(c).distance_squared(&point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c)
    }

    /// Walkable neighbors of a node.
    ///
    /// Unless `allow_corner_crossing` is set, a diagonal step is skipped when
    /// both cells sharing its corner are not nodes.
    pub fn neighbors(
        &self,
        coord: GridCoord,
        strategy: NeighborStrategy,
        allow_corner_crossing: bool,
    ) -> Vec<GridCoord> {
        let candidates = match strategy {
            NeighborStrategy::FourWay => coord.neighbors_4().to_vec(),
            NeighborStrategy::EightWay => coord.neighbors_8().to_vec(),
        };

        candidates
            .into_iter()
            .filter(|n| self.is_node(*n))
            .filter(|n| {
                allow_corner_crossing
                    || !n.is_diagonal_to(&coord)
                    || self.is_node(GridCoord::new(n.x, coord.y))
                    || self.is_node(GridCoord::new(coord.x, n.y))
            })
            .collect()
    }
}
