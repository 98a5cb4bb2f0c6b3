//! Rooms: navigable polygonal regions.
//!
//! A room is either an axis-aligned rectangle or a simple polygon. Both
//! variants expose the same capabilities (boundary, centroid, convexity,
//! containment), dispatched by matching on [`RoomShape`].
//!
//! Polygons are validated eagerly in a single pass over the vertices:
//!
//! ```text
//!   for each vertex i:
//!     - grow the boundary box
//!     - test edge (i, i+1) against every non-adjacent later edge
//!     - accumulate the shoelace term  v_i × v_{i+1}
//!     - compare the turn sign at v_{i+1} with the first non-zero turn
//! ```
//!
//! A clockwise polygon is stored with its vertex order reversed, so every
//! stored polygon is counter-clockwise.

use std::f64::consts::TAU;

use crate::core::lines::{lies_on_segment, orientation, segments_intersect};
use crate::core::{Bounds, Point};
use crate::error::GeometryError;

use super::ids::RoomId;

/// Slack on the winding number so that a full turn summed in floating point
/// still counts as one.
const WINDING_EPSILON: f64 = 1e-9;

/// Geometry of a room.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomShape {
    /// Axis-aligned rectangle
    Rect(Bounds),
    /// Simple polygon with counter-clockwise vertices
    Polygon(Polygon),
}

/// A validated simple polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    boundary: Bounds,
    is_convex: bool,
    area: f64,
}

impl Polygon {
    /// Validate a vertex list and build a polygon from it.
    ///
    /// # Errors
    /// - [`GeometryError::TooFewVertices`] for fewer than 3 vertices
    /// - [`GeometryError::SelfIntersecting`] if two non-adjacent edges touch
    /// - [`GeometryError::ZeroArea`] if the shoelace sum is zero
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }
        if !vertices.iter().all(Point::is_finite) {
            return Err(GeometryError::NonFinite);
        }

        let mut boundary = Bounds::empty();
        let mut gauss_area = 0.0;
        let mut is_convex = true;
        let mut reference_turn = 0.0_f64;

        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let p3 = vertices[(i + 2) % n];

            boundary.expand_to_include(p1);

            for j in (i + 2)..n {
                // First and last edges share vertex 0
                if i == 0 && j == n - 1 {
                    continue;
                }
                let q1 = vertices[j];
                let q2 = vertices[(j + 1) % n];
                if segments_intersect(p1, p2, q1, q2) {
                    return Err(GeometryError::SelfIntersecting);
                }
            }

            gauss_area += p1.cross(&p2);

            if !is_convex {
                continue;
            }
            let turn = orientation(p1, p2, p3);
            if turn != 0.0 {
                if reference_turn == 0.0 {
                    reference_turn = turn.signum();
                } else if reference_turn != turn.signum() {
                    is_convex = false;
                }
            }
        }

        if gauss_area == 0.0 {
            return Err(GeometryError::ZeroArea);
        }

        let mut vertices = vertices;
        if gauss_area < 0.0 {
            vertices.reverse();
        }

        Ok(Self {
            vertices,
            boundary,
            is_convex,
            area: gauss_area.abs() / 2.0,
        })
    }

    /// Vertices in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Axis-aligned boundary of the polygon.
    #[inline]
    pub fn boundary(&self) -> Bounds {
        self.boundary
    }

    /// Whether the polygon is convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.is_convex
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Check whether a point is inside the polygon or on its boundary.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_convex {
            self.contains_convex(point)
        } else {
            self.contains_winding(point)
        }
    }

    /// Half-plane test: the point must not be clockwise of any edge.
    fn contains_convex(&self, point: Point) -> bool {
        self.edges()
            .all(|(p1, p2)| orientation(point, p1, p2) >= 0.0)
    }

    /// Winding-number test for concave polygons.
    fn contains_winding(&self, point: Point) -> bool {
        let mut winding = 0.0;

        for (p1, p2) in self.edges() {
            if lies_on_segment(point, p1, p2) {
                return true;
            }
            let v1 = p1 - point;
            let v2 = p2 - point;
            winding += v1.angle_to_vector(&v2);
        }

        (winding / TAU + WINDING_EPSILON).floor() == 1.0
    }

    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// A navigable region with a unique identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    id: RoomId,
    shape: RoomShape,
}

impl Room {
    /// Create a rectangular room from two opposite corners.
    ///
    /// # Errors
    /// [`GeometryError::DegenerateRectangle`] if the corners share an x or a
    /// y coordinate.
    pub fn rect(id: impl Into<RoomId>, p1: Point, p2: Point) -> Result<Self, GeometryError> {
        if !p1.is_finite() || !p2.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if p1.x == p2.x || p1.y == p2.y {
            return Err(GeometryError::DegenerateRectangle);
        }
        Ok(Self {
            id: id.into(),
            shape: RoomShape::Rect(Bounds::from_corners(p1, p2)),
        })
    }

    /// Create a rectangular room covering `bounds`.
    pub fn rect_from_bounds(id: impl Into<RoomId>, bounds: Bounds) -> Result<Self, GeometryError> {
        Self::rect(id, bounds.min, bounds.max)
    }

    /// Create a polygonal room from its vertices (any winding).
    pub fn polygon(id: impl Into<RoomId>, vertices: Vec<Point>) -> Result<Self, GeometryError> {
        Ok(Self {
            id: id.into(),
            shape: RoomShape::Polygon(Polygon::new(vertices)?),
        })
    }

    /// The unique identifier of the room.
    #[inline]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// The room geometry.
    #[inline]
    pub fn shape(&self) -> &RoomShape {
        &self.shape
    }

    /// Axis-aligned boundary of the room.
    #[inline]
    pub fn boundary(&self) -> Bounds {
        match &self.shape {
            RoomShape::Rect(bounds) => *bounds,
            RoomShape::Polygon(polygon) => polygon.boundary(),
        }
    }

    /// Reference point of the room (center of its boundary).
    #[inline]
    pub fn centroid(&self) -> Point {
        self.boundary().center()
    }

    /// Whether the room shape is convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        match &self.shape {
            RoomShape::Rect(_) => true,
            RoomShape::Polygon(polygon) => polygon.is_convex(),
        }
    }

    /// Floor area of the room.
    pub fn area(&self) -> f64 {
        match &self.shape {
            RoomShape::Rect(bounds) => bounds.width() * bounds.height(),
            RoomShape::Polygon(polygon) => polygon.area(),
        }
    }

    /// Number of corners of the room outline.
    pub fn vertex_count(&self) -> usize {
        match &self.shape {
            RoomShape::Rect(_) => 4,
            RoomShape::Polygon(polygon) => polygon.vertices().len(),
        }
    }

    /// Corner at `index` of the counter-clockwise outline.
    pub fn vertex(&self, index: usize) -> Option<Point> {
        match &self.shape {
            RoomShape::Rect(bounds) => bounds.corners().get(index).copied(),
            RoomShape::Polygon(polygon) => polygon.vertices().get(index).copied(),
        }
    }

    /// Counter-clockwise outline of the room.
    pub fn vertices(&self) -> Vec<Point> {
        match &self.shape {
            RoomShape::Rect(bounds) => bounds.corners().to_vec(),
            RoomShape::Polygon(polygon) => polygon.vertices().to_vec(),
        }
    }

    /// Check if a point is inside the room (boundary included).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        match &self.shape {
            RoomShape::Rect(bounds) => bounds.contains(point),
            RoomShape::Polygon(polygon) => polygon.contains(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn l_shape() -> Vec<Point> {
        pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ])
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Room::polygon("r", pts(&[(0.0, 0.0), (1.0, 0.0)]));
        assert_eq!(result, Err(GeometryError::TooFewVertices(2)));
    }

    #[test]
    fn test_self_intersecting_bowtie() {
        let result = Room::polygon("r", pts(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]));
        assert_eq!(result, Err(GeometryError::SelfIntersecting));
    }

    #[test]
    fn test_zero_area() {
        let result = Room::polygon("r", pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
        assert!(result.is_err());
    }

    #[test]
    fn test_clockwise_is_reversed() {
        let cw = pts(&[(0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0)]);
        let room = Room::polygon("r", cw.clone()).unwrap();

        let mut expected = cw;
        expected.reverse();
        assert_eq!(room.vertices(), expected);
    }

    #[test]
    fn test_counter_clockwise_is_kept() {
        let ccw = pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        let room = Room::polygon("r", ccw.clone()).unwrap();
        assert_eq!(room.vertices(), ccw);
    }

    #[test]
    fn test_convexity() {
        let square = Room::polygon("sq", pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]));
        assert!(square.unwrap().is_convex());

        let l = Room::polygon("l", l_shape()).unwrap();
        assert!(!l.is_convex());
    }

    #[test]
    fn test_convex_quad_half_planes() {
        let quad = Room::polygon("q", pts(&[(0.0, 0.0), (4.0, 1.0), (5.0, 5.0), (1.0, 4.0)])).unwrap();
        assert!(quad.is_convex());

        assert!(quad.contains(Point::new(2.5, 2.5)));
        assert!(!quad.contains(Point::new(4.0, 0.0)));
        assert!(!quad.contains(Point::new(0.0, 3.0)));
        assert!(!quad.contains(Point::new(6.0, 6.0)));
    }

    #[test]
    fn test_concave_containment() {
        let l = Room::polygon("l", l_shape()).unwrap();

        assert!(l.contains(Point::new(1.0, 1.0)));
        assert!(l.contains(Point::new(3.0, 1.0)));
        assert!(l.contains(Point::new(1.0, 3.0)));
        // The notch of the L
        assert!(!l.contains(Point::new(3.0, 3.0)));
        assert!(!l.contains(Point::new(-1.0, 1.0)));
        // On an edge
        assert!(l.contains(Point::new(2.0, 3.0)));
    }

    #[test]
    fn test_vertices_are_inside() {
        let shapes = [
            l_shape(),
            pts(&[(0.0, 0.0), (4.0, 1.0), (5.0, 5.0), (1.0, 4.0)]),
            pts(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (3.0, 2.0), (0.0, 6.0)]),
        ];
        for vertices in shapes {
            let room = Room::polygon("r", vertices).unwrap();
            for v in room.vertices() {
                assert!(room.contains(v), "vertex {:?} reported outside", v);
            }
        }

        let rect = Room::rect("rect", Point::new(0.0, 0.0), Point::new(2.0, 1.0)).unwrap();
        for v in rect.vertices() {
            assert!(rect.contains(v));
        }
    }

    #[test]
    fn test_rect_room() {
        let room = Room::rect("rect", Point::new(3.0, 6.0), Point::new(0.0, 0.0)).unwrap();

        assert_eq!(room.id().as_str(), "rect");
        assert!(room.is_convex());
        assert_eq!(room.centroid(), Point::new(1.5, 3.0));
        assert_eq!(room.vertex_count(), 4);
        assert_relative_eq!(room.area(), 18.0);
        assert!(room.contains(Point::new(3.0, 6.0)));
        assert!(!room.contains(Point::new(3.1, 6.0)));
    }

    #[test]
    fn test_degenerate_rect() {
        let result = Room::rect("r", Point::new(1.0, 0.0), Point::new(1.0, 5.0));
        assert_eq!(result, Err(GeometryError::DegenerateRectangle));
    }

    #[test]
    fn test_polygon_area_and_boundary() {
        let room = Room::polygon("l", l_shape()).unwrap();
        assert_relative_eq!(room.area(), 12.0);
        assert_eq!(room.boundary(), Bounds::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0)));
        assert_eq!(room.vertex(1), Some(Point::new(4.0, 0.0)));
        assert_eq!(room.vertex(6), None);
    }
}
