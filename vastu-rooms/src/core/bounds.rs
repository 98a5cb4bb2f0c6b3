//! Axis-aligned bounding box for spatial operations.
//!
//! [`Bounds`] represents a rectangular region in 2D space. Rooms use it as
//! their boundary (and as the whole shape of rectangular rooms), the room
//! map uses it to fast-reject point queries, and search grids are laid over
//! it.
//!
//! # Usage
//!
//! ```rust
//! use vastu_rooms::core::{Bounds, Point};
//!
//! // Corners may be given in any order
//! let bounds = Bounds::from_corners(Point::new(10.0, 0.0), Point::new(0.0, 8.0));
//!
//! assert_eq!(bounds.width(), 10.0);
//! assert_eq!(bounds.height(), 8.0);
//! assert!(bounds.contains(Point::new(5.0, 4.0)));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point,
    /// Maximum corner (largest x and y values).
    pub max: Point,
}

/// Center/size form used when a rectangle is written out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterSize {
    /// Center point of the rectangle.
    pub center: Point,
    /// Extent along each axis.
    pub size: Point,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create bounds from two opposite corners in any order.
    #[inline]
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            min: p1.min(p2),
            max: p1.max(p2),
        }
    }

    /// Create bounds from a center point and a size.
    #[inline]
    pub fn from_center_size(center: Point, size: Point) -> Self {
        let half = Point::new(size.x.abs() * 0.5, size.y.abs() * 0.5);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Size of the bounding box as a Point (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point is inside the bounding box (edges included).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Compute the union of two bounds (smallest box containing both).
    #[inline]
    pub fn union(&self, other: &Bounds) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Get corners of the bounding box.
    ///
    /// Returns [min, (max.x, min.y), max, (min.x, max.y)] in CCW order.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Center/size representation.
    pub fn to_center_size(&self) -> CenterSize {
        CenterSize {
            center: self.center(),
            size: self.size(),
        }
    }
}

impl From<CenterSize> for Bounds {
    fn from(cs: CenterSize) -> Self {
        Bounds::from_center_size(cs.center, cs.size)
    }
}
