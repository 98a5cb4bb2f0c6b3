//! Line and segment predicates.
//!
//! All predicates are exact in the sense that they compare cross products
//! against zero without a tolerance; callers that need slack must add it
//! themselves.

use super::bounds::Bounds;
use super::point::Point;

/// Orientation of three points.
///
/// Returns the cross product of `ab` and `bc`. Positive values are
/// counter-clockwise turns, negative values clockwise turns, and zero means
/// the points are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(&(c - b))
}

/// Check if `p` lies within the bounding box spanned by `a` and `b`.
#[inline]
pub fn is_within_points(p: Point, a: Point, b: Point) -> bool {
    Bounds::from_corners(a, b).contains(p)
}

/// Check if `p` lies on the segment `ab`.
///
/// `p` has to be collinear with `a` and `b` and inside their bounding box.
#[inline]
pub fn lies_on_segment(p: Point, a: Point, b: Point) -> bool {
    orientation(p, a, b) == 0.0 && is_within_points(p, a, b)
}

/// Check if segments `ab` and `uv` intersect (touching counts).
pub fn segments_intersect(a: Point, b: Point, u: Point, v: Point) -> bool {
    let o_abu = orientation(a, b, u);
    let o_abv = orientation(a, b, v);
    let o_uva = orientation(u, v, a);
    let o_uvb = orientation(u, v, b);

    if sign(o_abu) != sign(o_abv) && sign(o_uva) != sign(o_uvb) {
        return true;
    }

    // Collinear overlaps
    (o_abu == 0.0 && is_within_points(u, a, b))
        || (o_abv == 0.0 && is_within_points(v, a, b))
        || (o_uva == 0.0 && is_within_points(a, u, v))
        || (o_uvb == 0.0 && is_within_points(b, u, v))
}

/// Sign of a value as -1, 0 or 1.
#[inline]
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_orientation_sign() {
        assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)) > 0.0);
        assert!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, -1.0)) < 0.0);
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_lies_on_segment() {
        assert!(lies_on_segment(p(1.0, 1.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(lies_on_segment(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 2.0)));
        // Collinear but past the end
        assert!(!lies_on_segment(p(3.0, 3.0), p(0.0, 0.0), p(2.0, 2.0)));
        assert!(!lies_on_segment(p(1.0, 0.0), p(0.0, 0.0), p(2.0, 2.0)));
    }

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(2.0, 0.0)
        ));
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
    }

    #[test]
    fn test_touching_and_collinear_segments() {
        // T-junction
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0)
        ));
        // Overlapping collinear
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(3.0, 0.0)
        ));
        // Collinear but disjoint
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0)
        ));
    }
}
