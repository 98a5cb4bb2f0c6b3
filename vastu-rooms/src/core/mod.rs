//! Core geometry types for the vastu-rooms library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point`] and [`GridCoord`]: World and grid coordinates
//! - [`Bounds`]: Axis-aligned bounding boxes
//! - [`lines`]: Orientation and segment predicates
//! - [`DistanceMetric`]: Step-cost and heuristic functions

mod bounds;
mod distance;
mod point;

pub mod lines;

pub use bounds::{Bounds, CenterSize};
pub use distance::{DistanceMetric, OCTILE_DIAGONAL, manhattan, octile};
pub use point::{GridCoord, Point};
