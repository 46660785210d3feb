//! Plain 2D/3D geometric value types.
//!
//! Points are immutable coordinate tuples; lines pair a local point with a
//! direction vector. None of these carry invariants beyond field presence
//! (in particular, a line's direction may be zero length).

use serde::{Deserialize, Serialize};

use crate::vector::{Vector2, Vector3};

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in three-dimensional space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A line in the plane, defined by a local point and a direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Line2 {
    pub point: Point2,
    pub direction: Vector2,
}

impl Line2 {
    pub fn new(point: Point2, direction: Vector2) -> Self {
        Self { point, direction }
    }

    /// The line through two points; the first point is the origin and the
    /// direction runs from the first to the second.
    pub fn through_points(first: Point2, second: Point2) -> Self {
        Self {
            point: first,
            direction: Vector2::from_points(&first, &second),
        }
    }
}

/// A line in three-dimensional space, defined by a local point and a
/// direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Line3 {
    pub point: Point3,
    pub direction: Vector3,
}

impl Line3 {
    pub fn new(point: Point3, direction: Vector3) -> Self {
        Self { point, direction }
    }

    /// The line through two points; the first point is the origin and the
    /// direction runs from the first to the second.
    pub fn through_points(first: Point3, second: Point3) -> Self {
        Self {
            point: first,
            direction: Vector3::from_points(&first, &second),
        }
    }
}
