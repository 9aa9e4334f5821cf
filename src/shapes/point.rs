//! 2D points

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use glam::DVec2;

use super::Transform;
use crate::bounds::{BoundedShape, BoundingBox};
use crate::types::{Length, Offset};

/// A position in the plane
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub fn new(x: impl Into<Length>, y: impl Into<Length>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Self) -> Length {
        Length(DVec2::from(self).distance(other.into()))
    }
}

impl Transform for Point {
    fn translate(&self, offset: Offset) -> Self {
        *self + offset
    }

    /// `x' = 2·axis - x`; `y` is untouched.
    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        let axis: Length = axis_x.into();
        Point {
            x: axis * 2.0 - self.x,
            y: self.y,
        }
    }
}

impl BoundedShape for Point {
    fn extent(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_point(*self))
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        DVec2::new(p.x.0, p.y.0)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

/// Add an offset to a point to get a new point
impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl AddAssign<Offset> for Point {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

/// Subtract two points to get an offset
impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
