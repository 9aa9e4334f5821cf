//! Axis-aligned extents and their aggregation over heterogeneous shapes

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::errors::{GeometryError, Result};
use crate::shapes::Point;
use crate::types::Length;

/// Axis-aligned bounding box.
///
/// Only built from actual geometry, so `min` never exceeds `max` on either axis.
/// There is no "empty" box: an extent over nothing is a [`GeometryError::EmptyGeometry`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// A zero-area box at `p`
    pub fn from_point(p: Point) -> Self {
        BoundingBox { min: p, max: p }
    }

    /// The box spanning two corners given in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (a, b) = (DVec2::from(a), DVec2::from(b));
        BoundingBox {
            min: a.min(b).into(),
            max: a.max(b).into(),
        }
    }

    /// The smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: DVec2::from(self.min).min(other.min.into()).into(),
            max: DVec2::from(self.max).max(other.max.into()).into(),
        }
    }

    pub fn width(&self) -> Length {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Length {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Whether `p` lies inside or on the boundary
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}–{}]", self.min, self.max)
    }
}

/// Anything with a computable axis-aligned extent
#[enum_dispatch]
pub trait BoundedShape {
    /// The extent, or `None` when the shape holds no geometry at all
    /// (an empty block, a polyline without vertices).
    fn extent(&self) -> Option<BoundingBox>;

    /// The extent, failing with [`GeometryError::EmptyGeometry`] when there is none
    fn bounding_box(&self) -> crate::errors::Result<BoundingBox> {
        self.extent().ok_or(GeometryError::EmptyGeometry)
    }
}

impl<T: BoundedShape + ?Sized> BoundedShape for &T {
    fn extent(&self) -> Option<BoundingBox> {
        (**self).extent()
    }
}

impl<T: BoundedShape + ?Sized> BoundedShape for Box<T> {
    fn extent(&self) -> Option<BoundingBox> {
        (**self).extent()
    }
}

/// Fold the extents of `shapes` into the minimal box containing all of them.
///
/// Shapes without geometry contribute nothing. If nothing contributes (including
/// when `shapes` is empty) the result is [`GeometryError::EmptyGeometry`], never a
/// zero box at the origin.
pub fn collective_bounding_box<I>(shapes: I) -> Result<BoundingBox>
where
    I: IntoIterator,
    I::Item: BoundedShape,
{
    let mut count = 0usize;
    let mut acc: Option<BoundingBox> = None;

    for shape in shapes {
        count += 1;
        if let Some(bb) = shape.extent() {
            acc = Some(match acc {
                Some(prev) => prev.union(&bb),
                None => bb,
            });
        }
    }

    crate::log::trace!(count, found = acc.is_some(), "collective bounding box");
    acc.ok_or(GeometryError::EmptyGeometry)
}
