//! Positioned, rotated labels

use super::{Point, Transform};
use crate::angle::Angle;
use crate::bounds::{BoundedShape, BoundingBox};
use crate::types::{Length, Offset};

/// A text label anchored at `position`
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    pub rotation: Angle,
    pub position: Point,
}

impl Text {
    pub fn new(content: impl Into<String>, rotation: Angle, position: Point) -> Self {
        Self {
            content: content.into(),
            rotation,
            position,
        }
    }
}

impl Transform for Text {
    fn translate(&self, offset: Offset) -> Self {
        Self {
            content: self.content.clone(),
            rotation: self.rotation,
            position: self.position.translate(offset),
        }
    }

    /// Only the anchor is reflected. The rotation is carried over unchanged,
    /// so a mirrored label keeps reading in its original direction.
    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        Self {
            content: self.content.clone(),
            rotation: self.rotation,
            position: self.position.mirror_horizontally(axis_x),
        }
    }
}

/// Text extent is not measured: the box is the anchor point.
impl BoundedShape for Text {
    fn extent(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_point(self.position))
    }
}
