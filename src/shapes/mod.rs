//! Leaf shape types
//!
//! Each shape knows how to:
//! - Translate and mirror itself into a new value
//! - Report its bounding box
//!
//! Line-like shapes additionally decompose into straight segments.

mod line;
mod point;
mod text;

pub use line::{Polyline, StraightLine};
pub use point::Point;
pub use text::Text;

use enum_dispatch::enum_dispatch;

use crate::block::Block;
use crate::bounds::{BoundedShape, BoundingBox};
use crate::types::{Length, Offset};

/// Structural transforms. Every method returns a new value and leaves the receiver untouched.
pub trait Transform: Sized {
    /// Offset every coordinate by `offset`
    fn translate(&self, offset: Offset) -> Self;

    /// Reflect about the vertical line `x = axis_x`
    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self;
}

/// Anything that can be stored in a [`Block`] as a line.
///
/// A block only ever stores the straight segments produced here, so new line
/// types plug in without the block knowing about them.
pub trait Line {
    /// The ordered straight segments making up this line
    fn straight_lines(&self) -> Vec<StraightLine>;
}

impl<L: Line + ?Sized> Line for &L {
    fn straight_lines(&self) -> Vec<StraightLine> {
        (**self).straight_lines()
    }
}

impl<L: Line + ?Sized> Line for Box<L> {
    fn straight_lines(&self) -> Vec<StraightLine> {
        (**self).straight_lines()
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Any shape, for uniform storage in heterogeneous collections
#[enum_dispatch(BoundedShape)]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    StraightLine(StraightLine),
    Polyline(Polyline),
    Text(Text),
    Block(Block),
}

impl Transform for Shape {
    fn translate(&self, offset: Offset) -> Self {
        match self {
            Shape::Point(s) => Shape::Point(s.translate(offset)),
            Shape::StraightLine(s) => Shape::StraightLine(s.translate(offset)),
            Shape::Polyline(s) => Shape::Polyline(s.translate(offset)),
            Shape::Text(s) => Shape::Text(s.translate(offset)),
            Shape::Block(s) => Shape::Block(s.translate(offset)),
        }
    }

    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        let axis: Length = axis_x.into();
        match self {
            Shape::Point(s) => Shape::Point(s.mirror_horizontally(axis)),
            Shape::StraightLine(s) => Shape::StraightLine(s.mirror_horizontally(axis)),
            Shape::Polyline(s) => Shape::Polyline(s.mirror_horizontally(axis)),
            Shape::Text(s) => Shape::Text(s.mirror_horizontally(axis)),
            Shape::Block(s) => Shape::Block(s.mirror_horizontally(axis)),
        }
    }
}
