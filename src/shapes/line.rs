//! Straight segments and the compound lines that decompose into them

use super::{Line, Point, Transform};
use crate::bounds::{collective_bounding_box, BoundedShape, BoundingBox};
use crate::types::{Length, Offset};

/// A directed segment from `start` to `end`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine {
    pub start: Point,
    pub end: Point,
}

impl StraightLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The same segment traversed the other way
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    pub fn length(&self) -> Length {
        self.start.distance(self.end)
    }
}

impl Line for StraightLine {
    fn straight_lines(&self) -> Vec<StraightLine> {
        vec![*self]
    }
}

impl Transform for StraightLine {
    fn translate(&self, offset: Offset) -> Self {
        Self {
            start: self.start.translate(offset),
            end: self.end.translate(offset),
        }
    }

    /// Both endpoints mirror independently; direction is kept.
    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        let axis: Length = axis_x.into();
        Self {
            start: self.start.mirror_horizontally(axis),
            end: self.end.mirror_horizontally(axis),
        }
    }
}

impl BoundedShape for StraightLine {
    fn extent(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_corners(self.start, self.end))
    }
}

/// A chain of connected segments through `vertices`, in order
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub vertices: Vec<Point>,
}

impl Polyline {
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Close the chain back to its first vertex
    pub fn closed(mut self) -> Self {
        if let (Some(&first), Some(&last)) = (self.vertices.first(), self.vertices.last()) {
            if self.vertices.len() > 2 && first != last {
                self.vertices.push(first);
            }
        }
        self
    }
}

impl Line for Polyline {
    /// One segment per consecutive vertex pair; fewer than two vertices yield none.
    fn straight_lines(&self) -> Vec<StraightLine> {
        self.vertices
            .windows(2)
            .map(|pair| StraightLine::new(pair[0], pair[1]))
            .collect()
    }
}

impl Transform for Polyline {
    fn translate(&self, offset: Offset) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v.translate(offset)).collect(),
        }
    }

    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        let axis: Length = axis_x.into();
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.mirror_horizontally(axis))
                .collect(),
        }
    }
}

impl BoundedShape for Polyline {
    fn extent(&self) -> Option<BoundingBox> {
        collective_bounding_box(&self.vertices).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeometryError;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> StraightLine {
        StraightLine::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn straight_line_decomposes_to_itself() {
        let l = seg(0.0, 0.0, 1.0, 1.0);
        assert_eq!(l.straight_lines(), vec![l]);
    }

    #[test]
    fn mirror_keeps_endpoint_order() {
        let l = seg(1.0, 2.0, 4.0, 6.0);
        let m = l.mirror_horizontally(0.0);
        assert_eq!(m.start, Point::new(-1.0, 2.0));
        assert_eq!(m.end, Point::new(-4.0, 6.0));
        assert_eq!(m.mirror_horizontally(0.0), l);
    }

    #[test]
    fn translate_round_trip() {
        let l = seg(1.0, 2.0, 4.0, 6.0);
        let o = Offset::new(-0.5, 10.0);
        let moved = l.translate(o);
        assert_eq!(moved, seg(0.5, 12.0, 3.5, 16.0));
        assert_eq!(moved.translate(-o), l);
    }

    #[test]
    fn bounding_box_spans_endpoints() {
        let bb = seg(10.0, 0.0, 0.0, 5.0).bounding_box().unwrap();
        assert_eq!(bb.min, Point::new(0.0, 0.0));
        assert_eq!(bb.max, Point::new(10.0, 5.0));
    }

    #[test]
    fn reversed_and_length() {
        let l = seg(0.0, 0.0, 3.0, 4.0);
        assert_eq!(l.reversed(), seg(3.0, 4.0, 0.0, 0.0));
        assert_eq!(l.length(), Length(5.0));
    }

    #[test]
    fn polyline_decomposes_in_order() {
        let pl = Polyline::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(
            pl.straight_lines(),
            vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn closed_polyline_returns_to_start() {
        let pl = Polyline::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        ])
        .closed();
        let segs = pl.straight_lines();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2], seg(2.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn short_polylines_have_no_segments() {
        assert!(Polyline::default().straight_lines().is_empty());
        assert!(Polyline::new([Point::new(1.0, 1.0)]).straight_lines().is_empty());
    }

    #[test]
    fn empty_polyline_has_no_extent() {
        assert_eq!(Polyline::default().bounding_box(), Err(GeometryError::EmptyGeometry));
    }
}
