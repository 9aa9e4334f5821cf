//! End-to-end behaviour of block trees built through the public API

use blockgeom::{
    collective_bounding_box, Angle, Block, BoundedShape, BoundingBox, GeometryError, Line,
    Offset, Point, Polyline, Shape, StraightLine, Text, Transform,
};
use std::f64::consts::FRAC_PI_4;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> StraightLine {
    StraightLine::new(Point::new(x1, y1), Point::new(x2, y2))
}

/// Three levels deep: board -> footprint -> pad
fn board() -> Block {
    let mut pad = Block::new();
    pad.add_line([Polyline::new([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .closed()]);

    let mut footprint = Block::new();
    footprint
        .add_text([Text::new("U1", Angle(FRAC_PI_4), Point::new(0.5, 2.0))])
        .add_block([pad.translate(Offset::new(-3.0, 0.0)), pad]);

    let mut board = Block::new();
    board
        .add_line([seg(0.0, 0.0, 10.0, 5.0)])
        .add_point([Point::new(12.0, -1.0)])
        .add_block([footprint]);
    board
}

#[test]
fn nested_bounding_box_spans_all_levels() {
    let bb = board().bounding_box().unwrap();
    assert_eq!(bb.min, Point::new(-3.0, -1.0));
    assert_eq!(bb.max, Point::new(12.0, 5.0));
}

#[test]
fn polyline_is_stored_as_segments() {
    let b = board();
    let pad = &b.blocks()[0].blocks()[1];
    assert_eq!(pad.straight_lines().len(), 4);
    assert_eq!(pad.straight_lines()[3], seg(0.0, 1.0, 0.0, 0.0));
}

#[test]
fn translate_moves_every_level() {
    let original = board();
    let moved = original.translate(Offset::new(2.0, 3.0));

    let bb = moved.bounding_box().unwrap();
    assert_eq!(bb.min, Point::new(-1.0, 2.0));
    assert_eq!(bb.max, Point::new(14.0, 8.0));

    assert_eq!(moved.blocks()[0].text()[0].position, Point::new(2.5, 5.0));
    assert_eq!(moved.translate(Offset::new(-2.0, -3.0)), original);
    assert_eq!(original, board());
}

#[test]
fn mirror_moves_every_level_and_keeps_order() {
    let original = board();
    let mirrored = original.mirror_horizontally(5.0);

    let bb = mirrored.bounding_box().unwrap();
    assert_eq!(bb.min, Point::new(-2.0, -1.0));
    assert_eq!(bb.max, Point::new(13.0, 5.0));

    let footprint = &mirrored.blocks()[0];
    assert_eq!(footprint.blocks().len(), 2);
    assert_eq!(footprint.blocks()[1].straight_lines()[0], seg(10.0, 0.0, 9.0, 0.0));
    assert_eq!(footprint.text()[0].rotation, Angle(FRAC_PI_4));

    assert_eq!(mirrored.mirror_horizontally(5.0), original);
}

#[test]
fn empty_trees_report_empty_geometry() {
    let mut hollow = Block::new();
    hollow.add_block([Block::new()]);
    hollow.add_line([Polyline::new([Point::new(1.0, 1.0)])]);

    assert!(hollow.straight_lines().is_empty());
    assert_eq!(hollow.bounding_box(), Err(GeometryError::EmptyGeometry));
    assert_eq!(
        hollow.mirror_horizontally(1.0).bounding_box(),
        Err(GeometryError::EmptyGeometry)
    );
}

#[test]
fn collective_box_over_heterogeneous_shapes() {
    let shapes: Vec<Shape> = vec![
        board().into(),
        Point::new(20.0, 20.0).into(),
        Text::new("far", Angle::ZERO, Point::new(-30.0, 0.0)).into(),
    ];
    let bb = collective_bounding_box(&shapes).unwrap();
    assert_eq!(bb, BoundingBox::from_corners(Point::new(-30.0, -1.0), Point::new(20.0, 20.0)));

    let none: Vec<Shape> = Vec::new();
    let err = collective_bounding_box(&none).unwrap_err();
    assert_eq!(err, GeometryError::EmptyGeometry);
}

#[test]
fn custom_line_types_plug_into_blocks() {
    /// An axis-aligned rectangle outline
    struct Rect {
        min: Point,
        max: Point,
    }

    impl Line for Rect {
        fn straight_lines(&self) -> Vec<StraightLine> {
            Polyline::new([
                self.min,
                Point { x: self.max.x, y: self.min.y },
                self.max,
                Point { x: self.min.x, y: self.max.y },
            ])
            .closed()
            .straight_lines()
        }
    }

    let mut b = Block::new();
    b.add_line([Rect {
        min: Point::new(1.0, 1.0),
        max: Point::new(4.0, 3.0),
    }]);

    assert_eq!(b.straight_lines().len(), 4);
    assert_eq!(
        b.bounding_box().unwrap(),
        BoundingBox::from_corners(Point::new(1.0, 1.0), Point::new(4.0, 3.0))
    );
}
