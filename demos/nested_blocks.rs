//! Builds a small nested block tree and prints its extents.
//!
//! Run with `cargo run --example nested_blocks --features tracing`.

use blockgeom::{Angle, Block, BoundedShape, Offset, Point, Polyline, StraightLine, Text, Transform};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let mut pad = Block::new();
    pad.add_line([Polyline::new([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .closed()]);

    let mut part = Block::new();
    part.add_text([Text::new("U1", Angle::from_degrees(45.0), Point::new(0.5, 2.0))])
        .add_block([pad.translate(Offset::new(-3.0, 0.0)), pad]);

    let mut board = Block::new();
    board
        .add_line([StraightLine::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0))])
        .add_block([part]);

    println!("board:    {}", board.bounding_box()?);
    println!("mirrored: {}", board.mirror_horizontally(5.0).bounding_box()?);
    println!("label:    {}", board.blocks()[0].text()[0].rotation);

    Ok(())
}
