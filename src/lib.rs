//! blockgeom: a small 2D geometric modeling kernel.
//!
//! Build a [`Block`] tree bottom-up from points, lines, text and nested
//! blocks, then query its [`BoundingBox`] or derive translated and mirrored
//! copies of it:
//!
//! ```
//! use blockgeom::{Block, BoundedShape, Offset, Point, StraightLine, Transform};
//!
//! let mut pad = Block::new();
//! pad.add_point([Point::new(-2.0, 8.0)]);
//!
//! let mut board = Block::new();
//! board
//!     .add_line([StraightLine::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0))])
//!     .add_block([pad]);
//!
//! let bb = board.bounding_box()?;
//! assert_eq!(bb.min, Point::new(-2.0, 0.0));
//! assert_eq!(bb.max, Point::new(10.0, 8.0));
//!
//! let shifted = board.translate(Offset::new(1.0, 1.0));
//! assert_eq!(shifted.bounding_box()?.min, Point::new(-1.0, 1.0));
//! # Ok::<(), blockgeom::GeometryError>(())
//! ```

// Declared before `shapes`: enum_dispatch must see the trait before the enum.
pub mod bounds;

pub mod angle;
pub mod block;
pub mod defaults;
pub mod errors;
mod log;
pub mod shapes;
pub mod types;

pub use angle::{normalize_rads, Angle};
pub use block::Block;
pub use bounds::{collective_bounding_box, BoundedShape, BoundingBox};
pub use errors::{GeometryError, Result};
pub use shapes::{Line, Point, Polyline, Shape, StraightLine, Text, Transform};
pub use types::{Length, Offset};
