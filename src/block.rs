//! Composite shapes
//!
//! A [`Block`] owns ordered collections of straight lines, points, text and
//! child blocks. Transforms recurse through the whole tree and return a new
//! tree; the receiver is never modified by them.
//!
//! Children are owned values, so a block cannot contain itself, directly or
//! through a descendant:
//!
//! ```compile_fail
//! use blockgeom::Block;
//!
//! let mut block = Block::new();
//! block.add_block([block]);
//! ```
//!
//! Adding a clone is fine; the clone is an independent tree.

use crate::bounds::{collective_bounding_box, BoundedShape, BoundingBox};
use crate::shapes::{Line, Point, StraightLine, Text, Transform};
use crate::types::{Length, Offset};

/// A composite geometric container
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    straight_lines: Vec<StraightLine>,
    points: Vec<Point>,
    text: Vec<Text>,
    blocks: Vec<Block>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append points in order
    pub fn add_point(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        self.points.extend(points);
        self
    }

    /// Append lines in order, storing each as its straight segments
    pub fn add_line<L: Line>(&mut self, lines: impl IntoIterator<Item = L>) -> &mut Self {
        for line in lines {
            let segments = line.straight_lines();
            crate::log::trace!(segments = segments.len(), "add_line decomposed");
            self.straight_lines.extend(segments);
        }
        self
    }

    /// Append text items in order
    pub fn add_text(&mut self, text: impl IntoIterator<Item = Text>) -> &mut Self {
        self.text.extend(text);
        self
    }

    /// Append child blocks in order. Each child is moved in, so it can only
    /// ever have one parent.
    pub fn add_block(&mut self, blocks: impl IntoIterator<Item = Block>) -> &mut Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn straight_lines(&self) -> &[StraightLine] {
        &self.straight_lines
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn text(&self) -> &[Text] {
        &self.text
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of elements owned directly by this block (children count as one each)
    pub fn len(&self) -> usize {
        self.straight_lines.len() + self.points.len() + self.text.len() + self.blocks.len()
    }

    /// True when this block owns nothing at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Transform for Block {
    fn translate(&self, offset: Offset) -> Self {
        crate::log::debug!(
            dx = offset.dx.0,
            dy = offset.dy.0,
            children = self.blocks.len(),
            "translate block"
        );
        Block {
            straight_lines: self.straight_lines.iter().map(|l| l.translate(offset)).collect(),
            points: self.points.iter().map(|p| p.translate(offset)).collect(),
            text: self.text.iter().map(|t| t.translate(offset)).collect(),
            blocks: self.blocks.iter().map(|b| b.translate(offset)).collect(),
        }
    }

    /// Rebuilds the tree through the regular `add_*` operations.
    fn mirror_horizontally(&self, axis_x: impl Into<Length>) -> Self {
        let axis: Length = axis_x.into();
        crate::log::debug!(axis = axis.0, children = self.blocks.len(), "mirror block");

        let mut out = Block::new();
        out.add_line(self.straight_lines.iter().map(|l| l.mirror_horizontally(axis)))
            .add_point(self.points.iter().map(|p| p.mirror_horizontally(axis)))
            .add_text(self.text.iter().map(|t| t.mirror_horizontally(axis)))
            .add_block(self.blocks.iter().map(|b| b.mirror_horizontally(axis)));
        out
    }
}

impl BoundedShape for Block {
    /// The collective extent of every owned element and every descendant.
    /// Child blocks without geometry contribute nothing.
    fn extent(&self) -> Option<BoundingBox> {
        let children = self
            .straight_lines
            .iter()
            .map(|c| c as &dyn BoundedShape)
            .chain(self.points.iter().map(|c| c as &dyn BoundedShape))
            .chain(self.text.iter().map(|c| c as &dyn BoundedShape))
            .chain(self.blocks.iter().map(|c| c as &dyn BoundedShape));

        collective_bounding_box(children).ok()
    }
}
