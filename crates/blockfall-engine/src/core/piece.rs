use serde::{Deserialize, Serialize};

use super::shape::{Shape, ShapeKind, clone_shape};

/// Board coordinate of a shape's top-left origin.
///
/// Signed so that hypothetical positions left of the board or above its top
/// edge can be expressed and rejected (or, above the top, accepted) by the
/// collision checker.
///
/// # Coordinate System
///
/// - `col` increases rightward
/// - `row` increases downward, row 0 is the top of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Anchor {
    pub col: i32,
    pub row: i32,
}

impl Anchor {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Spawn anchor for a board `board_width` cells wide: column `floor(width / 2) - 1`, row 0.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn spawn(board_width: usize) -> Self {
        Self::new((board_width / 2) as i32 - 1, 0)
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.col - 1, self.row)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.col + 1, self.row)
    }

    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.col, self.row + 1)
    }

    /// Absolute board position of the shape-local cell `(dx, dy)`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn cell(self, dx: usize, dy: usize) -> (i32, i32) {
        (self.col + dx as i32, self.row + dy as i32)
    }
}

/// The piece currently falling: its kind, its (possibly rotated) layout and its anchor.
///
/// The shape is always an owned copy, so rotating the piece never alters
/// the catalog. The kind is only kept for renderers.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ActivePiece, Anchor, ShapeKind};
///
/// let piece = ActivePiece::spawn(ShapeKind::T, 10);
/// assert_eq!(piece.anchor(), Anchor::new(4, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: ShapeKind,
    shape: Shape,
    anchor: Anchor,
}

impl ActivePiece {
    #[must_use]
    pub fn new(kind: ShapeKind, shape: Shape, anchor: Anchor) -> Self {
        Self {
            kind,
            shape,
            anchor,
        }
    }

    /// Creates a piece with a fresh copy of `kind`'s template at the spawn anchor.
    #[must_use]
    pub fn spawn(kind: ShapeKind, board_width: usize) -> Self {
        Self::new(kind, clone_shape(kind), Anchor::spawn(board_width))
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Absolute board positions of the occupied cells, possibly outside the board.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_cells()
            .map(|(dx, dy)| self.anchor.cell(dx, dy))
    }

    pub(crate) fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}
