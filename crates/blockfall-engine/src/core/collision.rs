use super::{board::Board, piece::Anchor, shape::Shape};

/// Checks whether `shape` placed at `anchor` overlaps a wall, the floor, or a settled cell.
///
/// A cell collides when its column is left of 0 or at/after the board width,
/// when its row is at/after the board height, or when it lands on an
/// occupied board cell. There is no ceiling: cells above row 0 never
/// collide, so a freshly spawned or rotated piece may stick out of the top.
///
/// The check is pure, so it can be run against a hypothetical shape (for
/// example a rotation) before committing it.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Anchor, Board, ShapeKind, clone_shape, collides};
///
/// let board = Board::new(10, 20);
/// let shape = clone_shape(ShapeKind::O);
///
/// assert!(!collides(&board, &shape, Anchor::new(0, 18)));
/// assert!(collides(&board, &shape, Anchor::new(0, 19)));
/// assert!(collides(&board, &shape, Anchor::new(-1, 0)));
/// assert!(!collides(&board, &shape, Anchor::new(0, -1)));
/// ```
#[must_use]
pub fn collides(board: &Board, shape: &Shape, anchor: Anchor) -> bool {
    shape.occupied_cells().any(|(dx, dy)| {
        let (x, y) = anchor.cell(dx, dy);
        let Some(col) = usize::try_from(x).ok().filter(|col| *col < board.width()) else {
            return true;
        };
        let Ok(row) = usize::try_from(y) else {
            return false;
        };
        row >= board.height() || board.is_occupied(col, row)
    })
}

#[cfg(test)]
mod tests {
    use crate::core::shape::{ShapeKind, clone_shape};

    use super::*;

    #[test]
    fn test_side_walls() {
        let board = Board::new(10, 20);
        let shape = clone_shape(ShapeKind::I);
        assert!(!collides(&board, &shape, Anchor::new(0, 5)));
        assert!(!collides(&board, &shape, Anchor::new(6, 5)));
        assert!(collides(&board, &shape, Anchor::new(-1, 5)));
        assert!(collides(&board, &shape, Anchor::new(7, 5)));
    }

    #[test]
    fn test_floor() {
        let board = Board::new(10, 20);
        let shape = clone_shape(ShapeKind::T);
        assert!(!collides(&board, &shape, Anchor::new(3, 18)));
        assert!(collides(&board, &shape, Anchor::new(3, 19)));
    }

    #[test]
    fn test_no_ceiling() {
        let board = Board::new(10, 20);
        let shape = clone_shape(ShapeKind::I).rotated();
        assert!(!collides(&board, &shape, Anchor::new(4, -3)));
        assert!(!collides(&board, &shape, Anchor::new(4, -100)));
    }

    #[test]
    fn test_settled_cells() {
        let mut board = Board::new(10, 20);
        board.set_occupied(5, 10);
        let shape = clone_shape(ShapeKind::O);
        assert!(collides(&board, &shape, Anchor::new(4, 9)));
        assert!(collides(&board, &shape, Anchor::new(5, 10)));
        assert!(!collides(&board, &shape, Anchor::new(6, 9)));
        assert!(!collides(&board, &shape, Anchor::new(4, 7)));
    }

    #[test]
    fn test_empty_shape_cells_are_ignored() {
        let mut board = Board::new(10, 20);
        // J's top row is "#..", so the two empty cells may overlap settled blocks
        board.set_occupied(5, 0);
        board.set_occupied(6, 0);
        let shape = clone_shape(ShapeKind::J);
        assert!(!collides(&board, &shape, Anchor::new(4, 0)));
    }

    #[test]
    fn test_rotated_shape_checked_before_commit() {
        let board = Board::new(10, 20);
        let shape = clone_shape(ShapeKind::I);
        let rotated = shape.rotated();
        assert!(!collides(&board, &shape, Anchor::new(0, 19)));
        assert!(collides(&board, &rotated, Anchor::new(0, 19)));
    }
}
