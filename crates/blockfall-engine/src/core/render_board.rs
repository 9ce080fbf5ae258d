use super::{board::Board, piece::ActivePiece, shape::ShapeKind};

/// A single cell of a [`RenderBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderCell {
    #[default]
    Empty,
    /// Cell settled on the board.
    Settled,
    /// Cell covered by the falling piece.
    Falling(ShapeKind),
}

impl RenderCell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == RenderCell::Empty
    }
}

/// Snapshot of the board with the falling piece drawn on top, for renderers.
///
/// Falling cells outside the board (above the top edge) are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBoard {
    width: usize,
    rows: Vec<Vec<RenderCell>>,
}

impl RenderBoard {
    #[must_use]
    pub fn new(board: &Board) -> Self {
        let rows = board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_occupied() {
                            RenderCell::Settled
                        } else {
                            RenderCell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            width: board.width(),
            rows,
        }
    }

    #[must_use]
    pub fn with_piece(board: &Board, piece: &ActivePiece) -> Self {
        let mut this = Self::new(board);
        this.fill_piece(piece);
        this
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RenderCell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn fill_piece(&mut self, piece: &ActivePiece) {
        let cell = RenderCell::Falling(piece.kind());
        for (x, y) in piece.occupied_positions() {
            let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if let Some(target) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
                *target = cell;
            }
        }
    }
}
