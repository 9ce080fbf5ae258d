use std::{fmt, str::FromStr};

use super::{
    piece::Anchor,
    shape::{Cell, Shape},
};

/// Error returned when parsing a [`Board`] from its text form fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[display("invalid cell character {ch:?} in row {row}")]
    InvalidCell { row: usize, ch: char },
}

/// Grid of settled cells, `height` rows of `width` cells, row 0 at the top.
///
/// The dimensions never change after creation: clearing rows refills the
/// board from the top with empty rows.
///
/// # Text Form
///
/// `Display` and `FromStr` use one line per row, `#` for occupied and `.`
/// for empty cells:
///
/// ```
/// use blockfall_engine::Board;
///
/// let mut board: Board = "....\n##.#\n####\n".parse().unwrap();
/// assert_eq!(board.clear_full_rows(), 1);
/// assert_eq!(board.to_string(), "....\n....\n##.#\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board `width` cells wide and `height` rows tall.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Checks whether the cell at `(col, row)` is occupied.
    ///
    /// Coordinates must lie inside the board; the collision checker filters
    /// out-of-range positions before asking.
    #[must_use]
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        self.rows[row][col].is_occupied()
    }

    /// Marks the cell at `(col, row)` as occupied.
    pub fn set_occupied(&mut self, col: usize, row: usize) {
        self.rows[row][col] = Cell::Occupied;
    }

    /// Checks whether every cell in `row` is occupied.
    ///
    /// A row of a zero-width board counts as full.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        is_full(&self.rows[row])
    }

    /// Converts a signed board position into indices, if it lies on the board.
    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|col| *col < self.width)?;
        let row = usize::try_from(y).ok().filter(|row| *row < self.height())?;
        Some((col, row))
    }

    /// Copies every occupied cell of `shape`, placed at `anchor`, into the board.
    ///
    /// This is called when a piece locks. The caller must have checked that
    /// the shape does not collide at `anchor`.
    ///
    /// # Panics
    ///
    /// Panics if any occupied cell of the shape lies outside the board
    /// (including above row 0).
    pub fn merge(&mut self, shape: &Shape, anchor: Anchor) {
        for (dx, dy) in shape.occupied_cells() {
            let (x, y) = anchor.cell(dx, dy);
            let Some((col, row)) = self.index(x, y) else {
                panic!(
                    "merged cell ({x}, {y}) lies outside the {}x{} board",
                    self.width,
                    self.height()
                );
            };
            self.rows[row][col] = Cell::Occupied;
        }
    }

    /// Clears full rows and returns the number of rows cleared.
    ///
    /// Remaining rows keep their relative order and shift down; empty rows
    /// are inserted at the top so the height is unchanged.
    pub fn clear_full_rows(&mut self) -> usize {
        let height = self.height();
        let mut count = 0;
        for y in (0..height).rev() {
            if is_full(&self.rows[y]) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows.swap(y, y + count);
            }
        }
        for row in &mut self.rows[..count] {
            row.fill(Cell::Empty);
        }
        count
    }
}

fn is_full(row: &[Cell]) -> bool {
    row.iter().all(|cell| cell.is_occupied())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (row, line) in s.lines().enumerate() {
            let cells = line
                .chars()
                .map(|ch| match ch {
                    '#' => Ok(Cell::Occupied),
                    '.' => Ok(Cell::Empty),
                    _ => Err(ParseBoardError::InvalidCell { row, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows.first().map(Vec::len)
                && first != cells.len()
            {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: first,
                });
            }
            rows.push(cells);
        }
        let width = rows.first().map_or(0, Vec::len);
        Ok(Self { width, rows })
    }
}
