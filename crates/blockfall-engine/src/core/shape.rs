use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A single cell of a board or a shape.
///
/// Settled cells carry no identity: once a piece is merged into the board,
/// only the occupancy survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }

    pub(crate) const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied => '#',
        }
    }
}

/// Immutable catalog layout of a shape, rows top to bottom.
pub type ShapeTemplate = &'static [&'static [Cell]];

const E: Cell = Cell::Empty;
const X: Cell = Cell::Occupied;

const I_TEMPLATE: ShapeTemplate = &[&[X, X, X, X]];
const O_TEMPLATE: ShapeTemplate = &[&[X, X], &[X, X]];
const L_TEMPLATE: ShapeTemplate = &[&[E, E, X], &[X, X, X]];
const J_TEMPLATE: ShapeTemplate = &[&[X, E, E], &[X, X, X]];
const T_TEMPLATE: ShapeTemplate = &[&[E, X, E], &[X, X, X]];
const S_TEMPLATE: ShapeTemplate = &[&[E, X, X], &[X, X, E]];
const Z_TEMPLATE: ShapeTemplate = &[&[X, X, E], &[E, X, X]];

/// Name of one of the seven catalog shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-shape, a single row of four.
    I = 0,
    /// O-shape, a 2×2 square.
    O = 1,
    /// L-shape.
    L = 2,
    /// J-shape.
    J = 3,
    /// T-shape.
    T = 4,
    /// S-shape.
    S = 5,
    /// Z-shape.
    Z = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shapes in the catalog (7).
    pub const LEN: usize = 7;

    /// All shapes, in catalog order.
    pub const ALL: [ShapeKind; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Returns the immutable catalog layout of this shape.
    #[must_use]
    pub const fn template(self) -> ShapeTemplate {
        match self {
            ShapeKind::I => I_TEMPLATE,
            ShapeKind::O => O_TEMPLATE,
            ShapeKind::L => L_TEMPLATE,
            ShapeKind::J => J_TEMPLATE,
            ShapeKind::T => T_TEMPLATE,
            ShapeKind::S => S_TEMPLATE,
            ShapeKind::Z => Z_TEMPLATE,
        }
    }

    /// Returns the single character representation of this shape kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_char(), 'I');
    /// assert_eq!(ShapeKind::Z.as_char(), 'Z');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::L => 'L',
            ShapeKind::J => 'J',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
        }
    }

    /// Parses a shape kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::I),
            'O' => Some(ShapeKind::O),
            'L' => Some(ShapeKind::L),
            'J' => Some(ShapeKind::J),
            'T' => Some(ShapeKind::T),
            'S' => Some(ShapeKind::S),
            'Z' => Some(ShapeKind::Z),
            _ => None,
        }
    }
}

/// Returns the whole catalog as `(name, template)` pairs.
///
/// The catalog is static and always holds exactly [`ShapeKind::LEN`] entries.
#[must_use]
pub fn shapes_by_name() -> [(ShapeKind, ShapeTemplate); ShapeKind::LEN] {
    ShapeKind::ALL.map(|kind| (kind, kind.template()))
}

/// Returns a fresh, owned copy of the catalog layout for `kind`.
///
/// The copy can be rotated freely; the catalog itself is never touched.
#[must_use]
pub fn clone_shape(kind: ShapeKind) -> Shape {
    Shape::from_template(kind.template())
}

/// Owned, rectangular layout of a piece relative to its top-left origin.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ShapeKind, clone_shape};
///
/// let shape = clone_shape(ShapeKind::I);
/// assert_eq!((shape.width(), shape.height()), (4, 1));
///
/// let rotated = shape.rotated();
/// assert_eq!((rotated.width(), rotated.height()), (1, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<Vec<Cell>>,
}

impl Shape {
    #[must_use]
    pub fn from_template(template: ShapeTemplate) -> Self {
        Self {
            rows: template.iter().map(|row| row.to_vec()).collect(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns an iterator of the occupied `(column, row)` offsets, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_occupied())
                .map(move |(dx, _)| (dx, dy))
        })
    }

    /// Returns this shape turned a quarter: transposed, then with its row order reversed.
    ///
    /// `self` is left untouched. Four applications give back the original layout.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut rows = (0..self.width())
            .map(|x| self.rows.iter().map(|row| row[x]).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        rows.reverse();
        Self { rows }
    }
}

impl fmt::Display for Shape {
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

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_catalog_has_seven_distinct_shapes() {
        let catalog = shapes_by_name();
        assert_eq!(catalog.len(), ShapeKind::LEN);
        for (i, (kind, _)) in catalog.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        for (kind, template) in catalog {
            let occupied = template.iter().flat_map(|row| row.iter()).filter(|c| c.is_occupied());
            assert_eq!(occupied.count(), 4, "{kind:?} should have four cells");
        }
    }

    #[test]
    fn test_clone_shape_is_independent_of_catalog() {
        let mut shape = clone_shape(ShapeKind::T);
        shape.rows[0][0] = Cell::Occupied;
        shape = shape.rotated();
        assert_ne!(shape, clone_shape(ShapeKind::T));
        assert_eq!(ShapeKind::T.template()[0][0], Cell::Empty);
    }

    #[test]
    fn test_rotated_transposes_then_reverses_rows() {
        let shape = clone_shape(ShapeKind::L);
        assert_eq!(shape.to_string(), "..#\n###\n");
        // transpose: .# / .# / ## , then reversed row order
        assert_eq!(shape.rotated().to_string(), "##\n.#\n.#\n");
    }

    #[test]
    fn test_rotated_does_not_mutate_input() {
        let shape = clone_shape(ShapeKind::S);
        let before = shape.clone();
        let _ = shape.rotated();
        assert_eq!(shape, before);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in ShapeKind::ALL {
            let shape = clone_shape(kind);
            let rotated = shape.rotated().rotated().rotated().rotated();
            assert_eq!(rotated, shape, "{kind:?}");
        }
    }

    #[test]
    fn test_i_shape_rotation_swaps_dimensions() {
        let shape = clone_shape(ShapeKind::I).rotated();
        assert_eq!(shape.width(), 1);
        assert_eq!(shape.height(), 4);
        assert_eq!(shape.occupied_cells().collect::<Vec<_>>(), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_occupied_cells_row_major() {
        let shape = clone_shape(ShapeKind::Z);
        let cells = shape.occupied_cells().collect::<Vec<_>>();
        assert_eq!(cells, [(0, 0), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_shape_kind_char_conversion() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(ShapeKind::from_char('X'), None);
        assert_eq!(ShapeKind::from_char('i'), None);
    }

    #[test]
    fn test_random_kind_covers_catalog() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; ShapeKind::LEN];
        for _ in 0..500 {
            let kind: ShapeKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
