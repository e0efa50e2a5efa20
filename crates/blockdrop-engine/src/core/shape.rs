/// Largest edge length of any catalog shape (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A single cell of a shape or of the board.
///
/// The numeric encoding used by front ends is available through
/// [`Cell::value`]: `0` for empty, `1..=7` for the piece type occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a block of the given piece type.
    Filled(PieceKind),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_filled(self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(kind),
        }
    }

    /// Returns the numeric cell value (`0` = empty, otherwise the type id).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.type_id(),
        }
    }

    /// Parses a numeric cell value.
    ///
    /// Returns `None` for values above 7.
    #[cfg(test)]
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value == 0 {
            return Some(Cell::Empty);
        }
        match PieceKind::from_type_id(value) {
            Some(kind) => Some(Cell::Filled(kind)),
            None => None,
        }
    }
}

/// Enum representing the type of piece.
///
/// The discriminant is the piece's type id, which doubles as its color id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 1,
    /// J-piece.
    J = 2,
    /// L-piece.
    L = 3,
    /// O-piece.
    O = 4,
    /// S-piece.
    S = 5,
    /// T-piece.
    T = 6,
    /// Z-piece.
    Z = 7,
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece types, ordered by type id.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Returns the type id (`1..=7`).
    #[must_use]
    pub const fn type_id(self) -> u8 {
        self as u8
    }

    /// Looks up a piece type by its id.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_type_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_type_id(0), None);
    /// assert_eq!(PieceKind::from_type_id(8), None);
    /// ```
    #[must_use]
    pub const fn from_type_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }

    /// Returns the spawn orientation of this piece type.
    #[must_use]
    pub const fn shape(self) -> Shape {
        CATALOG[self as usize - 1]
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// A square grid of cells describing one piece in one orientation.
///
/// Storage is always 4×4; only the top-left `size`×`size` region is
/// meaningful (4 for I, 2 for O, 3 for everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn new(size: usize, cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size <= MAX_SHAPE_SIZE);
        Self { size, cells }
    }

    /// Edge length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(x, y)` in shape-local coordinates.
    ///
    /// Coordinates outside the grid read as [`Cell::Empty`].
    #[must_use]
    pub const fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.size || y >= self.size {
            return Cell::Empty;
        }
        self.cells[y][x]
    }

    /// Iterates over the rows of the grid, each `size` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Iterates over the occupied cells as `(dx, dy, kind)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, PieceKind)> + '_ {
        self.rows().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(dx, cell)| cell.kind().map(|kind| (dx, dy, kind)))
        })
    }

    /// Returns the grid rotated 90° clockwise.
    ///
    /// `rotated[y][x] = original[size - 1 - x][y]`: the top row becomes the
    /// rightmost column. The common canvas idiom of transposing and then
    /// reversing the row order turns the other way (counter-clockwise).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_engine::PieceKind;
    ///
    /// let shape = PieceKind::T.shape();
    /// let turned = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
    /// assert_eq!(turned, shape);
    /// ```
    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        let mut cells = [[Cell::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < self.size {
            let mut x = 0;
            while x < self.size {
                cells[y][x] = self.cells[self.size - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

const CATALOG: [Shape; PieceKind::LEN] = {
    use Cell::Empty as E;
    const I: Cell = Cell::Filled(PieceKind::I);
    const J: Cell = Cell::Filled(PieceKind::J);
    const L: Cell = Cell::Filled(PieceKind::L);
    const O: Cell = Cell::Filled(PieceKind::O);
    const S: Cell = Cell::Filled(PieceKind::S);
    const T: Cell = Cell::Filled(PieceKind::T);
    const Z: Cell = Cell::Filled(PieceKind::Z);
    const EEEE: [Cell; 4] = [E; 4];
    [
        Shape::new(4, [EEEE, [I, I, I, I], EEEE, EEEE]),
        Shape::new(3, [[J, E, E, E], [J, J, J, E], EEEE, EEEE]),
        Shape::new(3, [[E, E, L, E], [L, L, L, E], EEEE, EEEE]),
        Shape::new(2, [[O, O, E, E], [O, O, E, E], EEEE, EEEE]),
        Shape::new(3, [[E, S, S, E], [S, S, E, E], EEEE, EEEE]),
        Shape::new(3, [[E, T, E, E], [T, T, T, E], EEEE, EEEE]),
        Shape::new(3, [[Z, Z, E, E], [E, Z, Z, E], EEEE, EEEE]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    fn values(shape: &Shape) -> Vec<Vec<u8>> {
        shape
            .rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    #[test]
    fn test_catalog_cells_carry_type_id() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let occupied: Vec<_> = shape.occupied_cells().collect();
            assert_eq!(occupied.len(), 4, "{kind:?} should have 4 blocks");
            assert!(occupied.iter().all(|&(_, _, k)| k == kind));
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PieceKind::I.shape().size(), 4);
        assert_eq!(PieceKind::O.shape().size(), 2);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(kind.shape().size(), 3, "{kind:?}");
        }
    }

    #[test]
    fn test_catalog_grids() {
        assert_eq!(
            values(&PieceKind::I.shape()),
            [[0_u8, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(values(&PieceKind::O.shape()), [[4_u8, 4], [4, 4]]);
        assert_eq!(
            values(&PieceKind::S.shape()),
            [[0_u8, 5, 5], [5, 5, 0], [0, 0, 0]]
        );
        assert_eq!(
            values(&PieceKind::Z.shape()),
            [[7_u8, 7, 0], [0, 7, 7], [0, 0, 0]]
        );
    }

    #[test]
    fn test_rotation_clockwise() {
        let rotated = PieceKind::T.shape().rotated_cw();
        assert_eq!(values(&rotated), [[0_u8, 6, 0], [0, 6, 6], [0, 6, 0]]);

        let rotated = PieceKind::I.shape().rotated_cw();
        assert_eq!(
            values(&rotated),
            [[0_u8, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]
        );
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let mut rotated = shape;
            for _ in 0..4 {
                rotated = rotated.rotated_cw();
            }
            assert_eq!(rotated, shape, "{kind:?}");
        }
    }

    #[test]
    fn test_o_rotation_is_fixed_point() {
        let shape = PieceKind::O.shape();
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn test_cell_value_conversion() {
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Cell::Filled(PieceKind::Z).value(), 7);
        assert_eq!(Cell::from_value(0), Some(Cell::Empty));
        assert_eq!(Cell::from_value(3), Some(Cell::Filled(PieceKind::L)));
        assert_eq!(Cell::from_value(8), None);
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
    }

    #[test]
    fn test_shape_cell_out_of_grid_is_empty() {
        let shape = PieceKind::O.shape();
        assert_eq!(shape.cell(0, 0), Cell::Filled(PieceKind::O));
        assert_eq!(shape.cell(2, 0), Cell::Empty);
        assert_eq!(shape.cell(0, 3), Cell::Empty);
    }
}
