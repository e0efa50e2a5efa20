use super::{
    piece::Piece,
    shape::{Cell, PieceKind},
};

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 20;

/// Points awarded for the first row cleared by a sweep.
///
/// Each further row cleared by the same sweep is worth twice the previous one.
const LINE_CLEAR_BASE_SCORE: usize = 100;

type Row = [Cell; BOARD_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; BOARD_WIDTH];

fn is_full(row: &Row) -> bool {
    row.iter().all(|cell| cell.is_filled())
}

/// Result of a [`Board::sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    /// Number of rows removed.
    pub cleared_lines: usize,
    /// Points earned by the removed rows.
    pub score_delta: usize,
}

/// The settled cells of a game: a fixed 10×20 grid.
///
/// Row 0 is the top of the board. The dimensions never change; [`sweep`]
/// removes rows by shifting everything above them down and refilling the top
/// with empty rows.
///
/// [`sweep`]: Board::sweep
///
/// # Example
///
/// ```
/// use blockdrop_engine::{Board, Piece, PieceKind};
///
/// let mut board = Board::new();
/// let piece = Piece::at(PieceKind::O, 0, 18);
/// assert!(!board.is_colliding(&piece));
///
/// board.fill_piece(&piece);
/// assert!(board.is_colliding(&piece));
/// assert_eq!(board.occupied_cells().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the cell at `(x, y)`, or `None` if the position is off the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter()
    }

    /// Iterates over the occupied cells as `(x, y, kind)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, PieceKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.kind().map(|kind| (x, y, kind)))
        })
    }

    /// Returns whether the piece overlaps a settled cell or leaves the board.
    ///
    /// Every occupied cell of the piece is checked. A cell whose column is
    /// outside `0..WIDTH` or whose row is outside `0..HEIGHT` counts as a
    /// collision.
    #[must_use]
    pub fn is_colliding(&self, piece: &Piece) -> bool {
        piece
            .occupied_positions()
            .any(|(x, y)| self.cell(x, y).is_none_or(Cell::is_filled))
    }

    /// Writes the piece's blocks into the board.
    ///
    /// This is called when a piece locks, after collision has been resolved,
    /// so only empty cells are overwritten. Blocks that fall outside the board
    /// are dropped.
    pub fn fill_piece(&mut self, piece: &Piece) {
        let kind = piece.kind();
        for (x, y) in piece.occupied_positions() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = Cell::Filled(kind);
            }
        }
    }

    /// Removes every full row and returns the lines cleared and points earned.
    ///
    /// Rows are examined from the bottom up. Each full row is removed, the
    /// rows above it move down by one, and an empty row appears at the top.
    /// The first row cleared is worth 100 points and each further row in the
    /// same sweep doubles the previous value (100, 200, 400, 800, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use blockdrop_engine::{Board, Cell, PieceKind, SweepResult};
    ///
    /// let mut board = Board::new();
    /// for x in 0..Board::WIDTH {
    ///     board.set_cell(x, Board::HEIGHT - 1, Cell::Filled(PieceKind::I));
    /// }
    ///
    /// let result = board.sweep();
    /// assert_eq!(result, SweepResult { cleared_lines: 1, score_delta: 100 });
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn sweep(&mut self) -> SweepResult {
        let mut result = SweepResult::default();
        let mut row_score = LINE_CLEAR_BASE_SCORE;
        for y in (0..BOARD_HEIGHT).rev() {
            if is_full(&self.rows[y]) {
                result.cleared_lines += 1;
                result.score_delta += row_score;
                row_score *= 2;
                continue;
            }
            if result.cleared_lines > 0 {
                self.rows[y + result.cleared_lines] = self.rows[y];
            }
        }
        self.rows[..result.cleared_lines].fill(EMPTY_ROW);
        result
    }
}

#[cfg(test)]
impl Board {
    /// Builds a board from text rows aligned to the bottom of the board.
    ///
    /// `.` is empty, a piece letter (`I`, `J`, ...) is a block of that kind.
    pub(crate) fn from_ascii(lines: &[&str]) -> Self {
        assert!(lines.len() <= BOARD_HEIGHT);
        let mut board = Self::new();
        let top = BOARD_HEIGHT - lines.len();
        for (dy, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), BOARD_WIDTH, "row {dy} has wrong width");
            for (x, c) in line.chars().enumerate() {
                let cell = match c {
                    '.' => Cell::Empty,
                    c => Cell::Filled(PieceKind::from_char(c).expect("unknown piece letter")),
                };
                board.rows[top + dy][x] = cell;
            }
        }
        board
    }
}
