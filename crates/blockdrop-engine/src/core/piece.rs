use super::{
    board::{BOARD_WIDTH, Board},
    shape::{PieceKind, Shape},
};

/// The falling piece: a shape in its current orientation plus a board offset.
///
/// Pieces are immutable values. Movement and rotation return new `Piece`s
/// and leave the legality check to the caller, which compares the result
/// against a [`Board`].
///
/// # Coordinate System
///
/// - `(x, y)` is the board position of the shape grid's top-left cell
/// - X increases rightward (columns), Y increases downward (rows)
/// - Either coordinate may leave the board; [`Board::is_colliding`] treats
///   such cells as blocked
///
/// # Example
///
/// ```
/// use blockdrop_engine::{Board, Piece, PieceKind};
///
/// let board = Board::new();
/// let piece = Piece::spawn(PieceKind::O);
/// assert_eq!((piece.x(), piece.y()), (4, 0));
///
/// let moved = piece.left();
/// assert!(!board.is_colliding(&moved));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece in spawn orientation, centered horizontally on the top row.
    ///
    /// `x = floor(board_width / 2) - floor(shape_size / 2)`.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.shape();
        let x = to_coord(BOARD_WIDTH / 2) - to_coord(shape.size() / 2);
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Creates a piece in spawn orientation at an explicit position.
    #[must_use]
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x,
            y,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Board coordinates of every occupied cell of the piece.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_cells()
            .map(move |(dx, dy, _)| (self.x + to_coord(dx), self.y + to_coord(dy)))
    }

    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(0, 1)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn up(&self) -> Self {
        self.shifted(0, -1)
    }

    /// Rotates the shape 90° clockwise in place, without moving the piece.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Rotates clockwise and applies the single-column wall kick.
    ///
    /// The piece is nudged one column toward the middle of the board: right
    /// when it sits in the left half (`x < width / 2`), left otherwise. This
    /// is not a kick table; if the kicked position collides the caller keeps
    /// the unrotated piece.
    #[must_use]
    pub fn kicked_rotation(&self) -> Self {
        let kick = if self.x < to_coord(BOARD_WIDTH) / 2 {
            1
        } else {
            -1
        };
        self.rotated_cw().shifted(kick, 0)
    }

    /// Returns the lowest position reachable by moving straight down.
    ///
    /// If the piece already collides it is returned unchanged.
    #[must_use]
    pub fn simulate_drop_position(&self, board: &Board) -> Self {
        let mut dropped = *self;
        loop {
            let next = dropped.down();
            if board.is_colliding(&next) {
                return dropped;
            }
            dropped = next;
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn to_coord(n: usize) -> i32 {
    n as i32
}
