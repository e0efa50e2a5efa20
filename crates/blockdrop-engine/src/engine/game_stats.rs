use crate::SweepResult;

/// Score and line counters for one game.
///
/// Both counters only ever grow. Scoring itself happens in
/// [`Board::sweep`](crate::Board::sweep); this type accumulates the results.
///
/// # Example
///
/// ```
/// use blockdrop_engine::{GameStats, SweepResult};
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(SweepResult { cleared_lines: 2, score_delta: 300 });
/// stats.complete_piece_drop(SweepResult::default());
///
/// assert_eq!(stats.score(), 300);
/// assert_eq!(stats.cleared_lines(), 2);
/// assert_eq!(stats.completed_pieces(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    cleared_lines: usize,
    completed_pieces: usize,
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_lines: 0,
            completed_pieces: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of rows removed by sweeps.
    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Returns the number of pieces that have locked.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Updates statistics after a piece locks and the board is swept.
    pub const fn complete_piece_drop(&mut self, sweep: SweepResult) {
        self.completed_pieces += 1;
        self.cleared_lines += sweep.cleared_lines;
        self.score += sweep.score_delta;
    }
}
