use std::time::Duration;

use tracing::{debug, info, trace};

use crate::{Board, Piece, PieceKind};

use super::{
    config::{ConfigError, EngineConfig},
    draw_surface::DrawSurface,
    game_stats::GameStats,
    piece_factory::PieceFactory,
    random::{RandomSource, SeededSource},
};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameState {
    /// Created but never started. No piece is falling yet.
    Idle,
    Running,
    Paused,
    /// A freshly spawned piece collided. Only [`GameEngine::start`] leaves this state.
    Over,
}

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    HardDrop,
}

impl Command {
    pub const ALL: [Self; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::RotateCw,
        Command::HardDrop,
    ];
}

/// Details of a piece that was merged into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub cleared_lines: usize,
    pub score_delta: usize,
}

/// Result of a command or tick that changed the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved or rotated and is still falling.
    Moved,
    /// The piece locked and the next piece spawned in a free position.
    Locked(LockReport),
    /// The piece locked and the next piece collided on spawn.
    GameOver(LockReport),
}

impl DropOutcome {
    #[must_use]
    pub fn lock_report(&self) -> Option<&LockReport> {
        match self {
            DropOutcome::Moved => None,
            DropOutcome::Locked(report) | DropOutcome::GameOver(report) => Some(report),
        }
    }
}

/// A single game: board, falling piece, counters and drop timer.
///
/// The engine never sleeps or schedules itself. A driver calls
/// [`tick`](Self::tick) once per frame with the elapsed time and forwards
/// player input through [`apply`](Self::apply).
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockdrop_engine::{Command, GameEngine, GameState, SequenceSource};
///
/// // Always draw the O piece.
/// let mut engine = GameEngine::with_source(SequenceSource::new([3]), Duration::from_millis(600));
/// assert_eq!(engine.state(), GameState::Idle);
///
/// engine.start();
/// let outcome = engine.apply(Command::HardDrop).unwrap();
/// let report = outcome.lock_report().unwrap();
/// assert_eq!((report.x, report.y), (4, 18));
/// assert_eq!(engine.board().cell(4, 19).map(|c| c.value()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine<R = SeededSource> {
    board: Board,
    falling_piece: Option<Piece>,
    factory: PieceFactory<R>,
    stats: GameStats,
    state: GameState,
    drop_counter: Duration,
    drop_interval: Duration,
}

impl GameEngine<SeededSource> {
    /// Creates an idle engine with the default drop interval and a random seed.
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self::with_source(SeededSource::new(), config.drop_interval)
    }

    /// Creates an idle engine from validated configuration.
    ///
    /// A configured seed makes the piece sequence reproducible.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => SeededSource::from_seed(seed),
            None => SeededSource::new(),
        };
        Ok(Self::with_source(source, config.drop_interval))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.factory.source().seed()
    }
}

impl Default for GameEngine<SeededSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GameEngine<R>
where
    R: RandomSource,
{
    #[must_use]
    pub fn with_source(source: R, drop_interval: Duration) -> Self {
        Self {
            board: Board::new(),
            falling_piece: None,
            factory: PieceFactory::new(source),
            stats: GameStats::new(),
            state: GameState::Idle,
            drop_counter: Duration::ZERO,
            drop_interval,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the falling piece, or `None` before the first start.
    ///
    /// After game over this is the piece that collided on spawn.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn lines(&self) -> usize {
        self.stats.cleared_lines()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }

    /// Time accumulated toward the next automatic drop.
    #[must_use]
    pub fn drop_counter(&self) -> Duration {
        self.drop_counter
    }

    /// Starts a new game, discarding any game in progress.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.stats = GameStats::new();
        self.drop_counter = Duration::ZERO;
        let piece = self.factory.spawn();
        self.falling_piece = Some(piece);
        self.state = GameState::Running;
        info!(kind = ?piece.kind(), "game started");
    }

    /// Switches between running and paused. Does nothing in any other state.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::Idle | GameState::Over => {
                trace!(state = %self.state, "pause toggle ignored");
                return;
            }
        };
        info!(state = %self.state, "pause toggled");
    }

    /// Advances the drop timer by `elapsed`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls one
    /// row (or locks) and the timer restarts from zero. At most one drop step
    /// happens per call, however large `elapsed` is.
    pub fn tick(&mut self, elapsed: Duration) -> Option<DropOutcome> {
        if !self.state.is_running() {
            return None;
        }
        self.drop_counter = self.drop_counter.saturating_add(elapsed);
        if self.drop_counter <= self.drop_interval {
            return None;
        }
        self.drop_counter = Duration::ZERO;
        self.drop_step()
    }

    /// Applies a player command.
    ///
    /// Returns `None` when the command was rejected, either because the game
    /// is not running or because the move would collide.
    pub fn apply(&mut self, command: Command) -> Option<DropOutcome> {
        let outcome = match command {
            Command::MoveLeft => self.move_left().then_some(DropOutcome::Moved),
            Command::MoveRight => self.move_right().then_some(DropOutcome::Moved),
            Command::RotateCw => self.rotate_cw().then_some(DropOutcome::Moved),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
        };
        if outcome.is_none() {
            trace!(?command, state = %self.state, "command rejected");
        }
        outcome
    }

    pub fn move_left(&mut self) -> bool {
        self.try_replace(Piece::left)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_replace(Piece::right)
    }

    /// Rotates clockwise with a one-column kick toward the board center.
    ///
    /// The piece is left untouched if the kicked position collides.
    pub fn rotate_cw(&mut self) -> bool {
        self.try_replace(Piece::kicked_rotation)
    }

    /// Moves the piece down one row, locking it if it cannot descend.
    ///
    /// Also restarts the drop timer.
    pub fn soft_drop(&mut self) -> Option<DropOutcome> {
        if !self.state.is_running() {
            return None;
        }
        self.drop_counter = Duration::ZERO;
        self.drop_step()
    }

    /// Drops the piece to the lowest reachable row and locks it.
    pub fn hard_drop(&mut self) -> Option<DropOutcome> {
        let piece = self.running_piece()?;
        let landed = piece.simulate_drop_position(&self.board);
        Some(self.lock(landed))
    }

    /// Emits every occupied board cell, then every occupied cell of the
    /// falling piece that lies on the board.
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: DrawSurface + ?Sized,
    {
        for (x, y, kind) in self.board.occupied_cells() {
            surface.fill_cell(x, y, kind);
        }
        let Some(piece) = &self.falling_piece else {
            return;
        };
        let kind = piece.kind();
        for (x, y) in piece.occupied_positions() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if x < Board::WIDTH && y < Board::HEIGHT {
                surface.fill_cell(x, y, kind);
            }
        }
    }

    fn running_piece(&self) -> Option<Piece> {
        if self.state.is_running() {
            self.falling_piece
        } else {
            None
        }
    }

    fn try_replace(&mut self, f: impl FnOnce(&Piece) -> Piece) -> bool {
        let Some(piece) = self.running_piece() else {
            return false;
        };
        let moved = f(&piece);
        if self.board.is_colliding(&moved) {
            return false;
        }
        self.falling_piece = Some(moved);
        true
    }

    fn drop_step(&mut self) -> Option<DropOutcome> {
        let piece = self.running_piece()?;
        let next = piece.down();
        if self.board.is_colliding(&next) {
            return Some(self.lock(piece));
        }
        self.falling_piece = Some(next);
        Some(DropOutcome::Moved)
    }

    fn lock(&mut self, piece: Piece) -> DropOutcome {
        self.board.fill_piece(&piece);
        let sweep = self.board.sweep();
        self.stats.complete_piece_drop(sweep);
        let report = LockReport {
            kind: piece.kind(),
            x: piece.x(),
            y: piece.y(),
            cleared_lines: sweep.cleared_lines,
            score_delta: sweep.score_delta,
        };
        debug!(
            kind = ?report.kind,
            x = report.x,
            y = report.y,
            cleared_lines = report.cleared_lines,
            score_delta = report.score_delta,
            "piece locked"
        );

        let next = self.factory.spawn();
        self.falling_piece = Some(next);
        if self.board.is_colliding(&next) {
            self.state = GameState::Over;
            info!(
                score = self.stats.score(),
                lines = self.stats.cleared_lines(),
                pieces = self.stats.completed_pieces(),
                "game over"
            );
            return DropOutcome::GameOver(report);
        }
        DropOutcome::Locked(report)
    }
}
