use crate::{
    CommandError,
    core::{
        board::Board,
        collision::collides,
        piece::{ActivePiece, Anchor},
        render_board::RenderBoard,
    },
};

use super::{
    config::{ConfigError, GameConfig},
    game_stats::GameStats,
    observer::GameObserver,
    piece_generator::{PieceGenerator, PieceSeed},
    scheduler::TickScheduler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    Running,
    /// Terminal until the next [`Game::start`].
    GameOver,
}

/// What a single [`Game::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked and a new one spawned.
    Locked { cleared_lines: usize },
    /// The piece locked and the new one collided at its spawn position.
    ToppedOut { cleared_lines: usize },
}

/// The game state machine.
///
/// Owns the board, the falling piece, the statistics and the phase, and
/// reports every change to its observer. Ticks come from the host through a
/// [`TickScheduler`], which the game schedules on [`start`](Self::start) and
/// cancels on game over.
#[derive(Debug)]
pub struct Game<O = ()> {
    config: GameConfig,
    generator: PieceGenerator,
    board: Board,
    active_piece: ActivePiece,
    stats: GameStats,
    phase: GamePhase,
    observer: O,
}

impl<O> Game<O>
where
    O: GameObserver,
{
    /// Creates a running game with an empty board and a spawned piece.
    ///
    /// Nothing is scheduled and nothing is reported until [`start`](Self::start).
    pub fn new(config: GameConfig, seed: PieceSeed, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut generator = PieceGenerator::with_seed(seed);
        let board = Board::new(config.board_width, config.board_height);
        let active_piece = ActivePiece::spawn(generator.next_kind(), board.width());
        Ok(Self {
            config,
            generator,
            board,
            active_piece,
            stats: GameStats::new(),
            phase: GamePhase::Running,
            observer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.active_piece
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
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the board with the falling piece drawn on top.
    #[must_use]
    pub fn render_board(&self) -> RenderBoard {
        RenderBoard::with_piece(&self.board, &self.active_piece)
    }

    /// Starts a new game, replacing any previous one.
    ///
    /// Cancels the current tick stream, resets the board, the statistics and
    /// the phase, spawns a piece, reports the zero score and the first
    /// frame, then schedules ticks at the configured interval.
    pub fn start<S>(&mut self, scheduler: &mut S)
    where
        S: TickScheduler + ?Sized,
    {
        scheduler.cancel();
        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.stats = GameStats::new();
        self.phase = GamePhase::Running;
        self.active_piece = self.spawn();
        self.observer.on_score_changed(self.stats.score());
        self.render();
        scheduler.schedule(self.config.tick_interval);
    }

    /// Advances the game by one gravity step.
    ///
    /// Moves the piece down one row if it can; otherwise locks it, clears
    /// full rows, scores them and spawns the next piece. If that piece
    /// collides at its spawn position the game is over and `scheduler` is
    /// cancelled. The board is rendered in every case.
    pub fn tick<S>(&mut self, scheduler: &mut S) -> Result<TickOutcome, CommandError>
    where
        S: TickScheduler + ?Sized,
    {
        self.ensure_running()?;

        let below = self.active_piece.anchor().down();
        if !collides(&self.board, self.active_piece.shape(), below) {
            self.active_piece.set_anchor(below);
            self.render();
            return Ok(TickOutcome::Fell);
        }

        let cleared_lines = self.lock_active_piece();
        self.render();
        if collides(
            &self.board,
            self.active_piece.shape(),
            self.active_piece.anchor(),
        ) {
            self.game_over(scheduler);
            return Ok(TickOutcome::ToppedOut { cleared_lines });
        }
        Ok(TickOutcome::Locked { cleared_lines })
    }

    pub fn move_left(&mut self) -> Result<(), CommandError> {
        self.try_move_to(self.active_piece.anchor().left())
    }

    pub fn move_right(&mut self) -> Result<(), CommandError> {
        self.try_move_to(self.active_piece.anchor().right())
    }

    /// Moves the piece down one row. Never locks it; that is left to [`tick`](Self::tick).
    pub fn soft_drop(&mut self) -> Result<(), CommandError> {
        self.try_move_to(self.active_piece.anchor().down())
    }

    /// Rotates the piece in place.
    ///
    /// The rotation is discarded if the rotated shape collides at the current
    /// anchor; no alternative positions are tried.
    pub fn rotate_cw(&mut self) -> Result<(), CommandError> {
        self.ensure_running()?;
        let rotated = self.active_piece.shape().rotated();
        let result = if collides(&self.board, &rotated, self.active_piece.anchor()) {
            Err(CommandError::PieceCollision)
        } else {
            self.active_piece.set_shape(rotated);
            Ok(())
        };
        self.render();
        result
    }

    /// Replaces the falling piece, if it fits where it is placed.
    ///
    /// Unlike gravity and moves, placement also treats the rows above the
    /// board as blocked: a piece that would later lock there is rejected with
    /// [`CommandError::PieceCollision`].
    pub fn set_active_piece(&mut self, piece: ActivePiece) -> Result<(), CommandError> {
        self.ensure_running()?;
        let above_board = piece.occupied_positions().any(|(_, y)| y < 0);
        if above_board || collides(&self.board, piece.shape(), piece.anchor()) {
            return Err(CommandError::PieceCollision);
        }
        self.active_piece = piece;
        self.render();
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), CommandError> {
        match self.phase {
            GamePhase::Running => Ok(()),
            GamePhase::GameOver => Err(CommandError::GameOver),
        }
    }

    fn try_move_to(&mut self, anchor: Anchor) -> Result<(), CommandError> {
        self.ensure_running()?;
        let result = if collides(&self.board, self.active_piece.shape(), anchor) {
            Err(CommandError::PieceCollision)
        } else {
            self.active_piece.set_anchor(anchor);
            Ok(())
        };
        self.render();
        result
    }

    fn spawn(&mut self) -> ActivePiece {
        ActivePiece::spawn(self.generator.next_kind(), self.board.width())
    }

    fn lock_active_piece(&mut self) -> usize {
        self.board.merge(self.active_piece.shape(), self.active_piece.anchor());
        let cleared_lines = self.board.clear_full_rows();
        self.stats.complete_piece_lock(cleared_lines, self.config.points_per_line);
        if cleared_lines > 0 {
            self.observer.on_score_changed(self.stats.score());
        }
        self.active_piece = self.spawn();
        cleared_lines
    }

    fn game_over<S>(&mut self, scheduler: &mut S)
    where
        S: TickScheduler + ?Sized,
    {
        scheduler.cancel();
        self.phase = GamePhase::GameOver;
        self.observer.on_game_over(self.stats.score());
    }

    fn render(&mut self) {
        self.observer.render(&self.board, &self.active_piece);
    }
}
