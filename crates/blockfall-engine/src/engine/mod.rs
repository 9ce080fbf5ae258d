//! Game engine logic and state management.
//!
//! This module ties the core data structures together into the playable game:
//!
//! - [`Game`] - The state machine: gravity, locking, row clearing, spawning, game over
//! - [`GameConfig`] - Board size, tick interval and scoring
//! - [`GameStats`] - Score, locked pieces and cleared rows
//! - [`GameObserver`] - Render / score / game-over notifications
//! - [`TickScheduler`] - Schedule and cancel the periodic tick
//! - [`PieceGenerator`] - Seedable uniform shape source
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] with a config, a [`PieceSeed`] and an observer
//! 2. Call [`Game::start`], which resets the board and schedules ticks
//! 3. Forward each scheduled tick to [`Game::tick`], and player input to the
//!    move/rotate commands
//! 4. When a new piece collides at its spawn position, the game is over and
//!    ticks are cancelled
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Game, GameConfig, ManualScheduler, PieceSeed};
//!
//! let mut scheduler = ManualScheduler::new();
//! let mut game = Game::new(GameConfig::default(), PieceSeed::from_u128(1), ()).unwrap();
//! game.start(&mut scheduler);
//!
//! _ = game.move_left();
//! _ = game.rotate_cw();
//!
//! for _ in 0..scheduler.advance(std::time::Duration::from_secs(3)) {
//!     _ = game.tick(&mut scheduler);
//! }
//! assert!(game.phase().is_running());
//! ```

pub use self::{
    config::*, game::*, game_stats::*, observer::*, piece_generator::*, scheduler::*,
};

mod config;
mod game;
mod game_stats;
mod observer;
mod piece_generator;
mod scheduler;
