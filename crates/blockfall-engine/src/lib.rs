pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a player command or tick was not applied.
///
/// Neither variant is a failure of the engine: callers typically discard the
/// value (`_ = game.move_left()`), since the board is re-rendered either way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum CommandError {
    #[display("piece colliding at requested position")]
    PieceCollision,
    #[display("game is over")]
    GameOver,
}
