use crate::core::{board::Board, piece::ActivePiece};

/// Receiver of the game's outbound notifications.
///
/// All methods default to doing nothing, and `()` is an observer that
/// ignores everything.
pub trait GameObserver {
    /// Called at the end of every state-changing operation, including
    /// rejected moves, with the settled board and the falling piece.
    fn render(&mut self, board: &Board, piece: &ActivePiece) {
        let _ = (board, piece);
    }

    /// Called when the score is reset by a start or raised by a row clear.
    fn on_score_changed(&mut self, score: usize) {
        let _ = score;
    }

    /// Called once when the game ends.
    fn on_game_over(&mut self, final_score: usize) {
        let _ = final_score;
    }
}

impl GameObserver for () {}

impl<O> GameObserver for &mut O
where
    O: GameObserver + ?Sized,
{
    fn render(&mut self, board: &Board, piece: &ActivePiece) {
        (**self).render(board, piece);
    }

    fn on_score_changed(&mut self, score: usize) {
        (**self).on_score_changed(score);
    }

    fn on_game_over(&mut self, final_score: usize) {
        (**self).on_game_over(final_score);
    }
}
