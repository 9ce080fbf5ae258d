use blockfall_engine::{ActivePiece, Board, GameObserver, RenderBoard};

/// What the terminal shows: the last rendered frame and the last
/// announced score.
///
/// Filled in by the game's notifications, so the screen only ever shows
/// what the game has reported.
#[derive(Debug, Clone)]
pub(crate) struct ScreenState {
    frame: RenderBoard,
    score: usize,
    final_score: Option<usize>,
}

impl ScreenState {
    pub(crate) fn new(board_width: usize, board_height: usize) -> Self {
        Self {
            frame: RenderBoard::new(&Board::new(board_width, board_height)),
            score: 0,
            final_score: None,
        }
    }

    pub(crate) fn frame(&self) -> &RenderBoard {
        &self.frame
    }

    pub(crate) fn score(&self) -> usize {
        self.score
    }

    pub(crate) fn final_score(&self) -> Option<usize> {
        self.final_score
    }

    /// Forgets the previous game's end, ahead of a restart.
    pub(crate) fn clear_game_over(&mut self) {
        self.final_score = None;
    }
}

impl GameObserver for ScreenState {
    fn render(&mut self, board: &Board, piece: &ActivePiece) {
        self.frame = RenderBoard::with_piece(board, piece);
    }

    fn on_score_changed(&mut self, score: usize) {
        self.score = score;
    }

    fn on_game_over(&mut self, final_score: usize) {
        self.final_score = Some(final_score);
    }
}
