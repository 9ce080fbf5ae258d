/// Game statistics tracking score, cleared rows, and locked pieces.
///
/// - **Score**: `points_per_line` for every cleared row; nothing else scores
/// - **Locked pieces**: total number of pieces merged into the board
/// - **Cleared rows**: total, plus how many locks cleared 0, 1, 2, 3 or 4 rows
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_lock(0, 10);
/// stats.complete_piece_lock(2, 10);
///
/// assert_eq!(stats.score(), 20);
/// assert_eq!(stats.locked_pieces(), 2);
/// assert_eq!(stats.line_cleared_counter(), &[1, 0, 1, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by number of rows cleared.
    ///
    /// Index `n` counts the locks that cleared exactly `n` rows. A shape is at
    /// most four cells tall, so no lock can clear more than four rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Records a lock that cleared `cleared_lines` rows.
    ///
    /// The score saturates at `usize::MAX`.
    pub const fn complete_piece_lock(&mut self, cleared_lines: usize, points_per_line: usize) {
        self.locked_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        // saturates instead of wrapping, so the score never decreases
        self.score = self
            .score
            .saturating_add(cleared_lines.saturating_mul(points_per_line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 0);
        assert_eq!(stats.total_cleared_lines(), 0);
        assert_eq!(stats.line_cleared_counter(), &[0; 5]);
    }

    #[test]
    fn test_score_is_linear_in_cleared_rows() {
        let mut stats = GameStats::new();
        stats.complete_piece_lock(1, 10);
        assert_eq!(stats.score(), 10);
        stats.complete_piece_lock(4, 10);
        assert_eq!(stats.score(), 50);
        stats.complete_piece_lock(3, 25);
        assert_eq!(stats.score(), 125);
        assert_eq!(stats.total_cleared_lines(), 8);
        assert_eq!(stats.locked_pieces(), 3);
        assert_eq!(stats.line_cleared_counter(), &[0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_score_saturates_with_huge_points_per_line() {
        let mut stats = GameStats::new();
        stats.complete_piece_lock(2, usize::MAX);
        assert_eq!(stats.score(), usize::MAX);
        stats.complete_piece_lock(1, 10);
        assert_eq!(stats.score(), usize::MAX);
        assert_eq!(stats.total_cleared_lines(), 3);
    }

    #[test]
    fn test_lock_without_clear_keeps_score() {
        let mut stats = GameStats::new();
        stats.complete_piece_lock(0, 10);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 1);
    }
}
