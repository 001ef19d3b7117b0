use crate::game::{Board, Player};

/// Static evaluation of a board, positive when Player 1 stands better.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Weighted count of two- and three-piece streaks for each player.
///
/// Every window of 3 (or 2) consecutive cells that one player fully occupies
/// counts as a streak, in all four line directions. The score is Player 1's
/// weighted total minus Player 2's, so swapping the pieces negates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakHeuristic {
    three_weight: f64,
    two_weight: f64,
}

impl StreakHeuristic {
    pub const DEFAULT_THREE_WEIGHT: f64 = 5.0;
    pub const DEFAULT_TWO_WEIGHT: f64 = 2.0;

    pub fn new(three_weight: f64, two_weight: f64) -> Self {
        StreakHeuristic {
            three_weight,
            two_weight,
        }
    }

    fn side_score(&self, board: &Board, player: Player) -> f64 {
        let cell = player.to_cell();
        let threes = board.count_runs(cell, 3) as f64;
        let twos = board.count_runs(cell, 2) as f64;
        threes * self.three_weight + twos * self.two_weight
    }

    /// Upper bound on the magnitude of any score this heuristic can return.
    pub fn max_score(&self) -> f64 {
        Board::window_count(3) as f64 * self.three_weight.abs()
            + Board::window_count(2) as f64 * self.two_weight.abs()
    }
}

impl Default for StreakHeuristic {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THREE_WEIGHT, Self::DEFAULT_TWO_WEIGHT)
    }
}

impl Heuristic for StreakHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        self.side_score(board, Player::One) - self.side_score(board, Player::Two)
    }
}
