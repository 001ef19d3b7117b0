use std::fmt;
use std::hash::{Hash, Hasher};

use super::board::{Board, COLS};
use super::{LegalActions, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board position together with the side to move.
///
/// States are immutable values: every transition returns a fresh state and
/// leaves the receiver untouched, so search branches can share them freely.
/// Equality compares grid and turn; the hash only covers the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl GameState {
    /// Empty grid with Player 1 to move.
    pub fn make_blank_board() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
        }
    }

    /// Play `moves` in order from the blank board.
    pub fn replay(moves: &[usize]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::make_blank_board(), |state, &col| {
                state.apply_successor(col)
            })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns whose top cell is empty, in ascending order.
    ///
    /// Only the grid is consulted. On a won or lost state the open columns
    /// are still listed but `apply_successor` rejects them with
    /// `MoveError::GameOver`, so check `is_terminal` first.
    pub fn legal_actions(&self) -> LegalActions {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the mover's piece into `column` and return the resulting state.
    pub fn apply_successor(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_win() || self.is_loss() {
            return Err(MoveError::GameOver);
        }

        let mut board = self.board;
        board.drop_piece(column, self.current_player.to_cell())?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
        })
    }

    /// Player 1 owns a line of four.
    pub fn is_win(&self) -> bool {
        self.board.has_line(Player::One.to_cell())
    }

    /// Player 2 owns a line of four.
    pub fn is_loss(&self) -> bool {
        self.board.has_line(Player::Two.to_cell())
    }

    /// Full grid with no line for either player.
    pub fn is_draw(&self) -> bool {
        !self.is_win() && !self.is_loss() && self.board.is_full()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_full() || self.is_win() || self.is_loss()
    }

    /// +1 for a Player 1 win, -1 for a Player 2 win, 0 otherwise.
    pub fn utility(&self) -> i32 {
        if self.is_win() {
            1
        } else if self.is_loss() {
            -1
        } else {
            0
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_win() {
            Some(GameOutcome::Winner(Player::One))
        } else if self.is_loss() {
            Some(GameOutcome::Winner(Player::Two))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::make_blank_board()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
