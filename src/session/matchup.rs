use log::debug;

use crate::ai::SearchAgent;
use crate::error::SearchError;
use crate::game::{GameState, Player};

use super::history::GameRecord;

/// Play two agents against each other from the blank board. `first` is
/// Player 1; both search to `depth`.
pub fn play_match(
    first: &mut dyn SearchAgent,
    second: &mut dyn SearchAgent,
    depth: usize,
) -> Result<GameRecord, SearchError> {
    let mut state = GameState::make_blank_board();
    let mut record = GameRecord::default();

    while !state.is_terminal() {
        let mover = state.current_player();
        let agent: &mut dyn SearchAgent = match mover {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let action = agent.get_move(&state, depth)?;
        debug!("{} ({}) plays {action}", agent.name(), mover.name());

        state = state.apply_successor(action)?;
        match mover {
            Player::One => record.ai_moves.push(action),
            Player::Two => record.player_moves.push(action),
        }
    }

    record.winner = state.winner();
    Ok(record)
}
