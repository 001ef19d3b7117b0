use crate::error::SearchError;
use crate::game::GameState;

/// Universal interface for move-picking agents.
pub trait SearchAgent {
    /// Pick a column for the side to move, looking at most `max_depth`
    /// plies ahead. Agents that do not search may ignore the depth.
    ///
    /// Fails when `state` is already decided or has no legal column.
    fn get_move(&mut self, state: &GameState, max_depth: usize) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Reject states that no agent can move from.
pub(crate) fn ensure_playable(state: &GameState) -> Result<(), SearchError> {
    if state.is_win() || state.is_loss() {
        return Err(SearchError::GameOver);
    }
    if state.legal_actions().is_empty() {
        return Err(SearchError::NoLegalActions);
    }
    Ok(())
}
