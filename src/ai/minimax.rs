use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::game::{GameState, Player};

use super::agent::{ensure_playable, SearchAgent};
use super::heuristic::{Heuristic, StreakHeuristic};

/// Search configuration, loadable from the `[search]` TOML table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched ahead of the current position.
    pub depth: usize,
    pub three_weight: f64,
    pub two_weight: f64,
    /// Value of a position Player 1 has won.
    pub win_score: f64,
    /// Value of a position Player 2 has won.
    pub loss_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            three_weight: StreakHeuristic::DEFAULT_THREE_WEIGHT,
            two_weight: StreakHeuristic::DEFAULT_TWO_WEIGHT,
            win_score: 1_000_000.0,
            loss_score: -1_000_000.0,
        }
    }
}

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// Player 1 maximizes and Player 2 minimizes. Columns are tried in ascending
/// order and the best value is only replaced on a strict improvement, so the
/// lowest column wins ties.
pub struct MinimaxAgent {
    depth: usize,
    win_score: f64,
    loss_score: f64,
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::from_config(&SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        MinimaxAgent {
            depth: config.depth,
            win_score: config.win_score,
            loss_score: config.loss_score,
            heuristic: Box::new(StreakHeuristic::new(config.three_weight, config.two_weight)),
            nodes: 0,
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        let defaults = SearchConfig::default();
        MinimaxAgent {
            depth,
            win_score: defaults.win_score,
            loss_score: defaults.loss_score,
            heuristic,
            nodes: 0,
        }
    }

    /// Configured search depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Best move at the configured depth.
    pub fn best_move(&mut self, state: &GameState) -> Result<usize, SearchError> {
        let depth = self.depth;
        self.get_move(state, depth)
    }

    /// Run the search and return the root value with the chosen column.
    ///
    /// A `max_depth` of zero is searched as one ply so that a column can
    /// always be returned.
    pub fn search(
        &mut self,
        state: &GameState,
        max_depth: usize,
    ) -> Result<(f64, usize), SearchError> {
        ensure_playable(state)?;

        self.nodes = 0;
        let depth = max_depth.max(1);
        let (value, action) = self.dispatch(state, depth, f64::NEG_INFINITY, f64::INFINITY)?;

        debug!(
            "{} plays column {} (value {}, depth {}, {} nodes)",
            state.current_player().name(),
            action,
            value,
            depth,
            self.nodes
        );
        Ok((value, action))
    }

    /// Terminal utility for decided states, heuristic score otherwise.
    pub fn evaluate(&self, state: &GameState) -> f64 {
        if state.is_win() {
            self.win_score
        } else if state.is_loss() {
            self.loss_score
        } else {
            self.heuristic.evaluate(state.board())
        }
    }

    fn value(
        &mut self,
        state: &GameState,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<f64, SearchError> {
        if depth == 0 || state.legal_actions().is_empty() {
            self.nodes += 1;
            return Ok(self.evaluate(state));
        }
        self.dispatch(state, depth, alpha, beta).map(|(value, _)| value)
    }

    fn dispatch(
        &mut self,
        state: &GameState,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<(f64, usize), SearchError> {
        match state.current_player() {
            Player::One => self.max_value(state, depth, alpha, beta),
            Player::Two => self.min_value(state, depth, alpha, beta),
        }
    }

    /// Score a child of a node with `depth` plies remaining. Decided children
    /// are scored directly instead of being searched further.
    fn successor_value(
        &mut self,
        successor: &GameState,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<f64, SearchError> {
        if successor.is_terminal() {
            self.nodes += 1;
            return Ok(self.evaluate(successor));
        }
        self.value(successor, depth - 1, alpha, beta)
    }

    fn max_value(
        &mut self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        beta: f64,
    ) -> Result<(f64, usize), SearchError> {
        self.nodes += 1;
        let legal = state.legal_actions();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = legal.first().copied().ok_or(SearchError::NoLegalActions)?;

        for &col in &legal {
            let successor = state.apply_successor(col)?;
            let value = self.successor_value(&successor, depth, alpha, beta)?;
            if value > best_value {
                best_value = value;
                best_action = col;
            }
            if best_value > beta {
                trace!("max prune at depth {depth} after column {col}");
                return Ok((best_value, best_action));
            }
            alpha = alpha.max(best_value);
        }

        Ok((best_value, best_action))
    }

    fn min_value(
        &mut self,
        state: &GameState,
        depth: usize,
        alpha: f64,
        mut beta: f64,
    ) -> Result<(f64, usize), SearchError> {
        self.nodes += 1;
        let legal = state.legal_actions();
        let mut best_value = f64::INFINITY;
        let mut best_action = legal.first().copied().ok_or(SearchError::NoLegalActions)?;

        for &col in &legal {
            let successor = state.apply_successor(col)?;
            let value = self.successor_value(&successor, depth, alpha, beta)?;
            if value < best_value {
                best_value = value;
                best_action = col;
            }
            if best_value < alpha {
                trace!("min prune at depth {depth} after column {col}");
                return Ok((best_value, best_action));
            }
            beta = beta.min(best_value);
        }

        Ok((best_value, best_action))
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl SearchAgent for MinimaxAgent {
    fn get_move(&mut self, state: &GameState, max_depth: usize) -> Result<usize, SearchError> {
        self.search(state, max_depth).map(|(_, action)| action)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
