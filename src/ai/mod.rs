mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::SearchAgent;
pub use heuristic::{Heuristic, StreakHeuristic};
pub use minimax::{MinimaxAgent, SearchConfig};
pub use random::RandomAgent;
