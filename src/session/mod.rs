//! Thin collaborators around the engine: a line-based human-vs-agent game,
//! agent-vs-agent matches, and the appended move-history record.

mod history;
mod matchup;
mod text_game;

pub use history::GameRecord;
pub use matchup::play_match;
pub use text_game::{SessionConfig, TextGame};
