use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::HistoryError;
use crate::game::Player;

const SEPARATOR: &str = "=================================================";

/// Columns played by each side of one finished game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves of the side that moved first (the agent in a text game).
    pub ai_moves: Vec<usize>,
    pub player_moves: Vec<usize>,
    pub winner: Option<Player>,
}

impl GameRecord {
    /// Render the record block appended to the history file.
    pub fn render(&self) -> String {
        let outcome = match self.winner {
            Some(player) => format!(" Player {} wins!", player.number()),
            None => "Its a draw.".to_string(),
        };
        format!(
            "AI History:\n{:?}\n Player History:\n{:?}\n{}\n{}\n",
            self.ai_moves, self.player_moves, outcome, SEPARATOR
        )
    }

    /// Append the record to `path`, creating the file if needed.
    pub fn append_to(&self, path: &Path) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| HistoryError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(self.render().as_bytes())
            .map_err(|source| HistoryError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
