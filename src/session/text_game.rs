use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::ai::SearchAgent;
use crate::error::SessionError;
use crate::game::{GameState, COLS};

use super::history::GameRecord;

const TURN_DIVIDER: &str = "=============================================";

/// Session configuration, loadable from the `[session]` TOML table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File the finished game's record is appended to.
    pub history_file: PathBuf,
    pub record_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            history_file: PathBuf::from("game_history.txt"),
            record_history: true,
        }
    }
}

/// Line-based game: the agent plays first as Player 1, the human answers as
/// Player 2 by typing column numbers.
pub struct TextGame<A: SearchAgent> {
    state: GameState,
    agent: A,
    depth: usize,
}

impl<A: SearchAgent> TextGame<A> {
    pub fn new(agent: A, depth: usize) -> Self {
        TextGame {
            state: GameState::make_blank_board(),
            agent,
            depth,
        }
    }

    /// Position reached by the last game played.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play one game from the blank board until it is decided.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GameRecord, SessionError> {
        self.state = GameState::make_blank_board();
        let mut record = GameRecord::default();

        while !self.state.is_terminal() {
            writeln!(output, "{}\n", self.state)?;

            let ai_move = self.agent.get_move(&self.state, self.depth)?;
            self.state = self.state.apply_successor(ai_move)?;
            record.ai_moves.push(ai_move);

            writeln!(output, "AI Move: {ai_move}")?;
            writeln!(output, "{}", self.state)?;

            if self.state.is_terminal() {
                break;
            }

            let player_move = self.read_player_move(input, output)?;
            self.state = self.state.apply_successor(player_move)?;
            record.player_moves.push(player_move);

            writeln!(output, "Your Move: {player_move}\n")?;
            writeln!(output, "{}", self.state)?;
            writeln!(output, "{TURN_DIVIDER}\n")?;
        }

        record.winner = self.state.winner();
        match record.winner {
            Some(player) => writeln!(output, "\nPlayer {} wins!", player.number())?,
            None => writeln!(output, "\nIts a draw!")?,
        }
        info!(
            "game over after {} moves, winner: {}",
            record.ai_moves.len() + record.player_moves.len(),
            record.winner.map_or("none", |p| p.name())
        );

        Ok(record)
    }

    /// Prompt until the human enters a legal column.
    fn read_player_move<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize, SessionError> {
        let legal = self.state.legal_actions();
        loop {
            write!(output, "\nEnter your move (0-{}): ", COLS - 1)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            let text = line.trim();
            match text.parse::<usize>() {
                Ok(col) if legal.contains(&col) => return Ok(col),
                _ => writeln!(output, "Illegal Move: {text}")?,
            }
        }
    }
}
