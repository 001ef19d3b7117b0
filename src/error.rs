use std::path::PathBuf;

/// A move that cannot be applied to the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (expected 0..{cols})")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// The search was asked to move from a state that has no move to offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal action exists: the board is full")]
    NoLegalActions,

    #[error("no legal action exists: the game is already decided")]
    GameOver,

    #[error("search generated an illegal successor: {0}")]
    Move(#[from] MoveError),
}

/// Errors raised while running an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("agent failed to move: {0}")]
    Search(#[from] SearchError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while appending a game record to the history file.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to open history file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
