use std::path::PathBuf;

use crate::game::Color;

/// Errors raised by mutations of a [`BoardState`](crate::game::BoardState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cannot place an empty piece")]
    EmptyColor,

    #[error("cell ({row}, {column}) is already taken by {color:?}")]
    CellOccupied {
        row: usize,
        column: usize,
        color: Color,
    },

    #[error("board snapshot has {rows} rows and {columns} columns")]
    Dimensions { rows: usize, columns: usize },
}

/// Errors raised by the game-flow controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds { row: 6, column: 2 };
        assert_eq!(err.to_string(), "cell (6, 2) is outside the board");

        let err = BoardError::CellOccupied {
            row: 0,
            column: 3,
            color: Color::PlayerB,
        };
        assert_eq!(err.to_string(), "cell (0, 3) is already taken by PlayerB");
    }

    #[test]
    fn test_game_error_wraps_board_error() {
        let err: GameError = BoardError::ColumnFull(4).into();
        assert_eq!(err, GameError::Board(BoardError::ColumnFull(4)));
        assert_eq!(err.to_string(), "column 4 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display symbols must be distinct".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display symbols must be distinct"
        );
    }
}
