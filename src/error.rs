//! Error types for the game core

use thiserror::Error;

use crate::game::GamePhase;

/// Why a well-formed move was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("cell is already occupied")]
    Occupied,

    #[error("game is already over")]
    GameOver,
}

/// Main error type for the game core.
///
/// Every variant is recoverable: the state that produced it is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("position ({x}, {y}) is out of bounds (board is {size}x{size})")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("cannot {action} while {phase}")]
    IllegalModeTransition {
        phase: GamePhase,
        action: &'static str,
    },

    #[error("board size {size} is not supported (must be 1-{max})")]
    InvalidBoardSize { size: usize, max: usize },

    #[error("a player must be X or O")]
    InvalidSymbol,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, GameError>;
