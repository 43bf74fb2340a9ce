//! Five-in-a-row game core with a heuristic AI opponent
//!
//! Two players alternate placing X and O on a square board of up to 50x50
//! cells; the first to line up five or more in a row, column or diagonal wins.
//!
//! # Architecture
//!
//! - [`board`]: cell storage, bounds checking and trial placements
//! - [`rules`]: five-in-a-row detection
//! - [`eval`]: local line scores and whole-board evaluation
//! - [`search`]: candidate cells next to existing stones
//! - [`engine`]: the AI's ordered strategy chain
//! - [`game`]: mode selection, turn order and the AI reply
//! - [`ui`]: egui front end driving a [`GameController`]
//!
//! # Quick Start
//!
//! ```
//! use five_in_row::{Cell, GameController, GameMode};
//!
//! let mut game = GameController::new(19).unwrap();
//! game.start_game(GameMode::HumanVsAI, Cell::X).unwrap();
//!
//! let outcome = game.apply_human_move(9, 9).unwrap();
//! let reply = outcome.ai_reply.unwrap();
//! println!("AI plays at {} ({})", reply.pos, reply.strategy);
//! assert_eq!(game.current_player(), Cell::X);
//! ```
//!
//! # AI Priority
//!
//! 1. Centre on an empty board
//! 2. Immediate winning move
//! 3. Block the opponent's winning move
//! 4. Best candidate by one-ply evaluation
//! 5. First empty cell

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, Strategy};
pub use error::{GameError, MoveRejection, Result};
pub use game::{GameController, GameMode, GamePhase, MoveOutcome};
