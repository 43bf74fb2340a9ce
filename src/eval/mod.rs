//! Evaluation module for five-in-a-row positions
//!
//! - [`score_at`]: local line score around one stone
//! - [`evaluate`]: whole-board score from one player's point of view

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_at};
pub use patterns::{line_score, LineScore};
