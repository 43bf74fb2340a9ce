//! Game rules for five-in-a-row
//!
//! Free-style gomoku: the first player with five or more stones in a line wins.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_positions, has_five_at_pos, has_five_in_row, WIN_LENGTH};
