//! Heuristic evaluation function for five-in-a-row positions
//!
//! The evaluation is built from one primitive, [`score_at`], which looks at
//! the lines through a single stone. [`evaluate`] sums it over the whole board
//! for both players and returns the difference.

use crate::board::{Board, Cell, Pos};

use super::patterns::line_score;

/// Direction vectors for line checking (4 axes, each scanned both ways)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↗
];

/// How far a line is followed from the origin in each direction
const MAX_REACH: i32 = 5;

/// Local score of the lines through `pos` for `player`.
///
/// For each axis the run is extended from `pos` up to [`MAX_REACH`] steps
/// both ways. An extension stops at the first cell not owned by `player`; if
/// it stops because it left the board, that end counts as open. The origin
/// always counts toward the length, whatever it holds.
#[must_use]
pub fn score_at(board: &Board, pos: Pos, player: Cell) -> i32 {
    let size = board.size();
    let mut score = 0;

    for &(dx, dy) in &DIRECTIONS {
        let mut length = 1usize;
        let mut open_ends = 0u8;

        for sign in [1, -1] {
            for step in 1..=MAX_REACH {
                match pos.offset(sign * dx * step, sign * dy * step, size) {
                    None => {
                        open_ends += 1;
                        break;
                    }
                    Some(next) if board.at(next) == player => length += 1,
                    Some(_) => break,
                }
            }
        }

        score += line_score(length, open_ends);
    }

    score
}

/// Evaluate the board from the perspective of the given player.
///
/// Stones of `player` add their [`score_at`]; stones of the other symbol
/// subtract theirs, scored for their own owner. Positive values favour
/// `player`.
#[must_use]
pub fn evaluate(board: &Board, player: Cell) -> i32 {
    board
        .stones()
        .map(|(pos, occupant)| {
            if occupant == player {
                score_at(board, pos, player)
            } else {
                -score_at(board, pos, occupant)
            }
        })
        .sum()
}
