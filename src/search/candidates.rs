//! Candidate move generation
//!
//! The engine only considers empty cells touching an existing stone. On a
//! 50x50 board this keeps each decision proportional to the active area
//! instead of all 2500 cells.

use crate::board::{Board, Pos};

/// Empty cells in the Moore neighbourhood of any stone.
///
/// Stones are visited in scan order and their neighbours with `dx` outer and
/// `dy` inner; each cell is emitted once, in first-seen order. When nothing
/// qualifies (no stones, or no empty neighbour anywhere) the result is the
/// first empty cell in scan order, or nothing on a full board.
pub fn candidates(board: &Board) -> Vec<Pos> {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut out = Vec::new();

    for (pos, _) in board.stones() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(next) = pos.offset(dx, dy, size) else {
                    continue;
                };
                let idx = next.x as usize * size + next.y as usize;
                if board.is_empty_at(next) && !seen[idx] {
                    seen[idx] = true;
                    out.push(next);
                }
            }
        }
    }

    if out.is_empty() {
        out.extend(board.first_empty());
    }
    out
}
