//! Win condition checking
//!
//! A player wins with five or more of their stones in an unbroken line along a
//! row, a column or either diagonal. Longer lines win as well.

use crate::board::{Board, Cell, Pos};

/// Stones needed in a line to win
pub const WIN_LENGTH: usize = 5;

/// Check if there's 5+ in a row for the given player
pub fn has_five_in_row(board: &Board, player: Cell) -> bool {
    find_five_positions(board, player).is_some()
}

/// Fast five-in-a-row check through a specific position.
///
/// Only the four lines through `pos` are examined, so this answers "does the
/// stone at `pos` complete a five?" without scanning the board. It agrees
/// with [`has_five_in_row`] whenever the board had no five for `player`
/// before `pos` was filled.
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Cell) -> bool {
    if player.is_empty() || board.at(pos) != player {
        return false;
    }
    let size = board.size();
    let dirs: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    for (dx, dy) in dirs {
        let mut count = 1usize;
        for sign in [1, -1] {
            let mut cursor = pos.offset(sign * dx, sign * dy, size);
            while let Some(next) = cursor {
                if board.at(next) != player {
                    break;
                }
                count += 1;
                cursor = next.offset(sign * dx, sign * dy, size);
            }
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Find the first five-in-a-row for `player`.
///
/// Directions are scanned in a fixed order (horizontal, vertical, diagonal
/// down-right, diagonal up-right). Each scan walks a line from its start cell
/// until it leaves the board, counting consecutive stones and resetting on
/// any other cell. The returned positions are the five stones ending where
/// the count first reached five, ordered along the scan direction.
pub fn find_five_positions(board: &Board, player: Cell) -> Option<[Pos; WIN_LENGTH]> {
    if player.is_empty() {
        return None;
    }
    let n = board.size() as u8;

    // Horizontal: one scan per y
    for y in 0..n {
        if let Some(line) = scan_line(board, Pos::new(0, y), (1, 0), player) {
            return Some(line);
        }
    }

    // Vertical: one scan per x
    for x in 0..n {
        if let Some(line) = scan_line(board, Pos::new(x, 0), (0, 1), player) {
            return Some(line);
        }
    }

    // Diagonal ↘ from every start cell
    for x in 0..n {
        for y in 0..n {
            if let Some(line) = scan_line(board, Pos::new(x, y), (1, 1), player) {
                return Some(line);
            }
        }
    }

    // Diagonal ↗ from every start cell
    for x in 0..n {
        for y in 0..n {
            if let Some(line) = scan_line(board, Pos::new(x, y), (1, -1), player) {
                return Some(line);
            }
        }
    }

    None
}

/// Walk from `start` along `dir` until the board edge, stopping at the first
/// point where the running count of `player` stones reaches five.
fn scan_line(board: &Board, start: Pos, dir: (i32, i32), player: Cell) -> Option<[Pos; WIN_LENGTH]> {
    let size = board.size();
    let mut count = 0usize;
    let mut cursor = Some(start);

    while let Some(pos) = cursor {
        if board.at(pos) == player {
            count += 1;
        } else {
            count = 0;
        }
        if count >= WIN_LENGTH {
            return Some(line_ending_at(pos, dir, size));
        }
        cursor = pos.offset(dir.0, dir.1, size);
    }
    None
}

/// The five positions ending at `end`, in scan direction order
fn line_ending_at(end: Pos, dir: (i32, i32), size: usize) -> [Pos; WIN_LENGTH] {
    let mut line = [end; WIN_LENGTH];
    for (i, slot) in line.iter_mut().enumerate() {
        let back = (WIN_LENGTH - 1 - i) as i32;
        // The whole line was just walked, so stepping back stays on the board.
        *slot = end.offset(-dir.0 * back, -dir.1 * back, size).unwrap_or(end);
    }
    line
}
