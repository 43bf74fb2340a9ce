//! Scoped trial placements
//!
//! The move selector repeatedly asks "what if this stone were here?". A
//! [`Tentative`] owns the board for the duration of that question and puts the
//! previous cell back when it goes out of scope, on every exit path.

use std::ops::Deref;

use super::{Board, Cell, Pos};

/// A stone placed for evaluation only; reverted on drop.
pub struct Tentative<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Cell,
}

impl Board {
    /// Place `cell` at `pos` until the returned guard is dropped.
    pub fn tentative(&mut self, pos: Pos, cell: Cell) -> Tentative<'_> {
        let previous = self.at(pos);
        self.put(pos, cell);
        Tentative {
            board: self,
            pos,
            previous,
        }
    }
}

impl Tentative<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.put(self.pos, self.previous);
    }
}
