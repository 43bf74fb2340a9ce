//! Board representation for five-in-a-row

pub mod board;
pub mod tentative;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use tentative::Tentative;

/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 50;
/// Board side used when none is configured
pub const DEFAULT_BOARD_SIZE: usize = 50;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Get opponent symbol
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single character used in text renderings of the board
    pub fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board.
///
/// Ordering follows the board scan order: `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_BOARD_SIZE && (y as usize) < MAX_BOARD_SIZE);
        Self { x, y }
    }

    /// Offset this position by a direction step, if the result stays inside `size`
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, size: usize) -> Option<Pos> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if Self::is_valid(x, y, size) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, size: usize) -> bool {
        x >= 0 && (x as usize) < size && y >= 0 && (y as usize) < size
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
