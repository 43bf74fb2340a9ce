//! Square board stored as a flat buffer

use super::{Cell, Pos, MAX_BOARD_SIZE};
use crate::error::{GameError, Result};

/// Game board of side `size`.
///
/// Cells are stored in scan order (`x * size + y`), so iterating the buffer
/// visits positions in the same order as every row-major search in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board, validating the side length once.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Validate raw coordinates
    pub fn pos(&self, x: i32, y: i32) -> Result<Pos> {
        if Pos::is_valid(x, y, self.size) {
            Ok(Pos::new(x as u8, y as u8))
        } else {
            Err(GameError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Get the cell at raw coordinates
    pub fn get(&self, x: i32, y: i32) -> Result<Cell> {
        let pos = self.pos(x, y)?;
        Ok(self.at(pos))
    }

    /// Overwrite the cell at raw coordinates.
    ///
    /// Occupancy is not checked here; callers decide whether overwriting is legal.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<()> {
        let pos = self.pos(x, y)?;
        self.put(pos, cell);
        Ok(())
    }

    /// Get the cell at an already validated position
    #[inline]
    pub fn at(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at an already validated position
    #[inline]
    pub fn put(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.at(pos).is_empty()
    }

    /// Reset every cell to empty, keeping the allocation
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if board has no stones at all
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Centre cell `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// All positions in scan order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |idx| self.pos_of(idx))
    }

    /// Occupied cells in scan order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(move |(idx, &c)| (self.pos_of(idx), c))
    }

    /// Empty cells in scan order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(idx, _)| self.pos_of(idx))
    }

    /// First empty cell in scan order
    pub fn first_empty(&self) -> Option<Pos> {
        self.empty_cells().next()
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.x as usize) < self.size && (pos.y as usize) < self.size);
        pos.x as usize * self.size + pos.y as usize
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: super::DEFAULT_BOARD_SIZE,
            cells: vec![Cell::Empty; super::DEFAULT_BOARD_SIZE * super::DEFAULT_BOARD_SIZE],
        }
    }
}

/// One line per `y`, one column per `x`, matching how the board is drawn.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}", self.at(Pos::new(x as u8, y as u8)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
