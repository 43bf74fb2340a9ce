//! AI move selection
//!
//! The AI picks its move by running a fixed chain of strategies and taking
//! the first one that produces a move:
//!
//! 1. **Opening**: on an empty board, play the centre
//! 2. **Immediate win**: any cell that completes five for the AI
//! 3. **Block**: any cell that would complete five for the opponent
//! 4. **Heuristic**: the candidate cell with the best one-ply evaluation
//! 5. **Fallback**: the first empty cell
//!
//! Every strategy tests cells with [`Board::tentative`], so the board is left
//! exactly as it was. [`AIEngine::play`] commits the chosen move.
//!
//! # Example
//!
//! ```
//! use five_in_row::{AIEngine, Board, Cell, Pos, Strategy};
//!
//! let mut board = Board::new(15).unwrap();
//! let engine = AIEngine::new();
//!
//! let result = engine.play(&mut board, Cell::O).unwrap();
//! assert_eq!(result.strategy, Strategy::Opening);
//! assert_eq!(board.at(Pos::new(7, 7)), Cell::O);
//! ```

use std::time::Instant;

use tracing::{debug, trace};

use crate::board::{Board, Cell, Pos};
use crate::eval::evaluate;
use crate::rules::{has_five_at_pos, has_five_in_row};
use crate::search::candidates;

/// One step of the move selection chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Centre cell on an empty board
    Opening,
    /// Cell that completes five for the AI
    ImmediateWin,
    /// Cell the opponent needs to complete five
    Block,
    /// Best candidate by one-ply evaluation
    Heuristic,
    /// First empty cell
    Fallback,
}

impl Strategy {
    /// The selection chain, in priority order
    pub const CHAIN: [Strategy; 5] = [
        Strategy::Opening,
        Strategy::ImmediateWin,
        Strategy::Block,
        Strategy::Heuristic,
        Strategy::Fallback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Opening => "opening",
            Strategy::ImmediateWin => "immediate win",
            Strategy::Block => "block",
            Strategy::Heuristic => "heuristic",
            Strategy::Fallback => "fallback",
        }
    }

    /// Ask this strategy for a move for `ai` without committing it.
    ///
    /// The board is borrowed mutably only for trial placements; it is
    /// unchanged when this returns.
    pub fn propose(self, board: &mut Board, ai: Cell) -> Option<Proposal> {
        match self {
            Strategy::Opening => opening(board),
            Strategy::ImmediateWin => completing_cell(board, ai).map(Proposal::at),
            Strategy::Block => completing_cell(board, ai.opponent()).map(Proposal::at),
            Strategy::Heuristic => best_candidate(board, ai),
            Strategy::Fallback => board.first_empty().map(Proposal::at),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A move suggested by a single strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub pos: Pos,
    /// Evaluation after the move, for the heuristic strategy
    pub score: Option<i32>,
    /// Number of cells evaluated heuristically
    pub evaluated: usize,
}

impl Proposal {
    #[inline]
    fn at(pos: Pos) -> Self {
        Self {
            pos,
            score: None,
            evaluated: 0,
        }
    }
}

/// Result of a move selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move
    pub pos: Pos,
    /// Strategy that produced the move
    pub strategy: Strategy,
    /// Evaluation of the position after the move (heuristic strategy only)
    pub score: Option<i32>,
    /// Number of candidate cells evaluated
    pub evaluated: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Move selector for the AI player.
///
/// Holds the strategy chain it runs; [`AIEngine::new`] uses
/// [`Strategy::CHAIN`].
#[derive(Debug, Clone)]
pub struct AIEngine {
    chain: Vec<Strategy>,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: Strategy::CHAIN.to_vec(),
        }
    }

    /// Create an engine running only the given strategies, in order.
    #[must_use]
    pub fn with_chain(chain: Vec<Strategy>) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &[Strategy] {
        &self.chain
    }

    /// Select a move for `ai` without placing it.
    ///
    /// Returns `None` when `ai` is not a player symbol or no strategy finds a
    /// move (full board).
    pub fn get_move(&self, board: &mut Board, ai: Cell) -> Option<MoveResult> {
        if ai.is_empty() {
            return None;
        }
        let start = Instant::now();

        for &strategy in &self.chain {
            if let Some(proposal) = strategy.propose(board, ai) {
                let result = MoveResult {
                    pos: proposal.pos,
                    strategy,
                    score: proposal.score,
                    evaluated: proposal.evaluated,
                    time_ms: start.elapsed().as_millis() as u64,
                };
                debug!(
                    player = %ai,
                    pos = %result.pos,
                    strategy = %strategy,
                    score = ?result.score,
                    evaluated = result.evaluated,
                    time_ms = result.time_ms,
                    "AI move selected"
                );
                return Some(result);
            }
        }
        None
    }

    /// Select a move for `ai` and place it on the board.
    pub fn play(&self, board: &mut Board, ai: Cell) -> Option<MoveResult> {
        let result = self.get_move(board, ai)?;
        board.put(result.pos, ai);
        Some(result)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn opening(board: &Board) -> Option<Proposal> {
    board.is_board_empty().then(|| Proposal::at(board.center()))
}

/// First empty cell in scan order where a `player` stone would make five.
fn completing_cell(board: &mut Board, player: Cell) -> Option<Pos> {
    // With a five already on the board every placement "wins"; the first
    // empty cell is then what a full-board check would report.
    if has_five_in_row(board, player) {
        return board.first_empty();
    }

    let empties: Vec<Pos> = board.empty_cells().collect();
    empties.into_iter().find(|&pos| {
        let trial = board.tentative(pos, player);
        has_five_at_pos(&trial, pos, player)
    })
}

/// Candidate with the highest evaluation after placing `ai` there.
/// Ties keep the earliest candidate.
fn best_candidate(board: &mut Board, ai: Cell) -> Option<Proposal> {
    let mut best: Option<(Pos, i32)> = None;
    let mut evaluated = 0;

    for pos in candidates(board) {
        if !board.is_empty_at(pos) {
            continue;
        }
        let score = {
            let trial = board.tentative(pos, ai);
            evaluate(&trial, ai)
        };
        evaluated += 1;
        trace!(pos = %pos, score, "candidate evaluated");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, score)| Proposal {
        pos,
        score: Some(score),
        evaluated,
    })
}
