//! Game flow: mode selection, turn order and the AI reply
//!
//! [`GameController`] owns the board and all turn state. A human move and the
//! AI's answer are applied inside a single [`GameController::apply_human_move`]
//! call, so a caller polling the snapshot accessors never sees the board
//! between the two.

use tracing::{debug, info, warn};

use crate::board::{Board, Cell, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, MoveRejection, Result};
use crate::rules::{find_five_positions, WIN_LENGTH};

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for `start_game`
    SelectingMode,
    /// Moves are accepted
    Running,
    /// Someone has five in a row
    Over,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::SelectingMode => "selecting a mode",
            GamePhase::Running => "the game is running",
            GamePhase::Over => "the game is over",
        })
    }
}

/// Who plays against whom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Hotseat: both symbols are played by humans
    HumanVsHuman,
    /// One human, the engine plays the other symbol
    HumanVsAI,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameMode::HumanVsHuman => "PvP",
            GameMode::HumanVsAI => "PvE",
        })
    }
}

/// What happened during an accepted human move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the human's stone went
    pub human: Pos,
    /// The AI's answer, if it moved
    pub ai_reply: Option<MoveResult>,
    /// Winner after the whole sequence
    pub winner: Option<Cell>,
}

/// Top-level game state.
pub struct GameController {
    board: Board,
    engine: AIEngine,
    phase: GamePhase,
    mode: Option<GameMode>,
    /// Symbol played by the engine in `HumanVsAI`
    ai_symbol: Option<Cell>,
    current_player: Cell,
    winner: Option<Cell>,
    winning_line: Option<[Pos; WIN_LENGTH]>,
    last_move: Option<Pos>,
    last_ai_result: Option<MoveResult>,
    move_count: usize,
}

impl GameController {
    /// Create a controller with an empty `board_size` board, waiting for a mode.
    pub fn new(board_size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(board_size)?,
            engine: AIEngine::new(),
            phase: GamePhase::SelectingMode,
            mode: None,
            ai_symbol: None,
            current_player: Cell::X,
            winner: None,
            winning_line: None,
            last_move: None,
            last_ai_result: None,
            move_count: 0,
        })
    }

    /// Start a game.
    ///
    /// `human_symbol` is ignored for `HumanVsHuman`. When the human picks O the
    /// engine plays X and opens immediately; its move is returned.
    pub fn start_game(&mut self, mode: GameMode, human_symbol: Cell) -> Result<Option<MoveResult>> {
        if self.phase != GamePhase::SelectingMode {
            return Err(GameError::IllegalModeTransition {
                phase: self.phase,
                action: "start a game",
            });
        }
        let ai_symbol = match mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAI if human_symbol.is_empty() => return Err(GameError::InvalidSymbol),
            GameMode::HumanVsAI => Some(human_symbol.opponent()),
        };

        self.clear_state();
        self.mode = Some(mode);
        self.ai_symbol = ai_symbol;
        self.phase = GamePhase::Running;
        info!(%mode, ai = ?ai_symbol, size = self.board.size(), "game started");

        if self.is_ai_turn() {
            return Ok(self.ai_turn());
        }
        Ok(None)
    }

    /// Play the current player's symbol at `(x, y)`, then let the AI answer.
    ///
    /// Rejected moves leave the game untouched.
    pub fn apply_human_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome> {
        let pos = match self.check_human_move(x, y) {
            Ok(pos) => pos,
            Err(err) => {
                debug!(x, y, %err, "move rejected");
                return Err(err);
            }
        };

        let player = self.current_player;
        self.place(pos, player);

        let ai_reply = if self.is_ai_turn() && self.phase == GamePhase::Running {
            self.ai_turn()
        } else {
            None
        };

        Ok(MoveOutcome {
            human: pos,
            ai_reply,
            winner: self.winner,
        })
    }

    /// Abandon the current game and go back to mode selection.
    pub fn reset_game(&mut self) {
        self.clear_state();
        self.phase = GamePhase::SelectingMode;
        self.mode = None;
        self.ai_symbol = None;
        info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at raw coordinates
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell> {
        self.board.get(x, y)
    }

    /// Symbol that moves next
    pub fn current_player(&self) -> Cell {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn winner(&self) -> Option<Cell> {
        self.winner
    }

    /// The five stones that ended the game
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_line
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Symbol played by the human in `HumanVsAI`
    pub fn human_symbol(&self) -> Option<Cell> {
        self.ai_symbol.map(Cell::opponent)
    }

    pub fn ai_symbol(&self) -> Option<Cell> {
        self.ai_symbol
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Stones placed since the game started
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Whether a click should be turned into a move right now
    pub fn is_human_turn(&self) -> bool {
        self.phase == GamePhase::Running && !self.is_ai_turn()
    }

    fn is_ai_turn(&self) -> bool {
        self.ai_symbol == Some(self.current_player)
    }

    fn check_human_move(&self, x: i32, y: i32) -> Result<Pos> {
        match self.phase {
            GamePhase::SelectingMode => {
                return Err(GameError::IllegalModeTransition {
                    phase: self.phase,
                    action: "play a move",
                })
            }
            GamePhase::Over => return Err(MoveRejection::GameOver.into()),
            GamePhase::Running => {}
        }
        let pos = self.board.pos(x, y)?;
        if !self.board.is_empty_at(pos) {
            return Err(MoveRejection::Occupied.into());
        }
        Ok(pos)
    }

    /// Put a stone down, check it for a win and pass the turn.
    fn place(&mut self, pos: Pos, player: Cell) {
        self.board.put(pos, player);
        self.last_move = Some(pos);
        self.move_count += 1;

        if let Some(line) = find_five_positions(&self.board, player) {
            info!(winner = %player, moves = self.move_count, "five in a row");
            self.winner = Some(player);
            self.winning_line = Some(line);
            self.phase = GamePhase::Over;
        }

        self.current_player = player.opponent();
    }

    fn ai_turn(&mut self) -> Option<MoveResult> {
        let ai = self.ai_symbol?;
        match self.engine.get_move(&mut self.board, ai) {
            Some(result) => {
                self.place(result.pos, ai);
                self.last_ai_result = Some(result.clone());
                Some(result)
            }
            None => {
                warn!(player = %ai, "AI found no move, passing the turn");
                self.current_player = ai.opponent();
                None
            }
        }
    }

    fn clear_state(&mut self) {
        self.board.clear();
        self.current_player = Cell::X;
        self.winner = None;
        self.winning_line = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.move_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Strategy;
    use crate::rules::has_five_in_row;

    fn running(mode: GameMode, human: Cell) -> GameController {
        let mut game = GameController::new(50).unwrap();
        game.start_game(mode, human).unwrap();
        game
    }

    #[test]
    fn test_new_controller_selects_mode() {
        let game = GameController::new(50).unwrap();
        assert_eq!(game.phase(), GamePhase::SelectingMode);
        assert_eq!(game.mode(), None);
        assert_eq!(game.current_player(), Cell::X);
        assert!(!game.is_game_over());
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_invalid_board_size() {
        assert!(matches!(
            GameController::new(51),
            Err(GameError::InvalidBoardSize { size: 51, max: 50 })
        ));
    }

    #[test]
    fn test_move_before_start_is_illegal() {
        let mut game = GameController::new(15).unwrap();
        let err = game.apply_human_move(3, 3).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalModeTransition { phase: GamePhase::SelectingMode, .. }
        ));
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_start_twice_is_illegal() {
        let mut game = running(GameMode::HumanVsHuman, Cell::X);
        let err = game.start_game(GameMode::HumanVsAI, Cell::X).unwrap_err();
        assert!(matches!(err, GameError::IllegalModeTransition { .. }));
        assert_eq!(game.mode(), Some(GameMode::HumanVsHuman));
    }

    #[test]
    fn test_pve_requires_a_symbol() {
        let mut game = GameController::new(15).unwrap();
        assert_eq!(
            game.start_game(GameMode::HumanVsAI, Cell::Empty),
            Err(GameError::InvalidSymbol)
        );
        assert_eq!(game.phase(), GamePhase::SelectingMode);
    }

    #[test]
    fn test_pvp_alternates_turns() {
        let mut game = running(GameMode::HumanVsHuman, Cell::O);
        assert_eq!(game.human_symbol(), None);

        let outcome = game.apply_human_move(3, 3).unwrap();
        assert_eq!(outcome.ai_reply, None);
        assert_eq!(game.cell(3, 3).unwrap(), Cell::X);
        assert_eq!(game.current_player(), Cell::O);

        game.apply_human_move(4, 4).unwrap();
        assert_eq!(game.cell(4, 4).unwrap(), Cell::O);
        assert_eq!(game.current_player(), Cell::X);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = running(GameMode::HumanVsHuman, Cell::X);
        game.apply_human_move(3, 3).unwrap();
        let err = game.apply_human_move(3, 3).unwrap_err();
        assert_eq!(err, GameError::InvalidMove(MoveRejection::Occupied));
        assert_eq!(game.current_player(), Cell::O);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = running(GameMode::HumanVsAI, Cell::X);
        let before = game.board().clone();
        assert!(matches!(
            game.apply_human_move(50, 0),
            Err(GameError::OutOfBounds { x: 50, y: 0, size: 50 })
        ));
        assert!(matches!(
            game.apply_human_move(-1, 10),
            Err(GameError::OutOfBounds { x: -1, y: 10, .. })
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Cell::X);
    }

    #[test]
    fn test_pvp_win_ends_game() {
        let mut game = running(GameMode::HumanVsHuman, Cell::X);
        for i in 0..4 {
            game.apply_human_move(10 + i, 20).unwrap();
            game.apply_human_move(10 + i, 30).unwrap();
        }
        let outcome = game.apply_human_move(14, 20).unwrap();

        assert_eq!(outcome.winner, Some(Cell::X));
        assert!(game.is_game_over());
        assert_eq!(game.phase(), GamePhase::Over);
        assert_eq!(game.winning_line().unwrap()[0], Pos::new(10, 20));
        // The turn still passes after the winning move
        assert_eq!(game.current_player(), Cell::O);

        let err = game.apply_human_move(0, 0).unwrap_err();
        assert_eq!(err, GameError::InvalidMove(MoveRejection::GameOver));
        assert_eq!(game.cell(0, 0).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_ai_opens_at_center_when_human_is_o() {
        let mut game = GameController::new(50).unwrap();
        let opening = game.start_game(GameMode::HumanVsAI, Cell::O).unwrap().unwrap();

        assert_eq!(opening.pos, Pos::new(25, 25));
        assert_eq!(opening.strategy, Strategy::Opening);
        assert_eq!(game.cell(25, 25).unwrap(), Cell::X);
        assert_eq!(game.current_player(), Cell::O);
        assert!(game.is_human_turn());

        let outcome = game.apply_human_move(24, 25).unwrap();
        assert_eq!(game.cell(24, 25).unwrap(), Cell::O);
        let reply = outcome.ai_reply.unwrap();
        assert_eq!(game.cell(reply.pos.x as i32, reply.pos.y as i32).unwrap(), Cell::X);
        assert_eq!(game.current_player(), Cell::O);
    }

    #[test]
    fn test_ai_answers_first_human_stone() {
        let mut game = running(GameMode::HumanVsAI, Cell::X);
        assert_eq!(game.ai_symbol(), Some(Cell::O));

        let outcome = game.apply_human_move(24, 25).unwrap();
        let reply = outcome.ai_reply.unwrap();

        // Not the first stone, so no centre opening: the first neighbour wins
        // the all-zero heuristic tie.
        assert_eq!(reply.strategy, Strategy::Heuristic);
        assert_eq!(reply.pos, Pos::new(23, 24));
        assert_eq!(game.cell(23, 24).unwrap(), Cell::O);
        assert_eq!(game.current_player(), Cell::X);
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.last_ai_result(), Some(&reply));
    }

    #[test]
    fn test_ai_blocks_four() {
        let mut game = running(GameMode::HumanVsAI, Cell::X);

        // The AI answers (10, 10) with (9, 9), closing one end of the diagonal.
        let replies: Vec<Pos> = [(10, 10), (11, 11), (12, 12)]
            .iter()
            .map(|&(x, y)| game.apply_human_move(x, y).unwrap().ai_reply.unwrap().pos)
            .collect();
        assert_eq!(replies, vec![Pos::new(9, 9), Pos::new(8, 8), Pos::new(7, 7)]);

        // Four X stones with (14, 14) as the only completion
        let outcome = game.apply_human_move(13, 13).unwrap();
        let reply = outcome.ai_reply.unwrap();

        assert_eq!(reply.strategy, Strategy::Block);
        assert_eq!(reply.pos, Pos::new(14, 14));
        assert_eq!(game.cell(14, 14).unwrap(), Cell::O);
        assert!(!has_five_in_row(game.board(), Cell::X));
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_ai_win_ends_game() {
        let mut game = running(GameMode::HumanVsAI, Cell::X);
        // Human scatters stones far apart; the AI keeps extending its diagonal
        let moves = [(10, 10), (40, 3), (40, 9), (40, 15), (40, 21), (40, 27)];
        let mut outcome = None;
        for &(x, y) in &moves {
            if game.is_game_over() {
                break;
            }
            outcome = Some(game.apply_human_move(x, y).unwrap());
        }
        let outcome = outcome.unwrap();
        assert_eq!(outcome.winner, Some(Cell::O));
        assert_eq!(game.winner(), Some(Cell::O));
        assert!(game.is_game_over());
        assert_eq!(outcome.ai_reply.unwrap().strategy, Strategy::ImmediateWin);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = running(GameMode::HumanVsAI, Cell::X);
        game.apply_human_move(5, 5).unwrap();

        game.reset_game();
        let first = (game.board().clone(), game.phase(), game.current_player(), game.winner());
        game.reset_game();
        let second = (game.board().clone(), game.phase(), game.current_player(), game.winner());

        assert_eq!(first, second);
        assert!(first.0.is_board_empty());
        assert_eq!(first.1, GamePhase::SelectingMode);
        assert_eq!(first.2, Cell::X);
        assert_eq!(game.mode(), None);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.move_count(), 0);

        // A new game can start after a reset
        assert!(game.start_game(GameMode::HumanVsHuman, Cell::X).is_ok());
    }
}
