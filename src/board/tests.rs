use super::*;
use crate::error::GameError;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(DEFAULT_BOARD_SIZE).unwrap();
    assert_eq!(board.size(), 50);
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.get(49, 49).unwrap(), Cell::Empty);
}

#[test]
fn test_board_size_validation() {
    assert!(Board::new(1).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
    assert!(matches!(
        Board::new(0),
        Err(GameError::InvalidBoardSize { size: 0, .. })
    ));
    assert!(matches!(
        Board::new(MAX_BOARD_SIZE + 1),
        Err(GameError::InvalidBoardSize { size: 51, max: 50 })
    ));
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new(50).unwrap();
    assert!(matches!(
        board.get(50, 0),
        Err(GameError::OutOfBounds { x: 50, y: 0, size: 50 })
    ));
    assert!(matches!(
        board.get(-1, 10),
        Err(GameError::OutOfBounds { x: -1, y: 10, .. })
    ));
}

#[test]
fn test_set_out_of_bounds_leaves_board_unchanged() {
    let mut board = Board::new(15).unwrap();
    let before = board.clone();
    assert!(board.set(15, 3, Cell::X).is_err());
    assert!(board.set(3, -2, Cell::O).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_set_overwrites_unconditionally() {
    let mut board = Board::new(15).unwrap();
    board.set(3, 4, Cell::X).unwrap();
    board.set(3, 4, Cell::O).unwrap();
    assert_eq!(board.get(3, 4).unwrap(), Cell::O);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_clear_resets_all_cells() {
    let mut board = Board::new(10).unwrap();
    board.set(0, 0, Cell::X).unwrap();
    board.set(9, 9, Cell::O).unwrap();
    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board, Board::new(10).unwrap());
}

#[test]
fn test_center() {
    assert_eq!(Board::new(50).unwrap().center(), Pos::new(25, 25));
    assert_eq!(Board::new(15).unwrap().center(), Pos::new(7, 7));
    assert_eq!(Board::new(1).unwrap().center(), Pos::new(0, 0));
}

#[test]
fn test_scan_order_is_x_major() {
    let board = Board::new(3).unwrap();
    let order: Vec<Pos> = board.positions().take(4).collect();
    assert_eq!(
        order,
        vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]
    );
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
}

#[test]
fn test_first_empty_skips_stones() {
    let mut board = Board::new(3).unwrap();
    assert_eq!(board.first_empty(), Some(Pos::new(0, 0)));
    board.set(0, 0, Cell::X).unwrap();
    board.set(0, 1, Cell::O).unwrap();
    assert_eq!(board.first_empty(), Some(Pos::new(0, 2)));

    for pos in board.positions().collect::<Vec<_>>() {
        board.put(pos, Cell::X);
    }
    assert_eq!(board.first_empty(), None);
}

#[test]
fn test_stones_iterates_occupied_only() {
    let mut board = Board::new(5).unwrap();
    board.set(4, 0, Cell::O).unwrap();
    board.set(1, 3, Cell::X).unwrap();
    let stones: Vec<_> = board.stones().collect();
    assert_eq!(stones, vec![(Pos::new(1, 3), Cell::X), (Pos::new(4, 0), Cell::O)]);
}

#[test]
fn test_tentative_reverts_on_drop() {
    let mut board = Board::new(10).unwrap();
    let pos = Pos::new(4, 4);
    {
        let trial = board.tentative(pos, Cell::O);
        assert_eq!(trial.at(pos), Cell::O);
        assert_eq!(trial.stone_count(), 1);
    }
    assert_eq!(board.at(pos), Cell::Empty);
}

#[test]
fn test_tentative_restores_previous_cell() {
    let mut board = Board::new(10).unwrap();
    let pos = Pos::new(2, 7);
    board.put(pos, Cell::X);
    drop(board.tentative(pos, Cell::O));
    assert_eq!(board.at(pos), Cell::X);
}

#[test]
fn test_pos_offset_stays_in_bounds() {
    let pos = Pos::new(0, 9);
    assert_eq!(pos.offset(-1, 0, 10), None);
    assert_eq!(pos.offset(0, 1, 10), None);
    assert_eq!(pos.offset(1, -1, 10), Some(Pos::new(1, 8)));
}

#[test]
fn test_display_renders_grid() {
    let mut board = Board::new(3).unwrap();
    board.set(1, 0, Cell::X).unwrap();
    board.set(2, 2, Cell::O).unwrap();
    assert_eq!(board.to_string(), ".X.\n...\n..O\n");
}
