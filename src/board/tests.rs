use super::*;
use crate::error::{BoardError, ConfigError};

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_pos_distances() {
    let a = Pos::new(9, 9);
    assert_eq!(a.chebyshev(Pos::new(12, 7)), 3);
    assert_eq!(a.chebyshev(a), 0);
    assert_eq!(a.manhattan(Pos::new(12, 7)), 5);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_try_new_rejects_out_of_range_sizes() {
    assert_eq!(
        Board::try_new(0),
        Err(ConfigError::BoardSize {
            size: 0,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    );
    assert!(Board::try_new(MAX_BOARD_SIZE + 1).is_err());
    assert_eq!(Board::try_new(MIN_BOARD_SIZE).map(|b| b.size()), Ok(MIN_BOARD_SIZE));
}

#[test]
fn test_new_clamps_size() {
    let tiny = Board::new(0);
    assert_eq!(tiny.size(), MIN_BOARD_SIZE);
    assert_eq!(tiny.center(), Pos::new(2, 2));
    assert!(!tiny.is_full());

    assert_eq!(Board::new(200).size(), MAX_BOARD_SIZE);
}

#[test]
fn test_board_center_and_bounds() {
    let board = Board::new(19);
    assert_eq!(board.center(), Pos::new(9, 9));
    assert_eq!(board.cell_count(), 361);
    assert!(board.contains(0, 0));
    assert!(board.contains(18, 18));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, 19));

    let small = Board::new(5);
    assert_eq!(small.center(), Pos::new(2, 2));
    assert_eq!(small.all_tiles().count(), 25);
}

#[test]
fn test_step() {
    let board = Board::new(19);
    assert_eq!(board.step(Pos::new(5, 5), 1, -1, 2), Some(Pos::new(7, 3)));
    assert_eq!(board.step(Pos::new(0, 5), -1, 0, 1), None);
    assert_eq!(board.step(Pos::new(18, 18), 1, 1, 1), None);
}

#[test]
fn test_place_overwrites() {
    let mut board = Board::new(19);
    let pos = Pos::new(3, 4);
    board.place(Move::new(pos, Stone::Black));
    assert_eq!(board.get(pos), Some(Stone::Black));

    board.place(Move::new(pos, Stone::White));
    assert_eq!(board.get(pos), Some(Stone::White));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_remove() {
    let mut board = Board::new(19);
    let a = Move::new(Pos::new(1, 1), Stone::White);
    let b = Move::new(Pos::new(2, 1), Stone::White);
    board.place(a);
    board.place(b);

    assert_eq!(board.remove(&[a, b]), Ok(()));
    assert!(board.is_board_empty());
}

#[test]
fn test_remove_empty_tile_is_error() {
    let mut board = Board::new(19);
    let a = Move::new(Pos::new(1, 1), Stone::White);
    let b = Move::new(Pos::new(2, 1), Stone::White);
    board.place(a);

    assert_eq!(
        board.remove(&[a, b]),
        Err(BoardError::NotOccupied { pos: Pos::new(2, 1) })
    );
    // All-or-nothing: the valid entry was not removed either
    assert_eq!(board.get(a.pos), Some(Stone::White));
}

#[test]
fn test_remove_wrong_colour_is_error() {
    let mut board = Board::new(19);
    board.place(Move::new(Pos::new(1, 1), Stone::Black));
    let result = board.remove(&[Move::new(Pos::new(1, 1), Stone::White)]);
    assert!(matches!(result, Err(BoardError::ColourMismatch { .. })));
}

#[test]
fn test_copy_is_independent() {
    let mut board = Board::new(19);
    board.place(Move::new(Pos::new(9, 9), Stone::Black));

    let mut copy = board.copy();
    copy.place(Move::new(Pos::new(9, 10), Stone::White));
    copy.add_captured(Stone::White, 2);

    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.captured(Stone::White), 0);
    assert_eq!(copy.stone_count(), 2);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(5);
    let tiles: Vec<Pos> = board.all_tiles().collect();
    for (i, &pos) in tiles.iter().enumerate() {
        assert!(!board.is_full());
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(Move::new(pos, stone));
    }
    assert!(board.is_full());
    assert_eq!(board.empty_tiles().count(), 0);
}

#[test]
fn test_stones_iteration() {
    let mut board = Board::new(7);
    board.place(Move::new(Pos::new(6, 0), Stone::Black));
    board.place(Move::new(Pos::new(0, 6), Stone::Black));
    board.place(Move::new(Pos::new(3, 3), Stone::White));

    let black: Vec<Pos> = board.stones(Stone::Black).collect();
    assert_eq!(black, vec![Pos::new(6, 0), Pos::new(0, 6)]);
    assert_eq!(board.occupied().count(), 3);
}

#[test]
fn test_display() {
    let mut board = Board::new(5);
    board.place(Move::new(Pos::new(0, 0), Stone::Black));
    board.place(Move::new(Pos::new(4, 1), Stone::White));
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "     0  1  2  3  4");
    assert_eq!(lines[1], "  0  X  .  .  .  .");
    assert_eq!(lines[2], "  1  .  .  .  .  O");
    assert!(lines[6].starts_with("captured:"));
}
