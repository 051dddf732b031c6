//! Double-three forbidden move rules
//!
//! A double-three is a move that creates two or more free-threes simultaneously.
//! Free-three: exactly 3 stones within a span of at most 5 cells, with the
//! cell just beyond each end on the board and empty, so it can become an
//! open four next move.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// How far the scan looks along each half-axis
const SCAN_REACH: i32 = 5;

/// Collect same-colour offsets along one half-axis (`sign` is +1 or -1).
///
/// Stops at the first opponent stone or the board edge. Empty cells do not
/// stop the scan and are not collected.
fn scan_half(
    board: &Board,
    pos: Pos,
    stone: Stone,
    (dx, dy): (i32, i32),
    sign: i32,
    offsets: &mut Vec<i32>,
) {
    for i in 1..=SCAN_REACH {
        let Some(p) = board.step(pos, dx, dy, sign * i) else {
            break;
        };
        match board.get(p) {
            Some(s) if s == stone => offsets.push(sign * i),
            Some(_) => break,
            None => {}
        }
    }
}

/// Check if placing `stone` at `pos` forms a free-three along (dx, dy).
///
/// The scan never reads `pos` itself (offset 0 is implied, and the end
/// cells lie strictly beyond the outermost stones), so the board does not
/// need the stone placed tentatively.
fn is_free_three(board: &Board, pos: Pos, stone: Stone, dx: i32, dy: i32) -> bool {
    let mut offsets = vec![0];
    scan_half(board, pos, stone, (dx, dy), 1, &mut offsets);
    scan_half(board, pos, stone, (dx, dy), -1, &mut offsets);

    if offsets.len() != 3 {
        return false;
    }
    offsets.sort_unstable();

    let (min, max) = (offsets[0], offsets[2]);
    if max - min > 4 {
        return false;
    }

    // Both cells just outside the span must be on the board and empty
    let open = |k: i32| {
        let x = i32::from(pos.x) + dx * k;
        let y = i32::from(pos.y) + dy * k;
        board.contains(x, y) && board.is_empty(Pos::new(x as u8, y as u8))
    };
    open(min - 1) && open(max + 1)
}

/// Count how many axes would hold a free-three after placing `stone` at `pos`
pub fn count_free_threes(board: &Board, pos: Pos, stone: Stone) -> u8 {
    DIRECTIONS
        .iter()
        .filter(|&&(dx, dy)| is_free_three(board, pos, stone, dx, dy))
        .count() as u8
}

/// Check if move is a double-three (two or more free-threes at once)
#[inline]
pub fn is_double_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_free_threes(board, pos, stone) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn put(board: &mut Board, x: u8, y: u8, stone: Stone) {
        board.place(Move::new(Pos::new(x, y), stone));
    }

    #[test]
    fn test_not_double_three_empty_board() {
        let board = Board::new(19);
        assert_eq!(count_free_threes(&board, Pos::new(9, 9), Stone::Black), 0);
        assert!(!is_double_three(&board, Pos::new(9, 9), Stone::Black));
    }

    #[test]
    fn test_free_three_consecutive_horizontal() {
        let mut board = Board::new(19);
        // _ B _ B _   place at 7 -> _ B B B _
        put(&mut board, 6, 9, Stone::Black);
        put(&mut board, 8, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(7, 9), Stone::Black), 1);
    }

    #[test]
    fn test_free_three_with_gap() {
        let mut board = Board::new(19);
        // _ B B _ X _
        put(&mut board, 6, 9, Stone::Black);
        put(&mut board, 7, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(9, 9), Stone::Black), 1);
    }

    #[test]
    fn test_span_too_wide() {
        let mut board = Board::new(19);
        // B _ _ _ _ X B : span 6
        put(&mut board, 3, 9, Stone::Black);
        put(&mut board, 9, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(8, 9), Stone::Black), 0);
    }

    #[test]
    fn test_not_free_three_blocked() {
        let mut board = Board::new(19);
        // W B _ B _  (left end blocked)
        put(&mut board, 5, 9, Stone::White);
        put(&mut board, 6, 9, Stone::Black);
        put(&mut board, 8, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(7, 9), Stone::Black), 0);
    }

    #[test]
    fn test_not_free_three_at_edge() {
        let mut board = Board::new(19);
        // |B X B _  (end beyond the span is off the board)
        put(&mut board, 0, 9, Stone::Black);
        put(&mut board, 2, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(1, 9), Stone::Black), 0);
    }

    #[test]
    fn test_four_stones_not_free_three() {
        let mut board = Board::new(19);
        put(&mut board, 6, 9, Stone::Black);
        put(&mut board, 7, 9, Stone::Black);
        put(&mut board, 9, 9, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(8, 9), Stone::Black), 0);
    }

    #[test]
    fn test_double_three_cross_pattern() {
        let mut board = Board::new(19);
        // Horizontal and vertical _ B _ B _ crossing at (9, 9)
        put(&mut board, 8, 9, Stone::Black);
        put(&mut board, 10, 9, Stone::Black);
        put(&mut board, 9, 8, Stone::Black);
        put(&mut board, 9, 10, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(9, 9), Stone::Black), 2);
        assert!(is_double_three(&board, Pos::new(9, 9), Stone::Black));
    }

    #[test]
    fn test_double_three_diagonal_cross() {
        let mut board = Board::new(19);
        put(&mut board, 8, 8, Stone::Black);
        put(&mut board, 10, 10, Stone::Black);
        put(&mut board, 10, 8, Stone::Black);
        put(&mut board, 8, 10, Stone::Black);

        assert_eq!(count_free_threes(&board, Pos::new(9, 9), Stone::Black), 2);
    }

    #[test]
    fn test_single_free_three_allowed() {
        let mut board = Board::new(19);
        put(&mut board, 8, 9, Stone::Black);
        put(&mut board, 10, 9, Stone::Black);

        assert!(!is_double_three(&board, Pos::new(9, 9), Stone::Black));
    }

    #[test]
    fn test_white_stones_do_not_count_for_black() {
        let mut board = Board::new(19);
        put(&mut board, 8, 9, Stone::White);
        put(&mut board, 10, 9, Stone::White);
        put(&mut board, 9, 8, Stone::White);
        put(&mut board, 9, 10, Stone::White);

        assert_eq!(count_free_threes(&board, Pos::new(9, 9), Stone::Black), 0);
        assert!(is_double_three(&board, Pos::new(9, 9), Stone::White));
    }
}
