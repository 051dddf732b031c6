//! Heuristic evaluation function for Gomoku board positions
//!
//! The score of a quiet position is `best own run - 2 * best opponent run`,
//! each run mapped through [`run_score`]. Opponent runs of three or more
//! short-circuit to fixed sentinels.

use std::collections::HashMap;

use crate::board::{Board, Move, Pos, Stone};
use crate::config::RuleSet;
use crate::rules::{check_win, has_capture_win, row_length};

use super::patterns::{
    run_score, Score, LOSS, OPPONENT_FOUR, OPPONENT_THREE, OPPONENT_WEIGHT, WIN,
};

/// Row lengths computed during one evaluation.
///
/// Only valid for the board snapshot it was filled from, so it never
/// outlives a single [`evaluate`] call.
#[derive(Debug, Default)]
struct RowLengthMemo {
    lengths: HashMap<(Pos, Stone), usize>,
}

impl RowLengthMemo {
    fn row_length(&mut self, board: &Board, pos: Pos, stone: Stone) -> usize {
        *self
            .lengths
            .entry((pos, stone))
            .or_insert_with(|| row_length(board, pos, stone))
    }
}

/// Evaluate the board from the perspective of the given colour.
///
/// Returns:
/// - `0.0` when no move has been played yet
/// - `+inf` / `-inf` when `last_move` won the game (five in a row, or a
///   capture win in capture variants)
/// - [`OPPONENT_FOUR`] / [`OPPONENT_THREE`] when the opponent holds such a run
/// - otherwise `max_self - 2 * max_opp`
#[must_use]
pub fn evaluate(
    board: &Board,
    perspective: Stone,
    last_move: Option<Move>,
    rules: &RuleSet,
) -> Score {
    let Some(last) = last_move else {
        return 0.0;
    };

    if check_win(board, last, rules) || has_capture_win(board, last.stone, rules) {
        return if last.stone == perspective { WIN } else { LOSS };
    }

    let mut memo = RowLengthMemo::default();
    let mut max_self: Score = 0.0;
    let mut max_opp: Score = 0.0;
    let mut opponent_three = false;

    for Move { pos, stone } in board.occupied() {
        let len = memo.row_length(board, pos, stone);
        let score = run_score(len);

        if stone == perspective {
            max_self = max_self.max(score);
            continue;
        }

        if len >= 4 {
            return OPPONENT_FOUR;
        }
        if len == 3 {
            opponent_three = true;
        }
        max_opp = max_opp.max(score);
    }

    if opponent_three {
        return OPPONENT_THREE;
    }

    max_self - OPPONENT_WEIGHT * max_opp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleVariant;

    fn standard() -> RuleSet {
        RuleSet::from_variant(RuleVariant::Standard)
    }

    fn put(board: &mut Board, x: u8, y: u8, stone: Stone) -> Move {
        let mv = Move::new(Pos::new(x, y), stone);
        board.place(mv);
        mv
    }

    #[test]
    fn test_no_last_move_scores_zero() {
        let mut board = Board::new(19);
        put(&mut board, 9, 9, Stone::Black);
        assert_eq!(evaluate(&board, Stone::Black, None, &standard()), 0.0);
    }

    #[test]
    fn test_win_is_infinite() {
        let mut board = Board::new(19);
        let mut last = None;
        for x in 3..8 {
            last = Some(put(&mut board, x, 4, Stone::White));
        }

        assert_eq!(evaluate(&board, Stone::White, last, &standard()), f64::INFINITY);
        assert_eq!(
            evaluate(&board, Stone::Black, last, &standard()),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_capture_win_is_infinite_in_capture_variants() {
        let mut board = Board::new(19);
        let last = put(&mut board, 0, 0, Stone::Black);
        board.add_captured(Stone::Black, 10);

        let pente = RuleSet::from_variant(RuleVariant::Pente);
        assert_eq!(evaluate(&board, Stone::Black, Some(last), &pente), f64::INFINITY);
        // Capture counts mean nothing without captures enabled
        assert_eq!(evaluate(&board, Stone::Black, Some(last), &standard()), 1.0);
    }

    #[test]
    fn test_quiet_position_formula() {
        let mut board = Board::new(19);
        // Black pair, single white stone
        put(&mut board, 9, 9, Stone::Black);
        put(&mut board, 10, 9, Stone::Black);
        let last = put(&mut board, 3, 3, Stone::White);

        // 10 - 2 * 1
        assert_eq!(evaluate(&board, Stone::Black, Some(last), &standard()), 8.0);
        // 1 - 2 * 10
        assert_eq!(evaluate(&board, Stone::White, Some(last), &standard()), -19.0);
    }

    #[test]
    fn test_opponent_three_sentinel() {
        let mut board = Board::new(19);
        for y in 5..8 {
            put(&mut board, 2, y, Stone::White);
        }
        let last = put(&mut board, 12, 12, Stone::Black);

        assert_eq!(
            evaluate(&board, Stone::Black, Some(last), &standard()),
            OPPONENT_THREE
        );
    }

    #[test]
    fn test_opponent_four_outranks_three() {
        let mut board = Board::new(19);
        // White three on row 1 is met before the four further down
        for x in 0..3 {
            put(&mut board, x, 1, Stone::White);
        }
        for x in 10..14 {
            put(&mut board, x, 15, Stone::White);
        }
        let last = put(&mut board, 9, 9, Stone::Black);

        assert_eq!(
            evaluate(&board, Stone::Black, Some(last), &standard()),
            OPPONENT_FOUR
        );
    }

    #[test]
    fn test_own_long_run_not_a_threat() {
        let mut board = Board::new(19);
        for x in 4..8 {
            put(&mut board, x, 9, Stone::Black);
        }
        let last = put(&mut board, 0, 18, Stone::White);

        // 1000 - 2 * 1
        assert_eq!(evaluate(&board, Stone::Black, Some(last), &standard()), 998.0);
    }
}
