//! Move legality: occupancy, Pente opening, double free-threes.

use crate::board::{Board, Move, Stone};
use crate::config::RuleSet;
use crate::error::IllegalMove;

use super::forbidden::count_free_threes;

/// Minimum Chebyshev distance from center for the second Pente move
pub const PENTE_SECOND_MOVE_DISTANCE: u8 = 3;

/// Check whether `mv` may be played on `board`.
///
/// Rejections carry the reason to show the acting player.
pub fn validate_move(board: &Board, mv: Move, rules: &RuleSet) -> Result<(), IllegalMove> {
    if !board.is_empty(mv.pos) {
        return Err(IllegalMove::Occupied);
    }

    if rules.pente_opening {
        let center = board.center();
        match board.stone_count() {
            0 if mv.pos != center => return Err(IllegalMove::FirstMoveNotCenter),
            1 if mv.pos.chebyshev(center) < PENTE_SECOND_MOVE_DISTANCE => {
                return Err(IllegalMove::SecondMoveTooClose)
            }
            _ => {}
        }
    }

    if rules.no_double_threes && count_free_threes(board, mv.pos, mv.stone) >= 2 {
        return Err(IllegalMove::DoubleFreeThree);
    }

    Ok(())
}

/// Check if a move is legal
#[inline]
pub fn is_valid_move(board: &Board, mv: Move, rules: &RuleSet) -> bool {
    validate_move(board, mv, rules).is_ok()
}

/// Every empty tile `stone` may legally play, row-major
pub fn legal_moves<'a>(
    board: &'a Board,
    stone: Stone,
    rules: &'a RuleSet,
) -> impl Iterator<Item = Move> + 'a {
    board
        .empty_tiles()
        .map(move |pos| Move::new(pos, stone))
        .filter(move |&mv| is_valid_move(board, mv, rules))
}
