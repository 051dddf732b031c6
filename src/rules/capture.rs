//! Capture rules for Ninuki-renju and Pente (pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use log::debug;

use crate::board::{Board, Move, Pos, Stone, DIRECTIONS};
use crate::config::RuleSet;
use crate::error::BoardError;

/// Brackets closed by placing `stone` at `pos`, as (offset 1, offset 2)
/// pairs. Does not look at `pos` itself, so it works before or after the
/// stone is placed.
fn brackets(board: &Board, pos: Pos, stone: Stone) -> impl Iterator<Item = (Pos, Pos)> + '_ {
    let opponent = stone.opponent();

    DIRECTIONS
        .iter()
        .flat_map(|&(dx, dy)| [(dx, dy), (-dx, -dy)])
        .filter_map(move |(dx, dy)| {
            // All three offsets must be on the board
            let p1 = board.step(pos, dx, dy, 1)?;
            let p2 = board.step(pos, dx, dy, 2)?;
            let p3 = board.step(pos, dx, dy, 3)?;

            (board.get(p1) == Some(opponent)
                && board.get(p2) == Some(opponent)
                && board.get(p3) == Some(stone))
            .then_some((p1, p2))
        })
}

/// Stones captured by `mv`, regardless of the variant.
///
/// Returned as opponent-coloured moves, in flanked pairs (always even).
pub fn captured_stones(board: &Board, mv: Move) -> Vec<Move> {
    let opponent = mv.stone.opponent();
    brackets(board, mv.pos, mv.stone)
        .flat_map(|(p1, p2)| [Move::new(p1, opponent), Move::new(p2, opponent)])
        .collect()
}

/// Stones captured by `mv`; empty unless the variant has captures.
pub fn get_captures(board: &Board, mv: Move, rules: &RuleSet) -> Vec<Move> {
    if !rules.captures_enabled {
        return Vec::new();
    }
    captured_stones(board, mv)
}

/// Check if a move would capture anything, without allocating.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, stone: Stone) -> bool {
    brackets(board, pos, stone).next().is_some()
}

/// Remove the stones captured by `mv` (already placed) and credit them
/// to the mover. Returns what was removed.
pub fn execute_captures(
    board: &mut Board,
    mv: Move,
    rules: &RuleSet,
) -> Result<Vec<Move>, BoardError> {
    let captured = get_captures(board, mv, rules);
    if captured.is_empty() {
        return Ok(captured);
    }

    board.remove(&captured)?;
    board.add_captured(mv.stone, captured.len() as u16);
    debug!(
        "{} at {} captured {} stones (total {})",
        mv.stone,
        mv.pos,
        captured.len(),
        board.captured(mv.stone)
    );

    Ok(captured)
}
