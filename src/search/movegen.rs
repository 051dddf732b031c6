//! Candidate move generation
//!
//! Search only branches on the active frontier: empty tiles touching at
//! least one stone (Chebyshev distance 1). Legality is left to the caller.

use crate::board::{Board, Pos};

/// Neighbour offsets at Chebyshev distance 1
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Empty tiles adjacent to any stone, row-major and without duplicates.
///
/// On an empty board the only candidate is the center tile.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    board
        .empty_tiles()
        .filter(|&pos| {
            NEIGHBOURS.iter().any(|&(dx, dy)| {
                board
                    .step(pos, dx, dy, 1)
                    .is_some_and(|n| !board.is_empty(n))
            })
        })
        .collect()
}
