//! Move hints: empty tiles grouped by the run they would create.

use std::collections::BTreeMap;

use crate::board::{Board, Pos, Stone};
use crate::rules::row_length;

/// Shortest run worth suggesting
pub const MIN_SUGGESTED_RUN: usize = 2;

/// Hints shown per run length by default
pub const DEFAULT_SUGGESTIONS_PER_LENGTH: usize = 5;

/// Every empty tile where placing `stone` creates a run of at least two,
/// keyed by that run length. Tiles within a group are row-major.
pub fn find_suggestions(board: &Board, stone: Stone) -> BTreeMap<usize, Vec<Pos>> {
    let mut suggestions: BTreeMap<usize, Vec<Pos>> = BTreeMap::new();
    for pos in board.empty_tiles() {
        let len = row_length(board, pos, stone);
        if len >= MIN_SUGGESTED_RUN {
            suggestions.entry(len).or_default().push(pos);
        }
    }
    suggestions
}

/// Like [`find_suggestions`], keeping at most `max_per_length` tiles per
/// group, closest to the center first (Manhattan distance).
pub fn best_suggestions(
    board: &Board,
    stone: Stone,
    max_per_length: usize,
) -> BTreeMap<usize, Vec<Pos>> {
    let center = board.center();
    let mut suggestions = find_suggestions(board, stone);
    for positions in suggestions.values_mut() {
        positions.sort_by_key(|pos| pos.manhattan(center));
        positions.truncate(max_per_length);
    }
    suggestions
}
