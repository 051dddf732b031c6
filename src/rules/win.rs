//! Win condition checking
//!
//! Win conditions:
//! 1. Five or more stones in a row (exactly five under no-overline)
//! 2. Capture variants: 10 opponent stones captured
//!
//! Endgame capture rule: in capture variants a five only stands if the
//! opponent cannot break it by capturing a pair that includes a line tile.

use crate::board::{Board, Move, Pos, Stone, DIRECTIONS};
use crate::config::RuleSet;

use super::capture::{captured_stones, has_capture};

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Captured stones needed for a capture win
pub const CAPTURE_WIN_STONES: u16 = 10;

/// Opponent capture count from which a line break can end the game
pub const CAPTURE_WIN_WATCH: u16 = 8;

/// Contiguous `stone` tiles through `pos` along one axis, ordered from the
/// negative end to the positive end. `pos` itself is always included.
pub fn run_tiles(board: &Board, pos: Pos, stone: Stone, (dx, dy): (i32, i32)) -> Vec<Pos> {
    let mut line = vec![pos];

    // Extend in negative direction first
    for i in 1.. {
        match board.step(pos, dx, dy, -i) {
            Some(prev) if board.get(prev) == Some(stone) => line.insert(0, prev),
            _ => break,
        }
    }

    // Extend in positive direction
    for i in 1.. {
        match board.step(pos, dx, dy, i) {
            Some(next) if board.get(next) == Some(stone) => line.push(next),
            _ => break,
        }
    }

    line
}

/// Length of the contiguous `stone` run through `pos` along one axis,
/// counting `pos` itself.
#[inline]
fn run_length_on_axis(board: &Board, pos: Pos, stone: Stone, (dx, dy): (i32, i32)) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        for i in 1.. {
            match board.step(pos, dx, dy, sign * i) {
                Some(p) if board.get(p) == Some(stone) => count += 1,
                _ => break,
            }
        }
    }
    count
}

/// Longest run of `stone` through `pos` over all four axes
pub fn row_length(board: &Board, pos: Pos, stone: Stone) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| run_length_on_axis(board, pos, stone, dir))
        .max()
        .unwrap_or(1)
}

#[inline]
fn is_winning_length(len: usize, rules: &RuleSet) -> bool {
    if rules.exactly_five_wins {
        len == WIN_LENGTH
    } else {
        len >= WIN_LENGTH
    }
}

/// Check whether `mv` completes a winning run.
///
/// Under `exactly_five_wins` the longest run through the tile must be
/// exactly five; a six or longer anywhere through it is a dead formation.
#[inline]
pub fn check_win(board: &Board, mv: Move, rules: &RuleSet) -> bool {
    is_winning_length(row_length(board, mv.pos, mv.stone), rules)
}

/// The winning line through `mv`, if `mv` wins.
///
/// Exactly five tiles under `exactly_five_wins`, else the whole run.
pub fn get_winning_tiles(board: &Board, mv: Move, rules: &RuleSet) -> Option<Vec<Pos>> {
    if !check_win(board, mv, rules) {
        return None;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| run_tiles(board, mv.pos, mv.stone, dir))
        .find(|line| is_winning_length(line.len(), rules))
}

/// Check if `stone` has won on captures
#[inline]
pub fn has_capture_win(board: &Board, stone: Stone, rules: &RuleSet) -> bool {
    rules.captures_enabled && board.captured(stone) >= CAPTURE_WIN_STONES
}

/// Number of `line` tiles the opponent would capture by playing `pos`
fn line_tiles_captured(board: &Board, pos: Pos, opponent: Stone, line: &[Pos]) -> u16 {
    if !has_capture(board, pos, opponent) {
        return 0;
    }
    captured_stones(board, Move::new(pos, opponent))
        .iter()
        .filter(|cap| line.contains(&cap.pos))
        .count() as u16
}

/// Check if the opponent, moving next, can capture at least one tile of
/// `line` from some empty tile.
pub fn can_opponent_break_line(
    board: &Board,
    line: &[Pos],
    opponent: Stone,
    rules: &RuleSet,
) -> bool {
    if !rules.captures_enabled || line.len() < 2 {
        return false;
    }
    board
        .empty_tiles()
        .any(|pos| line_tiles_captured(board, pos, opponent, line) > 0)
}

/// Check if breaking `line` would itself give the opponent a capture win.
///
/// Only the line tiles taken by the breaking capture are added to
/// `opponent_captures`.
pub fn would_opponent_win_by_capture(
    board: &Board,
    line: &[Pos],
    opponent: Stone,
    opponent_captures: u16,
    rules: &RuleSet,
) -> bool {
    if !rules.captures_enabled || opponent_captures < CAPTURE_WIN_WATCH || line.len() < 2 {
        return false;
    }
    board.empty_tiles().any(|pos| {
        let from_line = line_tiles_captured(board, pos, opponent, line);
        from_line > 0 && opponent_captures + from_line >= CAPTURE_WIN_STONES
    })
}

/// What a completed line means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// The line cannot be broken: its owner wins
    Wins,
    /// The opponent can break it next move; play continues
    Provisional,
    /// Breaking it would win the game for the opponent on captures
    OpponentWinsByCapture,
}

/// Apply the endgame capture rule to a completed `line` owned by `holder`
pub fn resolve_line(board: &Board, line: &[Pos], holder: Stone, rules: &RuleSet) -> LineVerdict {
    let opponent = holder.opponent();
    if !can_opponent_break_line(board, line, opponent, rules) {
        return LineVerdict::Wins;
    }
    if would_opponent_win_by_capture(board, line, opponent, board.captured(opponent), rules) {
        LineVerdict::OpponentWinsByCapture
    } else {
        LineVerdict::Provisional
    }
}

/// True if every tile of `line` still holds `holder`
pub fn line_intact(board: &Board, line: &[Pos], holder: Stone) -> bool {
    line.iter().all(|&pos| board.get(pos) == Some(holder))
}

/// Every empty tile where `stone` would complete a winning run, row-major
pub fn completing_moves(board: &Board, stone: Stone, rules: &RuleSet) -> Vec<Pos> {
    board
        .empty_tiles()
        .filter(|&pos| check_win(board, Move::new(pos, stone), rules))
        .collect()
}
