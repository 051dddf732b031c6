//! Run-length scores for Gomoku evaluation
//!
//! The heuristic is a fixed handcrafted formula: a run of length L is worth
//! 10^(L-1), and the opponent's threats are weighted twice as heavily as
//! one's own runs.

/// Evaluation score. Terminal positions are `f64::INFINITY` /
/// `f64::NEG_INFINITY`.
pub type Score = f64;

/// Decided win for the evaluating side
pub const WIN: Score = f64::INFINITY;
/// Decided loss for the evaluating side
pub const LOSS: Score = f64::NEG_INFINITY;

/// Opponent holds a run of four or more: loss is imminent
pub const OPPONENT_FOUR: Score = -1e9;
/// Opponent holds a run of three
pub const OPPONENT_THREE: Score = -1e6;

/// Multiplier on the opponent's best run
pub const OPPONENT_WEIGHT: Score = 2.0;

/// Score of a single run of `len` stones
pub fn run_score(len: usize) -> Score {
    match len {
        0 => 0.0,
        1 => 1.0,
        2 => 10.0,
        3 => 100.0,
        4 => 1_000.0,
        _ => 10f64.powi(len as i32 - 1),
    }
}
