//! Position evaluation
//!
//! - [`patterns`]: run-length score table and threat sentinels
//! - [`heuristic`]: the position evaluator used at search leaves
//! - [`suggest`]: hint tiles for human players

pub mod heuristic;
pub mod patterns;
pub mod suggest;

pub use heuristic::evaluate;
pub use patterns::{run_score, Score, LOSS, OPPONENT_FOUR, OPPONENT_THREE, WIN};
pub use suggest::{best_suggestions, find_suggestions, DEFAULT_SUGGESTIONS_PER_LENGTH};
