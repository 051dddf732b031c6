//! Search module for the Gomoku AI
//!
//! Contains:
//! - Frontier move generation
//! - Depth-limited minimax with alpha-beta pruning

pub mod minimax;
pub mod movegen;

pub use minimax::{choose_move, SearchResult, SearchStats, Searcher};
pub use movegen::candidate_moves;
