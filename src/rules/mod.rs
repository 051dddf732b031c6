//! Game rules for Gomoku and its capture variants
//!
//! This module implements the rule set including:
//! - Capture rules (pair capture)
//! - Move validation (occupancy, Pente opening, double-three)
//! - Win conditions (five-in-a-row, capture win, endgame capture rule)

pub mod capture;
pub mod forbidden;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_stones, execute_captures, get_captures, has_capture};
pub use forbidden::{count_free_threes, is_double_three};
pub use validate::{is_valid_move, legal_moves, validate_move};
pub use win::{
    can_opponent_break_line, check_win, completing_moves, get_winning_tiles, has_capture_win,
    line_intact, resolve_line, row_length, would_opponent_win_by_capture, LineVerdict,
    CAPTURE_WIN_STONES, WIN_LENGTH,
};
