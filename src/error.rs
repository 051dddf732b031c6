//! Error types for board mutation, move validation, and configuration.

use thiserror::Error;

use crate::board::{Pos, Stone};

/// Errors raised by [`Board::remove`](crate::Board::remove).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Removal targeted a tile with no stone on it.
    #[error("no stone to remove at {pos}")]
    NotOccupied { pos: Pos },
    /// Removal listed a colour that differs from the stone on the tile.
    #[error("stone at {pos} is {found}, not {expected}")]
    ColourMismatch {
        pos: Pos,
        expected: Stone,
        found: Stone,
    },
}

/// Reasons a proposed move is rejected.
///
/// The display strings are shown verbatim to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("Position already occupied!")]
    Occupied,
    #[error("First move must be at center!")]
    FirstMoveNotCenter,
    #[error("Second move must be at least 3 spaces from center!")]
    SecondMoveTooClose,
    #[error("Cannot create double free-threes!")]
    DoubleFreeThree,
}

/// Errors from [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Stone, found: Stone },
    #[error("the game is already over")]
    GameOver,
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: u8, min: u8, max: u8 },
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("unknown rule variant '{0}'")]
    UnknownVariant(String),
}

/// Errors from a [`Player`](crate::Player) deciding a move.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to read player input")]
    Io(#[from] std::io::Error),
}
