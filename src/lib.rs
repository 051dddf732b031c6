//! Gomoku rules engine with a minimax AI
//!
//! Supports four rule variants on any board from 5x5 to 25x25:
//! - `standard`: five or more in a row wins
//! - `no_overline`: exactly five wins; six or more is a dead formation
//! - `ninuki`: pair captures (X-O-O-X), capture win at 10 stones,
//!   double free-threes forbidden
//! - `pente`: pair captures, first move at center, second move at least
//!   3 tiles from it
//!
//! In the capture variants a five that the opponent can break by capture is
//! provisional: the opponent gets one move to break it.
//!
//! # Architecture
//!
//! - [`board`]: board representation with bitboards
//! - [`rules`]: move validation, captures, win detection
//! - [`eval`]: position heuristic and move hints
//! - [`search`]: candidate generation and alpha-beta minimax
//! - [`game`]: turn resolution
//! - [`player`] / [`engine`]: human and computer players
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameConfig, Pos};
//! use gomoku::config::RuleVariant;
//! use gomoku::search::choose_move;
//!
//! let config = GameConfig::new(RuleVariant::Ninuki);
//! let mut game = Game::from_config(&config);
//!
//! game.play_at(Pos::new(9, 9)).unwrap();
//!
//! let result = choose_move(game.board(), game.last_move(), 2, game.turn(), game.rules()).unwrap();
//! if let Some(pos) = result.tile {
//!     game.play_at(pos).unwrap();
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone};
pub use config::{GameConfig, RuleSet, RuleVariant};
pub use engine::{AiPlayer, MoveSource};
pub use error::{BoardError, ConfigError, GameError, IllegalMove, PlayerError};
pub use game::{Game, Outcome, TurnReport, WinReason};
pub use player::{HumanPlayer, Player};
