//! Turn resolution
//!
//! [`Game`] owns the board and applies one move at a time:
//! validate, place, capture, then decide whether the game is over.
//!
//! In capture variants a completed five is only final when the opponent
//! cannot break it. Otherwise the line is kept pending for exactly one
//! opponent move: if that move leaves every tile of the line in place, the
//! line's owner wins.

use log::{debug, info};

use crate::board::{Board, Move, Pos, Stone};
use crate::config::{GameConfig, RuleSet};
use crate::error::GameError;
use crate::rules::{
    execute_captures, get_winning_tiles, has_capture_win, legal_moves, line_intact, resolve_line,
    validate_move, LineVerdict,
};

/// How a game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// An unbreakable five (or any five without captures)
    Alignment,
    /// Ten opponent stones captured
    Captures,
    /// The opponent left a provisional line standing
    LineNotBroken,
    /// Breaking the opponent's line reaches the capture threshold
    LineBreakCapture,
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win {
        winner: Stone,
        reason: WinReason,
        /// The deciding line, for alignment wins
        line: Option<Vec<Pos>>,
    },
    /// Board filled without a winner
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

/// A five waiting for the opponent's reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLine {
    pub holder: Stone,
    pub tiles: Vec<Pos>,
}

/// What one call to [`Game::play`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub mv: Move,
    /// Stones removed by this move
    pub captured: Vec<Move>,
    /// Set when this move completed a five that can still be broken
    pub provisional_line: Option<Vec<Pos>>,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: RuleSet,
    turn: Stone,
    last_move: Option<Move>,
    pending: Option<PendingLine>,
    outcome: Option<Outcome>,
    history: Vec<Move>,
}

impl Game {
    /// Empty board, Black to move
    pub fn new(board_size: u8, rules: RuleSet) -> Self {
        Self {
            board: Board::new(board_size),
            rules,
            turn: Stone::Black,
            last_move: None,
            pending: None,
            outcome: None,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, config.rules)
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        debug!("game reset");
        *self = Self::new(self.board.size(), self.rules);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn pending_line(&self) -> Option<&PendingLine> {
        self.pending.as_ref()
    }

    /// Moves played since the last reset
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Tiles the side to move may legally play, row-major
    pub fn legal_tiles(&self) -> Vec<Pos> {
        legal_moves(&self.board, self.turn, &self.rules)
            .map(|mv| mv.pos)
            .collect()
    }

    /// Play a stone for the side to move
    pub fn play_at(&mut self, pos: Pos) -> Result<TurnReport, GameError> {
        self.play(Move::new(pos, self.turn))
    }

    /// Apply `mv` and resolve its consequences.
    ///
    /// Illegal moves leave the game unchanged.
    pub fn play(&mut self, mv: Move) -> Result<TurnReport, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if mv.stone != self.turn {
            return Err(GameError::WrongTurn {
                expected: self.turn,
                found: mv.stone,
            });
        }
        validate_move(&self.board, mv, &self.rules)?;

        self.board.place(mv);
        let captured = execute_captures(&mut self.board, mv, &self.rules)?;
        self.last_move = Some(mv);
        self.history.push(mv);
        debug!(
            "{} plays {} ({} captured, totals {}/{})",
            mv.stone,
            mv.pos,
            captured.len(),
            self.board.captured(Stone::Black),
            self.board.captured(Stone::White)
        );

        let mut report = TurnReport {
            mv,
            captured,
            provisional_line: None,
            outcome: None,
        };

        if let Some(outcome) = self.resolve(mv, &mut report) {
            info!("game over after {} moves: {:?}", self.history.len(), outcome);
            report.outcome = Some(outcome.clone());
            self.outcome = Some(outcome);
        } else {
            self.turn = self.turn.opponent();
        }

        Ok(report)
    }

    fn resolve(&mut self, mv: Move, report: &mut TurnReport) -> Option<Outcome> {
        if has_capture_win(&self.board, mv.stone, &self.rules) {
            return Some(Outcome::Win {
                winner: mv.stone,
                reason: WinReason::Captures,
                line: None,
            });
        }

        // The opponent's provisional line had this move to be broken
        if let Some(pending) = self.pending.take() {
            if line_intact(&self.board, &pending.tiles, pending.holder) {
                return Some(Outcome::Win {
                    winner: pending.holder,
                    reason: WinReason::LineNotBroken,
                    line: Some(pending.tiles),
                });
            }
            debug!("{}'s line was broken", pending.holder);
        }

        if let Some(line) = get_winning_tiles(&self.board, mv, &self.rules) {
            match resolve_line(&self.board, &line, mv.stone, &self.rules) {
                LineVerdict::Wins => {
                    return Some(Outcome::Win {
                        winner: mv.stone,
                        reason: WinReason::Alignment,
                        line: Some(line),
                    });
                }
                LineVerdict::OpponentWinsByCapture => {
                    return Some(Outcome::Win {
                        winner: mv.stone.opponent(),
                        reason: WinReason::LineBreakCapture,
                        line: Some(line),
                    });
                }
                LineVerdict::Provisional => {
                    debug!("{} completed a breakable line", mv.stone);
                    report.provisional_line = Some(line.clone());
                    self.pending = Some(PendingLine {
                        holder: mv.stone,
                        tiles: line,
                    });
                }
            }
        }

        if self.board.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
