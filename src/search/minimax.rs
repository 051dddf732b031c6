//! Depth-limited minimax with alpha-beta pruning
//!
//! Scores are always from the AI's point of view: the AI maximizes, its
//! opponent minimizes. Every hypothetical move is played on its own copy of
//! the board, so sibling branches never share mutable state.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::config::{RuleSet, RuleVariant};
//! use gomoku::search::Searcher;
//!
//! let board = Board::new(9);
//! let mut searcher = Searcher::new(Stone::Black, RuleSet::from_variant(RuleVariant::Standard));
//!
//! let result = searcher.choose_move(&board, None, 2).unwrap();
//! assert_eq!(result.tile, Some(board.center()));
//! ```

use log::{debug, trace};

use crate::board::{Board, Move, Pos, Stone};
use crate::config::RuleSet;
use crate::error::BoardError;
use crate::eval::{evaluate, Score, LOSS, WIN};
use crate::rules::{check_win, get_captures, has_capture_win};

use super::movegen::candidate_moves;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Leaves scored by the evaluator
    pub leaves: u64,
    /// Sibling loops cut by `beta <= alpha`
    pub cutoffs: u64,
    /// Nodes answered by a move that wins on the spot
    pub immediate_wins: u64,
}

/// Chosen tile and its minimax score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Minimax value for the AI, possibly infinite
    pub score: Score,
    /// Tile to play; `None` when there was nothing to explore
    pub tile: Option<Pos>,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Play `mv` on a copy of `board`, resolving captures when enabled
pub(crate) fn simulate(board: &Board, mv: Move, rules: &RuleSet) -> Result<Board, BoardError> {
    let mut child = board.copy();
    child.place(mv);
    let captured = get_captures(&child, mv, rules);
    if !captured.is_empty() {
        child.remove(&captured)?;
        child.add_captured(mv.stone, captured.len() as u16);
    }
    Ok(child)
}

/// True if `last` ended the game in its mover's favour
#[inline]
pub(crate) fn is_decisive(board: &Board, last: Move, rules: &RuleSet) -> bool {
    check_win(board, last, rules) || has_capture_win(board, last.stone, rules)
}

/// Minimax searcher for one AI colour
#[derive(Debug, Clone)]
pub struct Searcher {
    rules: RuleSet,
    ai: Stone,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(ai: Stone, rules: RuleSet) -> Self {
        Self {
            rules,
            ai,
            stats: SearchStats::default(),
        }
    }

    /// Pick a move for the side to play after `last_move`.
    ///
    /// The side to move alternates from `last_move`; with no last move the
    /// AI moves first. `board` is never modified.
    pub fn choose_move(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
        depth: u8,
    ) -> Result<SearchResult, BoardError> {
        self.search_root(board, last_move, depth, candidate_moves(board))
    }

    /// Like [`Searcher::choose_move`], but only `roots` are tried as the
    /// first move. Deeper plies still use the full candidate list.
    pub fn choose_move_among(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
        depth: u8,
        roots: Vec<Pos>,
    ) -> Result<SearchResult, BoardError> {
        self.search_root(board, last_move, depth, roots)
    }

    fn search_root(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
        depth: u8,
        roots: Vec<Pos>,
    ) -> Result<SearchResult, BoardError> {
        self.stats = SearchStats::default();

        let (score, tile) = self.alpha_beta(board, last_move, depth, LOSS, WIN, Some(roots))?;

        debug!(
            "search depth {} for {}: tile {:?} score {} ({} nodes, {} cutoffs)",
            depth, self.ai, tile, score, self.stats.nodes, self.stats.cutoffs
        );

        Ok(SearchResult {
            score,
            tile,
            stats: self.stats,
        })
    }

    fn is_terminal(&self, board: &Board, last_move: Option<Move>, depth: u8) -> bool {
        if depth == 0 {
            return true;
        }
        match last_move {
            Some(last) => is_decisive(board, last, &self.rules) || board.is_full(),
            None => false,
        }
    }

    fn leaf(&mut self, board: &Board, last_move: Option<Move>) -> (Score, Option<Pos>) {
        self.stats.leaves += 1;
        (
            evaluate(board, self.ai, last_move, &self.rules),
            last_move.map(|mv| mv.pos),
        )
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        roots: Option<Vec<Pos>>,
    ) -> Result<(Score, Option<Pos>), BoardError> {
        self.stats.nodes += 1;

        if self.is_terminal(board, last_move, depth) {
            return Ok(self.leaf(board, last_move));
        }

        let to_move = last_move.map_or(self.ai, |mv| mv.stone.opponent());
        let maximizing = to_move == self.ai;
        let root = roots.is_some();

        let mut children = Vec::new();
        for pos in roots.unwrap_or_else(|| candidate_moves(board)) {
            let mv = Move::new(pos, to_move);
            let child = simulate(board, mv, &self.rules)?;
            // A move that ends the game is as good as the mover can get
            if is_decisive(&child, mv, &self.rules) {
                self.stats.immediate_wins += 1;
                self.stats.leaves += 1;
                let score = if maximizing { WIN } else { LOSS };
                return Ok((score, Some(pos)));
            }
            children.push((mv, child));
        }

        if children.is_empty() {
            return Ok(self.leaf(board, last_move));
        }

        let mut best_score = if maximizing { LOSS } else { WIN };
        let mut best_tile = None;

        for (mv, child) in children {
            let (score, _) = self.alpha_beta(&child, Some(mv), depth - 1, alpha, beta, None)?;

            if root {
                trace!("root candidate {} scored {}", mv.pos, score);
            }

            if maximizing {
                if best_tile.is_none() || score > best_score {
                    best_score = score;
                    best_tile = Some(mv.pos);
                }
                if score == WIN {
                    self.stats.immediate_wins += 1;
                    break;
                }
                alpha = alpha.max(best_score);
            } else {
                if best_tile.is_none() || score < best_score {
                    best_score = score;
                    best_tile = Some(mv.pos);
                }
                if score == LOSS {
                    self.stats.immediate_wins += 1;
                    break;
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_score, best_tile))
    }
}

/// One-shot search: the best tile for `ai` at `depth` after `last_move`.
pub fn choose_move(
    board: &Board,
    last_move: Option<Move>,
    depth: u8,
    ai: Stone,
    rules: &RuleSet,
) -> Result<SearchResult, BoardError> {
    Searcher::new(ai, *rules).choose_move(board, last_move, depth)
}
