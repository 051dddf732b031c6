//! Computer player
//!
//! [`AiPlayer`] runs the minimax search on a worker thread and waits at
//! most the configured time budget for it. Only legal tiles are offered as
//! the first move, so a finished search always yields a playable tile.
//!
//! The search itself has no cancellation, so on timeout the worker is left
//! to finish on its own and its result is discarded. It keeps its CPU core
//! and its 64 MiB stack reservation until then;
//! [`AiPlayer::running_searches`] reports how many are still alive. When the
//! search cannot produce a tile (timeout, worker panic, no legal tile) the
//! AI plays a uniformly random legal tile instead.
//!
//! # Example
//!
//! ```
//! use gomoku::{AiPlayer, Board, GameConfig, Player, Stone};
//! use gomoku::config::RuleVariant;
//!
//! let config = GameConfig::new(RuleVariant::Standard).with_board_size(9).with_depth(1);
//! let mut ai = AiPlayer::new(Stone::Black, &config);
//!
//! let board = Board::new(9);
//! let mv = ai.decide_move(&board, None).unwrap();
//! assert_eq!(mv.map(|m| m.pos), Some(board.center()));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Move, Pos, Stone};
use crate::config::{GameConfig, RuleSet};
use crate::error::PlayerError;
use crate::player::Player;
use crate::rules::{is_valid_move, legal_moves};
use crate::search::{candidate_moves, SearchResult, Searcher};

/// Stack size for the search thread; recursion depth grows with the depth
/// setting and every frame holds candidate boards.
const SEARCH_STACK_BYTES: usize = 64 * 1024 * 1024;

/// Where the AI's move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// The search finished in time with a legal tile
    Search,
    /// Random legal tile after a failed or late search
    Fallback,
}

/// Decrements the live worker count when the search thread ends, even by
/// panic. Created before the spawn so a failed spawn is not counted.
struct RunningSearch(Arc<AtomicUsize>);

impl RunningSearch {
    fn start(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for RunningSearch {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// First moves worth searching: legal frontier tiles, or every legal tile
/// when the frontier has none (the Pente second move).
fn root_tiles(board: &Board, stone: Stone, rules: &RuleSet) -> Vec<Pos> {
    let frontier: Vec<Pos> = candidate_moves(board)
        .into_iter()
        .filter(|&pos| is_valid_move(board, Move::new(pos, stone), rules))
        .collect();
    if !frontier.is_empty() {
        return frontier;
    }
    legal_moves(board, stone, rules).map(|mv| mv.pos).collect()
}

/// A uniformly random tile `stone` may legally play, if any
pub fn random_legal_tile<R: Rng + ?Sized>(
    board: &Board,
    stone: Stone,
    rules: &RuleSet,
    rng: &mut R,
) -> Option<Pos> {
    let tiles: Vec<Pos> = legal_moves(board, stone, rules).map(|mv| mv.pos).collect();
    tiles.choose(rng).copied()
}

/// Minimax player with a wall-clock budget
pub struct AiPlayer {
    stone: Stone,
    rules: RuleSet,
    depth: u8,
    time_limit: Duration,
    rng: SmallRng,
    last_source: Option<MoveSource>,
    last_result: Option<SearchResult>,
    running: Arc<AtomicUsize>,
}

impl AiPlayer {
    pub fn new(stone: Stone, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            stone,
            rules: config.rules,
            depth: config.depth,
            time_limit: config.time_limit,
            rng,
            last_source: None,
            last_result: None,
            running: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How the most recent move was chosen
    pub fn last_source(&self) -> Option<MoveSource> {
        self.last_source
    }

    /// The most recent completed search, if it finished in time
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Search threads started by this player that have not exited yet,
    /// including ones abandoned after a timeout
    pub fn running_searches(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    /// Run the search over `roots` within the time budget.
    ///
    /// `None` if the worker could not start, panicked, failed, or ran late.
    fn search_with_budget(
        &self,
        board: &Board,
        last_move: Option<Move>,
        roots: Vec<Pos>,
    ) -> Option<SearchResult> {
        let lingering = self.running_searches();
        if lingering > 0 {
            warn!("{lingering} abandoned search thread(s) still running");
        }

        let (tx, rx) = mpsc::channel();
        let board = board.clone();
        let mut searcher = Searcher::new(self.stone, self.rules);
        let depth = self.depth;
        let guard = RunningSearch::start(&self.running);

        let spawned = thread::Builder::new()
            .name("gomoku-search".to_string())
            .stack_size(SEARCH_STACK_BYTES)
            .spawn(move || {
                let _guard = guard;
                let result = searcher.choose_move_among(&board, last_move, depth, roots);
                // The receiver is gone if we timed out
                let _ = tx.send(result);
            });
        if let Err(err) = spawned {
            warn!("could not start search thread: {err}");
            return None;
        }

        let start = Instant::now();
        match rx.recv_timeout(self.time_limit) {
            Ok(Ok(result)) => {
                debug!(
                    "search finished in {}ms ({} nodes)",
                    start.elapsed().as_millis(),
                    result.stats.nodes
                );
                Some(result)
            }
            Ok(Err(err)) => {
                warn!("search failed: {err}");
                None
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    "search exceeded {}ms at depth {}; {} search thread(s) left running",
                    self.time_limit.as_millis(),
                    self.depth,
                    self.running_searches()
                );
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("search thread died before reporting");
                None
            }
        }
    }
}

impl Player for AiPlayer {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn decide_move(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
    ) -> Result<Option<Move>, PlayerError> {
        let roots = root_tiles(board, self.stone, &self.rules);
        self.last_result = if roots.is_empty() {
            None
        } else {
            self.search_with_budget(board, last_move, roots)
        };

        let searched = self
            .last_result
            .and_then(|result| result.tile)
            .map(|pos| Move::new(pos, self.stone));
        match searched {
            Some(mv) if is_valid_move(board, mv, &self.rules) => {
                self.last_source = Some(MoveSource::Search);
                return Ok(Some(mv));
            }
            Some(mv) => debug!("search picked illegal tile {}", mv.pos),
            None => {}
        }

        self.last_source = Some(MoveSource::Fallback);
        let fallback = random_legal_tile(board, self.stone, &self.rules, &mut self.rng);
        match fallback {
            Some(pos) => warn!("{} plays random fallback {}", self.stone, pos),
            None => warn!("{} has no legal move", self.stone),
        }
        Ok(fallback.map(|pos| Move::new(pos, self.stone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleVariant;

    fn config(variant: RuleVariant) -> GameConfig {
        GameConfig::new(variant).with_seed(Some(7))
    }

    #[test]
    fn test_random_legal_tile_respects_rules() {
        let mut board = Board::new(19);
        board.place(Move::new(Pos::new(9, 9), Stone::Black));
        let pente = RuleSet::from_variant(RuleVariant::Pente);
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..50 {
            let pos = random_legal_tile(&board, Stone::White, &pente, &mut rng).unwrap();
            assert!(pos.chebyshev(Pos::new(9, 9)) >= 3);
        }
    }

    #[test]
    fn test_random_legal_tile_full_board() {
        let mut board = Board::new(5);
        for pos in Board::new(5).all_tiles() {
            board.place(Move::new(pos, Stone::Black));
        }
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            random_legal_tile(&board, Stone::White, &RuleSet::default(), &mut rng),
            None
        );
    }

    #[test]
    fn test_ai_takes_winning_tile() {
        let mut board = Board::new(19);
        for y in 3..7 {
            board.place(Move::new(Pos::new(2, y), Stone::White));
        }
        board.place(Move::new(Pos::new(2, 2), Stone::Black));
        let last = Move::new(Pos::new(10, 10), Stone::Black);
        board.place(last);

        let mut ai = AiPlayer::new(Stone::White, &config(RuleVariant::Standard).with_depth(2));
        let mv = ai.decide_move(&board, Some(last)).unwrap();

        assert_eq!(mv, Some(Move::new(Pos::new(2, 7), Stone::White)));
        assert_eq!(ai.last_source(), Some(MoveSource::Search));
        assert_eq!(ai.last_result().map(|r| r.score), Some(f64::INFINITY));
    }

    #[test]
    fn test_pente_second_move_is_searched_among_legal_tiles() {
        // The frontier around the center is all too close for move two
        let mut board = Board::new(19);
        let first = Move::new(Pos::new(9, 9), Stone::Black);
        board.place(first);

        let mut ai = AiPlayer::new(Stone::White, &config(RuleVariant::Pente).with_depth(1));
        let mv = ai.decide_move(&board, Some(first)).unwrap().unwrap();

        assert_eq!(ai.last_source(), Some(MoveSource::Search));
        assert!(mv.pos.chebyshev(Pos::new(9, 9)) >= 3);
    }

    #[test]
    fn test_ai_skips_double_three_tile() {
        // (9, 9) makes two open threes for Black; (12, 9) scores the same
        let mut board = Board::new(19);
        for (x, y) in [(10, 9), (11, 9), (9, 10), (9, 11)] {
            board.place(Move::new(Pos::new(x, y), Stone::Black));
        }
        board.place(Move::new(Pos::new(11, 8), Stone::White));
        let last = Move::new(Pos::new(8, 11), Stone::White);
        board.place(last);
        let ninuki = RuleSet::from_variant(RuleVariant::Ninuki);
        assert!(!is_valid_move(&board, Move::new(Pos::new(9, 9), Stone::Black), &ninuki));

        let mut ai = AiPlayer::new(Stone::Black, &config(RuleVariant::Ninuki).with_depth(1));
        let mv = ai.decide_move(&board, Some(last)).unwrap().unwrap();

        assert_eq!(ai.last_source(), Some(MoveSource::Search));
        assert_ne!(mv.pos, Pos::new(9, 9));
        assert!(is_valid_move(&board, mv, &ninuki));
    }

    #[test]
    fn test_timeout_falls_back() {
        let mut board = Board::new(25);
        for (x, y) in [(12, 12), (13, 12), (12, 13), (11, 11), (14, 14)] {
            board.place(Move::new(Pos::new(x, y), Stone::Black));
        }
        for (x, y) in [(11, 12), (13, 13), (12, 11), (14, 12), (10, 10)] {
            board.place(Move::new(Pos::new(x, y), Stone::White));
        }
        let last = Move::new(Pos::new(10, 10), Stone::White);

        let config = config(RuleVariant::Standard)
            .with_board_size(25)
            .with_depth(12)
            .with_time_limit(Duration::from_millis(1));
        let mut ai = AiPlayer::new(Stone::Black, &config);
        let mv = ai.decide_move(&board, Some(last)).unwrap().unwrap();

        assert_eq!(ai.last_source(), Some(MoveSource::Fallback));
        assert!(ai.last_result().is_none());
        assert!(board.is_empty(mv.pos));
        // The abandoned depth-12 worker is still busy
        assert_eq!(ai.running_searches(), 1);
    }

    #[test]
    fn test_finished_search_is_not_counted_as_running() {
        let config = config(RuleVariant::Standard).with_board_size(9).with_depth(1);
        let mut ai = AiPlayer::new(Stone::Black, &config);
        ai.decide_move(&Board::new(9), None).unwrap();

        // The worker sends before its guard drops; give it a moment to exit
        let deadline = Instant::now() + Duration::from_secs(5);
        while ai.running_searches() > 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(ai.running_searches(), 0);
    }

    #[test]
    fn test_seeded_fallback_is_reproducible() {
        let board = Board::new(9);
        let rules = RuleSet::default();
        let a = random_legal_tile(&board, Stone::Black, &rules, &mut SmallRng::seed_from_u64(42));
        let b = random_legal_tile(&board, Stone::Black, &rules, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
