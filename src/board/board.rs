//! Board structure with capture tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Move, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{BoardError, ConfigError};

/// Game board with capture tracking.
///
/// Cloning is cheap (two small bitboards and two counters); the search
/// engine clones before every hypothetical move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
    /// Opponent stones captured by each side
    black_captured: u16,
    white_captured: u16,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// `size` is clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`; use
    /// [`Board::try_new`] to reject out-of-range sizes instead.
    pub fn new(size: u8) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let cells = usize::from(size) * usize::from(size);
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
            black_captured: 0,
            white_captured: 0,
        }
    }

    /// Create an empty board, failing if `size` is out of range.
    pub fn try_new(size: u8) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::new(size))
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of tiles (size²)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.black.len()
    }

    /// Center tile (`size / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.size && pos.y < self.size);
        usize::from(pos.y) * usize::from(self.size) + usize::from(pos.x)
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        let size = usize::from(self.size);
        Pos::new((idx % size) as u8, (idx / size) as u8)
    }

    /// True if (x, y) lies on the board
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let size = i32::from(self.size);
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Tile `k` steps from `pos` along (dx, dy), if on the board
    #[inline]
    pub fn step(&self, pos: Pos, dx: i32, dy: i32, k: i32) -> Option<Pos> {
        let x = i32::from(pos.x) + dx * k;
        let y = i32::from(pos.y) + dy * k;
        self.contains(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Some(Stone::Black)
        } else if self.white.get(idx) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone, overwriting whatever was there. No legality check;
    /// use [`validate_move`](crate::rules::validate_move) first.
    #[inline]
    pub fn place(&mut self, mv: Move) {
        let idx = self.index(mv.pos);
        self.black.clear(idx);
        self.white.clear(idx);
        self.stones_mut(mv.stone).set(idx);
    }

    /// Remove the listed stones.
    ///
    /// Every listed tile must currently hold the listed colour; otherwise
    /// nothing is removed and the first offending tile is reported.
    pub fn remove(&mut self, moves: &[Move]) -> Result<(), BoardError> {
        for mv in moves {
            match self.get(mv.pos) {
                None => return Err(BoardError::NotOccupied { pos: mv.pos }),
                Some(found) if found != mv.stone => {
                    return Err(BoardError::ColourMismatch {
                        pos: mv.pos,
                        expected: mv.stone,
                        found,
                    })
                }
                Some(_) => {}
            }
        }
        for mv in moves {
            let idx = self.index(mv.pos);
            self.stones_mut(mv.stone).clear(idx);
        }
        Ok(())
    }

    /// Independent copy with the same occupancy and capture counts
    #[inline]
    pub fn copy(&self) -> Board {
        self.clone()
    }

    #[inline]
    fn stones_bb(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> &mut Bitboard {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// Positions holding `stone`, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.stones_bb(stone).iter_ones().map(|idx| self.pos_of(idx))
    }

    /// Every occupied tile as a move, black stones first
    pub fn occupied(&self) -> impl Iterator<Item = Move> + '_ {
        self.stones(Stone::Black)
            .map(|pos| Move::new(pos, Stone::Black))
            .chain(self.stones(Stone::White).map(|pos| Move::new(pos, Stone::White)))
    }

    /// Full enumeration of all size² tiles, row-major
    pub fn all_tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cell_count()).map(|idx| self.pos_of(idx))
    }

    /// Every empty tile, row-major
    pub fn empty_tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        self.all_tiles().filter(|&pos| self.is_empty(pos))
    }

    /// Opponent stones captured by `stone` so far
    #[inline]
    pub fn captured(&self, stone: Stone) -> u16 {
        match stone {
            Stone::Black => self.black_captured,
            Stone::White => self.white_captured,
        }
    }

    /// Credit `count` captured stones to `stone`
    #[inline]
    pub fn add_captured(&mut self, stone: Stone, count: u16) {
        match stone {
            Stone::Black => self.black_captured = self.black_captured.saturating_add(count),
            Stone::White => self.white_captured = self.white_captured.saturating_add(count),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True iff every tile is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:>3}", y)?;
            for x in 0..self.size {
                let symbol = self.get(Pos::new(x, y)).map_or('.', Stone::symbol);
                write!(f, "{:>3}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "captured: {} {}, {} {}",
            Stone::Black,
            self.black_captured,
            Stone::White,
            self.white_captured
        )
    }
}
