//! Bitboard implementation for fast occupancy tests
//!
//! Cells are addressed by a flat index (`y * size + x`); the owning
//! [`Board`](super::Board) does the conversion.

/// Bitboard over `len` cells, packed into 64-bit words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    len: usize,
}

impl Bitboard {
    /// Create empty bitboard able to hold `len` cells
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Number of addressable cells
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Set a bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear a bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if bit is set at index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new(361);
        bb.set(0);
        bb.set(63);
        bb.set(64);
        bb.set(360);
        assert!(bb.get(0) && bb.get(63) && bb.get(64) && bb.get(360));
        assert_eq!(bb.count(), 4);

        bb.clear(63);
        assert!(!bb.get(63));
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new(25);
        for idx in [24, 3, 7] {
            bb.set(idx);
        }
        assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![3, 7, 24]);
    }

    #[test]
    fn test_empty() {
        let bb = Bitboard::new(625);
        assert!(bb.is_empty());
        assert_eq!(bb.iter_ones().count(), 0);
        assert_eq!(bb.len(), 625);
    }
}
