//! Per-record random stream.
//!
//! A [`RecordRng`] turns one derived sub-seed into a reproducible sequence of
//! draws. The stream has no notion of named draws: callers must invoke the
//! operations in a fixed order to get the same record back. Every operation
//! below consumes exactly one 64-bit word from the underlying ChaCha8 core,
//! and the mapping from that word to a value is defined here rather than by
//! `rand`'s distributions so it stays fixed across dependency upgrades.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::seed::splitmix64;

/// Seeded pseudorandom stream feeding one aspect of one record.
#[derive(Debug, Clone)]
pub struct RecordRng {
    inner: ChaCha8Rng,
    draws: u64,
}

impl RecordRng {
    /// Builds a stream from a derived 64-bit seed.
    ///
    /// The 256-bit ChaCha key is four consecutive SplitMix64 outputs of the
    /// seed, little-endian.
    pub fn from_seed(seed: u64) -> Self {
        let mut state = seed;
        let mut key = [0u8; 32];
        for chunk in key.chunks_exact_mut(8) {
            chunk.copy_from_slice(&splitmix64(&mut state).to_le_bytes());
        }
        Self {
            inner: ChaCha8Rng::from_seed(key),
            draws: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn next_word(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    /// Uniform real in `[0, 1)` with 53 bits of precision.
    pub fn uniform01(&mut self) -> f64 {
        (self.next_word() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform integer in the inclusive range `[lo, hi]`.
    ///
    /// Bounds given in the wrong order are swapped. Modulo reduction bias is
    /// below 2^-32 for the spans used here.
    pub fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = u64::from(hi - lo) + 1;
        lo + (self.next_word() % span) as u32
    }

    /// Uniformly picks one element.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. All callers pass static, non-empty tables.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = (self.next_word() % items.len() as u64) as usize;
        &items[index]
    }

    /// Picks one element with probability proportional to its weight.
    ///
    /// Zero-weight entries are never chosen unless every weight is zero, in
    /// which case the choice is uniform.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn weighted_pick<'a, T>(&mut self, options: &'a [(T, u32)]) -> &'a T {
        let total: u64 = options.iter().map(|(_, weight)| u64::from(*weight)).sum();
        let word = self.next_word();
        if total == 0 {
            return &options[(word % options.len() as u64) as usize].0;
        }

        let mut target = word % total;
        for (item, weight) in options {
            let weight = u64::from(*weight);
            if target < weight {
                return item;
            }
            target -= weight;
        }
        // Unreachable: target < total by construction.
        &options[options.len() - 1].0
    }
}
