//! Injectable random sources
//!
//! The simulation only ever needs "an integer in `[low, high]`", so that is
//! the whole interface. Tests swap in scripted sequences.

use rand::Rng;
use rand_pcg::Pcg32;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Integer in `[low, high]`, both ends inclusive
    ///
    /// Returns `low` when the range is empty or a single value.
    fn range(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// 64-bit linear congruential generator
///
/// Knuth's MMIX constants, taking the high 32 bits of state. Starting from
/// seed 0 this reproduces the classic spawn pattern of the game.
#[derive(Debug, Clone, Default)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const A: u64 = 6364136223846793005;
    const C: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance and return the high 32 bits
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::A).wrapping_add(Self::C);
        (self.state >> 32) as u32
    }
}

impl RandomSource for Lcg {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        let raw = self.next_u32();
        if high <= low {
            return low;
        }
        let span = (high as i64 - low as i64 + 1) as u64;
        (low as i64 + (raw as u64 % span) as i64) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        (**self).range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        (**self).range(low, high)
    }
}
