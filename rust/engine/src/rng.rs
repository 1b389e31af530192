use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::seed::hash_seed;

const INCREMENT: u32 = 0x6d2b_79f5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Maps a raw 32-bit output to `[0, 1)`, as the shuffle consumes it.
pub fn to_unit_f64(raw: u32) -> f64 {
    f64::from(raw) / TWO_POW_32
}

/// Mulberry32 generator: 32-bit state, one xor-shift-multiply output per step.
///
/// Every operation wraps at 32 bits, so the stream is identical on any
/// platform for a given seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds the generator from a string via [`hash_seed`].
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value normalized to `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        to_unit_f64(self.next_raw())
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
