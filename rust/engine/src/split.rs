use serde::{Deserialize, Serialize};

use crate::rng::Mulberry32;
use crate::roster::Player;

/// Two-way partition of a roster.
///
/// `shirts` holds `ceil(n / 2)` players, `vests` the remaining `floor(n / 2)`.
/// The vests side goes over the wire as `coletes`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSplit<T = Player> {
    pub shirts: Vec<T>,
    #[serde(rename = "coletes", alias = "vests")]
    pub vests: Vec<T>,
}

impl<T> TeamSplit<T> {
    pub fn len(&self) -> usize {
        self.shirts.len() + self.vests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty() && self.vests.is_empty()
    }
}

impl<T> Default for TeamSplit<T> {
    fn default() -> Self {
        Self {
            shirts: Vec::new(),
            vests: Vec::new(),
        }
    }
}

/// Seeded shuffle-and-partition of a roster.
///
/// A splitter owns one generator stream, so [`TeamSplitter::split`] consumes
/// it. Build a fresh splitter per request.
#[derive(Debug, Clone)]
pub struct TeamSplitter {
    rng: Mulberry32,
}

impl TeamSplitter {
    pub fn new(seed: &str) -> Self {
        Self::with_rng(Mulberry32::from_seed_str(seed))
    }

    pub fn with_rng(rng: Mulberry32) -> Self {
        Self { rng }
    }

    /// Fisher-Yates, walking `i` from the back and drawing `j` in `0..=i`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.rng.next_f64() * (i + 1) as f64).floor() as usize;
            items.swap(i, j);
        }
    }

    pub fn split<T: Clone>(mut self, roster: &[T]) -> TeamSplit<T> {
        let mut shirts = roster.to_vec();
        self.shuffle(&mut shirts);
        let vests = shirts.split_off(shirts.len().div_ceil(2));
        TeamSplit { shirts, vests }
    }
}

/// Splits `roster` into two teams seeded by `seed`.
///
/// Total over its inputs: an empty roster gives two empty teams and a single
/// player lands in `shirts`.
pub fn split_teams<T: Clone>(roster: &[T], seed: &str) -> TeamSplit<T> {
    TeamSplitter::new(seed).split(roster)
}
