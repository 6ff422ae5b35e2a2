//! Randomness consumed while resolving a wave.
//!
//! Every roll the engine makes goes through `RandomSource`, so a match is
//! reproducible from a seed (`SeededRandom`) or fully scripted in tests
//! (`ScriptedRandom`).

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform roll in `1..=100`.
    fn roll_percent(&mut self) -> u8;

    /// `k` distinct indices drawn from `0..n`, in draw order. Returns at
    /// most `n` indices.
    fn sample(&mut self, n: usize, k: usize) -> Vec<usize>;

    /// Uniformly permutes `items` in place.
    fn shuffle(&mut self, items: &mut [usize]);
}

/// `StdRng`-backed source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll_percent(&mut self) -> u8 {
        self.rng.random_range(1..=100)
    }

    fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, n, k.min(n)).into_vec()
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        items.shuffle(&mut self.rng);
    }
}

/// Replays queued values. An exhausted queue falls back to the lowest
/// percent roll, the first `k` indices, and the identity permutation, so an
/// empty script never spawns anything.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    percents: VecDeque<u8>,
    samples: VecDeque<Vec<usize>>,
    permutations: VecDeque<Vec<usize>>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percents(mut self, rolls: &[u8]) -> Self {
        self.percents.extend(rolls.iter().copied());
        self
    }

    pub fn with_sample(mut self, picks: &[usize]) -> Self {
        self.samples.push_back(picks.to_vec());
        self
    }

    pub fn with_permutation(mut self, order: &[usize]) -> Self {
        self.permutations.push_back(order.to_vec());
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.percents.is_empty() && self.samples.is_empty() && self.permutations.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_percent(&mut self) -> u8 {
        self.percents.pop_front().unwrap_or(1)
    }

    fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
        let k = k.min(n);
        match self.samples.pop_front() {
            Some(picks) => picks.into_iter().filter(|&i| i < n).take(k).collect(),
            None => (0..k).collect(),
        }
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        let Some(order) = self.permutations.pop_front() else {
            return;
        };
        if order.len() != items.len() {
            return;
        }
        let original = items.to_vec();
        for (slot, &from) in items.iter_mut().zip(order.iter()) {
            if let Some(&value) = original.get(from) {
                *slot = value;
            }
        }
    }
}
