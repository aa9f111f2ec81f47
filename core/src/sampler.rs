//! Selection strategies for picking the current user and the "connected
//! users" shown beside it.
//!
//! Production code samples randomly; tests inject [`FirstSampler`] for
//! deterministic picks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub trait Sampler {
    /// Picks one item, or `None` if `items` is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;

    /// Picks up to `count` distinct items in no particular order.
    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T>;
}

#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items.choose_multiple(&mut self.rng, count).cloned().collect()
    }
}

/// Always takes items from the front, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSampler;

impl Sampler for FirstSampler {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.first()
    }

    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items.iter().take(count).cloned().collect()
    }
}
