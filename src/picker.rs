//! Selection utilities
//!
//! Two catalog traversal policies: sequential round-robin (quiz) and
//! uniform random with replacement (drills, prompts, interview).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sequential cursor over a fixed-length catalog, wrapping at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobin {
    position: usize,
}

impl RoundRobin {
    /// Current index into a catalog of `len` items.
    pub fn current(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.position % len
    }

    /// Advance to the next item, wrapping past the end.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
    }
}

/// Pick one item uniformly at random, with replacement across calls.
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Pick a uniform random index into a catalog of `len` items.
pub fn pick_random_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rand::thread_rng().gen_range(0..len))
}
