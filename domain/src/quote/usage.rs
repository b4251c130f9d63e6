//! Per-category usage tracking
//!
//! Each category key owns the set of candidate positions already handed out
//! in the current round. Positions index the *filtered* candidate list for
//! that key, so a key's state is only meaningful while the corpus and the
//! filter for that key stay the same.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IteratorRandom;

use super::category::CategoryKey;

/// Result of drawing a candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// Position within the candidate list
    pub index: usize,
    /// Whether the position was recorded as used
    pub tracked: bool,
    /// Whether this draw started a new round
    pub round_reset: bool,
}

/// Used-position sets keyed by category
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    used: HashMap<CategoryKey, HashSet<usize>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a position in `0..candidate_count` not yet used for `key` in
    /// this round.
    ///
    /// Starts a new round when every candidate has been used. Returns `None`
    /// only when there are no candidates at all.
    pub fn draw<R: Rng>(
        &mut self,
        key: &CategoryKey,
        candidate_count: usize,
        rng: &mut R,
    ) -> Option<Pick> {
        if candidate_count == 0 {
            return None;
        }

        let used = self.used.entry(key.clone()).or_default();

        let round_reset = used.len() >= candidate_count;
        if round_reset {
            used.clear();
        }

        let available = (0..candidate_count).filter(|i| !used.contains(i));
        match available.choose(rng) {
            Some(index) => {
                used.insert(index);
                Some(Pick {
                    index,
                    tracked: true,
                    round_reset,
                })
            }
            None => {
                // The size check leaves at least one position free; recover anyway.
                used.clear();
                Some(Pick {
                    index: rng.random_range(0..candidate_count),
                    tracked: false,
                    round_reset: true,
                })
            }
        }
    }

    /// Number of positions used in the current round for `key`
    pub fn used_count(&self, key: &CategoryKey) -> usize {
        self.used.get(key).map_or(0, HashSet::len)
    }

    /// Whether `position` has been handed out this round for `key`
    pub fn is_used(&self, key: &CategoryKey, position: usize) -> bool {
        self.used.get(key).is_some_and(|set| set.contains(&position))
    }

    /// Forget the round state of a single key
    pub fn reset(&mut self, key: &CategoryKey) {
        if let Some(set) = self.used.get_mut(key) {
            set.clear();
        }
    }

    /// Forget all round state
    pub fn reset_all(&mut self) {
        self.used.clear();
    }

    /// Keys that have been drawn from at least once
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.used.keys()
    }
}
