use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::PAIR_KEY_STRIDE;

/// A symmetric reference to two bodies the broad phase flagged as possibly
/// colliding. Built fresh each tick; `resolved` records whether the resolver
/// found a true overlap, letting the host color-code its debug overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandidatePair {
    a: u64,
    b: u64,
    pub resolved: bool,
}

impl CandidatePair {
    /// Ids are stored in canonical (min, max) order so equality and hashing
    /// are order-insensitive.
    pub fn new(id_a: u64, id_b: u64) -> Self {
        Self {
            a: id_a.min(id_b),
            b: id_a.max(id_b),
            resolved: false,
        }
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    /// Canonical deduplication key: `max * PAIR_KEY_STRIDE + min`. Strategies
    /// that insert bodies into several partitions emit the same geometric
    /// pair more than once; resolving it twice would double-apply impulses.
    pub fn key(&self) -> u64 {
        self.b * PAIR_KEY_STRIDE + self.a
    }
}

impl PartialEq for CandidatePair {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CandidatePair {}

impl Hash for CandidatePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Collapses duplicate pairs by canonical key, keeping first-seen order.
pub fn dedupe_pairs(pairs: Vec<CandidatePair>) -> Vec<CandidatePair> {
    let mut seen = HashSet::with_capacity(pairs.len());
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.key()))
        .collect()
}
