//! Short-term and long-term memory for Tabu Search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::identity::SolutionId;

/// What the tabu list forbids: the move that produced a neighbor when the
/// problem reports one, otherwise the neighbor's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabuKey<M> {
    /// An elementary move reported by the problem.
    Move(M),
    /// A solution, by identity.
    Solution(SolutionId),
}

/// Tabu list with per-entry tenure countdown.
///
/// Counters are strictly positive while present. Each [`tick`](Self::tick)
/// decrements every counter and drops the ones that reach zero, so an entry
/// inserted with tenure `T` has `T - k` left after `k` ticks and is gone
/// after `T`.
#[derive(Debug, Clone)]
pub struct TabuList<K> {
    entries: HashMap<K, usize>,
}

impl<K> Default for TabuList<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> TabuList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids `key` for `tenure` ticks, replacing any live counter.
    /// A zero tenure removes the key.
    pub fn insert(&mut self, key: K, tenure: usize) {
        if tenure == 0 {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, tenure);
        }
    }

    /// Remaining tenure of `key`, if it is tabu.
    pub fn remaining(&self, key: &K) -> Option<usize> {
        self.entries.get(key).copied()
    }

    /// Whether `key` is tabu.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Advances one iteration.
    pub fn tick(&mut self) {
        self.entries.retain(|_, tenure| {
            *tenure -= 1;
            *tenure > 0
        });
    }

    /// Number of tabu entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is tabu.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Long-term visit counts used to diversify away from frequent moves.
#[derive(Debug, Clone)]
pub struct FrequencyMemory<K> {
    visits: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyMemory<K> {
    fn default() -> Self {
        Self {
            visits: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> FrequencyMemory<K> {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one accepted visit of `key`.
    pub fn record(&mut self, key: K) {
        *self.visits.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Visits of `key`.
    pub fn visits(&self, key: &K) -> usize {
        self.visits.get(key).copied().unwrap_or(0)
    }

    /// Total recorded visits.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of all visits that went to `key`; `None` if never visited.
    pub fn frequency(&self, key: &K) -> Option<f64> {
        match self.visits.get(key) {
            Some(&v) if self.total > 0 => Some(v as f64 / self.total as f64),
            _ => None,
        }
    }
}
