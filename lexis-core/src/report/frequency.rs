//! Stable frequency aggregation.
//!
//! Counts occurrences while remembering first-seen order, so top-K
//! selection can break count ties deterministically. The same counter
//! backs both the word table (over filtered tokens) and the character
//! table (over the lowercased raw text).

use std::hash::Hash;

use lexis_types::TermCount;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Insertion-ordered occurrence counter.
///
/// Keys are hashed for O(1) updates, but each distinct key also gets a
/// slot in first-seen order. [`top_k`](StableCounter::top_k) orders by
/// descending count and breaks ties by ascending slot, so equal counts
/// come out in the order the terms first appeared in the text.
///
/// # Example
///
/// ```
/// use lexis_core::report::frequency::StableCounter;
///
/// let mut counter = StableCounter::new();
/// for word in ["cat", "sat", "mat", "cat", "ran"] {
///     counter.add(word.to_string());
/// }
///
/// let top = counter.top_k(3);
/// assert_eq!(top[0].term, "cat");
/// assert_eq!(top[0].count, 2);
/// assert_eq!(top[1].term, "sat"); // tie with mat/ran: first seen wins
/// ```
#[derive(Debug, Clone, Default)]
pub struct StableCounter<K> {
    slots: FxHashMap<K, u32>,
    entries: Vec<Entry<K>>,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    count: u32,
}

impl<K: Eq + Hash + Clone> StableCounter<K> {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Creates an empty counter sized for `n` distinct keys.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            entries: Vec::with_capacity(n),
        }
    }

    /// Records one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.slots.get(&key) {
            self.entries[slot as usize].count += 1;
        } else {
            let slot = self.entries.len() as u32;
            self.slots.insert(key.clone(), slot);
            self.entries.push(Entry { key, count: 1 });
        }
    }

    /// Number of distinct keys seen.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been counted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the `k` most frequent terms, descending by count, ties
    /// broken by first-seen order. Returns fewer than `k` entries when
    /// fewer distinct keys exist.
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<TermCount>
    where
        K: ToString,
    {
        let mut order: SmallVec<[u32; 64]> = (0..self.entries.len() as u32).collect();

        // Slot index doubles as the tiebreaker; ascending slot is
        // first-seen order.
        order.sort_unstable_by(|&a, &b| {
            let ea = &self.entries[a as usize];
            let eb = &self.entries[b as usize];
            eb.count.cmp(&ea.count).then(a.cmp(&b))
        });

        order
            .iter()
            .take(k)
            .map(|&slot| {
                let entry = &self.entries[slot as usize];
                TermCount::new(entry.key.to_string(), entry.count)
            })
            .collect()
    }
}
