// src/freq.rs
//! Global token → count aggregate.
//!
//! Counts only ever grow. Iteration and tie-breaking follow first insertion, so the
//! "most common" listing is stable across runs over the same pages.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::tokenize::TokenCounts;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

/// Pure fold: add one description's counts into the table.
pub fn fold(mut table: FrequencyTable, counts: &TokenCounts) -> FrequencyTable {
    table.absorb(counts);
    table
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Element-wise addition of `counts`.
    pub fn absorb(&mut self, counts: &TokenCounts) {
        for (token, n) in counts {
            *self.counts.entry(token.clone()).or_insert(0) += *n;
        }
    }

    /// All `(token, count)` pairs, most common first, ties in insertion order,
    /// minus `excluding` (any case), cut to `limit` entries. `limit == 0` keeps everything.
    pub fn top_frequencies(&self, limit: usize, excluding: &HashSet<String>) -> Vec<(String, u64)> {
        let excluding: HashSet<String> = excluding.iter().map(|w| w.trim().to_lowercase()).collect();
        let mut out: Vec<(String, u64)> = self
            .counts
            .iter()
            .filter(|(token, _)| !excluding.contains(token.as_str()))
            .map(|(token, n)| (token.clone(), *n))
            .collect();

        // stable: equal counts keep insertion order
        out.sort_by(|a, b| b.1.cmp(&a.1));

        if limit > 0 {
            out.truncate(limit);
        }
        out
    }

    /// Case-insensitive lookup; 0 when absent.
    pub fn frequency_of(&self, word: &str) -> u64 {
        self.counts.get(&word.trim().to_lowercase()).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> u64 { self.counts.values().sum() }

    /// Insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
