use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// TransitionMatrix
// ---------------------------------------------------------------------------

/// Source → destination → count accumulator.
///
/// Reads of absent pairs return 0 without creating entries; only `record`
/// inserts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransitionMatrix {
    counts: BTreeMap<String, BTreeMap<String, u64>>,
}

impl TransitionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one `from → to` transition.
    pub fn record(&mut self, from: &str, to: &str) {
        *self
            .counts
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default() += 1;
    }

    /// Observed count for `from → to`, 0 when the pair was never recorded.
    pub fn count(&self, from: &str, to: &str) -> u64 {
        self.counts
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Source identifiers in sorted order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Sorted union of destination identifiers across all sources.
    pub fn destinations(&self) -> BTreeSet<&str> {
        self.counts
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// All identifiers appearing as source or destination.
    pub fn identifiers(&self) -> BTreeSet<&str> {
        let mut ids = self.destinations();
        ids.extend(self.sources());
        ids
    }

    /// Sum of all transition counts.
    pub fn total(&self) -> u64 {
        self.counts.values().flat_map(|row| row.values()).sum()
    }
}

// ---------------------------------------------------------------------------
// FrequencyTable
// ---------------------------------------------------------------------------

/// Per-identifier occurrence counts with the same zero-default read rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `id`.
    pub fn record(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_default() += 1;
    }

    pub fn count(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(identifier, count)` pairs in sorted identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(id, n)| (id.as_str(), *n))
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
