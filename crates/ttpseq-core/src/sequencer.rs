use crate::document::FlowDocument;
use crate::matrix::{FrequencyTable, TransitionMatrix};
use serde::Serialize;
use std::collections::BTreeSet;

/// Tactics excluded from the filtered transition graph by default.
pub const DEFAULT_FILTERS: [&str; 6] = [
    "TA0043", "TA0042", "TA0002", "TA0005", "TA0011", "TA0010",
];

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// The three corpus-wide accumulators produced by one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub full: TransitionMatrix,
    pub filtered: TransitionMatrix,
    pub frequency: FrequencyTable,
}

// ---------------------------------------------------------------------------
// TacticSequencer
// ---------------------------------------------------------------------------

/// Aggregates tactic transitions across a corpus of flow documents.
///
/// A transition is counted between consecutive *distinct* tactics within one
/// document; identical consecutive tactics collapse into a single state and
/// self-transitions are never recorded. The filtered matrix additionally
/// drops any transition touching a filter-set tactic, while the frequency
/// table counts every qualifying occurrence, filtered or not.
#[derive(Debug, Clone)]
pub struct TacticSequencer {
    filters: BTreeSet<String>,
}

impl Default for TacticSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_FILTERS)
    }
}

impl TacticSequencer {
    pub fn new<I, S>(filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filters: filters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_filtered(&self, id: &str) -> bool {
        self.filters.contains(id)
    }

    /// Build the full matrix, filtered matrix, and frequency table over
    /// `documents`, processing each document to completion in order.
    pub fn aggregate<'a, I>(&self, documents: I) -> Aggregates
    where
        I: IntoIterator<Item = &'a FlowDocument>,
    {
        let mut agg = Aggregates::default();
        for (index, doc) in documents.into_iter().enumerate() {
            self.ingest(doc, &mut agg);
            tracing::debug!(document = index, "ingested flow document");
        }
        agg
    }

    fn ingest(&self, doc: &FlowDocument, agg: &mut Aggregates) {
        let mut prev: Option<&str> = None;
        let mut prev_filtered: Option<&str> = None;

        for curr in doc.tactic_sequence() {
            agg.frequency.record(curr);

            if let Some(p) = prev {
                if p != curr {
                    agg.full.record(p, curr);
                }
            }
            prev = Some(curr);

            // A filtered tactic leaves the filtered tracker untouched, so a
            // later unfiltered tactic still pairs with the last unfiltered
            // one seen before the gap.
            if !self.is_filtered(curr) {
                if let Some(p) = prev_filtered {
                    if p != curr {
                        agg.filtered.record(p, curr);
                    }
                }
                prev_filtered = Some(curr);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
