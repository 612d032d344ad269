//! Per-state and per-facet counts over a selection.
//!
//! These back the stat cards and facet counters a list view shows above
//! its records ("Overdue bills: 3", "Commercial (12)").

use serde::Serialize;

use crate::classify::{Classifier, StateLabel, Tier};
use crate::facet::FacetFilter;
use crate::traits::Record;

/// Records per declared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub label: StateLabel,
    pub tier: Tier,
    pub count: usize,
}

/// Counts of records per state of one classifier.
///
/// States appear in declaration order, including those with no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub states: Vec<StateCount>,
    pub unclassified: usize,
    pub total: usize,
}

impl Tally {
    /// Classifies every record and counts the outcomes.
    pub fn collect<'r, R, I>(classifier: &Classifier, records: I) -> Self
    where
        R: Record + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let mut states: Vec<StateCount> = classifier
            .states()
            .map(|(label, tier)| StateCount {
                label: label.clone(),
                tier,
                count: 0,
            })
            .collect();
        let mut unclassified = 0;
        let mut total = 0;

        for record in records {
            total += 1;
            match classifier.try_classify(record) {
                Ok((label, _)) => {
                    if let Some(slot) = states.iter_mut().find(|s| s.label == label) {
                        slot.count += 1;
                    }
                }
                Err(_) => unclassified += 1,
            }
        }

        Tally {
            states,
            unclassified,
            total,
        }
    }

    /// Records in the given state (0 for undeclared labels).
    pub fn count_of(&self, label: &str) -> usize {
        self.states
            .iter()
            .find(|s| s.label == label)
            .map_or(0, |s| s.count)
    }

    /// Records in states at or above `tier`.
    pub fn at_least(&self, tier: Tier) -> usize {
        self.states
            .iter()
            .filter(|s| s.tier >= tier)
            .map(|s| s.count)
            .sum()
    }
}

/// Records per declared facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub field: String,
    pub values: Vec<(String, usize)>,
    /// Records whose facet value is missing or undeclared.
    pub undeclared: usize,
    pub total: usize,
}

impl FacetCounts {
    /// Buckets every record by its facet value.
    pub fn collect<'r, R, I>(facet: &FacetFilter, records: I) -> Self
    where
        R: Record + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let mut values: Vec<(String, usize)> =
            facet.values().iter().map(|v| (v.clone(), 0)).collect();
        let mut undeclared = 0;
        let mut total = 0;

        for record in records {
            total += 1;
            match facet.bucket_of(record) {
                Some(index) => values[index].1 += 1,
                None => undeclared += 1,
            }
        }

        FacetCounts {
            field: facet.field().to_string(),
            values,
            undeclared,
            total,
        }
    }

    /// Records with the given facet value, compared case-insensitively.
    pub fn count_of(&self, value: &str) -> usize {
        let wanted = value.trim().to_lowercase();
        self.values
            .iter()
            .find(|(v, _)| *v == wanted)
            .map_or(0, |(_, n)| *n)
    }
}
