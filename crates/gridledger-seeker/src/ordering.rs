//! Display ordering by emphasis.
//!
//! Views often float the most urgent records (overdue bills, offline
//! substations) to the top of a page. That reordering happens here, after
//! matching and paging, so it can never change which records are selected.

use std::cmp::Ordering;

use crate::classify::{Classification, Tier};
use crate::pager::ResultPage;
use crate::query::Annotated;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Least emphasis first.
    Asc,
    /// Most emphasis first.
    #[default]
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emphasis rank of a classification.
///
/// Unclassified records outrank every tier: they need someone to look at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Emphasis {
    /// A declared state's tier.
    Tier(Tier),
    /// No declared state.
    Unclassified,
}

impl From<&Classification> for Emphasis {
    fn from(classification: &Classification) -> Self {
        match classification.tier() {
            Some(tier) => Emphasis::Tier(tier),
            None => Emphasis::Unclassified,
        }
    }
}

/// Compares two classifications by emphasis.
pub fn compare_emphasis(a: &Classification, b: &Classification, dir: Dir) -> Ordering {
    dir.apply(Emphasis::from(a).cmp(&Emphasis::from(b)))
}

impl<R> ResultPage<Annotated<'_, R>> {
    /// Reorders this page by emphasis. Equal ranks keep their order.
    pub fn sort_by_emphasis(&mut self, dir: Dir) {
        self.items
            .sort_by(|a, b| compare_emphasis(&a.classification, &b.classification, dir));
    }
}
