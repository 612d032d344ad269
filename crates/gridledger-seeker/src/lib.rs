//! Seeker - search, facet filtering, classification and paging for record lists.
//!
//! Every list in the console (customers, bills, grid assets) needs the same
//! handful of operations over an in-memory collection:
//!
//! - Free-text search across a configured set of fields
//! - A single categorical facet ("Residential", "Maintenance", ...)
//! - A status classification with a display tier
//! - Fixed-size pages with a total count
//!
//! Instead of each view hand-rolling its own predicate, one generic
//! [`Engine`] is driven by a declarative [`KindConfig`] per record kind.
//!
//! # Pipeline
//!
//! ```text
//! records ─► FieldMatcher ∧ FacetFilter ─► Selection ─► PageRequest ─► Classifier ─► ResultPage
//! ```
//!
//! - Filtering is stable: survivors keep their source order.
//! - Selections are lazy and restartable; re-running a query yields the same sequence.
//! - Classification depends only on the record (and a reference time fixed
//!   on the engine). Undeclared raw values produce
//!   [`Classification::Unclassified`], never a default label.
//! - Tiers order records for display only ([`ResultPage::sort_by_emphasis`]).
//!
//! # Errors
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | Facet value not declared | Empty selection |
//! | Raw status not declared | Record listed as `Unclassified` |
//! | Page size < 1, negative index | [`ValidationError`] |
//! | Unusable kind table | [`ConfigurationError`] |

mod classify;
mod config;
mod error;
mod facet;
mod matcher;
mod ordering;
mod pager;
mod query;
mod source;
mod summary;
mod traits;
mod value;

pub use classify::{Classification, Classifier, StateLabel, Tier};
pub use config::{Catalog, ClassifierConfig, EscalationConfig, FacetConfig, KindConfig, StateConfig};
pub use error::{
    ClassificationError, ConfigurationError, QueryError, Result, SourceError, ValidationError,
};
pub use facet::{FacetFilter, FacetSelector};
pub use matcher::{FieldMatcher, SearchQuery};
pub use ordering::{compare_emphasis, Dir, Emphasis};
pub use pager::{paginate, PageRequest, ResultPage};
pub use query::{Annotated, Engine, Selection, PRIMARY_CLASSIFIER};
pub use source::{RecordSource, Snapshot, SnapshotStore};
pub use summary::{FacetCounts, StateCount, Tally};
pub use traits::Record;
pub use value::{Number, Timestamp, Value};
