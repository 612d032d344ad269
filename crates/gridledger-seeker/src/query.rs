//! Query engine and lazy selections.
//!
//! An [`Engine`] is built once per record kind from its [`KindConfig`] and
//! answers [`query`](Engine::query) calls with a [`Selection`]: the records
//! that pass both the free-text search and the facet filter, in source
//! order.
//!
//! ```text
//! keep(record) = FieldMatcher(record, query) ∧ FacetFilter(record, facet)
//! ```
//!
//! # Example
//!
//! ```
//! use gridledger_seeker::{Engine, FacetSelector, KindConfig, Record, SearchQuery, Value};
//!
//! struct Feeder {
//!     id: String,
//!     status: String,
//! }
//!
//! impl Record for Feeder {
//!     const KIND: &'static str = "feeder";
//!     const FIELDS: &'static [&'static str] = &["id", "status"];
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn label(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "id" => Value::Text(&self.id),
//!             "status" => Value::Text(&self.status),
//!             _ => Value::Missing,
//!         }
//!     }
//! }
//!
//! let config = KindConfig::from_yaml(r#"
//! kind: feeder
//! searchable: [id]
//! facet: { field: status, values: [online, offline] }
//! classifier:
//!   field: status
//!   states:
//!     - { label: Online, tier: 0 }
//!     - { label: Offline, tier: 2 }
//! "#).unwrap();
//!
//! let feeders = vec![
//!     Feeder { id: "F-10".into(), status: "Online".into() },
//!     Feeder { id: "F-11".into(), status: "Offline".into() },
//! ];
//!
//! let engine = Engine::<Feeder>::new(&config).unwrap();
//! let selector = FacetSelector::parse("offline");
//! let offline = engine.query(&feeders, &SearchQuery::new("f-1"), &selector);
//! assert_eq!(offline.count(), 1);
//!
//! let page = offline.page(0, 20).unwrap();
//! assert_eq!(page.items[0].classification.label().unwrap(), "Offline");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::classify::{Classification, Classifier};
use crate::config::{Catalog, KindConfig};
use crate::error::{ConfigurationError, Result};
use crate::facet::{FacetFilter, FacetSelector};
use crate::matcher::{FieldMatcher, SearchQuery};
use crate::pager::{PageRequest, ResultPage};
use crate::summary::{FacetCounts, Tally};
use crate::traits::Record;
use crate::value::Timestamp;

const TARGET: &str = "gridledger.seeker";

/// Name under which the primary classifier is reported.
pub const PRIMARY_CLASSIFIER: &str = "status";

/// Search, facet and classification pipeline for one record kind.
///
/// Holds no per-query state; one engine can serve any number of callers.
pub struct Engine<R> {
    kind: String,
    matcher: FieldMatcher,
    facet: FacetFilter,
    classifier: Classifier,
    auxiliary: BTreeMap<String, Classifier>,
    _record: PhantomData<fn(&R)>,
}

impl<R> fmt::Debug for Engine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("kind", &self.kind)
            .field("matcher", &self.matcher)
            .field("facet", &self.facet)
            .field("classifier", &self.classifier)
            .field("auxiliary", &self.auxiliary)
            .finish()
    }
}

impl<R> Clone for Engine<R> {
    fn clone(&self) -> Self {
        Engine {
            kind: self.kind.clone(),
            matcher: self.matcher.clone(),
            facet: self.facet.clone(),
            classifier: self.classifier.clone(),
            auxiliary: self.auxiliary.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Engine<R> {
    /// Builds an engine, checking the table against `R`.
    pub fn new(config: &KindConfig) -> std::result::Result<Self, ConfigurationError> {
        config.check::<R>()?;
        let classifier = Classifier::new(&config.kind, PRIMARY_CLASSIFIER, &config.classifier)?;
        let auxiliary = config
            .auxiliary
            .iter()
            .map(|(name, table)| {
                Classifier::new(&config.kind, name, table).map(|c| (name.clone(), c))
            })
            .collect::<std::result::Result<BTreeMap<_, _>, ConfigurationError>>()?;

        Ok(Engine {
            kind: config.kind.clone(),
            matcher: FieldMatcher::new(config.searchable.iter().cloned()),
            facet: FacetFilter::new(&config.facet),
            classifier,
            auxiliary,
            _record: PhantomData,
        })
    }

    /// Builds an engine from the catalog entry for `R`.
    pub fn from_catalog(catalog: &Catalog) -> std::result::Result<Self, ConfigurationError> {
        Self::new(catalog.for_record::<R>()?)
    }

    /// Fixes the reference time for every classifier's escalation rule.
    pub fn as_of(mut self, reference: Timestamp) -> Self {
        self.classifier = self.classifier.as_of(reference);
        self.auxiliary = self
            .auxiliary
            .into_iter()
            .map(|(name, c)| (name, c.as_of(reference)))
            .collect();
        self
    }

    /// The kind this engine serves.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The field matcher.
    pub fn matcher(&self) -> &FieldMatcher {
        &self.matcher
    }

    /// The facet filter.
    pub fn facet(&self) -> &FacetFilter {
        &self.facet
    }

    /// The primary classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// An auxiliary classifier by name.
    pub fn auxiliary(&self, name: &str) -> std::result::Result<&Classifier, ConfigurationError> {
        self.auxiliary
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownClassifier {
                kind: self.kind.clone(),
                name: name.to_string(),
            })
    }

    /// Returns `true` if the record passes search and facet.
    pub fn matches(&self, record: &R, query: &SearchQuery, facet: &FacetSelector) -> bool {
        self.matcher.matches(record, query) && self.facet.matches(record, facet)
    }

    /// Classifies a record with the primary classifier.
    pub fn classify(&self, record: &R) -> Classification {
        self.classifier.classify(record)
    }

    /// Selects the records passing both stages, in source order.
    ///
    /// Matching is deferred until the selection is consumed. The debug event
    /// logged here carries the collection size, and the match count is logged
    /// when a page is materialized.
    pub fn query<'a>(
        &'a self,
        records: &'a [R],
        query: &SearchQuery,
        facet: &FacetSelector,
    ) -> Selection<'a, R> {
        if !self.facet.recognizes(facet) {
            tracing::debug!(
                target: TARGET,
                kind = %self.kind,
                %facet,
                "facet value not declared; selection will be empty"
            );
        }
        let selection = Selection {
            engine: self,
            records,
            query: query.clone(),
            facet: facet.clone(),
        };
        tracing::debug!(
            target: TARGET,
            kind = %self.kind,
            %query,
            %facet,
            records = records.len(),
            "query prepared"
        );
        selection
    }
}

/// A record paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotated<'a, R> {
    /// The source record.
    pub record: &'a R,
    /// Its primary classification.
    pub classification: Classification,
}

/// The records matching one query.
///
/// Lazy and restartable: nothing is evaluated until iterated, and each call
/// to [`iter`](Selection::iter) starts over from the first record.
pub struct Selection<'a, R> {
    engine: &'a Engine<R>,
    records: &'a [R],
    query: SearchQuery,
    facet: FacetSelector,
}

impl<R> Clone for Selection<'_, R> {
    fn clone(&self) -> Self {
        Selection {
            engine: self.engine,
            records: self.records,
            query: self.query.clone(),
            facet: self.facet.clone(),
        }
    }
}

impl<R> fmt::Debug for Selection<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("kind", &self.engine.kind)
            .field("query", &self.query)
            .field("facet", &self.facet)
            .field("records", &self.records.len())
            .finish()
    }
}

impl<'a, R: Record> Selection<'a, R> {
    /// Iterates matching records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + Clone + '_ {
        self.records
            .iter()
            .filter(move |record| self.engine.matches(record, &self.query, &self.facet))
    }

    /// The search text.
    pub fn search(&self) -> &SearchQuery {
        &self.query
    }

    /// The facet selector.
    pub fn facet(&self) -> &FacetSelector {
        &self.facet
    }

    /// Number of matching records.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if nothing matches.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collects the matching records.
    pub fn to_vec(&self) -> Vec<&'a R> {
        self.iter().collect()
    }

    /// Iterates matching records with their classification.
    pub fn annotate(&self) -> impl Iterator<Item = Annotated<'a, R>> + '_ {
        self.iter().map(move |record| Annotated {
            record,
            classification: self.engine.classify(record),
        })
    }

    /// Produces one classified page.
    ///
    /// Only records on the page are classified.
    pub fn page(&self, page_index: i64, page_size: i64) -> Result<ResultPage<Annotated<'a, R>>> {
        let request = PageRequest::new(page_index, page_size)?;
        Ok(self.page_at(request))
    }

    /// Produces one classified page from a validated request.
    pub fn page_at(&self, request: PageRequest) -> ResultPage<Annotated<'a, R>> {
        let page = request.slice(self.iter()).map(|record| Annotated {
            record,
            classification: self.engine.classify(record),
        });
        tracing::debug!(
            target: TARGET,
            kind = %self.engine.kind,
            query = %self.query,
            facet = %self.facet,
            page_index = page.page_index,
            page_size = page.page_size,
            matched = page.total_count,
            "page materialized"
        );
        page
    }

    /// Counts matching records per state of the primary classifier.
    pub fn tally(&self) -> Tally {
        Tally::collect(self.engine.classifier(), self.iter())
    }

    /// Counts matching records per state of an auxiliary classifier.
    pub fn tally_by(&self, classifier: &str) -> Result<Tally> {
        let classifier = self.engine.auxiliary(classifier)?;
        Ok(Tally::collect(classifier, self.iter()))
    }

    /// Counts records per facet value, honouring the search but not the facet.
    ///
    /// Feeds the "All types (n)" style counters next to a facet selector.
    pub fn facet_counts(&self) -> FacetCounts {
        let searched = self
            .records
            .iter()
            .filter(|record| self.engine.matcher.matches(*record, &self.query));
        FacetCounts::collect(&self.engine.facet, searched)
    }
}

impl<'a, R> ResultPage<Annotated<'a, R>> {
    /// Records on this page that could not be classified.
    pub fn unclassified(&self) -> impl Iterator<Item = &Annotated<'a, R>> {
        self.items
            .iter()
            .filter(|item| !item.classification.is_classified())
    }
}
