//! Declarative per-kind configuration tables.
//!
//! A [`KindConfig`] says which fields are searchable, which field is the
//! facet and what values it may take, and how raw attributes map to state
//! labels and tiers. Tables are plain data, usually loaded from YAML:
//!
//! ```yaml
//! kind: bill
//! searchable: [id, customer_name, customer_id]
//! facet:
//!   field: status
//!   values: [paid, pending, overdue]
//! classifier:
//!   field: status
//!   states:
//!     - { label: Paid, tier: 0 }
//!     - { label: Pending, tier: 1 }
//!     - { label: Overdue, tier: 2 }
//!   escalation:
//!     from: [Pending]
//!     to: Overdue
//!     date_field: due_date
//! ```
//!
//! A [`Catalog`] holds one table per kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::traits::Record;

/// Configuration table for one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindConfig {
    /// Kind name, matched against [`Record::KIND`].
    pub kind: String,
    /// Fields the free-text search looks at.
    #[serde(default)]
    pub searchable: Vec<String>,
    /// The categorical facet.
    pub facet: FacetConfig,
    /// Primary state classifier.
    pub classifier: ClassifierConfig,
    /// Extra named classifiers (e.g. a priority badge).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub auxiliary: BTreeMap<String, ClassifierConfig>,
}

/// The facet field and its closed value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacetConfig {
    /// Record field holding the category.
    pub field: String,
    /// Every legal category, compared case-insensitively.
    pub values: Vec<String>,
}

/// Mapping from one raw field to a closed set of states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Record field holding the raw state.
    pub field: String,
    /// Declared states, in tier order by convention.
    pub states: Vec<StateConfig>,
    /// Optional date-driven escalation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation: Option<EscalationConfig>,
}

/// One declared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateConfig {
    /// Label reported to the view layer.
    pub label: String,
    /// Display emphasis; higher is more prominent.
    pub tier: u8,
    /// Raw values mapping to this state. Empty means just the label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw: Vec<String>,
}

/// Reclassifies records whose date field has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscalationConfig {
    /// Labels eligible for escalation.
    pub from: Vec<String>,
    /// Label assigned once the date has passed.
    pub to: String,
    /// Timestamp field compared against the reference time.
    pub date_field: String,
}

impl StateConfig {
    /// Raw values accepted for this state.
    pub fn accepted_raw(&self) -> impl Iterator<Item = &str> {
        let own = if self.raw.is_empty() {
            Some(self.label.as_str())
        } else {
            None
        };
        own.into_iter().chain(self.raw.iter().map(String::as_str))
    }
}

impl KindConfig {
    /// Parses a single table from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks the table against the record type it will be used with.
    ///
    /// Classifier states are checked when the classifiers are built.
    pub fn check<R: Record>(&self) -> Result<(), ConfigurationError> {
        if self.kind != R::KIND {
            return Err(ConfigurationError::KindMismatch {
                expected: R::KIND.to_string(),
                actual: self.kind.clone(),
            });
        }
        if self.searchable.is_empty() {
            return Err(ConfigurationError::NoSearchableFields {
                kind: self.kind.clone(),
            });
        }

        let classifier_fields = std::iter::once(&self.classifier)
            .chain(self.auxiliary.values())
            .flat_map(|c| {
                std::iter::once(&c.field).chain(c.escalation.as_ref().map(|e| &e.date_field))
            });
        let referenced = self
            .searchable
            .iter()
            .chain(std::iter::once(&self.facet.field))
            .chain(classifier_fields);
        for field in referenced {
            if !R::has_field(field) {
                return Err(ConfigurationError::UnknownField {
                    kind: self.kind.clone(),
                    field: field.clone(),
                });
            }
        }

        if self.facet.values.is_empty() {
            return Err(ConfigurationError::EmptyFacetValues {
                kind: self.kind.clone(),
                field: self.facet.field.clone(),
            });
        }
        Ok(())
    }
}

/// One configuration table per record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    kinds: BTreeMap<String, KindConfig>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML sequence of tables.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        let tables: Vec<KindConfig> =
            serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::Parse {
                message: e.to_string(),
            })?;
        Ok(tables.into_iter().fold(Self::new(), Self::with))
    }

    /// Adds or replaces the table for its kind.
    pub fn insert(&mut self, config: KindConfig) -> Option<KindConfig> {
        self.kinds.insert(config.kind.clone(), config)
    }

    /// Builder form of [`insert`](Catalog::insert).
    pub fn with(mut self, config: KindConfig) -> Self {
        self.insert(config);
        self
    }

    /// Looks up a table by kind name.
    pub fn get(&self, kind: &str) -> Result<&KindConfig, ConfigurationError> {
        self.kinds
            .get(kind)
            .ok_or_else(|| ConfigurationError::UnknownKind(kind.to_string()))
    }

    /// Looks up the table for a record type.
    pub fn for_record<R: Record>(&self) -> Result<&KindConfig, ConfigurationError> {
        self.get(R::KIND)
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}
