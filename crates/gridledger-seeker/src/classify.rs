//! Status classification.
//!
//! A [`Classifier`] turns one raw record field into a [`StateLabel`] from a
//! closed set, plus the [`Tier`] declared for that label. Raw values nobody
//! declared are reported as [`ClassificationError`]s rather than mapped to a
//! fallback state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::config::ClassifierConfig;
use crate::error::{ClassificationError, ConfigurationError};
use crate::traits::Record;
use crate::value::Timestamp;

const TARGET: &str = "gridledger.seeker";

/// Display emphasis for a state. Higher is more prominent.
///
/// Tiers only order records for display; they never affect matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tier(pub u8);

/// A label from a classifier's closed state set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateLabel(Arc<str>);

impl StateLabel {
    pub(crate) fn new(label: &str) -> Self {
        StateLabel(Arc::from(label))
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StateLabel {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for StateLabel {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Serialize for StateLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The outcome of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Classification {
    /// The record maps onto a declared state.
    Classified { label: StateLabel, tier: Tier },
    /// The raw value is not declared; the record is still listed.
    Unclassified { error: ClassificationError },
}

impl Classification {
    /// Returns `true` if a declared state was found.
    pub fn is_classified(&self) -> bool {
        matches!(self, Classification::Classified { .. })
    }

    /// The state label, if classified.
    pub fn label(&self) -> Option<&StateLabel> {
        match self {
            Classification::Classified { label, .. } => Some(label),
            Classification::Unclassified { .. } => None,
        }
    }

    /// The tier, if classified.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Classification::Classified { tier, .. } => Some(*tier),
            Classification::Unclassified { .. } => None,
        }
    }

    /// The underlying error, if unclassified.
    pub fn error(&self) -> Option<&ClassificationError> {
        match self {
            Classification::Classified { .. } => None,
            Classification::Unclassified { error } => Some(error),
        }
    }
}

impl From<Result<(StateLabel, Tier), ClassificationError>> for Classification {
    fn from(result: Result<(StateLabel, Tier), ClassificationError>) -> Self {
        match result {
            Ok((label, tier)) => Classification::Classified { label, tier },
            Err(error) => Classification::Unclassified { error },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Escalation {
    from: Vec<usize>,
    to: usize,
    date_field: String,
}

/// Maps a raw record field onto a closed state set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    kind: String,
    name: String,
    field: String,
    states: Vec<(StateLabel, Tier)>,
    raw_index: HashMap<String, usize>,
    escalation: Option<Escalation>,
    reference: Option<Timestamp>,
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Classifier {
    /// Builds a classifier, rejecting empty, duplicate or ambiguous state sets.
    pub fn new(
        kind: &str,
        name: &str,
        config: &ClassifierConfig,
    ) -> Result<Self, ConfigurationError> {
        if config.states.is_empty() {
            return Err(ConfigurationError::NoStates {
                kind: kind.to_string(),
                classifier: name.to_string(),
            });
        }

        let mut raw_index = HashMap::new();
        let mut states = Vec::with_capacity(config.states.len());
        for (index, state) in config.states.iter().enumerate() {
            let label = state.label.trim();
            if states
                .iter()
                .any(|(known, _): &(StateLabel, Tier)| known.as_str().eq_ignore_ascii_case(label))
            {
                return Err(ConfigurationError::DuplicateState {
                    kind: kind.to_string(),
                    classifier: name.to_string(),
                    label: state.label.clone(),
                });
            }
            for raw in state.accepted_raw() {
                if raw_index.insert(normalize(raw), index).is_some() {
                    return Err(ConfigurationError::AmbiguousRawValue {
                        kind: kind.to_string(),
                        classifier: name.to_string(),
                        raw: raw.to_string(),
                    });
                }
            }
            states.push((StateLabel::new(&state.label), Tier(state.tier)));
        }

        let position = |label: &str| {
            states
                .iter()
                .position(|(known, _)| known.as_str().eq_ignore_ascii_case(label.trim()))
                .ok_or_else(|| ConfigurationError::UnknownEscalationLabel {
                    kind: kind.to_string(),
                    classifier: name.to_string(),
                    label: label.to_string(),
                })
        };
        let escalation = match &config.escalation {
            Some(rule) => Some(Escalation {
                from: rule
                    .from
                    .iter()
                    .map(|label| position(label.as_str()))
                    .collect::<Result<_, _>>()?,
                to: position(rule.to.as_str())?,
                date_field: rule.date_field.clone(),
            }),
            None => None,
        };

        Ok(Classifier {
            kind: kind.to_string(),
            name: name.to_string(),
            field: config.field.clone(),
            states,
            raw_index,
            escalation,
            reference: None,
        })
    }

    /// Fixes the reference time used by the escalation rule.
    ///
    /// Without one, escalation never applies.
    pub fn as_of(mut self, reference: Timestamp) -> Self {
        self.reference = Some(reference);
        self
    }

    /// The classifier name (`"status"` for the primary one).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw field this classifier reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Declared labels with their tiers, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (&StateLabel, Tier)> {
        self.states.iter().map(|(label, tier)| (label, *tier))
    }

    /// Tier declared for a label.
    pub fn tier_of(&self, label: &str) -> Option<Tier> {
        self.states
            .iter()
            .find(|(known, _)| known.as_str() == label)
            .map(|(_, tier)| *tier)
    }

    /// Highest declared tier.
    pub fn max_tier(&self) -> Tier {
        self.states
            .iter()
            .map(|(_, tier)| *tier)
            .max()
            .unwrap_or_default()
    }

    /// Classifies a record, returning the error for undeclared values.
    pub fn try_classify<R: Record>(
        &self,
        record: &R,
    ) -> Result<(StateLabel, Tier), ClassificationError> {
        let raw = record.field_value(&self.field).as_str().ok_or_else(|| {
            ClassificationError::MissingField {
                kind: self.kind.clone(),
                id: record.id().to_string(),
                field: self.field.clone(),
            }
        })?;
        let mut index = *self.raw_index.get(&normalize(raw)).ok_or_else(|| {
            ClassificationError::UnrecognizedValue {
                kind: self.kind.clone(),
                id: record.id().to_string(),
                field: self.field.clone(),
                raw: raw.to_string(),
            }
        })?;

        if let (Some(rule), Some(reference)) = (&self.escalation, self.reference) {
            let lapsed = record
                .field_value(&rule.date_field)
                .as_timestamp()
                .is_some_and(|date| date < reference);
            if lapsed && rule.from.contains(&index) {
                index = rule.to;
            }
        }

        let (label, tier) = &self.states[index];
        Ok((label.clone(), *tier))
    }

    /// Classifies a record; undeclared values become
    /// [`Classification::Unclassified`].
    pub fn classify<R: Record>(&self, record: &R) -> Classification {
        let outcome = Classification::from(self.try_classify(record));
        if let Some(error) = outcome.error() {
            tracing::warn!(
                target: TARGET,
                kind = %self.kind,
                classifier = %self.name,
                record_id = %record.id(),
                %error,
                "record left unclassified"
            );
        }
        outcome
    }
}
