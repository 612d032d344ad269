//! Error types for the seeker crate.

use serde::Serialize;
use thiserror::Error;

/// A kind configuration table cannot drive a query.
///
/// Raised when an engine is built, before any record is read. There is no
/// fallback to searching every field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The kind declares no searchable fields.
    #[error("kind '{kind}' declares no searchable fields")]
    NoSearchableFields { kind: String },

    /// A configured field is not exposed by the record type.
    #[error("kind '{kind}' has no field named '{field}'")]
    UnknownField { kind: String, field: String },

    /// The facet declares an empty value set.
    #[error("facet '{field}' of kind '{kind}' declares no values")]
    EmptyFacetValues { kind: String, field: String },

    /// A classifier declares no states.
    #[error("classifier '{classifier}' of kind '{kind}' declares no states")]
    NoStates { kind: String, classifier: String },

    /// Two states of one classifier accept the same raw value.
    #[error("raw value '{raw}' is claimed by more than one state in classifier '{classifier}' of kind '{kind}'")]
    AmbiguousRawValue {
        kind: String,
        classifier: String,
        raw: String,
    },

    /// Two states of one classifier share a label.
    #[error("state '{label}' is declared more than once in classifier '{classifier}' of kind '{kind}'")]
    DuplicateState {
        kind: String,
        classifier: String,
        label: String,
    },

    /// An escalation rule names a label the classifier does not declare.
    #[error("escalation in classifier '{classifier}' of kind '{kind}' names unknown state '{label}'")]
    UnknownEscalationLabel {
        kind: String,
        classifier: String,
        label: String,
    },

    /// The table was written for another record kind.
    #[error("configuration for kind '{actual}' used with records of kind '{expected}'")]
    KindMismatch { expected: String, actual: String },

    /// The catalog has no table for the kind.
    #[error("no configuration registered for kind '{0}'")]
    UnknownKind(String),

    /// The kind has no auxiliary classifier with the given name.
    #[error("kind '{kind}' has no classifier named '{name}'")]
    UnknownClassifier { kind: String, name: String },

    /// YAML could not be parsed into a configuration table.
    #[error("failed to parse kind configuration: {message}")]
    Parse { message: String },
}

/// Caller-supplied paging input is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Page size below one.
    #[error("page size must be at least 1, got {0}")]
    PageSize(i64),

    /// Negative page index.
    #[error("page index must not be negative, got {0}")]
    PageIndex(i64),
}

/// A record's raw attributes do not map onto the declared states.
///
/// The record stays in the result set; it is reported as
/// [`Classification::Unclassified`](crate::Classification::Unclassified).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ClassificationError {
    /// The raw value is not accepted by any declared state.
    #[error("record '{id}' of kind '{kind}': unrecognized {field} '{raw}'")]
    UnrecognizedValue {
        kind: String,
        id: String,
        field: String,
        raw: String,
    },

    /// The classifier field is missing or does not hold text.
    #[error("record '{id}' of kind '{kind}': {field} is missing or not text")]
    MissingField {
        kind: String,
        id: String,
        field: String,
    },
}

/// A record source could not hand out or accept a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Two records in one snapshot share an identifier.
    #[error("duplicate {kind} identifier '{id}' in snapshot")]
    DuplicateId { kind: String, id: String },

    /// The source cannot currently provide records.
    #[error("{kind} records unavailable: {reason}")]
    Unavailable { kind: String, reason: String },
}

/// Errors that abort a query before any page is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The kind configuration is missing or unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Paging input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, QueryError>;
