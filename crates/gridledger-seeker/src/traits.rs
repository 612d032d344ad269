//! The [`Record`] trait implemented by every browsable record kind.

use crate::value::Value;

/// A browsable, immutable record.
///
/// The engine never touches struct fields directly: configuration tables
/// name fields as strings and the engine asks the record for them through
/// [`field_value`](Record::field_value). [`FIELDS`](Record::FIELDS) lists the
/// names a record answers to, so a table that references anything else is
/// rejected before a query runs.
///
/// # Example
///
/// ```
/// use gridledger_seeker::{Number, Record, Value};
///
/// struct Feeder {
///     id: String,
///     name: String,
///     status: String,
///     load_percent: u8,
/// }
///
/// impl Record for Feeder {
///     const KIND: &'static str = "feeder";
///     const FIELDS: &'static [&'static str] = &["id", "name", "status", "load_percent"];
///
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn label(&self) -> &str {
///         &self.name
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::Text(&self.id),
///             "name" => Value::Text(&self.name),
///             "status" => Value::Text(&self.status),
///             "load_percent" => Value::Number(Number::from(self.load_percent)),
///             _ => Value::Missing,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Kind name used to look up the configuration table.
    const KIND: &'static str;

    /// Every field name [`field_value`](Record::field_value) answers to.
    const FIELDS: &'static [&'static str];

    /// Identifier, unique within a collection.
    fn id(&self) -> &str;

    /// Human-readable label.
    fn label(&self) -> &str;

    /// Returns the value of a field, or [`Value::Missing`] for unknown names.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns `true` if `field` is one of [`FIELDS`](Record::FIELDS).
    fn has_field(field: &str) -> bool
    where
        Self: Sized,
    {
        Self::FIELDS.contains(&field)
    }
}
