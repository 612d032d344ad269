//! Free-text search over configured fields.

use std::fmt;

use crate::traits::Record;

/// Normalized search text: trimmed and lowercased.
///
/// The empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalizes raw input from a search box.
    pub fn new(raw: impl AsRef<str>) -> Self {
        SearchQuery(raw.as_ref().trim().to_lowercase())
    }

    /// The query that matches everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        SearchQuery::new(raw)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tests records against a [`SearchQuery`].
///
/// A record matches when any searchable field, lowercased, contains the
/// query as a substring. Only text fields take part; numbers, timestamps and
/// missing values never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatcher {
    fields: Vec<String>,
}

impl FieldMatcher {
    /// Creates a matcher over the given field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldMatcher {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The searchable field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the record satisfies the query.
    pub fn matches<R: Record>(&self, record: &R, query: &SearchQuery) -> bool {
        if query.is_empty() {
            return true;
        }
        self.fields.iter().any(|field| {
            record
                .field_value(field)
                .as_str()
                .is_some_and(|text| text.to_lowercase().contains(query.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Value};

    struct Contact {
        name: String,
        email: String,
        notes: String,
        score: u64,
    }

    impl Record for Contact {
        const KIND: &'static str = "contact";
        const FIELDS: &'static [&'static str] = &["name", "email", "notes", "score"];

        fn id(&self) -> &str {
            &self.email
        }

        fn label(&self) -> &str {
            &self.name
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::Text(&self.name),
                "email" => Value::Text(&self.email),
                "notes" => Value::Text(&self.notes),
                "score" => Value::Number(Number::Unsigned(self.score)),
                _ => Value::Missing,
            }
        }
    }

    fn contact() -> Contact {
        Contact {
            name: "Sarah Johnson".into(),
            email: "sarah.j@email.com".into(),
            notes: "internal: vip".into(),
            score: 42,
        }
    }

    #[test]
    fn query_is_normalized() {
        assert_eq!(SearchQuery::new("  SaRah ").as_str(), "sarah");
        assert!(SearchQuery::new("   ").is_empty());
        assert_eq!(SearchQuery::from("ABC").to_string(), "abc");
    }

    #[test]
    fn empty_query_matches() {
        let matcher = FieldMatcher::new(["name"]);
        assert!(matcher.matches(&contact(), &SearchQuery::empty()));
    }

    #[test]
    fn substring_is_unanchored_and_case_insensitive() {
        let matcher = FieldMatcher::new(["name", "email"]);
        assert!(matcher.matches(&contact(), &SearchQuery::new("JOHN")));
        assert!(matcher.matches(&contact(), &SearchQuery::new("h jo")));
        assert!(matcher.matches(&contact(), &SearchQuery::new("email.com")));
        assert!(!matcher.matches(&contact(), &SearchQuery::new("smith")));
    }

    #[test]
    fn only_configured_fields_are_searched() {
        let matcher = FieldMatcher::new(["name"]);
        assert!(!matcher.matches(&contact(), &SearchQuery::new("vip")));
    }

    #[test]
    fn non_text_fields_never_match() {
        let matcher = FieldMatcher::new(["score", "missing"]);
        assert!(!matcher.matches(&contact(), &SearchQuery::new("42")));
    }
}
