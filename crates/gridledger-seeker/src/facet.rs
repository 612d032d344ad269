//! Categorical facet filtering.

use std::fmt;
use std::str::FromStr;

use crate::config::FacetConfig;
use crate::traits::Record;

/// The selected facet value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FacetSelector {
    /// No constraint.
    #[default]
    All,
    /// One category, trimmed and lowercased.
    Value(String),
}

impl FacetSelector {
    /// Sentinel text for [`FacetSelector::All`].
    pub const ALL: &'static str = "all";

    /// Parses selector text; `"all"` (any case) is the sentinel.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if value == Self::ALL {
            FacetSelector::All
        } else {
            FacetSelector::Value(value)
        }
    }

    /// Returns `true` for the sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelector::All)
    }
}

impl FromStr for FacetSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FacetSelector::parse(s))
    }
}

impl From<&str> for FacetSelector {
    fn from(raw: &str) -> Self {
        FacetSelector::parse(raw)
    }
}

impl fmt::Display for FacetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetSelector::All => f.write_str(Self::ALL),
            FacetSelector::Value(v) => f.write_str(v),
        }
    }
}

/// Tests records against a [`FacetSelector`].
///
/// Selectors outside the declared value set match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    field: String,
    values: Vec<String>,
}

impl FacetFilter {
    /// Creates a filter from a facet table.
    pub fn new(config: &FacetConfig) -> Self {
        FacetFilter {
            field: config.field.clone(),
            values: config
                .values
                .iter()
                .map(|v| v.trim().to_lowercase())
                .collect(),
        }
    }

    /// The facet field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The declared values, normalized.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns `true` if the selector is the sentinel or a declared value.
    pub fn recognizes(&self, selector: &FacetSelector) -> bool {
        match selector {
            FacetSelector::All => true,
            FacetSelector::Value(v) => self.values.iter().any(|known| known == v),
        }
    }

    /// Returns `true` if the record satisfies the selector.
    pub fn matches<R: Record>(&self, record: &R, selector: &FacetSelector) -> bool {
        match selector {
            FacetSelector::All => true,
            FacetSelector::Value(wanted) => {
                self.recognizes(selector) && self.value_matches(record, wanted)
            }
        }
    }

    fn value_matches<R: Record>(&self, record: &R, wanted: &str) -> bool {
        record
            .field_value(&self.field)
            .as_str()
            .is_some_and(|actual| actual.trim().to_lowercase() == wanted)
    }

    /// Position of the record's facet value in the declared set.
    pub(crate) fn bucket_of<R: Record>(&self, record: &R) -> Option<usize> {
        let actual = record.field_value(&self.field).as_str()?.trim().to_lowercase();
        self.values.iter().position(|known| *known == actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Site {
        zone: Option<String>,
    }

    impl Record for Site {
        const KIND: &'static str = "site";
        const FIELDS: &'static [&'static str] = &["zone"];

        fn id(&self) -> &str {
            "site"
        }

        fn label(&self) -> &str {
            "site"
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match (field, &self.zone) {
                ("zone", Some(zone)) => Value::Text(zone),
                _ => Value::Missing,
            }
        }
    }

    fn filter() -> FacetFilter {
        FacetFilter::new(&FacetConfig {
            field: "zone".into(),
            values: vec!["Residential".into(), "Commercial".into()],
        })
    }

    fn site(zone: &str) -> Site {
        Site {
            zone: Some(zone.into()),
        }
    }

    #[test]
    fn parse_sentinel() {
        assert_eq!(FacetSelector::parse("ALL"), FacetSelector::All);
        assert_eq!(
            FacetSelector::parse(" Commercial "),
            FacetSelector::Value("commercial".into())
        );
        assert_eq!("all".parse::<FacetSelector>().unwrap(), FacetSelector::All);
        assert_eq!(FacetSelector::default().to_string(), "all");
    }

    #[test]
    fn all_matches_everything() {
        let filter = filter();
        assert!(filter.matches(&site("Residential"), &FacetSelector::All));
        assert!(filter.matches(&Site { zone: None }, &FacetSelector::All));
    }

    #[test]
    fn value_matches_case_insensitively() {
        let filter = filter();
        let selector = FacetSelector::parse("residential");
        assert!(filter.matches(&site("Residential"), &selector));
        assert!(filter.matches(&site("RESIDENTIAL"), &selector));
        assert!(!filter.matches(&site("Commercial"), &selector));
        assert!(!filter.matches(&Site { zone: None }, &selector));
    }

    #[test]
    fn unrecognized_selector_matches_nothing() {
        let filter = filter();
        let selector = FacetSelector::parse("industrial");
        assert!(!filter.recognizes(&selector));
        assert!(!filter.matches(&site("Industrial"), &selector));
        assert!(!filter.matches(&site("Residential"), &selector));
    }

    #[test]
    fn non_ascii_values_fold_case() {
        let filter = FacetFilter::new(&FacetConfig {
            field: "zone".into(),
            values: vec!["Ämter".into(), "Straße".into()],
        });
        let selector = FacetSelector::parse("ÄMTER");
        assert!(filter.recognizes(&selector));
        assert!(filter.matches(&site("ämter"), &selector));
        assert!(!filter.matches(&site("Straße"), &selector));
        assert_eq!(filter.bucket_of(&site("ÄMTER")), Some(0));
    }

    #[test]
    fn bucket_lookup() {
        let filter = filter();
        assert_eq!(filter.bucket_of(&site("commercial")), Some(1));
        assert_eq!(filter.bucket_of(&site("Industrial")), None);
    }
}
