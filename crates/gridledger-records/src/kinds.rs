//! Built-in kind tables and the engines built from them.

use chrono::NaiveDate;
use gridledger_seeker::{Catalog, ConfigurationError, Engine, KindConfig};

use crate::asset::Asset;
use crate::bill::Bill;
use crate::customer::Customer;
use crate::units::day_stamp;

/// Kind tables embedded at compile time, as `(kind, yaml)`.
pub const BUILTIN_KINDS: [(&str, &str); 3] = [
    ("customer", include_str!("../kinds/customer.yaml")),
    ("bill", include_str!("../kinds/bill.yaml")),
    ("asset", include_str!("../kinds/asset.yaml")),
];

/// Parses the embedded kind tables into a catalog.
pub fn builtin_catalog() -> Result<Catalog, ConfigurationError> {
    BUILTIN_KINDS
        .iter()
        .try_fold(Catalog::new(), |catalog, (_, yaml)| {
            KindConfig::from_yaml(yaml).map(|config| catalog.with(config))
        })
}

/// One engine per record kind.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub customers: Engine<Customer>,
    pub bills: Engine<Bill>,
    pub assets: Engine<Asset>,
}

impl Ledger {
    /// Engines for the built-in tables.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_catalog(&builtin_catalog()?)
    }

    /// Engines for the tables in `catalog`. Every kind must be present.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, ConfigurationError> {
        let ledger = Ledger {
            customers: Engine::from_catalog(catalog)?,
            bills: Engine::from_catalog(catalog)?,
            assets: Engine::from_catalog(catalog)?,
        };
        tracing::debug!(
            target: "gridledger.records",
            kinds = ?catalog.kinds().collect::<Vec<_>>(),
            "ledger engines ready"
        );
        Ok(ledger)
    }

    /// Fixes "today" for date-driven escalations (e.g. overdue bills).
    pub fn as_of(self, today: NaiveDate) -> Self {
        let reference = day_stamp(today);
        Ledger {
            customers: self.customers.as_of(reference),
            bills: self.bills.as_of(reference),
            assets: self.assets.as_of(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_parse() {
        let catalog = builtin_catalog().unwrap();
        let kinds: Vec<&str> = catalog.kinds().collect();
        assert_eq!(kinds, vec!["asset", "bill", "customer"]);
        for (kind, _) in BUILTIN_KINDS {
            assert_eq!(catalog.get(kind).unwrap().kind, kind);
        }
    }

    #[test]
    fn builtin_ledger_builds() {
        let ledger = Ledger::builtin().unwrap();
        assert_eq!(ledger.customers.kind(), "customer");
        assert_eq!(ledger.bills.classifier().max_tier().0, 2);
        assert!(ledger.assets.auxiliary("priority").is_ok());
        assert!(ledger.assets.auxiliary("colour").is_err());
    }

    #[test]
    fn missing_kind_is_a_configuration_error() {
        let catalog = Catalog::new().with(KindConfig::from_yaml(BUILTIN_KINDS[0].1).unwrap());
        assert_eq!(
            Ledger::from_catalog(&catalog).unwrap_err(),
            ConfigurationError::UnknownKind("bill".into())
        );
    }
}
