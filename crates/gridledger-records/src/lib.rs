//! Record kinds browsed in the gridledger console.
//!
//! Three kinds, each with a built-in configuration table for
//! [`gridledger_seeker`]:
//!
//! | Kind | Searchable | Facet | States |
//! |------|------------|-------|--------|
//! | [`Customer`] | name, id, email | connection type | Active, Pending, Suspended |
//! | [`Bill`] | id, customer name, customer id | status | Paid, Pending, Overdue |
//! | [`Asset`] | name, id, location | status | Online, Maintenance, Offline |
//!
//! Assets also carry a `priority` classification (Low to Critical).
//! Pending bills past their due date classify as Overdue once the engine
//! knows today's date ([`Ledger::as_of`]).
//!
//! ```
//! use gridledger_records::{sample_customers, Ledger};
//! use gridledger_seeker::{FacetSelector, SearchQuery};
//!
//! let ledger = Ledger::builtin().unwrap();
//! let customers = sample_customers().unwrap();
//!
//! let hits = ledger
//!     .customers
//!     .query(&customers, &SearchQuery::new("sarah"), &FacetSelector::All);
//! let page = hits.page(0, 10).unwrap();
//! assert_eq!(page.items[0].record.name, "Sarah Johnson");
//! assert_eq!(page.items[0].classification.label().unwrap(), "Suspended");
//! ```

mod asset;
mod bill;
mod customer;
mod fixtures;
mod kinds;
mod units;

pub use asset::{Asset, AssetRow, Coordinates};
pub use bill::{Bill, BillRow};
pub use customer::{Customer, CustomerRow};
pub use fixtures::{sample_assets, sample_bills, sample_customers};
pub use kinds::{builtin_catalog, Ledger, BUILTIN_KINDS};
pub use units::{
    day_stamp, format_cents, parse_cents, parse_date, parse_percent, parse_quantity, UnitError,
};
