//! Customer bills.

use std::borrow::Cow;

use chrono::NaiveDate;
use gridledger_seeker::{Number, Record, Value};
use serde::{Deserialize, Serialize};

use crate::units::{day_stamp, parse_cents, parse_date, UnitError};

/// One billing-period invoice.
///
/// `status` is the stored payment state. A `Pending` bill whose due date has
/// passed classifies as `Overdue` once the engine has a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub customer_name: String,
    pub customer_id: String,
    pub amount_cents: u64,
    pub due_date: NaiveDate,
    pub status: String,
    /// Display period, e.g. `"Dec 2023"`.
    pub billing_period: String,
}

impl Record for Bill {
    const KIND: &'static str = "bill";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "customer_name",
        "customer_id",
        "amount_cents",
        "due_date",
        "status",
        "billing_period",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "customer_name" => Value::Text(&self.customer_name),
            "customer_id" => Value::Text(&self.customer_id),
            "amount_cents" => Value::Number(Number::from(self.amount_cents)),
            "due_date" => Value::Date(day_stamp(self.due_date)),
            "status" => Value::Text(&self.status),
            "billing_period" => Value::Text(&self.billing_period),
            _ => Value::Missing,
        }
    }
}

/// A bill row as the console exports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRow<'a> {
    #[serde(borrow)]
    pub id: Cow<'a, str>,
    #[serde(borrow)]
    pub customer_name: Cow<'a, str>,
    #[serde(borrow)]
    pub customer_id: Cow<'a, str>,
    /// e.g. `"$875.25"`
    #[serde(borrow)]
    pub amount: Cow<'a, str>,
    #[serde(borrow)]
    pub due_date: Cow<'a, str>,
    #[serde(borrow)]
    pub status: Cow<'a, str>,
    #[serde(borrow)]
    pub billing_period: Cow<'a, str>,
}

impl TryFrom<BillRow<'_>> for Bill {
    type Error = UnitError;

    fn try_from(row: BillRow<'_>) -> Result<Self, Self::Error> {
        Ok(Bill {
            id: row.id.into_owned(),
            customer_name: row.customer_name.into_owned(),
            customer_id: row.customer_id.into_owned(),
            amount_cents: parse_cents(&row.amount)?,
            due_date: parse_date(&row.due_date)?,
            status: row.status.into_owned(),
            billing_period: row.billing_period.into_owned(),
        })
    }
}
