//! Utility customers.

use std::borrow::Cow;

use chrono::NaiveDate;
use gridledger_seeker::{Number, Record, Value};
use serde::{Deserialize, Serialize};

use crate::units::{day_stamp, parse_cents, parse_date, parse_quantity, UnitError};

/// A metered customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Residential, Commercial or Industrial.
    pub connection_type: String,
    /// Raw account status as delivered by the source.
    pub status: String,
    pub monthly_consumption_kwh: u64,
    pub outstanding_cents: u64,
    pub join_date: NaiveDate,
}

impl Record for Customer {
    const KIND: &'static str = "customer";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "phone",
        "address",
        "connection_type",
        "status",
        "monthly_consumption_kwh",
        "outstanding_cents",
        "join_date",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "name" => Value::Text(&self.name),
            "email" => Value::Text(&self.email),
            "phone" => Value::Text(&self.phone),
            "address" => Value::Text(&self.address),
            "connection_type" => Value::Text(&self.connection_type),
            "status" => Value::Text(&self.status),
            "monthly_consumption_kwh" => Value::Number(Number::from(self.monthly_consumption_kwh)),
            "outstanding_cents" => Value::Number(Number::from(self.outstanding_cents)),
            "join_date" => Value::Date(day_stamp(self.join_date)),
            _ => Value::Missing,
        }
    }
}

/// A customer row as the console exports it.
///
/// Fields borrow from the input unless a value contains escapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow<'a> {
    #[serde(borrow)]
    pub id: Cow<'a, str>,
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub email: Cow<'a, str>,
    #[serde(borrow)]
    pub phone: Cow<'a, str>,
    #[serde(borrow)]
    pub address: Cow<'a, str>,
    #[serde(borrow)]
    pub connection_type: Cow<'a, str>,
    #[serde(borrow)]
    pub status: Cow<'a, str>,
    /// e.g. `"12,500 kWh"`
    #[serde(borrow)]
    pub monthly_consumption: Cow<'a, str>,
    /// e.g. `"$2,850.00"`
    #[serde(borrow)]
    pub outstanding_bill: Cow<'a, str>,
    #[serde(borrow)]
    pub join_date: Cow<'a, str>,
}

impl TryFrom<CustomerRow<'_>> for Customer {
    type Error = UnitError;

    fn try_from(row: CustomerRow<'_>) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: row.id.into_owned(),
            name: row.name.into_owned(),
            email: row.email.into_owned(),
            phone: row.phone.into_owned(),
            address: row.address.into_owned(),
            connection_type: row.connection_type.into_owned(),
            status: row.status.into_owned(),
            monthly_consumption_kwh: parse_quantity(&row.monthly_consumption, "kWh")?,
            outstanding_cents: parse_cents(&row.outstanding_bill)?,
            join_date: parse_date(&row.join_date)?,
        })
    }
}
