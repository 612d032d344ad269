//! Grid assets (substations).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use gridledger_seeker::{Number, Record, Value};
use serde::{Deserialize, Serialize};

use crate::units::{day_stamp, parse_date, parse_percent, parse_quantity, UnitError};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl FromStr for Coordinates {
    type Err = UnitError;

    /// Parses `"40.7128, -74.0060"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = || UnitError::Coordinates(raw.to_string());
        let (lat, lon) = raw.split_once(',').ok_or_else(err)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| err())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| err())?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(err());
        }
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A substation in the master data register.
///
/// Carries two classifications: the operational `status` and the
/// maintenance `priority`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity_mva: u32,
    /// Transformation ratio, e.g. `"220/33 kV"`.
    pub voltage: String,
    pub status: String,
    /// Current load; zero while out of service.
    pub load_percent: u8,
    pub last_maintenance: NaiveDate,
    pub coordinates: Coordinates,
    /// Primary, Secondary or Distribution.
    pub asset_type: String,
    pub priority: String,
}

impl Record for Asset {
    const KIND: &'static str = "asset";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "location",
        "capacity_mva",
        "voltage",
        "status",
        "load_percent",
        "last_maintenance",
        "latitude",
        "longitude",
        "asset_type",
        "priority",
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
            "location" => Value::Text(&self.location),
            "capacity_mva" => Value::Number(Number::from(self.capacity_mva)),
            "voltage" => Value::Text(&self.voltage),
            "status" => Value::Text(&self.status),
            "load_percent" => Value::Number(Number::from(self.load_percent)),
            "last_maintenance" => Value::Date(day_stamp(self.last_maintenance)),
            "latitude" => Value::Number(Number::from(self.coordinates.latitude)),
            "longitude" => Value::Number(Number::from(self.coordinates.longitude)),
            "asset_type" => Value::Text(&self.asset_type),
            "priority" => Value::Text(&self.priority),
            _ => Value::Missing,
        }
    }
}

/// A substation row as the console exports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow<'a> {
    #[serde(borrow)]
    pub id: Cow<'a, str>,
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub location: Cow<'a, str>,
    /// e.g. `"500 MVA"`
    #[serde(borrow)]
    pub capacity: Cow<'a, str>,
    #[serde(borrow)]
    pub voltage: Cow<'a, str>,
    #[serde(borrow)]
    pub status: Cow<'a, str>,
    /// e.g. `"85%"`
    #[serde(borrow)]
    pub load: Cow<'a, str>,
    #[serde(borrow)]
    pub last_maintenance: Cow<'a, str>,
    #[serde(borrow)]
    pub coordinates: Cow<'a, str>,
    #[serde(rename = "type")]
    #[serde(borrow)]
    pub asset_type: Cow<'a, str>,
    #[serde(borrow)]
    pub priority: Cow<'a, str>,
}

impl TryFrom<AssetRow<'_>> for Asset {
    type Error = UnitError;

    fn try_from(row: AssetRow<'_>) -> Result<Self, Self::Error> {
        let capacity = parse_quantity(&row.capacity, "MVA")?;
        Ok(Asset {
            id: row.id.into_owned(),
            name: row.name.into_owned(),
            location: row.location.into_owned(),
            capacity_mva: u32::try_from(capacity).map_err(|_| UnitError::Quantity {
                unit: "MVA",
                raw: row.capacity.into_owned(),
            })?,
            voltage: row.voltage.into_owned(),
            status: row.status.into_owned(),
            load_percent: parse_percent(&row.load)?,
            last_maintenance: parse_date(&row.last_maintenance)?,
            coordinates: row.coordinates.parse()?,
            asset_type: row.asset_type.into_owned(),
            priority: row.priority.into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: AssetRow<'static> = AssetRow {
        id: Cow::Borrowed("SUB001"),
        name: Cow::Borrowed("Central Power Station Alpha"),
        location: Cow::Borrowed("District 1, Sector A"),
        capacity: Cow::Borrowed("500 MVA"),
        voltage: Cow::Borrowed("220/33 kV"),
        status: Cow::Borrowed("Online"),
        load: Cow::Borrowed("85%"),
        last_maintenance: Cow::Borrowed("2024-01-15"),
        coordinates: Cow::Borrowed("40.7128, -74.0060"),
        asset_type: Cow::Borrowed("Primary"),
        priority: Cow::Borrowed("Critical"),
    };

    #[test]
    fn row_conversion() {
        let asset = Asset::try_from(ROW).unwrap();
        assert_eq!(asset.capacity_mva, 500);
        assert_eq!(asset.load_percent, 85);
        assert_eq!(asset.coordinates.to_string(), "40.7128, -74.0060");
        assert_eq!(asset.field_value("load_percent").as_number(), Some(Number::Unsigned(85)));
    }

    #[test]
    fn coordinates() {
        let c: Coordinates = "40.7589, -73.9851".parse().unwrap();
        assert_eq!(c.latitude, 40.7589);
        assert_eq!(c.longitude, -73.9851);
        assert!("40.7".parse::<Coordinates>().is_err());
        assert!("91.0, 0.0".parse::<Coordinates>().is_err());
        assert!("north, west".parse::<Coordinates>().is_err());
    }

    #[test]
    fn out_of_range_load_is_rejected() {
        let row = AssetRow {
            load: "140%".into(),
            ..ROW
        };
        assert_eq!(Asset::try_from(row), Err(UnitError::Percent("140%".into())));
    }

    #[test]
    fn deserializes_console_export() {
        let json = r#"{
            "id": "SUB003", "name": "Residential Complex Gamma",
            "location": "District 3, Residential Area", "capacity": "150 MVA",
            "voltage": "66/11 kV", "status": "Maintenance", "load": "0%",
            "lastMaintenance": "2024-01-20", "coordinates": "40.7282, -74.0776",
            "type": "Distribution", "priority": "Medium"
        }"#;
        let row: AssetRow<'_> = serde_json::from_str(json).unwrap();
        let asset = Asset::try_from(row).unwrap();
        assert_eq!(asset.asset_type, "Distribution");
        assert_eq!(asset.load_percent, 0);
    }
}
