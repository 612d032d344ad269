//! Parsing of the console's display strings.
//!
//! Console exports carry quantities the way they are shown on screen:
//! `"$2,850.00"`, `"12,500 kWh"`, `"85%"`, `"2024-01-15"`. Records store
//! them as integers and dates.

use chrono::{NaiveDate, NaiveTime};
use gridledger_seeker::Timestamp;
use thiserror::Error;

/// A display string could not be read as the expected quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Not a dollar amount with at most two decimals.
    #[error("invalid amount '{0}'")]
    Amount(String),

    /// Not a whole number followed by the expected unit.
    #[error("invalid {unit} quantity '{raw}'")]
    Quantity { unit: &'static str, raw: String },

    /// Not a percentage between 0 and 100.
    #[error("invalid percentage '{0}'")]
    Percent(String),

    /// Not a `YYYY-MM-DD` date.
    #[error("invalid date '{0}'")]
    Date(String),

    /// Not a `latitude, longitude` pair.
    #[error("invalid coordinates '{0}'")]
    Coordinates(String),
}

/// Parses `"$1,234.5"` style amounts into cents.
pub fn parse_cents(raw: &str) -> Result<u64, UnitError> {
    let err = || UnitError::Amount(raw.to_string());
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || frac.len() > 2 || !all_digits(frac) {
        return Err(err());
    }

    let whole: u64 = whole.parse().map_err(|_| err())?;
    let frac: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().map_err(|_| err())? * 10,
        _ => frac.parse().map_err(|_| err())?,
    };
    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(frac))
        .ok_or_else(err)
}

/// Formats cents the way the console shows them: `$2,850.00`.
pub fn format_cents(cents: u64) -> String {
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", cents % 100)
}

/// Parses `"12,500 kWh"` style quantities with the given unit suffix.
pub fn parse_quantity(raw: &str, unit: &'static str) -> Result<u64, UnitError> {
    let err = || UnitError::Quantity {
        unit,
        raw: raw.to_string(),
    };
    let number = raw.trim().strip_suffix(unit).ok_or_else(err)?;
    number.trim().replace(',', "").parse().map_err(|_| err())
}

/// Parses `"85%"` into a whole percentage.
pub fn parse_percent(raw: &str) -> Result<u8, UnitError> {
    let err = || UnitError::Percent(raw.to_string());
    let number = raw.trim().strip_suffix('%').ok_or_else(err)?;
    match number.trim().parse::<u8>() {
        Ok(value) if value <= 100 => Ok(value),
        _ => Err(err()),
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, UnitError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| UnitError::Date(raw.to_string()))
}

/// Midnight UTC of `date`, as an engine timestamp.
pub fn day_stamp(date: NaiveDate) -> Timestamp {
    Timestamp::from_millis(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts() {
        assert_eq!(parse_cents("$125.50"), Ok(12_550));
        assert_eq!(parse_cents("$2,850.00"), Ok(285_000));
        assert_eq!(parse_cents("$0.00"), Ok(0));
        assert_eq!(parse_cents("17"), Ok(1_700));
        assert_eq!(parse_cents(" $3.5 "), Ok(350));
        assert!(parse_cents("$").is_err());
        assert!(parse_cents("$1.234").is_err());
        assert!(parse_cents("-$4.00").is_err());
        assert!(parse_cents("$1e3").is_err());
    }

    #[test]
    fn amount_formatting() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(12_550), "$125.50");
        assert_eq!(format_cents(285_000), "$2,850.00");
        assert_eq!(format_cents(124_758_000), "$1,247,580.00");
    }

    #[test]
    fn quantities() {
        assert_eq!(parse_quantity("12,500 kWh", "kWh"), Ok(12_500));
        assert_eq!(parse_quantity("500 MVA", "MVA"), Ok(500));
        assert_eq!(
            parse_quantity("500 kV", "MVA"),
            Err(UnitError::Quantity {
                unit: "MVA",
                raw: "500 kV".into()
            })
        );
        assert!(parse_quantity("kWh", "kWh").is_err());
    }

    #[test]
    fn percentages() {
        assert_eq!(parse_percent("85%"), Ok(85));
        assert_eq!(parse_percent("0%"), Ok(0));
        assert!(parse_percent("101%").is_err());
        assert!(parse_percent("85").is_err());
    }

    #[test]
    fn dates() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(parse_date("15/01/2024").is_err());
        assert_eq!(day_stamp(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()).as_millis(), 86_400_000);
    }

    proptest::proptest! {
        #[test]
        fn formatted_amounts_parse_back(cents in 0u64..10_000_000_000) {
            proptest::prop_assert_eq!(parse_cents(&format_cents(cents)), Ok(cents));
        }
    }
}
