//! Field values handed to the engine by records.
//!
//! Only [`Value::Text`] takes part in search, facet and state matching.
//! Numbers and dates are carried so tables can reference them (escalation
//! rules compare a [`Value::Date`] against the engine's reference time).

use std::fmt;

/// One field of a record, borrowed for the duration of a match.
///
/// ```
/// use gridledger_seeker::{Number, Value};
///
/// struct Meter {
///     serial: String,
///     reading_kwh: u64,
/// }
///
/// fn field<'a>(meter: &'a Meter, name: &str) -> Value<'a> {
///     match name {
///         "serial" => Value::Text(&meter.serial),
///         "reading_kwh" => Value::Number(Number::from(meter.reading_kwh)),
///         _ => Value::Missing,
///     }
/// }
///
/// let meter = Meter { serial: "MTR-7".into(), reading_kwh: 450 };
/// assert_eq!(field(&meter, "serial").as_str(), Some("MTR-7"));
/// assert!(field(&meter, "owner").is_missing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(Number),
    Date(Timestamp),
    /// Unknown field name, or a field with nothing in it.
    Missing,
}

impl<'a> Value<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match *self {
            Value::Date(at) => Some(at),
            _ => None,
        }
    }
}

/// A numeric field: counts and money in integers, measurements in floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Lossy conversion for display and charting.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Unsigned(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Unsigned(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($narrow:ty),+) => {
        $(
            impl From<$narrow> for Number {
                fn from(n: $narrow) -> Self {
                    Number::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

number_from!(Int as i64: i8, i16, i32, i64);
number_from!(Unsigned as u64: u8, u16, u32, u64);
number_from!(Float as f64: f32, f64);

/// Milliseconds since the Unix epoch, UTC.
///
/// Record types convert whatever date type they carry; the engine only
/// compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }
}
