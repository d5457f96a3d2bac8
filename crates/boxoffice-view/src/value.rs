//! Runtime value types for field access.
//!
//! The [`Value`] enum is what a [`Record`](crate::Record) hands back when the
//! engine looks a field up by name. It covers the primitive shapes listing
//! records carry: strings, numbers, dates and booleans.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{Result, ViewError};

/// Runtime value of a record field, borrowed from the record.
///
/// # Example
///
/// ```
/// use boxoffice_view::{Value, Number};
///
/// struct Venue {
///     name: String,
///     capacity: u32,
/// }
///
/// fn field<'a>(venue: &'a Venue, name: &str) -> Value<'a> {
///     match name {
///         "name" => Value::String(&venue.name),
///         "capacity" => Value::Number(Number::U64(venue.capacity as u64)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Point in time (milliseconds since Unix epoch, UTC).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field absent, null, or not exposed.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if the field is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Timestamp(_) => "timestamp",
            Value::Bool(_) => "bool",
            Value::None => "none",
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::String)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

/// Numeric value.
///
/// Integers keep their exact representation; comparisons across variants go
/// through `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total ordering used for sorting. NaN sorts after every other number.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match self.compare(other) {
            Some(ordering) => ordering,
            None => {
                let a_nan = self.to_f64().is_nan();
                let b_nan = other.to_f64().is_nan();
                a_nan.cmp(&b_nan)
            }
        }
    }
}

fn cmp_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Point in time as milliseconds since the Unix epoch (UTC).
///
/// # Example
///
/// ```
/// use boxoffice_view::Timestamp;
///
/// let show = Timestamp::parse("2025-06-14T20:30:00Z").unwrap();
/// let day = Timestamp::parse("2025-06-14").unwrap();
/// assert!(show.same_day(day));
/// assert!(day < show);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Midnight UTC of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Timestamp(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
    }

    /// Parses `YYYY-MM-DD`, an RFC 3339 datetime, or a naive ISO datetime
    /// (taken as UTC).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let date_err = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => return Ok(Timestamp::from_date(date)),
            Err(e) => e,
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Timestamp(dt.timestamp_millis()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Timestamp(dt.and_utc().timestamp_millis()));
        }
        Err(ViewError::InvalidDate {
            input: input.to_string(),
            source: date_err,
        })
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Calendar day number (days since 1970-01-01, UTC).
    pub fn day(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_DAY)
    }

    /// Returns `true` if both timestamps fall on the same UTC calendar day.
    pub fn same_day(self, other: Timestamp) -> bool {
        self.day() == other.day()
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::from_date(date)
    }
}
