//! Literal scalar values carried by query operands
//!
//! A literal is deliberately loose: filters arrive with strings, raw
//! numbers, or native typed values, and the coercion layer reconciles them
//! against declared field types later.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque scalar value inside a query expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Temporal(TemporalValue),
    /// A constant of a declared enumeration
    Enum { enum_name: String, constant: String },
}

/// Date/time values recognized by the coercion layer
///
/// Every variant except `TimeOfDay` normalizes to milliseconds since the
/// epoch. `TimeOfDay` carries no date and cannot represent an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemporalValue {
    /// Raw milliseconds since the epoch
    EpochMillis(i64),
    /// An instant in UTC
    Utc(DateTime<Utc>),
    /// A timestamp with a fixed offset
    Fixed(DateTime<FixedOffset>),
    /// A timestamp in the system's local zone
    Zoned(DateTime<Local>),
    /// A date-time without zone, interpreted in the system's default zone
    LocalDateTime(NaiveDateTime),
    /// A date without time, interpreted as start of day in the default zone
    LocalDate(NaiveDate),
    /// A time without date
    TimeOfDay(NaiveTime),
}

impl Literal {
    /// Canonical text form, used in definitions and text-based parsing rules
    pub fn text_form(&self) -> String {
        match self {
            Literal::Null => "null".to_string(),
            Literal::Text(s) => s.clone(),
            Literal::Integer(i) => i.to_string(),
            Literal::BigInt(i) => i.to_string(),
            Literal::Float(f) => f.to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Temporal(t) => t.text_form(),
            Literal::Enum { constant, .. } => constant.clone(),
        }
    }

    /// Short name of the literal's runtime shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Text(_) => "text",
            Literal::Integer(_) => "integer",
            Literal::BigInt(_) => "bigint",
            Literal::Float(_) => "float",
            Literal::Boolean(_) => "boolean",
            Literal::Temporal(t) => t.subtype_name(),
            Literal::Enum { .. } => "enum",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

impl TemporalValue {
    pub fn text_form(&self) -> String {
        match self {
            TemporalValue::EpochMillis(ms) => ms.to_string(),
            TemporalValue::Utc(dt) => dt.to_rfc3339(),
            TemporalValue::Fixed(dt) => dt.to_rfc3339(),
            TemporalValue::Zoned(dt) => dt.to_rfc3339(),
            TemporalValue::LocalDateTime(dt) => dt.to_string(),
            TemporalValue::LocalDate(d) => d.to_string(),
            TemporalValue::TimeOfDay(t) => t.to_string(),
        }
    }

    /// Subtype name used in diagnostics
    pub fn subtype_name(&self) -> &'static str {
        match self {
            TemporalValue::EpochMillis(_) => "epoch-millis",
            TemporalValue::Utc(_) => "utc-date-time",
            TemporalValue::Fixed(_) => "fixed-offset-date-time",
            TemporalValue::Zoned(_) => "zoned-date-time",
            TemporalValue::LocalDateTime(_) => "local-date-time",
            TemporalValue::LocalDate(_) => "local-date",
            TemporalValue::TimeOfDay(_) => "time-of-day",
        }
    }
}

impl From<&str> for Literal {
    fn from(val: &str) -> Self {
        Literal::Text(val.to_string())
    }
}

impl From<String> for Literal {
    fn from(val: String) -> Self {
        Literal::Text(val)
    }
}

impl From<i32> for Literal {
    fn from(val: i32) -> Self {
        Literal::Integer(val)
    }
}

impl From<i64> for Literal {
    fn from(val: i64) -> Self {
        Literal::BigInt(val)
    }
}

impl From<f64> for Literal {
    fn from(val: f64) -> Self {
        Literal::Float(val)
    }
}

impl From<bool> for Literal {
    fn from(val: bool) -> Self {
        Literal::Boolean(val)
    }
}

impl From<TemporalValue> for Literal {
    fn from(val: TemporalValue) -> Self {
        Literal::Temporal(val)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(val: DateTime<Utc>) -> Self {
        Literal::Temporal(TemporalValue::Utc(val))
    }
}

impl From<NaiveDate> for Literal {
    fn from(val: NaiveDate) -> Self {
        Literal::Temporal(TemporalValue::LocalDate(val))
    }
}

impl<T> From<Option<T>> for Literal
where
    T: Into<Literal>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => Literal::Null,
        }
    }
}
