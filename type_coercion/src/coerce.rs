//! Literal-to-declared-type coercion
//!
//! `coerce` is pure and stateless; it never touches storage and is safe
//! for unrestricted parallel invocation.

use crate::errors::CoercionError;
use crate::types::{DeclaredType, EnumType, ScalarValue};
use chrono::{Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone};
use query_model::{Literal, TemporalValue};
use std::str::FromStr;

/// Normalize a literal against a declared field type.
///
/// `Ok(None)` is the "no value" outcome, returned when the literal is null
/// or the target type is unresolved; callers emit an IS NULL condition.
pub fn coerce(
    target: &DeclaredType,
    literal: &Literal,
) -> Result<Option<ScalarValue>, CoercionError> {
    if literal.is_null() {
        return Ok(None);
    }
    let value = match target {
        DeclaredType::Unknown => return Ok(None),
        DeclaredType::Text => ScalarValue::from(literal),
        DeclaredType::Integer => ScalarValue::Integer(parse_number(target, literal)?),
        DeclaredType::BigInt => ScalarValue::BigInt(parse_number(target, literal)?),
        DeclaredType::Boolean => {
            // canonical token rule: "true" in any ASCII case, anything else false
            ScalarValue::Boolean(literal.text_form().eq_ignore_ascii_case("true"))
        }
        DeclaredType::Real => ScalarValue::Real(parse_number(target, literal)?),
        DeclaredType::Double => ScalarValue::Double(parse_number(target, literal)?),
        DeclaredType::Timestamp => ScalarValue::EpochMillis(literal_epoch_millis(literal)?),
        DeclaredType::Enum(def) => coerce_enum(def, literal)?,
    };
    Ok(Some(value))
}

/// Parse the literal's text form as base-10
fn parse_number<N: FromStr>(
    target: &DeclaredType,
    literal: &Literal,
) -> Result<N, CoercionError> {
    let text = literal.text_form();
    text.parse::<N>()
        .map_err(|_| CoercionError::UnsupportedFieldType {
            declared: target.name(),
            value: text,
        })
}

fn literal_epoch_millis(literal: &Literal) -> Result<i64, CoercionError> {
    match literal {
        Literal::Temporal(value) => temporal_epoch_millis(value),
        other => Err(CoercionError::UnsupportedDateSubtype {
            subtype: other.kind().to_string(),
        }),
    }
}

/// Normalize a temporal value to milliseconds since the epoch.
///
/// A time-of-day carries no date and cannot be normalized.
pub fn temporal_epoch_millis(value: &TemporalValue) -> Result<i64, CoercionError> {
    match value {
        TemporalValue::EpochMillis(ms) => Ok(*ms),
        TemporalValue::Utc(dt) => Ok(dt.timestamp_millis()),
        TemporalValue::Fixed(dt) => Ok(dt.timestamp_millis()),
        TemporalValue::Zoned(dt) => Ok(dt.timestamp_millis()),
        TemporalValue::LocalDateTime(dt) => local_instant_millis(*dt, value),
        TemporalValue::LocalDate(d) => local_instant_millis(d.and_time(NaiveTime::MIN), value),
        TemporalValue::TimeOfDay(_) => Err(CoercionError::UnsupportedDateSubtype {
            subtype: value.subtype_name().to_string(),
        }),
    }
}

/// Resolve a naive date-time in the system's default zone
fn local_instant_millis(dt: NaiveDateTime, origin: &TemporalValue) -> Result<i64, CoercionError> {
    match Local.from_local_datetime(&dt) {
        LocalResult::Single(resolved) | LocalResult::Ambiguous(resolved, _) => {
            Ok(resolved.timestamp_millis())
        }
        // the local time falls into a zone transition gap and names no instant
        LocalResult::None => Err(CoercionError::UnsupportedDateSubtype {
            subtype: origin.subtype_name().to_string(),
        }),
    }
}

fn coerce_enum(def: &EnumType, literal: &Literal) -> Result<ScalarValue, CoercionError> {
    match literal {
        // already an instance of the target enum
        Literal::Enum {
            enum_name,
            constant,
        } if enum_name == &def.name => {
            if def.ordinal_of(constant).is_some() {
                Ok(ScalarValue::Enum {
                    enum_name: enum_name.clone(),
                    constant: constant.clone(),
                })
            } else {
                Err(CoercionError::UnknownEnumConstant {
                    enum_name: def.name.clone(),
                    name: constant.clone(),
                })
            }
        }
        // exact case-sensitive constant-name match
        Literal::Text(name) => match def.ordinal_of(name) {
            Some(_) => Ok(ScalarValue::Enum {
                enum_name: def.name.clone(),
                constant: name.clone(),
            }),
            None => {
                tracing::error!("no enum constant {} in {}", name, def.name);
                Err(CoercionError::UnknownEnumConstant {
                    enum_name: def.name.clone(),
                    name: name.clone(),
                })
            }
        },
        // integral numbers are ordinal indexes
        Literal::Integer(i) => enum_by_ordinal(def, i64::from(*i)),
        Literal::BigInt(i) => enum_by_ordinal(def, *i),
        other => Err(CoercionError::UnsupportedFieldType {
            declared: DeclaredType::Enum(def.clone()).name(),
            value: other.text_form(),
        }),
    }
}

fn enum_by_ordinal(def: &EnumType, ordinal: i64) -> Result<ScalarValue, CoercionError> {
    let constant = usize::try_from(ordinal)
        .ok()
        .and_then(|i| def.constant_at(i));
    match constant {
        Some(constant) => Ok(ScalarValue::Enum {
            enum_name: def.name.clone(),
            constant: constant.to_string(),
        }),
        None => Err(CoercionError::EnumOrdinalOutOfRange {
            enum_name: def.name.clone(),
            ordinal,
            len: def.constants.len(),
        }),
    }
}
