use thiserror::Error;

/// Fatal, non-retryable coercion failures
///
/// Every variant names the offending type or value so callers can surface
/// a single distinguishable "invalid query" failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("unsupported type {declared} for value '{value}'")]
    UnsupportedFieldType { declared: String, value: String },

    #[error("no enum constant {enum_name}::{name}")]
    UnknownEnumConstant { enum_name: String, name: String },

    #[error("ordinal {ordinal} out of range for enum {enum_name} with {len} constants")]
    EnumOrdinalOutOfRange {
        enum_name: String,
        ordinal: i64,
        len: usize,
    },

    #[error("unsupported date subtype: {subtype}")]
    UnsupportedDateSubtype { subtype: String },
}
