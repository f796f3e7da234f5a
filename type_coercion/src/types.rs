//! Declared field types and coerced scalar values

use query_model::{Literal, TemporalValue};
use serde::{Deserialize, Serialize};

/// Statically declared type of an entity field
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredType {
    Text,
    Integer,
    BigInt,
    Boolean,
    Real,
    Double,
    /// The date/time family; coerced values are epoch milliseconds
    Timestamp,
    Enum(EnumType),
    /// Unresolved; coercion yields no value and callers emit IS NULL
    Unknown,
}

impl DeclaredType {
    /// Type name used in diagnostics
    pub fn name(&self) -> String {
        match self {
            DeclaredType::Text => "text".to_string(),
            DeclaredType::Integer => "integer".to_string(),
            DeclaredType::BigInt => "bigint".to_string(),
            DeclaredType::Boolean => "boolean".to_string(),
            DeclaredType::Real => "real".to_string(),
            DeclaredType::Double => "double".to_string(),
            DeclaredType::Timestamp => "timestamp".to_string(),
            DeclaredType::Enum(def) => format!("enum {}", def.name),
            DeclaredType::Unknown => "unknown".to_string(),
        }
    }
}

/// A declared enumeration: a name and its ordered constant list
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub constants: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, constants: Vec<String>) -> Self {
        Self {
            name: name.into(),
            constants,
        }
    }

    /// Ordinal position of a constant, by exact case-sensitive name
    pub fn ordinal_of(&self, constant: &str) -> Option<usize> {
        self.constants.iter().position(|c| c == constant)
    }

    pub fn constant_at(&self, ordinal: usize) -> Option<&str> {
        self.constants.get(ordinal).map(String::as_str)
    }
}

/// A coerced, backend-bindable scalar value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Boolean(bool),
    /// Milliseconds since the epoch
    EpochMillis(i64),
    Enum { enum_name: String, constant: String },
    Null,
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

/// Natural binding shape of a literal, without reinterpretation
impl From<&Literal> for ScalarValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => ScalarValue::Null,
            Literal::Text(s) => ScalarValue::Text(s.clone()),
            Literal::Integer(i) => ScalarValue::Integer(*i),
            Literal::BigInt(i) => ScalarValue::BigInt(*i),
            Literal::Float(f) => ScalarValue::Double(*f),
            Literal::Boolean(b) => ScalarValue::Boolean(*b),
            Literal::Temporal(t) => match crate::coerce::temporal_epoch_millis(t) {
                Ok(ms) => ScalarValue::EpochMillis(ms),
                // a time-of-day has no instant; bind its text form
                Err(_) => ScalarValue::Text(t.text_form()),
            },
            Literal::Enum {
                enum_name,
                constant,
            } => ScalarValue::Enum {
                enum_name: enum_name.clone(),
                constant: constant.clone(),
            },
        }
    }
}

impl From<Literal> for ScalarValue {
    fn from(literal: Literal) -> Self {
        ScalarValue::from(&literal)
    }
}
