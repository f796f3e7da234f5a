//! Type Coercion - Literal normalization against declared field types
//!
//! This crate reconciles loosely-typed literal input against statically
//! declared field types, producing backend-bindable scalar values.

pub mod coerce;
pub mod errors;
pub mod types;

pub use coerce::{coerce, temporal_epoch_millis};
pub use errors::CoercionError;
pub use types::{DeclaredType, EnumType, ScalarValue};
