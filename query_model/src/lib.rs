//! Query Model - Boolean-predicate expression trees for Queryhaus
//!
//! This crate provides the query AST consumed by the predicate translator:
//! operations, operands, literal scalar values, and a fluent builder.

pub mod builder;
pub mod literal;
pub mod operands;
pub mod operations;

pub use builder::{field, FieldExpr};
pub use literal::{Literal, TemporalValue};
pub use operands::Operand;
pub use operations::{CompareOp, Query};
