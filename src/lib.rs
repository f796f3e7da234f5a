//! # Queryhaus
//!
//! A query-expression compiler with type coercion and declarative
//! duplicate-constraint checking for PostgreSQL.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queryhaus::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_file("queryhaus.toml")?;
//!     let schema = config.schema("user_profile").expect("declared entity");
//!
//!     // compile a filter into a backend-native predicate
//!     let filter = field("unique_field")
//!         .equal_to("a")
//!         .or(field("age").greater_than(18));
//!     let predicate = PredicateTranslator::new(&schema).compile(&filter)?;
//!
//!     let (sql, params) = SqlGenerator::build_where_clause(&predicate);
//!     println!("{} with {} parameters", sql, params.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod prelude;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, EntityConfig, EnumConfig};

// Re-export internal crates used in the public API
pub use entity_store;
pub use query_model;
pub use type_coercion;

// Re-export the main public types for convenience
pub use entity_store::{
    AccessorTable, DuplicateConstraintChecker, EntityId, EntityModel, EntityRepository,
    EntitySchema, EntityStoreError, FieldAccessor, Identified, PgEntityRepository, Predicate,
    PredicateTranslator, RelatedRecord, SqlGenerator, UniqueGroup,
};
pub use query_model::{field, CompareOp, Literal, Operand, Query, TemporalValue};
pub use type_coercion::{coerce, CoercionError, DeclaredType, EnumType, ScalarValue};

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
