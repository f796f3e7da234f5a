//! Convenience re-exports for common Queryhaus usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Queryhaus ecosystem, making it easier to import everything you need
//! with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! // Now you have access to all the common Queryhaus types and traits
//! ```

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, EntityConfig, EnumConfig};

// Query expression model
pub use query_model::{field, CompareOp, Literal, Operand, Query, TemporalValue};

// Type coercion
pub use type_coercion::{coerce, CoercionError, DeclaredType, EnumType, ScalarValue};

// Predicate compilation and constraint checking
pub use entity_store::{
    AccessorTable, DuplicateConstraintChecker, EntityId, EntityModel, EntityRepository,
    EntitySchema, EntityStoreError, FieldAccessor, Identified, PgEntityRepository, Predicate,
    PredicateTranslator, RelatedRecord, SqlGenerator, UniqueGroup,
};

// Common external dependencies
pub use async_trait::async_trait;
pub use chrono;
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use sqlx;
pub use tokio;
pub use uuid::Uuid;

// Commonly used sqlx types
pub use sqlx::{FromRow, PgPool};
