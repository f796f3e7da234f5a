//! Entity Store - Predicate compilation and duplicate-constraint checking
//!
//! This crate turns query expressions into backend-native predicates
//! against declared entity schemas, renders them to parameterized SQL, and
//! provides the pre-flight duplicate-constraint checker that runs declared
//! uniqueness groups through a repository before a write commits.

pub mod accessors;
pub mod constraints;
pub mod errors;
pub mod identity;
pub mod predicate;
pub mod repository;
pub mod schema;
pub mod sql;
pub mod translator;

pub use accessors::{AccessorTable, FieldAccessor, RelatedRecord};
pub use constraints::{DuplicateConstraintChecker, UniqueGroup};
pub use errors::EntityStoreError;
pub use identity::{EntityId, Identified};
pub use predicate::Predicate;
pub use repository::{EntityModel, EntityRepository, PgEntityRepository};
pub use schema::EntitySchema;
pub use sql::SqlGenerator;
pub use translator::{compile, PredicateTranslator};
