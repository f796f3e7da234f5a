//! Repository traits and the PostgreSQL-backed implementation
//!
//! `find_one` distinguishes "no match" from storage failure, and a query
//! matching more than one row from either.

use crate::errors::EntityStoreError;
use crate::identity::Identified;
use crate::predicate::Predicate;
use crate::sql::SqlGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{PgPool, Postgres};
use std::fmt::Debug;
use std::marker::PhantomData;
use type_coercion::ScalarValue;

/// Single-result lookup over compiled predicates
#[async_trait]
pub trait EntityRepository<T>: Send + Sync {
    /// Find at most one record matching the predicate.
    ///
    /// `Ok(None)` is "no match"; more than one match is
    /// `EntityStoreError::AmbiguousResult`; storage failures surface as
    /// their own error variants.
    async fn find_one(&self, predicate: &Predicate) -> Result<Option<T>, EntityStoreError>;
}

/// Storage metadata for an entity model
pub trait EntityModel:
    Identified + Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// The table name in the database
    fn table_name() -> &'static str;
}

/// PostgreSQL repository executing rendered predicates over a pool
#[derive(Clone)]
pub struct PgEntityRepository<T> {
    pool: PgPool,
    _phantom: PhantomData<T>,
}

impl<T> PgEntityRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl<T> Debug for PgEntityRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgEntityRepository").finish()
    }
}

#[async_trait]
impl<T> EntityRepository<T> for PgEntityRepository<T>
where
    T: EntityModel + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Unpin,
{
    async fn find_one(&self, predicate: &Predicate) -> Result<Option<T>, EntityStoreError> {
        let (clause, params) = SqlGenerator::build_where_clause(predicate);
        // LIMIT 2 is enough to tell one match from many
        let sql = format!("SELECT * FROM {} {} LIMIT 2", T::table_name(), clause);
        tracing::debug!("find_one on {}: {}", T::table_name(), sql);

        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_scalar(query, param);
        }
        let mut rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(EntityStoreError::Database)?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            _ => Err(EntityStoreError::AmbiguousResult),
        }
    }
}

fn bind_scalar<T>(
    query: sqlx::query::QueryAs<'_, Postgres, T, PgArguments>,
    value: ScalarValue,
) -> sqlx::query::QueryAs<'_, Postgres, T, PgArguments> {
    match value {
        ScalarValue::Text(s) => query.bind(s),
        ScalarValue::Integer(i) => query.bind(i),
        ScalarValue::BigInt(i) => query.bind(i),
        ScalarValue::Real(f) => query.bind(f),
        ScalarValue::Double(f) => query.bind(f),
        ScalarValue::Boolean(b) => query.bind(b),
        ScalarValue::EpochMillis(ms) => query.bind(ms),
        // enum columns bind by constant name
        ScalarValue::Enum { constant, .. } => query.bind(constant),
        ScalarValue::Null => query.bind(None::<String>),
    }
}
