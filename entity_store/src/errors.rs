use thiserror::Error;
use type_coercion::CoercionError;

#[derive(Error, Debug)]
pub enum EntityStoreError {
    /// A literal could not be reconciled with a declared field type
    #[error("invalid query: {0}")]
    Coercion(#[from] CoercionError),

    /// A membership expression broke the one-field-marker / one-value-list shape
    #[error("malformed membership expression: {0}")]
    MalformedMembership(String),

    /// A query node or operand shape outside the supported vocabulary
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A uniqueness group matched a row with a different identity
    #[error("duplicate entity for unique fields [{}]", .fields.join(", "))]
    DuplicateEntity { fields: Vec<String> },

    /// A single-result lookup matched more than one record
    #[error("query matched more than one record")]
    AmbiguousResult,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl EntityStoreError {
    /// Whether this is the duplicate-constraint business outcome rather
    /// than a query or storage failure
    pub fn is_duplicate(&self) -> bool {
        matches!(self, EntityStoreError::DuplicateEntity { .. })
    }
}
