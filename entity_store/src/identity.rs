//! Entity identity
//!
//! The duplicate checker compares identities to tolerate a row matching
//! itself during an in-place update.

use std::fmt::{self, Display};
use uuid::Uuid;

/// Identity value covering the id shapes entities use
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Numeric(i64),
    Uuid(Uuid),
    Text(String),
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Numeric(n) => write!(f, "{}", n),
            EntityId::Uuid(uuid) => write!(f, "{}", uuid),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for EntityId {
    fn from(id: i32) -> Self {
        EntityId::Numeric(i64::from(id))
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Numeric(id)
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        EntityId::Uuid(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Text(id)
    }
}

/// Implemented by entities that expose their identity
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_and_equality() {
        assert_eq!(EntityId::from(5), EntityId::Numeric(5));
        assert_eq!(EntityId::from(5i64), EntityId::from(5));
        assert_ne!(EntityId::from(5), EntityId::from("5"));

        let id = Uuid::new_v4();
        assert_eq!(EntityId::from(id), EntityId::Uuid(id));
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityId::from(42).to_string(), "42");
        assert_eq!(EntityId::from("abc").to_string(), "abc");
    }
}
