//! Per-type field accessor tables
//!
//! Constraint tokens are resolved through an explicit table of typed
//! accessors declared once per entity type. A scalar accessor reads a
//! field value off the entity; a relation accessor reads the related
//! value, whose own scalar fields are materialized as a `RelatedRecord`.

use query_model::Literal;
use std::collections::HashMap;

/// Scalar fields of a related entity, materialized for one-hop reads
#[derive(Debug, Clone, Default)]
pub struct RelatedRecord {
    fields: HashMap<String, Literal>,
}

impl RelatedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Literal> {
        self.fields.get(name)
    }
}

type ScalarFn<T> = Box<dyn Fn(&T) -> Literal + Send + Sync>;
type RelationFn<T> = Box<dyn Fn(&T) -> Option<RelatedRecord> + Send + Sync>;

pub enum FieldAccessor<T> {
    Scalar(ScalarFn<T>),
    Relation(RelationFn<T>),
}

/// Field name to accessor mapping for one entity type
pub struct AccessorTable<T> {
    accessors: HashMap<String, FieldAccessor<T>>,
}

impl<T> Default for AccessorTable<T> {
    fn default() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }
}

impl<T> AccessorTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scalar field accessor
    pub fn scalar(
        mut self,
        name: impl Into<String>,
        get: impl Fn(&T) -> Literal + Send + Sync + 'static,
    ) -> Self {
        self.accessors
            .insert(name.into(), FieldAccessor::Scalar(Box::new(get)));
        self
    }

    /// Register a relation accessor; `None` means the relation is not set
    pub fn relation(
        mut self,
        name: impl Into<String>,
        get: impl Fn(&T) -> Option<RelatedRecord> + Send + Sync + 'static,
    ) -> Self {
        self.accessors
            .insert(name.into(), FieldAccessor::Relation(Box::new(get)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldAccessor<T>> {
        self.accessors.get(name)
    }

    /// Resolve a constraint token to the entity's comparison value.
    ///
    /// A simple token reads a scalar field. A `local.inner` token reads
    /// the relation first: an absent relation contributes null, a present
    /// one reads the inner field off the related record. `None` means the
    /// token is unresolvable with this table.
    pub fn resolve_token(&self, entity: &T, token: &str) -> Option<Literal> {
        match token.split_once('.') {
            None => match self.get(token)? {
                FieldAccessor::Scalar(get) => Some(get(entity)),
                FieldAccessor::Relation(_) => None,
            },
            Some((local, inner)) => match self.get(local)? {
                FieldAccessor::Relation(get) => match get(entity) {
                    None => Some(Literal::Null),
                    Some(record) => record.field(inner).cloned(),
                },
                FieldAccessor::Scalar(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Profile {
        name: String,
        role: Option<(String, i32)>,
    }

    fn table() -> AccessorTable<Profile> {
        AccessorTable::new()
            .scalar("name", |p: &Profile| Literal::from(p.name.clone()))
            .relation("role", |p: &Profile| {
                p.role.as_ref().map(|(name, level)| {
                    RelatedRecord::new()
                        .with_field("name", name.clone())
                        .with_field("level", *level)
                })
            })
    }

    fn profile() -> Profile {
        Profile {
            name: "ada".to_string(),
            role: Some(("admin".to_string(), 3)),
        }
    }

    #[test]
    fn test_simple_token() {
        let value = table().resolve_token(&profile(), "name");
        assert_eq!(value, Some(Literal::Text("ada".to_string())));
    }

    #[test]
    fn test_relation_token() {
        let value = table().resolve_token(&profile(), "role.name");
        assert_eq!(value, Some(Literal::Text("admin".to_string())));
        let value = table().resolve_token(&profile(), "role.level");
        assert_eq!(value, Some(Literal::Integer(3)));
    }

    #[test]
    fn test_absent_relation_contributes_null() {
        let detached = Profile {
            name: "ada".to_string(),
            role: None,
        };
        let value = table().resolve_token(&detached, "role.name");
        assert_eq!(value, Some(Literal::Null));
    }

    #[test]
    fn test_unresolvable_tokens() {
        let entity = profile();
        let table = table();
        // unregistered field
        assert_eq!(table.resolve_token(&entity, "missing"), None);
        // relation token over a scalar accessor
        assert_eq!(table.resolve_token(&entity, "name.inner"), None);
        // scalar token over a relation accessor
        assert_eq!(table.resolve_token(&entity, "role"), None);
        // inner field absent on the related record
        assert_eq!(table.resolve_token(&entity, "role.missing"), None);
    }
}
