//! Declared entity schemas
//!
//! A schema maps field names to declared types and relation fields to the
//! related entity's schema. Path resolution walks dotted paths segment by
//! segment; anything unresolved yields `DeclaredType::Unknown`, which the
//! coercion layer turns into an IS NULL condition rather than an error.

use std::collections::BTreeMap;
use type_coercion::DeclaredType;

#[derive(Debug, Clone, Default)]
pub struct EntitySchema {
    name: String,
    fields: BTreeMap<String, DeclaredType>,
    relations: BTreeMap<String, EntitySchema>,
}

impl EntitySchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, declared: DeclaredType) -> Self {
        self.fields.insert(name.into(), declared);
        self
    }

    pub fn with_relation(mut self, name: impl Into<String>, related: EntitySchema) -> Self {
        self.relations.insert(name.into(), related);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self, name: &str) -> Option<&DeclaredType> {
        self.fields.get(name)
    }

    /// One relation hop
    pub fn related(&self, name: &str) -> Option<&EntitySchema> {
        self.relations.get(name)
    }

    /// Declared type of a dotted field path, of arbitrary depth
    pub fn declared_type(&self, path: &str) -> DeclaredType {
        match path.split_once('.') {
            None => self
                .fields
                .get(path)
                .cloned()
                .unwrap_or(DeclaredType::Unknown),
            Some((head, rest)) => match self.relations.get(head) {
                Some(related) => related.declared_type(rest),
                None => DeclaredType::Unknown,
            },
        }
    }
}
