//! Pre-flight duplicate-constraint checking
//!
//! Runs each declared uniqueness group as a single-result lookup before a
//! write commits. This is a best-effort guard: it provides no isolation
//! of its own and must execute inside the transactional scope that guards
//! the pending write.

use crate::accessors::AccessorTable;
use crate::errors::EntityStoreError;
use crate::identity::Identified;
use crate::repository::EntityRepository;
use crate::schema::EntitySchema;
use crate::translator::PredicateTranslator;
use query_model::{field, Query};

/// An ordered set of field tokens that together must be unique.
///
/// A token containing `.` encodes `<relation-field>.<field-on-related>`,
/// exactly one hop deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueGroup {
    pub fields: Vec<String>,
}

impl UniqueGroup {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Checks whether a candidate entity collides with an already persisted
/// row on any declared uniqueness group.
pub struct DuplicateConstraintChecker;

impl DuplicateConstraintChecker {
    /// Run every uniqueness group against the repository.
    ///
    /// Groups are evaluated in order; the first collision wins and is
    /// reported as `EntityStoreError::DuplicateEntity` naming the group's
    /// tokens. A group whose token cannot be resolved through the
    /// accessor table is skipped, not failed. A match carrying the
    /// candidate's own identity passes, so in-place updates survive the
    /// check. Storage failures propagate unchanged.
    pub async fn check<T, R>(
        &self,
        entity: &T,
        schema: &EntitySchema,
        groups: &[UniqueGroup],
        accessors: &AccessorTable<T>,
        repository: &R,
    ) -> Result<(), EntityStoreError>
    where
        T: Identified + Sync,
        R: EntityRepository<T> + ?Sized,
    {
        tracing::debug!("checking duplicates for entity type {}", schema.name());
        'groups: for group in groups {
            let mut filter: Option<Query> = None;
            for token in &group.fields {
                let Some(value) = accessors.resolve_token(entity, token) else {
                    tracing::debug!(
                        "could not resolve constraint field {} on {}, skipping duplicate check",
                        token,
                        schema.name()
                    );
                    continue 'groups;
                };
                // null values compile to IS NULL conditions
                let condition = field(token.as_str()).equal_to(value);
                filter = Some(match filter {
                    None => condition,
                    Some(existing) => existing.and(condition),
                });
            }
            let Some(filter) = filter else {
                continue;
            };

            tracing::debug!("executing duplicate check query: {}", filter);
            let predicate = PredicateTranslator::new(schema).compile(&filter)?;
            match repository.find_one(&predicate).await? {
                None => {}
                // the only match is the candidate itself
                Some(found) if found.entity_id() == entity.entity_id() => {}
                Some(_) => {
                    return Err(EntityStoreError::DuplicateEntity {
                        fields: group.fields.clone(),
                    })
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessors::RelatedRecord;
    use crate::identity::EntityId;
    use crate::predicate::Predicate;
    use async_trait::async_trait;
    use query_model::Literal;
    use type_coercion::{DeclaredType, ScalarValue};

    #[derive(Debug, Clone)]
    struct TestEntity {
        id: i64,
        unique_field: String,
        combined1: String,
        combined2: String,
        role: Option<String>,
    }

    impl Identified for TestEntity {
        fn entity_id(&self) -> EntityId {
            EntityId::from(self.id)
        }
    }

    fn schema() -> EntitySchema {
        EntitySchema::new("test_entity")
            .with_field("unique_field", DeclaredType::Text)
            .with_field("combined1", DeclaredType::Text)
            .with_field("combined2", DeclaredType::Text)
            .with_relation(
                "role",
                EntitySchema::new("role").with_field("name", DeclaredType::Text),
            )
    }

    fn accessors() -> AccessorTable<TestEntity> {
        AccessorTable::new()
            .scalar("unique_field", |e: &TestEntity| {
                Literal::from(e.unique_field.clone())
            })
            .scalar("combined1", |e: &TestEntity| Literal::from(e.combined1.clone()))
            .scalar("combined2", |e: &TestEntity| Literal::from(e.combined2.clone()))
            .relation("role", |e: &TestEntity| {
                e.role
                    .as_ref()
                    .map(|name| RelatedRecord::new().with_field("name", name.clone()))
            })
    }

    fn entity(id: i64, unique_field: &str, combined1: &str, combined2: &str) -> TestEntity {
        TestEntity {
            id,
            unique_field: unique_field.to_string(),
            combined1: combined1.to_string(),
            combined2: combined2.to_string(),
            role: None,
        }
    }

    /// Repository over a vector of rows, evaluating equality predicates
    /// structurally the way a storage engine would
    struct RowRepository {
        rows: Vec<TestEntity>,
    }

    impl RowRepository {
        fn field_value(row: &TestEntity, path: &str) -> Option<ScalarValue> {
            match path {
                "unique_field" => Some(ScalarValue::Text(row.unique_field.clone())),
                "combined1" => Some(ScalarValue::Text(row.combined1.clone())),
                "combined2" => Some(ScalarValue::Text(row.combined2.clone())),
                "role.name" => row.role.as_ref().map(|n| ScalarValue::Text(n.clone())),
                _ => None,
            }
        }

        fn matches(predicate: &Predicate, row: &TestEntity) -> bool {
            match predicate {
                Predicate::And(left, right) => {
                    Self::matches(left, row) && Self::matches(right, row)
                }
                Predicate::Eq { path, value } => {
                    Self::field_value(row, path).as_ref() == Some(value)
                }
                Predicate::IsNull { path } => Self::field_value(row, path).is_none(),
                _ => false,
            }
        }
    }

    #[async_trait]
    impl EntityRepository<TestEntity> for RowRepository {
        async fn find_one(
            &self,
            predicate: &Predicate,
        ) -> Result<Option<TestEntity>, EntityStoreError> {
            let mut matches = self
                .rows
                .iter()
                .filter(|row| Self::matches(predicate, row))
                .cloned();
            match (matches.next(), matches.next()) {
                (None, _) => Ok(None),
                (Some(row), None) => Ok(Some(row)),
                (Some(_), Some(_)) => Err(EntityStoreError::AmbiguousResult),
            }
        }
    }

    /// Repository that always fails, for error propagation tests
    struct FailingRepository;

    #[async_trait]
    impl EntityRepository<TestEntity> for FailingRepository {
        async fn find_one(
            &self,
            _predicate: &Predicate,
        ) -> Result<Option<TestEntity>, EntityStoreError> {
            Err(EntityStoreError::AmbiguousResult)
        }
    }

    fn groups() -> Vec<UniqueGroup> {
        vec![
            UniqueGroup::new(["unique_field"]),
            UniqueGroup::new(["combined1", "combined2"]),
        ]
    }

    #[tokio::test]
    async fn test_simple_field_collision() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a", "x", "y");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups(), &accessors(), &repository)
            .await;
        match result {
            Err(EntityStoreError::DuplicateEntity { fields }) => {
                assert_eq!(fields, vec!["unique_field".to_string()]);
            }
            other => panic!("expected a collision, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_compound_pair_collision() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a1", "b", "c");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups(), &accessors(), &repository)
            .await;
        match result {
            Err(EntityStoreError::DuplicateEntity { fields }) => {
                assert_eq!(
                    fields,
                    vec!["combined1".to_string(), "combined2".to_string()]
                );
            }
            other => panic!("expected a collision, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_no_match_passes() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a1", "b1", "c");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups(), &accessors(), &repository)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_self_match_passes() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        // same identity: an in-place update of the stored row
        let candidate = entity(1, "a", "b", "c");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups(), &accessors(), &repository)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unresolvable_token_skips_group() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a", "b", "c");
        // the first group names a token with no accessor and is skipped,
        // the second still fires
        let groups = vec![
            UniqueGroup::new(["not_implemented"]),
            UniqueGroup::new(["combined1", "combined2"]),
        ];
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups, &accessors(), &repository)
            .await;
        match result {
            Err(EntityStoreError::DuplicateEntity { fields }) => {
                assert_eq!(
                    fields,
                    vec!["combined1".to_string(), "combined2".to_string()]
                );
            }
            other => panic!("expected a collision, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_only_unresolvable_groups_pass() {
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a", "b", "c");
        let groups = vec![UniqueGroup::new(["not_implemented"])];
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups, &accessors(), &repository)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_relation_token_matches_on_related_field() {
        let mut stored = entity(1, "a", "b", "c");
        stored.role = Some("admin".to_string());
        let repository = RowRepository { rows: vec![stored] };

        let mut candidate = entity(2, "a1", "b1", "c1");
        candidate.role = Some("admin".to_string());
        let groups = vec![UniqueGroup::new(["role.name"])];
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups, &accessors(), &repository)
            .await;
        match result {
            Err(EntityStoreError::DuplicateEntity { fields }) => {
                assert_eq!(fields, vec!["role.name".to_string()]);
            }
            other => panic!("expected a collision, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_absent_relation_compares_as_null() {
        // stored row also has no role, so IS NULL matches it
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a1", "b1", "c1");
        let groups = vec![UniqueGroup::new(["role.name"])];
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups, &accessors(), &repository)
            .await;
        assert!(matches!(
            result,
            Err(EntityStoreError::DuplicateEntity { .. })
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let candidate = entity(2, "a", "b", "c");
        let result = DuplicateConstraintChecker
            .check(
                &candidate,
                &schema(),
                &groups(),
                &accessors(),
                &FailingRepository,
            )
            .await;
        assert!(matches!(result, Err(EntityStoreError::AmbiguousResult)));
    }

    #[tokio::test]
    async fn test_first_collision_wins() {
        // both groups would collide; only the first is reported
        let repository = RowRepository {
            rows: vec![entity(1, "a", "b", "c")],
        };
        let candidate = entity(2, "a", "b", "c");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &groups(), &accessors(), &repository)
            .await;
        match result {
            Err(EntityStoreError::DuplicateEntity { fields }) => {
                assert_eq!(fields, vec!["unique_field".to_string()]);
            }
            other => panic!("expected a collision, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_empty_group_list_passes() {
        let repository = RowRepository { rows: vec![] };
        let candidate = entity(1, "a", "b", "c");
        let result = DuplicateConstraintChecker
            .check(&candidate, &schema(), &[], &accessors(), &repository)
            .await;
        assert!(result.is_ok());
    }
}
