//! Query-to-predicate compilation
//!
//! Recursive descent over the query expression. Field paths are resolved
//! against the entity schema, literals are coerced against the declared
//! field types, and absent values fold into IS NULL / IS NOT NULL.

use crate::errors::EntityStoreError;
use crate::predicate::Predicate;
use crate::schema::EntitySchema;
use query_model::{CompareOp, Literal, Operand, Query};
use type_coercion::{coerce, DeclaredType, ScalarValue};

pub struct PredicateTranslator<'a> {
    schema: &'a EntitySchema,
}

impl<'a> PredicateTranslator<'a> {
    pub fn new(schema: &'a EntitySchema) -> Self {
        Self { schema }
    }

    /// Compile a query expression into a backend-native predicate
    pub fn compile(&self, query: &Query) -> Result<Predicate, EntityStoreError> {
        match query {
            Query::And(left, right) => Ok(Predicate::and(
                self.compile(left)?,
                self.compile(right)?,
            )),
            Query::Or(left, right) => Ok(Predicate::or(
                self.compile(left)?,
                self.compile(right)?,
            )),
            Query::Not(child) => Ok(Predicate::not(self.compile(child)?)),
            Query::Compare { op, field, value } => self.compile_comparison(*op, field, value),
            Query::In { operands } => self.compile_membership(operands),
        }
    }

    fn compile_comparison(
        &self,
        op: CompareOp,
        field: &Operand,
        value: &Operand,
    ) -> Result<Predicate, EntityStoreError> {
        let path = field.unwrap_parenthesis().definition();
        let literal = match value.unwrap_parenthesis() {
            Operand::Value(literal) => literal,
            other => {
                return Err(EntityStoreError::UnsupportedOperation(format!(
                    "comparison value must be a literal, got '{}'",
                    other.definition()
                )))
            }
        };

        match op {
            CompareOp::Eq => {
                match coerce(&self.schema.declared_type(&path), literal)? {
                    None => Ok(Predicate::IsNull { path }),
                    Some(value) => Ok(Predicate::Eq { path, value }),
                }
            }
            CompareOp::NotEq => {
                match coerce(&self.schema.declared_type(&path), literal)? {
                    None => Ok(Predicate::IsNotNull { path }),
                    Some(value) => Ok(Predicate::NotEq { path, value }),
                }
            }
            CompareOp::Lt | CompareOp::Lte | CompareOp::Gt | CompareOp::Gte => {
                let value = self.range_value(literal)?;
                Ok(match op {
                    CompareOp::Lt => Predicate::Lt { path, value },
                    CompareOp::Lte => Predicate::Lte { path, value },
                    CompareOp::Gt => Predicate::Gt { path, value },
                    _ => Predicate::Gte { path, value },
                })
            }
            CompareOp::Like => Ok(Predicate::Like {
                path,
                pattern: literal.text_form(),
            }),
        }
    }

    /// Value for a range comparison: date/time values compare directly,
    /// everything else parses its text form as a double
    fn range_value(&self, literal: &Literal) -> Result<ScalarValue, EntityStoreError> {
        let target = if matches!(literal, Literal::Temporal(_)) {
            DeclaredType::Timestamp
        } else {
            DeclaredType::Double
        };
        match coerce(&target, literal)? {
            Some(value) => Ok(value),
            None => Err(EntityStoreError::UnsupportedOperation(
                "range comparison requires a value".to_string(),
            )),
        }
    }

    fn compile_membership(&self, operands: &[Operand]) -> Result<Predicate, EntityStoreError> {
        let Some(first) = operands.first() else {
            return Err(EntityStoreError::MalformedMembership(
                "membership requires a field operand".to_string(),
            ));
        };
        let path = first.unwrap_parenthesis().definition();

        // flatten: one optional field marker, exactly one value list
        let mut field_seen = false;
        let mut flattened: Option<Vec<Literal>> = None;
        for operand in operands {
            match operand.unwrap_parenthesis() {
                Operand::Field(_) if !field_seen => field_seen = true,
                Operand::Field(name) => {
                    return Err(EntityStoreError::MalformedMembership(format!(
                        "second field reference '{}' where a value list was expected",
                        name
                    )))
                }
                Operand::ValueList(values) if flattened.is_none() => {
                    flattened = Some(values.clone())
                }
                Operand::ValueList(_) => {
                    return Err(EntityStoreError::MalformedMembership(
                        "more than one value list".to_string(),
                    ))
                }
                other => {
                    return Err(EntityStoreError::MalformedMembership(format!(
                        "invalid operand '{}', value list needed",
                        other.definition()
                    )))
                }
            }
        }
        let Some(values) = flattened else {
            return Err(EntityStoreError::MalformedMembership(
                "no value list operand".to_string(),
            ));
        };

        Ok(Predicate::InSet {
            path,
            values: values.iter().map(ScalarValue::from).collect(),
        })
    }
}

/// Compile a query against a schema in one call
pub fn compile(query: &Query, schema: &EntitySchema) -> Result<Predicate, EntityStoreError> {
    PredicateTranslator::new(schema).compile(query)
}
