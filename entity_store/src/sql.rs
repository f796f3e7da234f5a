//! SQL rendering for compiled predicates
//!
//! Produces a parameterized WHERE fragment with `$n` placeholders and the
//! values to bind, in placeholder order.

use crate::predicate::Predicate;
use type_coercion::ScalarValue;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build a WHERE clause from a compiled predicate
    pub fn build_where_clause(predicate: &Predicate) -> (String, Vec<ScalarValue>) {
        let mut values = Vec::new();
        let mut param_counter = 1;
        let sql = Self::build_predicate_sql(predicate, &mut values, &mut param_counter);
        (format!("WHERE {}", sql), values)
    }

    fn build_predicate_sql(
        predicate: &Predicate,
        values: &mut Vec<ScalarValue>,
        param_counter: &mut i32,
    ) -> String {
        match predicate {
            Predicate::And(left, right) => format!(
                "({} AND {})",
                Self::build_predicate_sql(left, values, param_counter),
                Self::build_predicate_sql(right, values, param_counter)
            ),
            Predicate::Or(left, right) => format!(
                "({} OR {})",
                Self::build_predicate_sql(left, values, param_counter),
                Self::build_predicate_sql(right, values, param_counter)
            ),
            Predicate::Not(inner) => format!(
                "NOT ({})",
                Self::build_predicate_sql(inner, values, param_counter)
            ),
            Predicate::Eq { path, value } => {
                Self::bind(path, "=", value, values, param_counter)
            }
            Predicate::NotEq { path, value } => {
                Self::bind(path, "!=", value, values, param_counter)
            }
            Predicate::IsNull { path } => format!("{} IS NULL", path),
            Predicate::IsNotNull { path } => format!("{} IS NOT NULL", path),
            Predicate::Lt { path, value } => Self::bind(path, "<", value, values, param_counter),
            Predicate::Lte { path, value } => Self::bind(path, "<=", value, values, param_counter),
            Predicate::Gt { path, value } => Self::bind(path, ">", value, values, param_counter),
            Predicate::Gte { path, value } => Self::bind(path, ">=", value, values, param_counter),
            Predicate::Like { path, pattern } => {
                values.push(ScalarValue::Text(pattern.clone()));
                let param = format!("${}", param_counter);
                *param_counter += 1;
                format!("{} LIKE {}", path, param)
            }
            Predicate::InSet { path, values: set } => {
                if set.is_empty() {
                    return "1=0".to_string(); // empty IN clause
                }
                let placeholders: Vec<String> = set
                    .iter()
                    .map(|_| {
                        let param = format!("${}", param_counter);
                        *param_counter += 1;
                        param
                    })
                    .collect();
                values.extend(set.iter().cloned());
                format!("{} IN ({})", path, placeholders.join(", "))
            }
        }
    }

    fn bind(
        path: &str,
        operator: &str,
        value: &ScalarValue,
        values: &mut Vec<ScalarValue>,
        param_counter: &mut i32,
    ) -> String {
        values.push(value.clone());
        let param = format!("${}", param_counter);
        *param_counter += 1;
        format!("{} {} {}", path, operator, param)
    }
}
