//! Backend-native predicates
//!
//! The compiled form of a query expression: field paths paired with fully
//! coerced values, ready for SQL rendering or structural evaluation.

use type_coercion::ScalarValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
    Eq { path: String, value: ScalarValue },
    NotEq { path: String, value: ScalarValue },
    IsNull { path: String },
    IsNotNull { path: String },
    Lt { path: String, value: ScalarValue },
    Lte { path: String, value: ScalarValue },
    Gt { path: String, value: ScalarValue },
    Gte { path: String, value: ScalarValue },
    Like { path: String, pattern: String },
    InSet { path: String, values: Vec<ScalarValue> },
}

impl Predicate {
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }
}
