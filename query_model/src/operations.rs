//! Query operations
//!
//! Nodes are immutable once built. Each node's `definition()` is a pure
//! function of its structure and doubles as the equality key: two trees
//! with the same definition are the same query.

use crate::operands::Operand;
use std::fmt;

/// Comparison operators for binary value operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
}

impl CompareOp {
    /// Textual symbol used in definitions
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Like => "LIKE",
        }
    }
}

/// A boolean-predicate query expression
#[derive(Debug, Clone)]
pub enum Query {
    And(Box<Query>, Box<Query>),
    Or(Box<Query>, Box<Query>),
    Not(Box<Query>),
    /// `<field> <op> <value>`
    Compare {
        op: CompareOp,
        field: Operand,
        value: Operand,
    },
    /// `<field> IN (<values>)`; operand 0 is the field
    In { operands: Vec<Operand> },
}

impl Query {
    pub fn compare(op: CompareOp, field: Operand, value: Operand) -> Self {
        Query::Compare { op, field, value }
    }

    pub fn membership(operands: Vec<Operand>) -> Self {
        Query::In { operands }
    }

    /// Conjunction with another query
    pub fn and(self, other: Query) -> Self {
        Query::And(Box::new(self), Box::new(other))
    }

    /// Disjunction with another query
    pub fn or(self, other: Query) -> Self {
        Query::Or(Box::new(self), Box::new(other))
    }

    /// Negation of this query
    pub fn not(self) -> Self {
        Query::Not(Box::new(self))
    }

    /// Canonical string form of the whole expression
    pub fn definition(&self) -> String {
        match self {
            Query::And(left, right) => {
                format!("{} AND {}", left.definition(), right.definition())
            }
            Query::Or(left, right) => {
                format!("{} OR {}", left.definition(), right.definition())
            }
            Query::Not(child) => format!("NOT ({})", child.definition()),
            Query::Compare { op, field, value } => format!(
                "{} {} {}",
                field.definition(),
                op.symbol(),
                value.definition()
            ),
            Query::In { operands } => {
                let field = operands
                    .first()
                    .map(Operand::definition)
                    .unwrap_or_default();
                let values = operands
                    .iter()
                    .skip(1)
                    .map(Operand::definition)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{} IN ({})", field, values)
            }
        }
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.definition() == other.definition()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition())
    }
}
