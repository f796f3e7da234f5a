//! Fluent construction of query expressions
//!
//! ```
//! use query_model::field;
//!
//! let filter = field("unique_field")
//!     .equal_to("a")
//!     .or(field("unique_field").equal_to("a1"));
//! assert_eq!(filter.definition(), "unique_field = a OR unique_field = a1");
//! ```

use crate::literal::Literal;
use crate::operands::Operand;
use crate::operations::{CompareOp, Query};

/// Start a query expression on a field path
pub fn field(path: impl Into<String>) -> FieldExpr {
    FieldExpr { path: path.into() }
}

/// A field path awaiting its comparison
#[derive(Debug, Clone)]
pub struct FieldExpr {
    path: String,
}

impl FieldExpr {
    fn compare(self, op: CompareOp, value: impl Into<Literal>) -> Query {
        Query::compare(op, Operand::Field(self.path), Operand::value(value))
    }

    /// `field = value`; a null value compiles to IS NULL
    pub fn equal_to(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Eq, value)
    }

    /// `field <> value`; a null value compiles to IS NOT NULL
    pub fn not_equal_to(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::NotEq, value)
    }

    pub fn greater_than(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Gt, value)
    }

    pub fn greater_or_equal(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Gte, value)
    }

    pub fn lower_than(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Lt, value)
    }

    pub fn lower_or_equal(self, value: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Lte, value)
    }

    /// `field LIKE pattern` with the pattern taken verbatim
    pub fn like(self, pattern: impl Into<Literal>) -> Query {
        self.compare(CompareOp::Like, pattern)
    }

    /// `field IN (values)`
    pub fn within<I, L>(self, values: I) -> Query
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Query::membership(vec![
            Operand::Field(self.path),
            Operand::value_list(values),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_shapes() {
        assert!(matches!(
            field("f").equal_to("a"),
            Query::Compare {
                op: CompareOp::Eq,
                ..
            }
        ));
        assert!(matches!(field("f").within(["a"]), Query::In { .. }));
    }

    #[test]
    fn test_within_keeps_field_marker_first() {
        let q = field("f").within(["a", "b"]);
        match q {
            Query::In { operands } => {
                assert_eq!(operands.len(), 2);
                assert!(matches!(&operands[0], Operand::Field(p) if p == "f"));
                assert!(matches!(&operands[1], Operand::ValueList(v) if v.len() == 2));
            }
            other => panic!("expected membership, got {}", other),
        }
    }
}
