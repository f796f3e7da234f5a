//! Operands appearing inside query operations

use crate::literal::Literal;
use std::fmt;

/// A leaf value inside a query operation
#[derive(Debug, Clone)]
pub enum Operand {
    /// A dot-separated field path, possibly crossing relation hops
    Field(String),
    /// A single literal value
    Value(Literal),
    /// An ordered list of literal values
    ValueList(Vec<Literal>),
    /// A grouping wrapper around a single operand
    Parenthesis(Box<Operand>),
}

impl Operand {
    pub fn field(path: impl Into<String>) -> Self {
        Operand::Field(path.into())
    }

    pub fn value(literal: impl Into<Literal>) -> Self {
        Operand::Value(literal.into())
    }

    pub fn value_list<I, L>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Operand::ValueList(values.into_iter().map(Into::into).collect())
    }

    pub fn parenthesis(inner: Operand) -> Self {
        Operand::Parenthesis(Box::new(inner))
    }

    /// Strip a parenthesis wrapper, exactly one level
    pub fn unwrap_parenthesis(&self) -> &Operand {
        match self {
            Operand::Parenthesis(inner) => inner,
            other => other,
        }
    }

    /// Canonical string form of the operand
    pub fn definition(&self) -> String {
        match self {
            Operand::Field(path) => path.clone(),
            Operand::Value(literal) => literal.text_form(),
            Operand::ValueList(values) => values
                .iter()
                .map(Literal::text_form)
                .collect::<Vec<_>>()
                .join(","),
            Operand::Parenthesis(inner) => format!("({})", inner.definition()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition())
    }
}
