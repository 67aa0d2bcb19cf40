//! Defines the node vocabulary of the relational query AST.

use crate::{
    ast::{attribute::Attribute, select::Core, select::Statement},
    core::value::Value,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A complete SELECT statement.
    Statement(Statement),

    /// One SELECT unit: projections and WHERE conditions.
    Core(Core),

    /// `left = right`, or `left IS NULL` when `right` is absent.
    Equality(Comparison),

    /// `left <> right`, or `left IS NOT NULL` when `right` is absent.
    NotEqual(Comparison),

    GreaterThan(Binary),
    GreaterThanOrEqual(Binary),
    LessThan(Binary),
    LessThanOrEqual(Binary),

    /// `left IN (right)`
    In(Binary),

    /// `left LIKE right`
    Matches(Binary),

    And(Binary),
    Or(Binary),
    Not(Box<Node>),

    Ascending(Box<Node>),
    Descending(Box<Node>),

    /// A column reference, e.g. `contacts.email`.
    Attribute(Attribute),

    /// A plain scalar, e.g. the `10` in `LIMIT 10`.
    Literal(Value),

    /// A scalar that the backend expects in quoted form.
    Quoted(Value),

    /// A scalar already cast to its column's type.
    Casted(Value),

    /// A raw SQL fragment, e.g. a projected column given by name.
    SqlLiteral(String),

    Bool(bool),

    /// A parenthesised expression, e.g. `(a OR b)`.
    Grouping(Box<Node>),

    /// A nested statement used as an expression.
    Subquery(Box<Statement>),

    /// A function call, e.g. `COUNT(id)`.
    NamedFunction { name: String, args: Vec<Node> },
}

/// Operands of an equality-like comparison. A missing `right` means NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: Box<Node>,
    pub right: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binary {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl Comparison {
    pub fn new(left: Node, right: Option<Node>) -> Self {
        Self {
            left: Box::new(left),
            right: right.map(Box::new),
        }
    }
}

impl Binary {
    pub fn new(left: Node, right: Node) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Node {
    /// The variant name, used to report where a translation failed.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Statement(_) => "Statement",
            Node::Core(_) => "Core",
            Node::Equality(_) => "Equality",
            Node::NotEqual(_) => "NotEqual",
            Node::GreaterThan(_) => "GreaterThan",
            Node::GreaterThanOrEqual(_) => "GreaterThanOrEqual",
            Node::LessThan(_) => "LessThan",
            Node::LessThanOrEqual(_) => "LessThanOrEqual",
            Node::In(_) => "In",
            Node::Matches(_) => "Matches",
            Node::And(_) => "And",
            Node::Or(_) => "Or",
            Node::Not(_) => "Not",
            Node::Ascending(_) => "Ascending",
            Node::Descending(_) => "Descending",
            Node::Attribute(_) => "Attribute",
            Node::Literal(_) => "Literal",
            Node::Quoted(_) => "Quoted",
            Node::Casted(_) => "Casted",
            Node::SqlLiteral(_) => "SqlLiteral",
            Node::Bool(_) => "Bool",
            Node::Grouping(_) => "Grouping",
            Node::Subquery(_) => "Subquery",
            Node::NamedFunction { .. } => "NamedFunction",
        }
    }

    /// Whether the node stands for a NULL scalar.
    pub fn is_null_literal(&self) -> bool {
        match self {
            Node::Literal(v) | Node::Quoted(v) | Node::Casted(v) => v.is_null(),
            _ => false,
        }
    }
}
