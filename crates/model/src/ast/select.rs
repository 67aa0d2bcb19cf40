//! Defines the statement-level nodes of a SELECT-like query.

use crate::ast::node::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// The SELECT units of the statement. Plain queries carry exactly one.
    pub cores: Vec<Core>,

    /// Sort terms, usually `Ascending`/`Descending` nodes.
    pub orders: Vec<Node>,

    /// The LIMIT expression.
    pub limit: Option<Box<Node>>,

    /// The OFFSET expression.
    pub offset: Option<Box<Node>>,
}

impl Statement {
    pub fn from_core(core: Core) -> Self {
        Self {
            cores: vec![core],
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Core {
    /// Projected columns or expressions, in SELECT order.
    pub projections: Vec<Node>,

    /// WHERE conditions, implicitly joined with AND.
    pub wheres: Vec<Node>,
}
