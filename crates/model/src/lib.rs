//! Relational query model shared between the query builder and the
//! search document compiler.

pub mod ast;
pub mod core;
