//! Search document compiler tests
//!
//! These tests build relational ASTs the way a query builder would and check
//! the documents the compiler lowers them into.

mod common;
mod statements;
