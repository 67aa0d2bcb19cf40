//! The relational query AST produced by the query builder.
//!
//! The compiler only reads these types; it never builds or mutates them.

pub mod attribute;
pub mod node;
pub mod select;

pub use attribute::{Attribute, AttributeKind};
pub use node::{Binary, Comparison, Node};
pub use select::{Core, Statement};
