//! Lowers a relational query AST into a search-query document.
//!
//! ```
//! use model::ast::{Attribute, AttributeKind, Core, Node, Statement};
//! use serde_json::json;
//!
//! let statement = Statement::from_core(Core {
//!     projections: vec![Node::Attribute(Attribute::new("id", AttributeKind::Integer))],
//!     wheres: vec![],
//! });
//!
//! let doc = search_dsl::to_search(&statement).unwrap();
//! assert_eq!(doc, json!({ "query": { "projection": [{ "name": "id" }] } }));
//! ```

use model::ast::{Node, Statement};

pub mod config;
pub mod document;
pub mod error;
pub mod quoting;
pub mod visitor;

pub use config::CompilerConfig;
pub use document::Document;
pub use error::{CompileError, ConfigError, NodePath};
pub use quoting::{Identity, QuotingPolicy, SqlQuoted};
pub use visitor::Compiler;

/// Compiles any supported node with the default configuration.
pub fn compile(node: &Node) -> Result<Document, CompileError> {
    Compiler::default().compile(node)
}

/// Compiles a statement into a full search document with the default configuration.
pub fn to_search(statement: &Statement) -> Result<Document, CompileError> {
    Compiler::default().to_search(statement)
}
