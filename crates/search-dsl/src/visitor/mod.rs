//! Dispatches AST nodes to their translations and owns the compiler state.

use crate::{
    config::CompilerConfig,
    document::{self, Document},
    error::{CompileError, ConfigError},
    quoting::{Identity, QuotingPolicy},
};
use model::ast::{Node, Statement};
use std::{fmt, sync::Arc};
use tracing::{debug, trace};

mod clause;
mod expr;
mod predicate;

/// Lowers relational AST nodes into search documents.
///
/// A compiler holds only its configuration and quoting policy. Every call
/// builds a fresh document, so one compiler can be shared across threads.
#[derive(Clone)]
pub struct Compiler {
    config: CompilerConfig,
    quoting: Arc<dyn QuotingPolicy>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            config: CompilerConfig::default(),
            quoting: Arc::new(Identity),
        }
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("config", &self.config)
            .field("quoting", &self.quoting.name())
            .finish()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompilerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn with_quoting(mut self, policy: impl QuotingPolicy + 'static) -> Self {
        self.quoting = Arc::new(policy);
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Translates `node` into its document fragment. A `Statement` yields a
    /// full document; a predicate yields the bare predicate fragment.
    pub fn compile(&self, node: &Node) -> Result<Document, CompileError> {
        debug!(root = node.kind(), "compiling search document");

        match self.visit(node, 0) {
            Ok(doc) => {
                debug!(root = node.kind(), "compiled search document");
                Ok(doc)
            }
            Err(err) => {
                debug!(root = node.kind(), error = %err, "search document compilation failed");
                Err(err)
            }
        }
    }

    /// Translates a statement without wrapping it in a `Node` first.
    pub fn to_search(&self, statement: &Statement) -> Result<Document, CompileError> {
        debug!(cores = statement.cores.len(), "compiling search statement");

        self.visit_statement(statement, 0)
            .map_err(|err| err.within("Statement"))
    }

    /// The single entry point for recursion. Child translations call back
    /// into `visit` with `depth + 1`.
    pub(crate) fn visit(&self, node: &Node, depth: usize) -> Result<Document, CompileError> {
        trace!(kind = node.kind(), depth, "visiting node");

        let result = if depth > self.config.max_depth {
            Err(CompileError::too_deep(self.config.max_depth))
        } else {
            self.dispatch(node, depth)
        };

        result.map_err(|err| err.within(node.kind()))
    }

    fn dispatch(&self, node: &Node, depth: usize) -> Result<Document, CompileError> {
        match node {
            Node::Statement(statement) => self.visit_statement(statement, depth),
            Node::Core(core) => {
                let query = self.visit_core(core, depth)?;
                let mut doc = serde_json::Map::new();
                doc.insert(document::QUERY.to_string(), Document::Object(query));
                Ok(Document::Object(doc))
            }
            Node::Subquery(statement) => self.visit_statement(statement, depth),

            Node::Equality(cmp) => self.visit_equality(cmp, depth),
            Node::NotEqual(cmp) => self.visit_not_equal(cmp, depth),
            Node::And(binary) => self.visit_and(binary, depth),
            Node::Or(binary) => self.visit_or(binary, depth),
            Node::Ascending(expr) => self.visit_ascending(expr, depth),
            Node::Descending(expr) => self.visit_descending(expr, depth),

            Node::Attribute(attr) => Ok(self.visit_attribute(attr)),
            Node::Literal(value) | Node::Casted(value) => self.visit_scalar(node.kind(), value),
            Node::Quoted(value) => Ok(self.visit_quoted(value)),
            Node::SqlLiteral(text) => Ok(self.visit_sql_literal(text)),
            Node::Bool(b) => Ok(self.visit_bool(*b)),
            Node::Grouping(inner) => self.visit(inner, depth + 1),

            Node::GreaterThan(_)
            | Node::GreaterThanOrEqual(_)
            | Node::LessThan(_)
            | Node::LessThanOrEqual(_)
            | Node::In(_)
            | Node::Matches(_)
            | Node::Not(_)
            | Node::NamedFunction { .. } => Err(CompileError::unsupported(node.kind())),
        }
    }

    /// Translates `node` and requires the result to be a bare name, as
    /// attributes and SQL literals produce.
    pub(crate) fn visit_name(
        &self,
        node: &Node,
        depth: usize,
        owner: &'static str,
        role: &str,
    ) -> Result<String, CompileError> {
        match self.visit(node, depth)? {
            Document::String(name) => Ok(name),
            _ => Err(CompileError::invalid_shape(
                owner,
                format!("{role} must resolve to an attribute name, got `{}`", node.kind()),
            )),
        }
    }
}
