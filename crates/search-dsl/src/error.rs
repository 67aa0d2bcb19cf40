use std::fmt;
use thiserror::Error;

/// Errors raised while lowering an AST into a search document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The node has no translation into the search grammar.
    #[error("Unsupported node `{kind}` at {path}")]
    UnsupportedNode { kind: &'static str, path: NodePath },

    /// The AST nests deeper than the configured limit.
    #[error("Nesting exceeds the limit of {limit} levels at {path}")]
    TooDeep { limit: usize, path: NodePath },

    /// A node's children do not have the shape its translation expects.
    #[error("Invalid `{kind}` node at {path}: {reason}")]
    InvalidShape {
        kind: &'static str,
        reason: String,
        path: NodePath,
    },
}

impl CompileError {
    pub fn unsupported(kind: &'static str) -> Self {
        CompileError::UnsupportedNode {
            kind,
            path: NodePath::default(),
        }
    }

    pub fn too_deep(limit: usize) -> Self {
        CompileError::TooDeep {
            limit,
            path: NodePath::default(),
        }
    }

    pub fn invalid_shape(kind: &'static str, reason: impl Into<String>) -> Self {
        CompileError::InvalidShape {
            kind,
            reason: reason.into(),
            path: NodePath::default(),
        }
    }

    pub fn path(&self) -> &NodePath {
        match self {
            CompileError::UnsupportedNode { path, .. }
            | CompileError::TooDeep { path, .. }
            | CompileError::InvalidShape { path, .. } => path,
        }
    }

    /// Records that the error surfaced while visiting a node of `kind`.
    /// Called innermost first, so segments are prepended.
    pub(crate) fn within(mut self, kind: &'static str) -> Self {
        match &mut self {
            CompileError::UnsupportedNode { path, .. }
            | CompileError::TooDeep { path, .. }
            | CompileError::InvalidShape { path, .. } => path.segments.insert(0, kind),
        }
        self
    }
}

/// Node kinds from the root down to the node that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<&'static str>,
}

impl NodePath {
    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.segments.join(" > "))
    }
}

/// Errors raised when validating a compiler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,
}
