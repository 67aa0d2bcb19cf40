use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default bound on AST nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a [`Compiler`](crate::Compiler).
///
/// Deserializable with every field optional, so hosts can embed it in their
/// own settings documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Deepest node level the compiler will visit before failing with
    /// `TooDeep`. The root node is level 0.
    pub max_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(())
    }
}
