//! Configuration options for the engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use condeval_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions { max_depth: 200 });
/// assert_eq!(engine.options().max_depth, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting depth, enforced both on the source text (brackets and
    /// unary operator runs) and on the evaluation stack.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
