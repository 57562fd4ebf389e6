//! Validation and evaluation entry points.

use tracing::debug;

use crate::{
    api::{EngineOptions, Error},
    evaluator::{self, EvalError},
    parser,
    values::{Value, Variables},
};

/// Validates and evaluates expressions against a variable context.
///
/// An engine holds no state besides its options and can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use condeval_core::{Engine, Value, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("count".to_string(), Value::from(3));
///
/// let engine = Engine::default();
/// assert!(engine.evaluate("count > 2", &variables));
/// assert_eq!(engine.validate("count > '2'", &variables).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse and evaluate `expression`, then coerce the result to a boolean.
    ///
    /// Surrounding whitespace is ignored. `null` coerces to `false`; an
    /// object result is an error; everything else uses standard truthiness.
    pub fn check(&self, expression: &str, variables: &Variables) -> Result<bool, Error> {
        let source = expression.trim();
        let expr = parser::parse_with_max_depth(source, self.options.max_depth)?;
        let value = evaluator::eval_with_limits(&expr, variables, self.options.max_depth)?;

        match value {
            Value::Null => Ok(false),
            Value::Object(_) => Err(EvalError::ObjectResult.into()),
            other => Ok(other.is_truthy()),
        }
    }

    /// Validate `expression`.
    ///
    /// Returns an empty list when the expression is valid, otherwise a single
    /// message describing the first problem found.
    pub fn validate(&self, expression: &str, variables: &Variables) -> Vec<String> {
        match self.check(expression, variables) {
            Ok(_) => Vec::new(),
            Err(err) => {
                debug!(expression, error = %err, "Expression is invalid");
                vec![err.to_string()]
            }
        }
    }

    /// Evaluate `expression` to a boolean.
    ///
    /// Any failure yields `false`; use [`Engine::validate`] to tell an
    /// invalid expression apart from a false one.
    pub fn evaluate(&self, expression: &str, variables: &Variables) -> bool {
        match self.check(expression, variables) {
            Ok(result) => result,
            Err(err) => {
                debug!(expression, error = %err, "Expression evaluated to false after error");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
