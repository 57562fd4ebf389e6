//! Public API: validate and evaluate condition expressions.
//!
//! Both operations trim the expression, parse it, evaluate it against the
//! variable context and coerce the result to a boolean. They differ only in
//! how they report failure: [`validate_expression`] returns the message,
//! [`evaluate_expression`] returns `false`.
//!
//! # Example
//!
//! ```
//! use condeval_core::{Value, Variables, evaluate_expression, validate_expression};
//!
//! let mut variables = Variables::new();
//! variables.insert("name".to_string(), Value::from("alice"));
//!
//! assert!(evaluate_expression("match(name, '^AL', true)", &variables));
//! assert!(validate_expression("upper(name) == 'ALICE'", &variables).is_empty());
//! assert_eq!(
//!     validate_expression("nickname", &variables),
//!     vec!["Invalid identifier: 'nickname'".to_string()]
//! );
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::Error;
pub use options::EngineOptions;

use crate::values::Variables;

/// Validate an expression with the default engine.
///
/// An empty list means the expression is valid.
pub fn validate_expression(expression: &str, variables: &Variables) -> Vec<String> {
    Engine::default().validate(expression, variables)
}

/// Evaluate an expression with the default engine; `false` on any failure.
pub fn evaluate_expression(expression: &str, variables: &Variables) -> bool {
    Engine::default().evaluate(expression, variables)
}
