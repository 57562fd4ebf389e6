//! Tree-walking evaluator for condition expressions.
//!
//! The evaluator walks a parsed [`Expr`] and produces a [`Value`], checking
//! every operator against the type matrix and every call against the builtin
//! registry.
//!
//! ## Design Principles
//!
//! - **Never panic**: adversarial input only ever produces an [`EvalError`]
//! - **Stack-safe**: depth tracking bounds recursion on deeply nested trees
//! - **Read-only**: the variable context is borrowed, never modified
//!
//! ## Example
//!
//! ```
//! use condeval_core::{Value, Variables, evaluator, parser};
//!
//! let mut variables = Variables::new();
//! variables.insert("x".to_string(), Value::from(41));
//!
//! let expr = parser::parse("x + 1").unwrap();
//! let result = evaluator::eval(&expr, &variables).unwrap();
//! assert_eq!(result, Value::from(42));
//! ```

mod error;
mod eval;
mod operators;
pub(crate) mod scope;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;
pub use eval::Evaluator;

use crate::{
    parser::{DEFAULT_MAX_DEPTH, Expr},
    values::{Value, Variables},
};

/// Evaluate an expression with the default depth limit.
pub fn eval(expr: &Expr, variables: &Variables) -> Result<Value, EvalError> {
    eval_with_limits(expr, variables, DEFAULT_MAX_DEPTH)
}

/// Evaluate an expression with a custom depth limit.
pub fn eval_with_limits(
    expr: &Expr,
    variables: &Variables,
    max_depth: usize,
) -> Result<Value, EvalError> {
    Evaluator::new(variables, max_depth)
        .eval_expr(expr)
        .map(|value| value.into_owned())
}
