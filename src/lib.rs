//! condeval - sandboxed condition expressions
//!
//! # Overview
//!
//! condeval checks and runs small, user-authored condition strings against a
//! set of named variables. Typical uses:
//!
//! - Visibility rules and feature flags
//! - Filters over records loaded from JSON
//! - Alert and notification conditions
//!
//! Expressions can only read the variables they are given and call a fixed
//! library of functions. There is no assignment, no loops, no `this` and no
//! method calls on host objects.
//!
//! # Quick Start
//!
//! ```
//! use condeval::{Value, Variables, evaluate_expression, validate_expression};
//!
//! let mut variables = Variables::new();
//! variables.insert("name".to_string(), Value::from("alice"));
//! variables.insert(
//!     "author".to_string(),
//!     Value::object([(
//!         "github",
//!         Value::object([("repositories", Value::from(12))]),
//!     )]),
//! );
//!
//! let expression = r#"author.github.repositories > 10 && match(name, "al", true)"#;
//! assert!(validate_expression(expression, &variables).is_empty());
//! assert!(evaluate_expression(expression, &variables));
//! ```
//!
//! # Reporting errors
//!
//! [`Engine::check`] returns the typed [`Error`], which can be rendered
//! against the source with [`render_error_to_string`]:
//!
//! ```
//! use condeval::{Engine, Variables, render_error_to_string_no_color};
//!
//! let source = "1 +";
//! let err = Engine::default().check(source, &Variables::new()).unwrap_err();
//! let report = render_error_to_string_no_color(source, &err);
//! assert!(report.contains("1 +"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from condeval_core
pub use condeval_core::api::{
    Engine, EngineOptions, Error, evaluate_expression, validate_expression,
};

// Re-export commonly used types and values
pub use condeval_core::values::{
    self, FromJsonError, Map, TypeTag, Value, Variables, variables_from_json,
};

// Re-export errors
pub use condeval_core::evaluator::EvalError;
pub use condeval_core::parser::{ParseError, ParseErrorKind};
