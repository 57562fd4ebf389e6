//! Sandboxed condition expressions.
//!
//! `condeval-core` parses small C-like expressions such as
//! `author.github.repositories > 10 && match(name, "al", true)` and evaluates
//! them against a caller-supplied set of variables. The capability surface is
//! closed: a fixed set of operators, each guarded by a type-compatibility
//! table, and a fixed library of built-in functions.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod stdlib;
pub mod types;
pub mod values;

pub use api::{Engine, EngineOptions, Error, evaluate_expression, validate_expression};
pub use values::{Map, Value, Variables};
