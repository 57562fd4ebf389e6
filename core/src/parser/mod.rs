//! Parser for condition expressions.
//!
//! Turns source text into an [`Expr`] tree. The grammar accepts more than the
//! evaluator supports (ternaries, array literals, `this`, bitwise operators)
//! so that those constructs fail with a specific message instead of a
//! generic syntax error.

pub mod error;
mod parsed_expr;
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::parse;
pub use parser::parse_with_max_depth;
pub use parser::DEFAULT_MAX_DEPTH;
pub use parser::MAX_BRACKET_NESTING;

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, Literal};
pub use syntax::{BinaryOp, LogicalOp, Span, UnaryOp};
