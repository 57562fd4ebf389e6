//! Evaluation errors.
//!
//! The `Display` text of every variant is the message surfaced by
//! `validate_expression`, so it is kept stable.

use core::fmt::Display;

use thiserror::Error;

use crate::types::TypeName;
use crate::values::{TypeTag, number::format_number};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// More than one top-level expression.
    #[error("Cannot handle compound expressions.")]
    CompoundExpression,

    #[error("Invalid identifier: '{name}'")]
    InvalidIdentifier { name: String },

    /// The property of a member access is not a plain name (`a[b]`, `a[1]`).
    #[error("Invalid identifier member: '{property}'")]
    InvalidMember { property: String },

    #[error("Undefined identifier member: '{name}'")]
    UndefinedMember { name: String },

    #[error("keyword 'this' not supported.")]
    ThisNotSupported,

    #[error("Trinary operator (?:) currently not supported.")]
    ConditionalNotSupported,

    #[error("Array literals ([1, 2, 3]) currently not supported.")]
    ArrayNotSupported,

    /// The callee of a call is not a plain function name.
    #[error("Invalid function name type: '{kind}'")]
    InvalidCallee { kind: &'static str },

    #[error("Unknown function: '{name}'")]
    UnknownFunction { name: String },

    #[error("Expected {expected} arguments for function '{name}', got {actual}.")]
    Arity {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `index` is zero-based.
    #[error(
        "Invalid argument #{index} of type {actual} for function '{name}': expected {}",
        join(.accepted)
    )]
    ArgumentType {
        name: &'static str,
        index: usize,
        actual: TypeTag,
        accepted: &'static [TypeTag],
    },

    /// Arguments passed the declared checks but the implementation could
    /// not destructure them.
    #[error("Invalid arguments for function '{name}'")]
    InvalidArguments { name: &'static str },

    #[error("Invalid unary operator: {operator}")]
    InvalidUnaryOperator { operator: String },

    #[error("Invalid binary operator: {operator}")]
    InvalidBinaryOperator { operator: String },

    #[error(
        "The operator {operator} cannot be used with {}. It can only be used with the types: {}",
        join(.actual),
        join(.accepted)
    )]
    OperatorType {
        operator: String,
        actual: Vec<TypeTag>,
        accepted: &'static [TypeName],
    },

    #[error("Numeric overflow")]
    NumericOverflow,

    #[error("Division of {} by 0", number(.dividend))]
    DivisionByZero { dividend: f64 },

    #[error("Modulo of {} by 0", number(.dividend))]
    ModuloByZero { dividend: f64 },

    #[error("Error converting value '{value}' to number")]
    NumberConversion { value: String },

    #[error("Invalid regular expression: /{pattern}/")]
    InvalidRegex { pattern: String },

    /// An object was the final result of the whole expression.
    #[error("Cannot evaluate object variable directly")]
    ObjectResult,

    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize },
}

fn number(n: &f64) -> String {
    format_number(*n)
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
