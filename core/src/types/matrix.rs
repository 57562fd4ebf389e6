use core::fmt;

use crate::evaluator::EvalError;
use crate::values::{TypeTag, Value};

/// A type name accepted by an operator.
///
/// Mirrors [`TypeTag`] plus `NullableString`, which accepts both `null` and
/// strings so that optional text can be compared with `==`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeName {
    Number,
    String,
    NullableString,
    Object,
    Boolean,
}

impl TypeName {
    pub fn matches(self, tag: TypeTag) -> bool {
        match self {
            TypeName::Number => tag == TypeTag::Number,
            TypeName::String => tag == TypeTag::String,
            TypeName::NullableString => matches!(tag, TypeTag::Null | TypeTag::String),
            TypeName::Object => tag == TypeTag::Object,
            TypeName::Boolean => tag == TypeTag::Boolean,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeName::Number => "number",
            TypeName::String => "string",
            TypeName::NullableString => "nullableString",
            TypeName::Object => "object",
            TypeName::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use TypeName::*;

const EQUALITY: &[TypeName] = &[Number, String, NullableString, Object, Boolean];
const ORDERED: &[TypeName] = &[Number, String];
const NUMERIC: &[TypeName] = &[Number];
const LOGICAL: &[TypeName] = &[Boolean];
const NEGATABLE: &[TypeName] = &[Number, Boolean];

// The order of each list matters: the first matching entry wins.
static BINARY_OPERATOR_TYPES: &[(&str, &[TypeName])] = &[
    ("==", EQUALITY),
    ("!=", EQUALITY),
    ("<", ORDERED),
    (">", ORDERED),
    ("<=", ORDERED),
    (">=", ORDERED),
    ("+", ORDERED),
    ("-", NUMERIC),
    ("*", NUMERIC),
    ("/", NUMERIC),
    ("%", NUMERIC),
    ("||", LOGICAL),
    ("&&", LOGICAL),
];

static UNARY_OPERATOR_TYPES: &[(&str, &[TypeName])] = &[
    ("+", NUMERIC),
    ("-", NUMERIC),
    ("!", NEGATABLE),
];

fn lookup(table: &'static [(&str, &'static [TypeName])], operator: &str) -> Option<&'static [TypeName]> {
    table
        .iter()
        .find(|(symbol, _)| *symbol == operator)
        .map(|(_, accepted)| *accepted)
}

/// Accepted operand types of a binary or logical operator, if it is supported.
pub fn accepted_binary_types(operator: &str) -> Option<&'static [TypeName]> {
    lookup(BINARY_OPERATOR_TYPES, operator)
}

/// Accepted operand types of a unary operator, if it is supported.
pub fn accepted_unary_types(operator: &str) -> Option<&'static [TypeName]> {
    lookup(UNARY_OPERATOR_TYPES, operator)
}

fn check(
    operator: &str,
    accepted: &'static [TypeName],
    operands: &[&Value],
) -> Result<TypeName, EvalError> {
    accepted
        .iter()
        .copied()
        .find(|ty| operands.iter().all(|value| ty.matches(value.type_tag())))
        .ok_or_else(|| EvalError::OperatorType {
            operator: operator.to_string(),
            actual: operands.iter().map(|value| value.type_tag()).collect(),
            accepted,
        })
}

/// Check the operand of a unary operator.
///
/// Returns the accepted type name the operand matched.
pub fn verify_unary(operator: &str, operand: &Value) -> Result<TypeName, EvalError> {
    let accepted = accepted_unary_types(operator).ok_or_else(|| EvalError::InvalidUnaryOperator {
        operator: operator.to_string(),
    })?;
    check(operator, accepted, &[operand])
}

/// Check both operands of a binary or logical operator.
///
/// Returns the first accepted type name both operands matched.
pub fn verify_binary(operator: &str, left: &Value, right: &Value) -> Result<TypeName, EvalError> {
    let accepted = accepted_binary_types(operator).ok_or_else(|| {
        EvalError::InvalidBinaryOperator {
            operator: operator.to_string(),
        }
    })?;
    check(operator, accepted, &[left, right])
}
