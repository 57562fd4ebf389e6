//! Unary, binary and logical operator implementations.
//!
//! Every function verifies its operands against the type matrix before
//! computing anything.

use crate::{
    evaluator::EvalError,
    parser::{BinaryOp, LogicalOp, UnaryOp},
    types::{verify_binary, verify_unary},
    values::Value,
};

pub(super) fn eval_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalError> {
    verify_unary(op.symbol(), operand)?;

    match (op, operand) {
        (UnaryOp::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-1.0 * n)),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(EvalError::InvalidUnaryOperator {
            operator: op.symbol().to_string(),
        }),
    }
}

/// Evaluate a binary operation.
///
/// Arithmetic follows IEEE 754 except for three guarded results:
/// a product of `+inf`, a quotient of `+inf` and a `NaN` remainder.
pub(super) fn eval_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    verify_binary(op.symbol(), left, right)?;

    match (op, left, right) {
        (BinaryOp::Eq, l, r) => Ok(Value::Bool(l == r)),
        (BinaryOp::Neq, l, r) => Ok(Value::Bool(l != r)),

        (BinaryOp::Lt, Value::Number(l), Value::Number(r)) => Ok(Value::Bool(l < r)),
        (BinaryOp::Gt, Value::Number(l), Value::Number(r)) => Ok(Value::Bool(l > r)),
        (BinaryOp::Le, Value::Number(l), Value::Number(r)) => Ok(Value::Bool(l <= r)),
        (BinaryOp::Ge, Value::Number(l), Value::Number(r)) => Ok(Value::Bool(l >= r)),
        (BinaryOp::Lt, Value::Str(l), Value::Str(r)) => Ok(Value::Bool(l < r)),
        (BinaryOp::Gt, Value::Str(l), Value::Str(r)) => Ok(Value::Bool(l > r)),
        (BinaryOp::Le, Value::Str(l), Value::Str(r)) => Ok(Value::Bool(l <= r)),
        (BinaryOp::Ge, Value::Str(l), Value::Str(r)) => Ok(Value::Bool(l >= r)),

        (BinaryOp::Add, Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (BinaryOp::Add, Value::Str(l), Value::Str(r)) => {
            let mut joined = String::with_capacity(l.len() + r.len());
            joined.push_str(l);
            joined.push_str(r);
            Ok(Value::Str(joined))
        }

        (BinaryOp::Sub, Value::Number(l), Value::Number(r)) => Ok(Value::Number(l - r)),
        (BinaryOp::Mul, Value::Number(l), Value::Number(r)) => {
            let product = l * r;
            if product == f64::INFINITY {
                return Err(EvalError::NumericOverflow);
            }
            Ok(Value::Number(product))
        }
        (BinaryOp::Div, Value::Number(l), Value::Number(r)) => {
            let quotient = l / r;
            if quotient == f64::INFINITY {
                return Err(EvalError::DivisionByZero { dividend: *l });
            }
            Ok(Value::Number(quotient))
        }
        (BinaryOp::Rem, Value::Number(l), Value::Number(r)) => {
            // `%` on f64 is the truncating remainder, same sign as the dividend.
            let remainder = l % r;
            if remainder.is_nan() {
                return Err(EvalError::ModuloByZero { dividend: *l });
            }
            Ok(Value::Number(remainder))
        }

        _ => Err(EvalError::InvalidBinaryOperator {
            operator: op.symbol().to_string(),
        }),
    }
}

/// Both operands have already been evaluated; there is no short-circuit.
pub(super) fn eval_logical(op: LogicalOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    verify_binary(op.symbol(), left, right)?;

    match (op, left, right) {
        (LogicalOp::And, Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(*l && *r)),
        (LogicalOp::Or, Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(*l || *r)),
        _ => Err(EvalError::InvalidBinaryOperator {
            operator: op.symbol().to_string(),
        }),
    }
}
