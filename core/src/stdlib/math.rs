//! Numeric functions.

use super::{Builtin, NUMBER, invalid_arguments};
use crate::{
    evaluator::EvalError,
    values::{Value, Variables},
};

pub(super) static BUILTINS: &[Builtin] = &[
    Builtin::new("round", &[NUMBER], math_round),
    Builtin::new("floor", &[NUMBER], math_floor),
];

/// Round half toward positive infinity: `round(2.5)` is 3, `round(-2.5)` is -2.
fn math_round(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Number(n)] = args else {
        return Err(invalid_arguments("round"));
    };
    let floor = n.floor();
    let rounded = if n - floor >= 0.5 { floor + 1.0 } else { floor };
    Ok(Value::Number(rounded))
}

fn math_floor(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Number(n)] = args else {
        return Err(invalid_arguments("floor"));
    };
    Ok(Value::Number(n.floor()))
}

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
