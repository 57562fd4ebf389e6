//! Conversions between numbers, strings and booleans.

use super::{Builtin, NUMBER_OR_STRING, invalid_arguments};
use crate::{
    evaluator::EvalError,
    values::{Value, Variables, number::parse_number},
};

pub(super) static BUILTINS: &[Builtin] = &[
    Builtin::new("String", &[NUMBER_OR_STRING], to_string),
    Builtin::new("Number", &[NUMBER_OR_STRING], to_number),
    Builtin::new("Boolean", &[NUMBER_OR_STRING], to_boolean),
];

fn to_string(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [value] = args else {
        return Err(invalid_arguments("String"));
    };
    Ok(Value::Str(value.to_string()))
}

/// Fails instead of producing `NaN` or an infinity.
fn to_number(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let number = match args {
        [Value::Number(n)] => *n,
        [Value::Str(s)] => parse_number(s),
        _ => return Err(invalid_arguments("Number")),
    };

    if !number.is_finite() {
        return Err(EvalError::NumberConversion {
            value: args[0].to_string(),
        });
    }
    Ok(Value::Number(number))
}

fn to_boolean(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [value] = args else {
        return Err(invalid_arguments("Boolean"));
    };
    Ok(Value::Bool(value.is_truthy()))
}

#[cfg(test)]
#[path = "casting_test.rs"]
mod casting_test;
