//! Functions that read the variable context by name.

use super::{Builtin, OBJECT, STRING, invalid_arguments};
use crate::{
    evaluator::{
        EvalError,
        scope::{resolve_identifier, resolve_member},
    },
    values::{Value, Variables},
};

pub(super) static BUILTINS: &[Builtin] = &[
    Builtin::new("Variable", &[STRING], variable),
    Builtin::new("Member", &[OBJECT, STRING], member),
];

/// `Variable(name)`: same as writing `name` as a bare identifier.
fn variable(args: &[Value], variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(name)] = args else {
        return Err(invalid_arguments("Variable"));
    };
    resolve_identifier(variables, name).cloned()
}

/// `Member(object, key)`: own-key lookup, where a `null` entry counts as
/// missing.
fn member(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [container, Value::Str(key)] = args else {
        return Err(invalid_arguments("Member"));
    };
    match resolve_member(container, key)? {
        Value::Null => Err(EvalError::UndefinedMember { name: key.clone() }),
        value => Ok(value.clone()),
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
