//! Builtin function registry.
//!
//! The set of functions an expression can call is fixed. Each entry declares
//! the type tags it accepts per parameter; [`Builtin::invoke`] checks the
//! arity and the argument tags before running the implementation.
//!
//! - Context: `Variable`, `Member`
//! - Casting: `String`, `Number`, `Boolean`
//! - Math: `round`, `floor`
//! - String: `upper`, `lower`, `trim`, `trimLeft`, `trimRight`, `replace`,
//!   `substring`, `length`, `includes`, `indexOf`, `match`

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::{
    evaluator::EvalError,
    values::{TypeTag, Value, Variables},
};

mod casting;
mod context;
mod math;
mod string;

/// Native implementation of a builtin.
///
/// Receives the already type-checked arguments and the variable context.
pub type BuiltinFn = fn(&[Value], &Variables) -> Result<Value, EvalError>;

pub struct Builtin {
    pub name: &'static str,
    /// Accepted type tags, one slice per parameter.
    pub params: &'static [&'static [TypeTag]],
    func: BuiltinFn,
}

impl Builtin {
    const fn new(
        name: &'static str,
        params: &'static [&'static [TypeTag]],
        func: BuiltinFn,
    ) -> Self {
        Self { name, params, func }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Check `args` against the declared parameters, then run the function.
    pub fn invoke(&self, args: &[Value], variables: &Variables) -> Result<Value, EvalError> {
        if args.len() != self.arity() {
            return Err(EvalError::Arity {
                name: self.name,
                expected: self.arity(),
                actual: args.len(),
            });
        }

        for (index, (arg, accepted)) in args.iter().zip(self.params).enumerate() {
            let actual = arg.type_tag();
            if !accepted.contains(&actual) {
                return Err(EvalError::ArgumentType {
                    name: self.name,
                    index,
                    actual,
                    accepted: *accepted,
                });
            }
        }

        (self.func)(args, variables)
    }
}

impl core::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

const NUMBER: &[TypeTag] = &[TypeTag::Number];
const STRING: &[TypeTag] = &[TypeTag::String];
const BOOLEAN: &[TypeTag] = &[TypeTag::Boolean];
const OBJECT: &[TypeTag] = &[TypeTag::Object];
const NUMBER_OR_STRING: &[TypeTag] = &[TypeTag::Number, TypeTag::String];

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static Builtin> = {
        let groups: [&'static [Builtin]; 4] = [
            context::BUILTINS,
            casting::BUILTINS,
            math::BUILTINS,
            string::BUILTINS,
        ];
        groups
            .into_iter()
            .flatten()
            .map(|builtin| (builtin.name, builtin))
            .collect()
    };
}

/// Find a builtin by its exact, case-sensitive name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    REGISTRY.get(name).copied()
}

/// Every registered builtin, in no particular order.
pub fn builtins() -> impl Iterator<Item = &'static Builtin> {
    REGISTRY.values().copied()
}

/// Look up `name` and invoke it with `args`.
pub fn call(name: &str, args: &[Value], variables: &Variables) -> Result<Value, EvalError> {
    let builtin = lookup(name).ok_or_else(|| EvalError::UnknownFunction {
        name: name.to_string(),
    })?;
    builtin.invoke(args, variables)
}

/// Error for argument lists that passed [`Builtin::invoke`]'s checks but do
/// not fit the implementation's pattern.
fn invalid_arguments(name: &'static str) -> EvalError {
    EvalError::InvalidArguments { name }
}
