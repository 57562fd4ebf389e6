//! Name resolution against the variable context.

use crate::evaluator::EvalError;
use crate::values::{Value, Variables};

/// Resolve a bare identifier.
///
/// Only names that are present in the context resolve; a name bound to
/// `null` resolves to [`Value::Null`].
pub(crate) fn resolve_identifier<'a>(
    variables: &'a Variables,
    name: &str,
) -> Result<&'a Value, EvalError> {
    variables
        .get(name)
        .ok_or_else(|| EvalError::InvalidIdentifier {
            name: name.to_string(),
        })
}

/// Own-key lookup of `name` on `container`.
///
/// Anything other than an object has no members.
pub(crate) fn resolve_member<'a>(container: &'a Value, name: &str) -> Result<&'a Value, EvalError> {
    container.get(name).ok_or_else(|| EvalError::UndefinedMember {
        name: name.to_string(),
    })
}
