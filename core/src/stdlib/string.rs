//! String functions.
//!
//! Indices and lengths count Unicode scalar values, not bytes.

use regex::RegexBuilder;

use super::{BOOLEAN, Builtin, NUMBER, STRING, invalid_arguments};
use crate::{
    evaluator::EvalError,
    values::{Value, Variables, number::is_whitespace},
};

pub(super) static BUILTINS: &[Builtin] = &[
    Builtin::new("upper", &[STRING], string_upper),
    Builtin::new("lower", &[STRING], string_lower),
    Builtin::new("trim", &[STRING], string_trim),
    Builtin::new("trimLeft", &[STRING], string_trim_left),
    Builtin::new("trimRight", &[STRING], string_trim_right),
    Builtin::new("replace", &[STRING, STRING, STRING], string_replace),
    Builtin::new("substring", &[STRING, NUMBER, NUMBER], string_substring),
    Builtin::new("length", &[STRING], string_length),
    Builtin::new("includes", &[STRING, STRING], string_includes),
    Builtin::new("indexOf", &[STRING, STRING], string_index_of),
    Builtin::new("match", &[STRING, STRING, BOOLEAN], string_match),
];

/// Apply `f` to the single string argument of `name`.
fn map_str(name: &'static str, args: &[Value], f: impl FnOnce(&str) -> String) -> Result<Value, EvalError> {
    let [Value::Str(s)] = args else {
        return Err(invalid_arguments(name));
    };
    Ok(Value::Str(f(s)))
}

// ============================================================================
// Transformation
// ============================================================================

fn string_upper(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    map_str("upper", args, str::to_uppercase)
}

fn string_lower(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    map_str("lower", args, str::to_lowercase)
}

fn string_trim(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    map_str("trim", args, |s| s.trim_matches(is_whitespace).to_string())
}

fn string_trim_left(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    map_str("trimLeft", args, |s| s.trim_start_matches(is_whitespace).to_string())
}

fn string_trim_right(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    map_str("trimRight", args, |s| s.trim_end_matches(is_whitespace).to_string())
}

/// Replace the first occurrence only. The replacement is inserted literally.
fn string_replace(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s), Value::Str(search), Value::Str(replacement)] = args else {
        return Err(invalid_arguments("replace"));
    };
    Ok(Value::Str(s.replacen(search.as_str(), replacement, 1)))
}

// ============================================================================
// Extraction
// ============================================================================

/// Slice between two character indices.
///
/// An `end` before `start` means "to the end of the string". Indices are
/// truncated toward zero and clamped to the string, `NaN` counts as 0, and
/// the bounds are swapped when they end up reversed.
fn string_substring(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s), Value::Number(start), Value::Number(end)] = args else {
        return Err(invalid_arguments("substring"));
    };

    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    let clamp = |index: f64| -> usize {
        if index.is_nan() {
            0
        } else {
            index.trunc().clamp(0.0, len as f64) as usize
        }
    };

    let from = clamp(*start);
    let to = if end < start { len } else { clamp(*end) };
    let (from, to) = (from.min(to), from.max(to));

    Ok(Value::Str(chars[from..to].iter().collect()))
}

fn string_length(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s)] = args else {
        return Err(invalid_arguments("length"));
    };
    Ok(Value::Number(s.chars().count() as f64))
}

// ============================================================================
// Searching
// ============================================================================

fn string_includes(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s), Value::Str(search)] = args else {
        return Err(invalid_arguments("includes"));
    };
    Ok(Value::Bool(s.contains(search.as_str())))
}

/// Character index of the first occurrence, or -1.
fn string_index_of(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s), Value::Str(search)] = args else {
        return Err(invalid_arguments("indexOf"));
    };
    let index = s
        .find(search.as_str())
        .map_or(-1.0, |byte| s[..byte].chars().count() as f64);
    Ok(Value::Number(index))
}

/// Whether `pattern` matches anywhere in the string.
fn string_match(args: &[Value], _variables: &Variables) -> Result<Value, EvalError> {
    let [Value::Str(s), Value::Str(pattern), Value::Bool(ignore_case)] = args else {
        return Err(invalid_arguments("match"));
    };
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(*ignore_case)
        .build()
        .map_err(|_| EvalError::InvalidRegex {
            pattern: pattern.clone(),
        })?;
    Ok(Value::Bool(regex.is_match(s)))
}

#[cfg(test)]
#[path = "string_test.rs"]
mod string_test;
