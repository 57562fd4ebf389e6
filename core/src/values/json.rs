//! Conversion from JSON documents.

use thiserror::Error;

use super::{Map, Value, Variables};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FromJsonError {
    #[error("arrays are not supported as variable values (at '{path}')")]
    Array { path: String },

    #[error("number at '{path}' cannot be represented as a float")]
    Number { path: String },

    #[error("the variable context must be a JSON object")]
    NotAnObject,
}

impl TryFrom<serde_json::Value> for Value {
    type Error = FromJsonError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        convert(json, "$")
    }
}

/// Build a variable context from a JSON object.
///
/// Every top-level key becomes a variable. Arrays are rejected anywhere in
/// the document since expressions have no way to work with them.
pub fn variables_from_json(json: serde_json::Value) -> Result<Variables, FromJsonError> {
    match json {
        serde_json::Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                let path = format!("$.{}", key);
                convert(value, &path).map(|value| (key, value))
            })
            .collect(),
        _ => Err(FromJsonError::NotAnObject),
    }
}

fn convert(json: serde_json::Value, path: &str) -> Result<Value, FromJsonError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).ok_or_else(|| {
            FromJsonError::Number {
                path: path.to_string(),
            }
        }),
        serde_json::Value::String(s) => Ok(Value::Str(s)),
        serde_json::Value::Array(_) => Err(FromJsonError::Array {
            path: path.to_string(),
        }),
        serde_json::Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                let child = format!("{}.{}", path, key);
                convert(value, &child).map(|value| (key, value))
            })
            .collect::<Result<Map, _>>()
            .map(Value::Object),
    }
}
