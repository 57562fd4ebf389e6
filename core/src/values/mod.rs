//! Runtime values.
//!
//! Expressions only ever see five kinds of values: numbers, strings,
//! booleans, null and objects (string-keyed mappings). The [`TypeTag`] of a
//! value is the only thing operator and function type checks look at.

mod json;
pub mod number;
mod value;


pub use json::{FromJsonError, variables_from_json};
pub use value::{Map, TypeTag, Value, Variables};
