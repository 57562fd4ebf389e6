//! Operator type compatibility.
//!
//! Every unary, binary and logical operator has an ordered list of type
//! names it accepts. Operands must be homogeneous: all of them have to match
//! the same entry of the list.

mod matrix;

pub use matrix::{TypeName, accepted_binary_types, accepted_unary_types, verify_binary, verify_unary};
