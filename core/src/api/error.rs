//! Public error type for the API.

use thiserror::Error;

use crate::{
    evaluator::EvalError,
    parser::{ParseError, Span},
};

/// Error returned by [`Engine::check`](crate::api::Engine::check).
///
/// The `Display` text is the bare message of the underlying error, which is
/// what [`Engine::validate`](crate::api::Engine::validate) reports.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expression text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source location, when the error has one.
    ///
    /// Evaluation errors are not tied to a node, so only parse errors carry
    /// a span. Offsets are bytes into the trimmed expression.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::Parse(err) => Some(&err.span),
            Error::Eval(_) => None,
        }
    }
}
