//! Core evaluation logic.

use std::borrow::Cow;

use tracing::trace;

use crate::{
    evaluator::{
        EvalError,
        operators::{eval_binary, eval_logical, eval_unary},
        scope::{resolve_identifier, resolve_member},
    },
    parser::{Expr, Literal},
    stdlib,
    values::{Value, Variables},
};

/// Tree-walking evaluator over a parsed expression.
///
/// Values that come straight out of the context are borrowed; only computed
/// values are allocated.
pub struct Evaluator<'a> {
    variables: &'a Variables,
    depth: usize,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(variables: &'a Variables, max_depth: usize) -> Self {
        Self {
            variables,
            depth: 0,
            max_depth,
        }
    }

    /// Evaluate an expression node.
    pub fn eval_expr(&mut self, expr: &'a Expr) -> Result<Cow<'a, Value>, EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::DepthExceeded {
                max_depth: self.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr) -> Result<Cow<'a, Value>, EvalError> {
        match expr {
            Expr::Compound(body) => {
                if body.is_empty() {
                    Ok(Cow::Owned(Value::Bool(false)))
                } else {
                    Err(EvalError::CompoundExpression)
                }
            }
            Expr::Literal(literal) => Ok(Cow::Owned(Value::from(literal))),
            Expr::Identifier(name) => resolve_identifier(self.variables, name).map(Cow::Borrowed),
            Expr::Member {
                object,
                property,
                computed,
            } => self.eval_member(object, property, *computed),
            Expr::This => Err(EvalError::ThisNotSupported),
            Expr::Conditional { .. } => Err(EvalError::ConditionalNotSupported),
            Expr::Array(_) => Err(EvalError::ArrayNotSupported),
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments),
            Expr::Unary { op, argument } => {
                let operand = self.eval_expr(argument)?;
                eval_unary(*op, &operand).map(Cow::Owned)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                eval_binary(*op, &left, &right).map(Cow::Owned)
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                eval_logical(*op, &left, &right).map(Cow::Owned)
            }
        }
    }

    fn eval_member(
        &mut self,
        object: &'a Expr,
        property: &'a Expr,
        computed: bool,
    ) -> Result<Cow<'a, Value>, EvalError> {
        let container = self.eval_expr(object)?;

        let name = match property {
            Expr::Identifier(name) if !computed => name,
            _ => {
                return Err(EvalError::InvalidMember {
                    property: describe_property(property),
                });
            }
        };

        match container {
            Cow::Borrowed(value) => resolve_member(value, name).map(Cow::Borrowed),
            Cow::Owned(Value::Object(mut map)) => {
                map.remove(name.as_str())
                    .map(Cow::Owned)
                    .ok_or_else(|| EvalError::UndefinedMember { name: name.clone() })
            }
            Cow::Owned(_) => Err(EvalError::UndefinedMember { name: name.clone() }),
        }
    }

    fn eval_call(
        &mut self,
        callee: &'a Expr,
        arguments: &'a [Expr],
    ) -> Result<Cow<'a, Value>, EvalError> {
        let Expr::Identifier(name) = callee else {
            return Err(EvalError::InvalidCallee {
                kind: callee.kind_name(),
            });
        };

        let builtin = stdlib::lookup(name).ok_or_else(|| EvalError::UnknownFunction {
            name: name.clone(),
        })?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expr(argument)?.into_owned());
        }

        trace!(function = builtin.name, arity = args.len(), "Calling builtin");
        builtin.invoke(&args, self.variables).map(Cow::Owned)
    }
}

/// Text used to name a property that is not a plain identifier.
fn describe_property(property: &Expr) -> String {
    match property {
        Expr::Identifier(name) => name.clone(),
        Expr::Literal(Literal::Str(s)) => s.clone(),
        Expr::Literal(literal) => Value::from(literal).to_string(),
        other => other.kind_name().to_string(),
    }
}
