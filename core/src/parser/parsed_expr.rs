use crate::parser::{BinaryOp, LogicalOp, UnaryOp};
use crate::values::Value;

/// A parsed expression tree.
///
/// The vocabulary mirrors the usual C-like expression grammar. `This`,
/// `Conditional` and `Array` are valid syntax that the evaluator refuses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Zero or several top-level expressions (`a, b`). A single expression
    /// is never wrapped.
    Compound(Vec<Expr>),
    Identifier(String),
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        /// `a[b]` rather than `a.b`.
        computed: bool,
    },
    Literal(Literal),
    This,
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        argument: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Array(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
}

impl Expr {
    /// Name of the node kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Compound(_) => "Compound",
            Expr::Identifier(_) => "Identifier",
            Expr::Member { .. } => "MemberExpression",
            Expr::Literal(_) => "Literal",
            Expr::This => "ThisExpression",
            Expr::Call { .. } => "CallExpression",
            Expr::Unary { .. } => "UnaryExpression",
            Expr::Binary { .. } => "BinaryExpression",
            Expr::Logical { .. } => "LogicalExpression",
            Expr::Conditional { .. } => "ConditionalExpression",
            Expr::Array(_) => "ArrayExpression",
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Null => Value::Null,
        }
    }
}
