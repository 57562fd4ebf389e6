use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{BinaryOp, Expr, Literal, LogicalOp, Span, UnaryOp};
use lazy_static::lazy_static;
use pest::Parser;
use pest::error::{Error, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

/// Default limit on the height of an expression tree.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Hard limit on bracket nesting, whatever `max_depth` says.
///
/// Each bracket level costs pest several nested rule calls, so this stays
/// well below the point where pest runs out of stack.
pub const MAX_BRACKET_NESTING: usize = 128;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        // Logical operators.
        .op(Op::infix(Rule::or, Assoc::Left))            // `||`
        .op(Op::infix(Rule::and, Assoc::Left))           // `&&`

        // Bitwise operators.
        .op(Op::infix(Rule::bit_or, Assoc::Left))        // `|`
        .op(Op::infix(Rule::bit_xor, Assoc::Left))       // `^`
        .op(Op::infix(Rule::bit_and, Assoc::Left))       // `&`

        // Comparison operators.
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::neq, Assoc::Left) |
            Op::infix(Rule::strict_eq, Assoc::Left) |
            Op::infix(Rule::strict_neq, Assoc::Left)
        )                                                // `==`, `!=`, `===`, `!==`
        .op(
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left)
        )                                                // `<`, `>`, `<=`, `>=`
        .op(
            Op::infix(Rule::shl, Assoc::Left) |
            Op::infix(Rule::shr, Assoc::Left) |
            Op::infix(Rule::ushr, Assoc::Left)
        )                                                // `<<`, `>>`, `>>>`

        // Arithmetic operators.
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                                // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                                // `*`, `/`, `%`
        .op(
            Op::prefix(Rule::neg) |
            Op::prefix(Rule::plus) |
            Op::prefix(Rule::not) |
            Op::prefix(Rule::bit_not)
        )                                                // `-`, `+`, `!`, `~`

        // Postfix operators.
        .op(
            Op::postfix(Rule::member_op) |
            Op::postfix(Rule::index_op) |
            Op::postfix(Rule::call_op)
        )                                                // `.`, `[]`, `()`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

type PestResult<T> = Result<T, Error<Rule>>;

fn custom_error(message: &str, span: pest::Span<'_>) -> Error<Rule> {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: message.to_string(),
        },
        span,
    )
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: pest::Span<'i>) -> PestResult<Pair<'i, Rule>> {
    pairs
        .next()
        .ok_or_else(|| custom_error("missing expected pair in rule", span))
}

/// A parsed expression and the height of its tree (a leaf has height 1).
struct Node {
    expr: Expr,
    height: usize,
}

type BuildResult = Result<Node, ParseError>;

/// Turns pest pairs into an [`Expr`] tree no taller than `max_depth`.
///
/// Flat operator chains (`1 + 1 + ...`, `a.b.c...`, `f()()...`) grow the
/// tree one level per operator without any brackets, so the height is
/// checked as each node is built.
struct TreeBuilder<'s> {
    source: &'s str,
    max_depth: usize,
}

impl<'s> TreeBuilder<'s> {
    fn fail(&self, err: Error<Rule>) -> ParseError {
        convert_pest_error(err, self.source)
    }

    fn leaf(&self, expr: Expr) -> BuildResult {
        Ok(Node { expr, height: 1 })
    }

    /// Wrap `expr` one level above its tallest child.
    fn node(&self, expr: Expr, children: &[usize], span: pest::Span<'_>) -> BuildResult {
        let height = children.iter().copied().max().unwrap_or(0) + 1;
        if height > self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
                span.into(),
            ));
        }
        Ok(Node { expr, height })
    }

    fn next_node<'i>(&self, pairs: &mut Pairs<'i, Rule>, span: pest::Span<'i>) -> BuildResult {
        let pair = next_pair(pairs, span).map_err(|e| self.fail(e))?;
        self.build(pair)
    }

    fn build_all<'i>(
        &self,
        pairs: impl Iterator<Item = Pair<'i, Rule>>,
    ) -> Result<(Vec<Expr>, Vec<usize>), ParseError> {
        let mut exprs = Vec::new();
        let mut heights = Vec::new();
        for pair in pairs {
            let node = self.build(pair)?;
            exprs.push(node.expr);
            heights.push(node.height);
        }
        Ok((exprs, heights))
    }

    fn build(&self, pair: Pair<'_, Rule>) -> BuildResult {
        let span = pair.as_span();
        match pair.as_rule() {
            Rule::main => {
                let body = pair.into_inner().filter(|p| p.as_rule() != Rule::EOI);
                let (mut exprs, heights) = self.build_all(body)?;
                if exprs.len() == 1 {
                    Ok(Node {
                        expr: exprs.remove(0),
                        height: heights[0],
                    })
                } else {
                    self.node(Expr::Compound(exprs), &heights, span)
                }
            }

            Rule::expression => {
                let mut inner = pair.into_inner();
                let test = self.next_node(&mut inner, span)?;
                match inner.next() {
                    None => Ok(test),
                    Some(conditional) => {
                        let span = conditional.as_span();
                        let mut branches = conditional.into_inner();
                        let consequent = self.next_node(&mut branches, span)?;
                        let alternate = self.next_node(&mut branches, span)?;
                        let heights = [test.height, consequent.height, alternate.height];
                        self.node(
                            Expr::Conditional {
                                test: Box::new(test.expr),
                                consequent: Box::new(consequent.expr),
                                alternate: Box::new(alternate.expr),
                            },
                            &heights,
                            span,
                        )
                    }
                }
            }

            Rule::operation => self.build_operation(pair.into_inner()),

            Rule::grouped => self.next_node(&mut pair.into_inner(), span),

            Rule::array => {
                let (items, heights) = self.build_all(pair.into_inner())?;
                self.node(Expr::Array(items), &heights, span)
            }

            Rule::number => {
                let value: f64 = pair
                    .as_str()
                    .parse()
                    .map_err(|_| self.fail(custom_error("invalid number literal", span)))?;
                self.leaf(Expr::Literal(Literal::Number(value)))
            }

            Rule::string => {
                let inner = next_pair(&mut pair.into_inner(), span).map_err(|e| self.fail(e))?;
                self.leaf(Expr::Literal(Literal::Str(unescape(inner.as_str()))))
            }

            Rule::boolean => self.leaf(Expr::Literal(Literal::Bool(pair.as_str() == "true"))),

            Rule::null => self.leaf(Expr::Literal(Literal::Null)),

            Rule::this => self.leaf(Expr::This),

            Rule::identifier => self.leaf(Expr::Identifier(pair.as_str().to_string())),

            rule => Err(self.fail(custom_error(&format!("Unhandled rule: {:?}", rule), span))),
        }
    }

    fn build_operation(&self, pairs: Pairs<'_, Rule>) -> BuildResult {
        PRATT_PARSER
            .map_primary(|primary| self.build(primary))
            .map_prefix(|op, rhs| {
                let span = op.as_span();
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::plus => UnaryOp::Plus,
                    Rule::not => UnaryOp::Not,
                    Rule::bit_not => UnaryOp::BitNot,
                    rule => {
                        return Err(self.fail(custom_error(
                            &format!("Unknown prefix operator: {:?}", rule),
                            span,
                        )));
                    }
                };
                let rhs = rhs?;
                self.node(
                    Expr::Unary {
                        op,
                        argument: Box::new(rhs.expr),
                    },
                    &[rhs.height],
                    span,
                )
            })
            .map_infix(|lhs, op, rhs| {
                let span = op.as_span();
                let lhs = lhs?;
                let rhs = rhs?;
                let heights = [lhs.height, rhs.height];
                let left = Box::new(lhs.expr);
                let right = Box::new(rhs.expr);

                let expr = match op.as_rule() {
                    Rule::or => Expr::Logical {
                        op: LogicalOp::Or,
                        left,
                        right,
                    },
                    Rule::and => Expr::Logical {
                        op: LogicalOp::And,
                        left,
                        right,
                    },
                    rule => {
                        let op = match rule {
                            Rule::eq => BinaryOp::Eq,
                            Rule::neq => BinaryOp::Neq,
                            Rule::strict_eq => BinaryOp::StrictEq,
                            Rule::strict_neq => BinaryOp::StrictNeq,
                            Rule::lt => BinaryOp::Lt,
                            Rule::gt => BinaryOp::Gt,
                            Rule::le => BinaryOp::Le,
                            Rule::ge => BinaryOp::Ge,
                            Rule::add => BinaryOp::Add,
                            Rule::sub => BinaryOp::Sub,
                            Rule::mul => BinaryOp::Mul,
                            Rule::div => BinaryOp::Div,
                            Rule::rem => BinaryOp::Rem,
                            Rule::bit_or => BinaryOp::BitOr,
                            Rule::bit_xor => BinaryOp::BitXor,
                            Rule::bit_and => BinaryOp::BitAnd,
                            Rule::shl => BinaryOp::Shl,
                            Rule::shr => BinaryOp::Shr,
                            Rule::ushr => BinaryOp::UShr,
                            rule => {
                                return Err(self.fail(custom_error(
                                    &format!("Unknown binary operator: {:?}", rule),
                                    span,
                                )));
                            }
                        };
                        Expr::Binary { op, left, right }
                    }
                };
                self.node(expr, &heights, span)
            })
            .map_postfix(|lhs, op| {
                let span = op.as_span();
                let lhs = lhs?;
                match op.as_rule() {
                    Rule::member_op => {
                        let property =
                            next_pair(&mut op.into_inner(), span).map_err(|e| self.fail(e))?;
                        self.node(
                            Expr::Member {
                                object: Box::new(lhs.expr),
                                property: Box::new(Expr::Identifier(property.as_str().to_string())),
                                computed: false,
                            },
                            &[lhs.height, 1],
                            span,
                        )
                    }
                    Rule::index_op => {
                        let index = self.next_node(&mut op.into_inner(), span)?;
                        self.node(
                            Expr::Member {
                                object: Box::new(lhs.expr),
                                property: Box::new(index.expr),
                                computed: true,
                            },
                            &[lhs.height, index.height],
                            span,
                        )
                    }
                    Rule::call_op => {
                        let (arguments, mut heights) = self.build_all(op.into_inner())?;
                        heights.push(lhs.height);
                        self.node(
                            Expr::Call {
                                callee: Box::new(lhs.expr),
                                arguments,
                            },
                            &heights,
                            span,
                        )
                    }
                    rule => Err(self.fail(custom_error(
                        &format!("Unknown postfix operator: {:?}", rule),
                        span,
                    ))),
                }
            })
            .parse(pairs)
    }
}

/// Resolve backslash escapes in a quoted string body.
///
/// `\n \r \t \b \f \v` map to their control characters; any other escaped
/// character stands for itself.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0C}'),
            Some('v') => out.push('\u{0B}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Reject pathologically nested input before handing it to pest.
///
/// Open brackets and `?` (outside string literals) each cost pest a level
/// of recursion and are capped at [`MAX_BRACKET_NESTING`]. Runs of prefix
/// operator characters are capped at `max_depth`.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let bracket_limit = max_depth.min(MAX_BRACKET_NESTING);
    let mut depth = 0usize;
    let mut conditionals = 0usize;
    let mut run = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in source.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                run = 0;
            }
            '(' | '[' => {
                depth += 1;
                run = 0;
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                run = 0;
            }
            '?' => {
                conditionals += 1;
                run = 0;
            }
            '!' | '~' | '+' | '-' => run += 1,
            c if c.is_whitespace() => {}
            _ => run = 0,
        }

        let exceeded = if depth > bracket_limit || conditionals > bracket_limit {
            Some(bracket_limit)
        } else if run > max_depth {
            Some(max_depth)
        } else {
            None
        };
        if let Some(max_depth) = exceeded {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { max_depth },
                Span::new(offset, offset + c.len_utf8()),
            ));
        }
    }

    Ok(())
}

/// Parse an expression with the default nesting limit.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse an expression, rejecting trees taller than `max_depth`.
///
/// Bracket nesting is additionally capped at [`MAX_BRACKET_NESTING`].
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    check_nesting(source, max_depth.min(MAX_BRACKET_NESTING))?;

    let builder = TreeBuilder { source, max_depth };
    let mut pairs = ExpressionParser::parse(Rule::main, source).map_err(|e| builder.fail(e))?;
    let pair = pairs.next().ok_or_else(|| {
        builder.fail(Error::new_from_pos(
            ErrorVariant::CustomError {
                message: "missing expected pair in rule".to_string(),
            },
            pest::Position::from_start(source),
        ))
    })?;
    builder.build(pair).map(|node| node.expr)
}
