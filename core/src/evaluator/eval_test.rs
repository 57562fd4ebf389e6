//! Unit tests for the evaluator.

use super::*;
use crate::{
    parser::{self, BinaryOp, Expr, Literal},
    values::{Value, Variables},
};
use pretty_assertions::assert_eq;

fn variables() -> Variables {
    let mut vars = Variables::new();
    vars.insert("zero".to_string(), Value::from(0));
    vars.insert("ten".to_string(), Value::from(10));
    vars.insert("name".to_string(), Value::from("alice"));
    vars.insert("flag".to_string(), Value::from(true));
    vars.insert("nothing".to_string(), Value::Null);
    vars.insert(
        "author".to_string(),
        Value::object([
            (
                "github",
                Value::object([("repositories", Value::from(12))]),
            ),
            ("nickname", Value::Null),
        ]),
    );
    vars
}

fn run(source: &str) -> Result<Value, EvalError> {
    let expr = parser::parse(source).unwrap_or_else(|e| panic!("parse failed: {}: {}", source, e));
    eval(&expr, &variables())
}

fn message(source: &str) -> String {
    match run(source) {
        Ok(value) => panic!("expected {} to fail, got {:?}", source, value),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_literals() {
    assert_eq!(run("1234").unwrap(), Value::from(1234));
    assert_eq!(run("'hi'").unwrap(), Value::from("hi"));
    assert_eq!(run("true").unwrap(), Value::from(true));
    assert_eq!(run("null").unwrap(), Value::Null);
}

#[test]
fn test_compound() {
    assert_eq!(run("").unwrap(), Value::from(false));
    assert_eq!(message("1, 2"), "Cannot handle compound expressions.");
    assert_eq!(message("a b"), "Cannot handle compound expressions.");
}

#[test]
fn test_identifiers() {
    assert_eq!(run("ten").unwrap(), Value::from(10));
    assert_eq!(run("nothing").unwrap(), Value::Null);
    assert_eq!(message("missing"), "Invalid identifier: 'missing'");
}

#[test]
fn test_member_access() {
    assert_eq!(run("author.github.repositories").unwrap(), Value::from(12));
    assert_eq!(run("author.nickname").unwrap(), Value::Null);
    assert_eq!(
        message("author.twitter"),
        "Undefined identifier member: 'twitter'"
    );
    assert_eq!(
        message("author.github.stars"),
        "Undefined identifier member: 'stars'"
    );
}

#[test]
fn test_member_of_non_object() {
    assert_eq!(message("name.length"), "Undefined identifier member: 'length'");
    assert_eq!(message("nothing.x"), "Undefined identifier member: 'x'");
    assert_eq!(message("ten.x"), "Undefined identifier member: 'x'");
}

#[test]
fn test_computed_member_is_rejected() {
    assert_eq!(
        message("author['github']"),
        "Invalid identifier member: 'github'"
    );
    assert_eq!(message("author[1]"), "Invalid identifier member: '1'");
    assert_eq!(
        message("author[name]"),
        "Invalid identifier member: 'name'"
    );
}

#[test]
fn test_member_of_computed_object() {
    let mut vars = Variables::new();
    let expr = Expr::Member {
        object: Box::new(Expr::Call {
            callee: Box::new(Expr::Identifier("Variable".to_string())),
            arguments: vec![Expr::Literal(Literal::Str("obj".to_string()))],
        }),
        property: Box::new(Expr::Identifier("k".to_string())),
        computed: false,
    };
    vars.insert(
        "obj".to_string(),
        Value::object([("k", Value::from("v"))]),
    );
    assert_eq!(eval(&expr, &vars).unwrap(), Value::from("v"));
}

#[test]
fn test_unsupported_nodes() {
    assert_eq!(message("this"), "keyword 'this' not supported.");
    assert_eq!(
        message("flag ? 1 : 2"),
        "Trinary operator (?:) currently not supported."
    );
    assert_eq!(
        message("[1, 2]"),
        "Array literals ([1, 2, 3]) currently not supported."
    );
}

#[test]
fn test_unsupported_nodes_inside_operands() {
    assert_eq!(message("1 + [1]"), "Array literals ([1, 2, 3]) currently not supported.");
    assert_eq!(message("this.x"), "keyword 'this' not supported.");
}

#[test]
fn test_calls() {
    assert_eq!(run("upper(name)").unwrap(), Value::from("ALICE"));
    assert_eq!(run("match(name, 'AL', true)").unwrap(), Value::from(true));
    assert_eq!(run("length(String(ten))").unwrap(), Value::from(2));
    assert_eq!(message("shout(name)"), "Unknown function: 'shout'");
}

#[test]
fn test_function_lookup_precedes_arguments() {
    assert_eq!(message("shout(missing)"), "Unknown function: 'shout'");
    assert_eq!(message("upper(missing)"), "Invalid identifier: 'missing'");
}

#[test]
fn test_callee_must_be_identifier() {
    assert_eq!(
        message("author.github(1)"),
        "Invalid function name type: 'MemberExpression'"
    );
    assert_eq!(
        message("upper(name)(1)"),
        "Invalid function name type: 'CallExpression'"
    );
}

#[test]
fn test_unary() {
    assert_eq!(run("-ten").unwrap(), Value::from(-10));
    assert_eq!(run("+ten").unwrap(), Value::from(10));
    assert_eq!(run("!zero").unwrap(), Value::from(true));
    assert_eq!(run("!flag").unwrap(), Value::from(false));
    assert_eq!(run("!!ten").unwrap(), Value::from(true));
    assert_eq!(message("~ten"), "Invalid unary operator: ~");
    assert_eq!(
        message("-name"),
        "The operator - cannot be used with string. It can only be used with the types: number"
    );
}

#[test]
fn test_arithmetic() {
    assert_eq!(run("ten + 5").unwrap(), Value::from(15));
    assert_eq!(run("ten - 15").unwrap(), Value::from(-5));
    assert_eq!(run("ten * 2.5").unwrap(), Value::from(25));
    assert_eq!(run("ten / 4").unwrap(), Value::from(2.5));
    assert_eq!(run("ten % 3").unwrap(), Value::from(1));
    assert_eq!(run("-7 % 3").unwrap(), Value::from(-1));
    assert_eq!(run("name + '!'").unwrap(), Value::from("alice!"));
}

#[test]
fn test_numeric_guards() {
    assert_eq!(message("1e308 * 10"), "Numeric overflow");
    assert_eq!(message("ten / zero"), "Division of 10 by 0");
    assert_eq!(message("1.5 / 0"), "Division of 1.5 by 0");
    assert_eq!(message("ten % zero"), "Modulo of 10 by 0");
}

#[test]
fn test_numeric_guards_only_catch_exact_cases() {
    // Negative infinity and NaN from other operators pass through.
    assert_eq!(
        run("-1e308 * 10").unwrap(),
        Value::from(f64::NEG_INFINITY)
    );
    assert_eq!(run("-ten / zero").unwrap(), Value::from(f64::NEG_INFINITY));
    assert!(run("zero / zero").unwrap().as_number().unwrap().is_nan());
}

#[test]
fn test_comparisons() {
    assert_eq!(run("ten > 9").unwrap(), Value::from(true));
    assert_eq!(run("ten <= 9").unwrap(), Value::from(false));
    assert_eq!(run("'abc' < 'abd'").unwrap(), Value::from(true));
    assert_eq!(run("'B' < 'a'").unwrap(), Value::from(true));
    assert_eq!(run("name >= 'alice'").unwrap(), Value::from(true));
}

#[test]
fn test_equality() {
    assert_eq!(run("ten == 10").unwrap(), Value::from(true));
    assert_eq!(run("name != 'bob'").unwrap(), Value::from(true));
    assert_eq!(run("nothing == null").unwrap(), Value::from(true));
    assert_eq!(run("nothing == 'x'").unwrap(), Value::from(false));
    assert_eq!(run("author.nickname != null").unwrap(), Value::from(false));
    assert_eq!(run("flag == true").unwrap(), Value::from(true));
    assert_eq!(run("author == author").unwrap(), Value::from(true));
    assert_eq!(run("zero / zero == zero / zero").unwrap(), Value::from(false));
}

#[test]
fn test_equality_is_type_checked() {
    assert_eq!(
        message("ten == '10'"),
        "The operator == cannot be used with number,string. It can only be used with the types: number,string,nullableString,object,boolean"
    );
    assert!(run("ten == null").is_err());
    assert!(run("author == null").is_err());
}

#[test]
fn test_unevaluable_binary_operators() {
    for (source, op) in [
        ("ten === 10", "==="),
        ("ten !== 10", "!=="),
        ("ten | 1", "|"),
        ("ten & 1", "&"),
        ("ten ^ 1", "^"),
        ("ten << 1", "<<"),
        ("ten >> 1", ">>"),
        ("ten >>> 1", ">>>"),
    ] {
        assert_eq!(message(source), format!("Invalid binary operator: {}", op));
    }
}

#[test]
fn test_logical() {
    assert_eq!(run("flag && ten > 1").unwrap(), Value::from(true));
    assert_eq!(run("!flag || ten < 1").unwrap(), Value::from(false));
    assert_eq!(
        message("ten && flag"),
        "The operator && cannot be used with number,boolean. It can only be used with the types: boolean"
    );
}

#[test]
fn test_logical_does_not_short_circuit() {
    assert_eq!(message("false && missing"), "Invalid identifier: 'missing'");
    assert_eq!(message("true || missing"), "Invalid identifier: 'missing'");
    assert_eq!(
        message("true || 1"),
        "The operator || cannot be used with boolean,number. It can only be used with the types: boolean"
    );
}

#[test]
fn test_left_operand_evaluated_first() {
    assert_eq!(message("missing + other"), "Invalid identifier: 'missing'");
    assert_eq!(message("1 + other"), "Invalid identifier: 'other'");
}

#[test]
fn test_objects_flow_through_subexpressions() {
    assert_eq!(
        run("author.github").unwrap(),
        Value::object([("repositories", Value::from(12))])
    );
    assert_eq!(run("Member(author.github, 'repositories')").unwrap(), Value::from(12));
}

#[test]
fn test_depth_limit() {
    let expr = parser::parse("-(-(-(-(1))))").unwrap();
    let vars = Variables::new();
    assert_eq!(eval_with_limits(&expr, &vars, 5).unwrap(), Value::from(1));
    assert_eq!(
        eval_with_limits(&expr, &vars, 4).unwrap_err(),
        EvalError::DepthExceeded { max_depth: 4 }
    );
}

#[test]
fn test_deep_tree_hits_default_limit() {
    let mut expr = Expr::Literal(Literal::Number(1.0));
    for _ in 0..2_000 {
        expr = Expr::Binary {
            op: BinaryOp::Add,
            left: Box::new(expr),
            right: Box::new(Expr::Literal(Literal::Number(1.0))),
        };
    }
    let result = eval(&expr, &Variables::new());
    assert!(matches!(result, Err(EvalError::DepthExceeded { max_depth: 1000 })));
}

#[test]
fn test_context_is_not_modified() {
    let vars = variables();
    let before = vars.clone();
    let expr = parser::parse("author.github.repositories > 10 && upper(name) == 'ALICE'").unwrap();
    assert_eq!(eval(&expr, &vars).unwrap(), Value::from(true));
    assert_eq!(vars, before);
}
