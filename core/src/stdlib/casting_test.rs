use crate::{
    stdlib::call,
    values::{Value, Variables},
};
use pretty_assertions::assert_eq;

fn run(name: &str, arg: Value) -> Value {
    call(name, &[arg], &Variables::new()).unwrap()
}

#[test]
fn test_string_formats_numbers() {
    assert_eq!(run("String", Value::from(123)), Value::from("123"));
    assert_eq!(run("String", Value::from(1.5)), Value::from("1.5"));
    assert_eq!(run("String", Value::from(-0.0)), Value::from("0"));
    assert_eq!(run("String", Value::from(1e21)), Value::from("1e+21"));
    assert_eq!(run("String", Value::from(f64::NAN)), Value::from("NaN"));
    assert_eq!(run("String", Value::from("text")), Value::from("text"));
}

#[test]
fn test_number_parses_strings() {
    assert_eq!(run("Number", Value::from("42")), Value::from(42));
    assert_eq!(run("Number", Value::from("  -1.25 ")), Value::from(-1.25));
    assert_eq!(run("Number", Value::from("")), Value::from(0));
    assert_eq!(run("Number", Value::from("0x1F")), Value::from(31));
    assert_eq!(run("Number", Value::from("1e3")), Value::from(1000));
    assert_eq!(run("Number", Value::from(7)), Value::from(7));
}

#[test]
fn test_number_rejects_non_finite() {
    let vars = Variables::new();
    for input in ["abc", "12px", "Infinity", "1e400"] {
        let err = call("Number", &[Value::from(input)], &vars).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Error converting value '{}' to number", input)
        );
    }

    let err = call("Number", &[Value::from(f64::NAN)], &vars).unwrap_err();
    assert_eq!(err.to_string(), "Error converting value 'NaN' to number");
}

#[test]
fn test_boolean_uses_truthiness() {
    assert_eq!(run("Boolean", Value::from(0)), Value::from(false));
    assert_eq!(run("Boolean", Value::from(f64::NAN)), Value::from(false));
    assert_eq!(run("Boolean", Value::from(-3)), Value::from(true));
    assert_eq!(run("Boolean", Value::from("")), Value::from(false));
    assert_eq!(run("Boolean", Value::from("false")), Value::from(true));
}

#[test]
fn test_casts_reject_booleans() {
    let err = call("Boolean", &[Value::from(true)], &Variables::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument #0 of type boolean for function 'Boolean': expected number,string"
    );
}
