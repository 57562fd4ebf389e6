#![allow(dead_code)]

use condeval::{Engine, Variables, evaluate_expression, validate_expression, variables_from_json};
use once_cell::sync::Lazy;
use serde_json::json;

/// Variable context shared by the integration tests.
pub static CONTEXT: Lazy<Variables> = Lazy::new(|| {
    variables_from_json(json!({
        "someZeroValue": 0,
        "somePositiveNumericValue": 123,
        "someNegativeNumericValue": -5,
        "someFractionValue": 2.5,
        "someStringValue": "hello",
        "someEmptyString": "",
        "someTrueValue": true,
        "someFalseValue": false,
        "someNullValue": null,
        "simpleObjectValue": { "someNumericValue": 123 },
        "typicalObjectValue": {
            "name": "condeval",
            "stars": 42,
            "license": null,
            "owner": { "login": "alice" }
        },
        "author": { "github": { "repositories": 12 } },
        "name": "alice",
        "fieldName": "someStringValue"
    }))
    .unwrap_or_else(|e| panic!("invalid test context: {}", e))
});

/// The expression is valid and evaluates to `expected`.
pub fn assert_result(input: &str, expected: bool) {
    assert_eq!(
        validate_expression(input, &CONTEXT),
        Vec::<String>::new(),
        "validate({:?})",
        input
    );
    assert_eq!(
        evaluate_expression(input, &CONTEXT),
        expected,
        "evaluate({:?})",
        input
    );
    assert_eq!(Engine::default().check(input, &CONTEXT), Ok(expected));
}

/// The expression is invalid with exactly `message`, and evaluates to false.
pub fn assert_error(input: &str, message: &str) {
    assert_eq!(
        validate_expression(input, &CONTEXT),
        vec![message.to_string()],
        "validate({:?})",
        input
    );
    assert!(!evaluate_expression(input, &CONTEXT), "evaluate({:?})", input);
}

/// The expression is invalid, whatever the message.
pub fn assert_invalid(input: &str) {
    let messages = validate_expression(input, &CONTEXT);
    assert_eq!(messages.len(), 1, "validate({:?}) = {:?}", input, messages);
    assert!(!evaluate_expression(input, &CONTEXT), "evaluate({:?})", input);
}

macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        result: { $expected:expr } $(,)?
    ) => {
        #[test]
        fn $name() {
            crate::cases::assert_result($input, $expected);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        error: { $message:expr } $(,)?
    ) => {
        #[test]
        fn $name() {
            crate::cases::assert_error($input, $message);
        }
    };
}
