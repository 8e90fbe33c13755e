//! Integration tests for path evaluation against a document on disk.

use jsoneval::document::node::JsonValue;
use jsoneval::file::loader::load_json_file;
use jsoneval::path::{strip_quotes, EvalError, Evaluator};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_test_document() -> JsonValue {
    load_json_file(fixture("test.json")).unwrap()
}

/// Evaluates `expression` and returns the printed result.
fn eval_expr(expression: &str) -> Result<String, EvalError> {
    let root = load_test_document();
    let evaluator = Evaluator::new(&root);
    evaluator.evaluate(expression).map(|value| value.to_string())
}

#[test]
fn test_index_literal() {
    assert_eq!(eval_expr("a.b[1]").unwrap(), "2");
}

#[test]
fn test_field_after_index() {
    assert_eq!(eval_expr("a.b[2].c").unwrap(), "test");
}

#[test]
fn test_whole_array() {
    assert_eq!(
        eval_expr("a.b").unwrap(),
        r#"[ 1, 2, { "c": "test" }, [ 11, 12 ] ]"#
    );
}

#[test]
fn test_index_from_subexpression() {
    assert_eq!(eval_expr("a.b[a.b[1]].c").unwrap(), "test");
}

#[test]
fn test_doubly_nested_subexpression() {
    assert_eq!(eval_expr("a.b[a.b[a.b[0]]].c").unwrap(), "test");
}

#[test]
fn test_object_result() {
    assert_eq!(
        eval_expr("a").unwrap(),
        r#"{ "b": [ 1, 2, { "c": "test" }, [ 11, 12 ] ] }"#
    );
}

#[test]
fn test_quoted_expression_after_stripping() {
    assert_eq!(eval_expr(&strip_quotes("\"a.b[2].c\"")).unwrap(), "test");
}

#[test]
fn test_missing_key_fails() {
    assert!(matches!(eval_expr("x"), Err(EvalError::KeyNotFound(_))));
}

#[test]
fn test_index_into_object_fails() {
    assert!(matches!(eval_expr("a[0]"), Err(EvalError::NotAnArray(_))));
    assert!(matches!(eval_expr("a[?]"), Err(EvalError::NotAnArray(_))));
}

#[test]
fn test_malformed_index_fails() {
    assert!(matches!(eval_expr("a.b[?]"), Err(EvalError::KeyNotFound(_))));
}

#[test]
fn test_index_out_of_range_fails() {
    assert!(matches!(
        eval_expr("a.b[42]"),
        Err(EvalError::IndexOutOfRange { index: 42, .. })
    ));
}

#[test]
fn test_negative_index_fails() {
    assert!(matches!(
        eval_expr("a.b[-1]"),
        Err(EvalError::IndexOutOfRange { index: -1, .. })
    ));
}

#[test]
fn test_index_must_be_a_number() {
    assert!(matches!(
        eval_expr("a.b[a]"),
        Err(EvalError::IndexNotNumber("object"))
    ));
    assert!(matches!(
        eval_expr("a.b[a.b[2].c]"),
        Err(EvalError::IndexNotNumber("string"))
    ));
}

#[test]
fn test_evaluator_can_be_reused_for_independent_expressions() {
    let root = load_test_document();
    let evaluator = Evaluator::new(&root);
    assert!(evaluator.evaluate("nope").is_err());
    assert_eq!(evaluator.evaluate("a.b[3][1]").unwrap().to_string(), "12");
    assert_eq!(evaluator.evaluate("a.b[0]").unwrap().to_string(), "1");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        eval_expr("a.b[42]").unwrap_err().to_string(),
        "Index '42' is out of range for array of length 4"
    );
    assert_eq!(
        eval_expr("a.b.c").unwrap_err().to_string(),
        "Token preceding '.' must be a JSON object, found array while looking up \"c\""
    );
}
