//! Tests for the validation engine: chain ordering and whole-form reports.

use formwork::engine::{validate_all, validate_field};
use formwork::prelude::*;

fn values(pairs: &[(&str, Value)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_first_failing_rule_wins() {
    let all = values(&[("name", Value::from("ab"))]);
    let chain = [required(), min_length(3), max_length(1)];

    // "ab" violates both length bounds; the earlier rule's message wins.
    assert_eq!(
        validate_field(&chain, all.get("name"), &all),
        Some("Must be at least 3 characters".to_string())
    );

    let chain = [required(), max_length(1), min_length(3)];
    assert_eq!(
        validate_field(&chain, all.get("name"), &all),
        Some("Must be at most 1 characters".to_string())
    );
}

#[test]
fn test_empty_chain_always_passes() {
    let all = FormValues::new();
    assert_eq!(validate_field(&[], None, &all), None);
}

#[test]
fn test_passing_chain_returns_none() {
    let all = values(&[("email", Value::from("user@example.com"))]);
    let chain = [required(), email(), max_length(64)];
    assert_eq!(validate_field(&chain, all.get("email"), &all), None);
}

#[test]
fn test_validate_all_only_checks_declared_fields() {
    let schema = Schema::builder()
        .field("name", [required()])
        .build();

    // "extra" carries an invalid-looking value but is not declared.
    let all = values(&[
        ("name", Value::from("norpie")),
        ("extra", Value::from("")),
    ]);
    let report = validate_all(&schema, &all);
    assert!(report.is_valid());
    assert!(report.errors().is_empty());
}

#[test]
fn test_validate_all_collects_every_failure() {
    let schema = Schema::builder()
        .field("name", [required(), min_length(3)])
        .field("email", [required(), email()])
        .field("website", [url()])
        .build();

    let all = values(&[
        ("name", Value::from("ab")),
        ("email", Value::from("")),
        ("website", Value::from("https://example.com")),
    ]);
    let report = validate_all(&schema, &all);

    assert!(report.is_invalid());
    assert_eq!(report.message("name"), Some("Must be at least 3 characters"));
    assert_eq!(report.message("email"), Some("This field is required"));
    assert_eq!(report.message("website"), None);
    assert_eq!(report.errors().len(), 2);
}

#[test]
fn test_report_field_errors_are_sorted() {
    let schema = Schema::builder()
        .field("zulu", [required()])
        .field("alpha", [required()])
        .build();

    let report = validate_all(&schema, &FormValues::new());
    let errors = report.field_errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "alpha");
    assert_eq!(errors[1].field, "zulu");
    assert_eq!(report.first_error().unwrap().field, "alpha");
    assert_eq!(format!("{}", errors[0]), "alpha: This field is required");
}

#[test]
fn test_identical_input_yields_identical_result() {
    let schema = Schema::builder()
        .field("confirm", [equals_field("password")])
        .build();
    let all = values(&[
        ("password", Value::from("a")),
        ("confirm", Value::from("b")),
    ]);

    let first = validate_all(&schema, &all);
    let second = validate_all(&schema, &all);
    assert_eq!(first, second);
}
