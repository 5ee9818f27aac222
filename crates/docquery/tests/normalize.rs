//! End-to-end normalization of criteria files against model schemas

use docquery::cli::inspect::{InspectConfig, inspect as run_inspect};
use docquery::cli::normalize::{NormalizeConfig, normalize as run_normalize};
use docquery::cli::output::format_error;
use docquery::diagnostics::{DQ0002, DQ0102, DQ0103, DQ0200, DQ0406};
use docquery::{Locale, QueryError, SchemaRegistry, normalize};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> Value {
    serde_json::from_str(&std::fs::read_to_string(fixture(name)).unwrap()).unwrap()
}

fn registry(name: &str) -> Arc<SchemaRegistry> {
    Arc::new(SchemaRegistry::from_file(fixture(name)).unwrap())
}

#[test]
fn product_criteria() {
    let selector = normalize(
        registry("product.json"),
        load("product_criteria.json"),
        Locale::new("de").unwrap(),
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&selector).unwrap(),
        json!({
            "description.de": {"$regex": "^wool", "$options": "i"},
            "price": {
                "$gte": {"$numberDecimal": "9.99"},
                "$lte": {"$numberDecimal": "20"}
            },
            "stock": {"$gt": 0, "$exists": true},
            "tags": {"$size": 2},
            "available": true,
            "released_on": [{"$date": "2020-01-01"}, {"$date": "2021-06-15"}],
            "dimensions": {"width": "10"},
            "supplier.name": "Acme"
        })
    );
}

#[test]
fn comment_criteria() {
    let selector = normalize(
        registry("comment.json"),
        load("comment_criteria.json"),
        Locale::default(),
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&selector).unwrap(),
        json!({
            "title": "42",
            "movie_id": {"$oid": "4e4d66343b39b68407000001"},
            "rating_id": {"$in": [
                {"$oid": "4e4d66343b39b68407000002"},
                {"$oid": "4e4d66343b39b68407000003"}
            ]},
            "account_id": {"$exists": false}
        })
    );
}

#[test]
fn output_keeps_criteria_order() {
    let selector = normalize(
        registry("product.json"),
        load("product_criteria.json"),
        Locale::default(),
    )
    .unwrap();

    let keys: Vec<_> = selector.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "description.en",
            "price",
            "stock",
            "tags",
            "available",
            "released_on",
            "dimensions",
            "supplier.name"
        ]
    );
}

#[rstest]
#[case(json!({"movie_id": "not-an-id"}), DQ0200)]
#[case(json!({"movie_id": {"$oid": "xyz"}}), DQ0002)]
#[case(json!(["movie_id"]), DQ0406)]
fn failures_map_to_diagnostics(#[case] criteria: Value, #[case] code: docquery::diagnostics::ErrorCode) {
    let err: QueryError = normalize(registry("comment.json"), criteria, Locale::default()).unwrap_err();
    assert_eq!(err.code(), code);
}

#[rstest]
#[case(json!({"rating": "NaN"}))]
#[case(json!({"rating": {"$gt": "inf"}}))]
#[case(json!({"rating": {"$in": ["4.5", "-Infinity"]}}))]
fn non_finite_floats_are_rejected(#[case] criteria: Value) {
    let err = normalize(registry("product.json"), criteria, Locale::default()).unwrap_err();
    assert_eq!(err.code(), DQ0200);
}

#[test]
fn finite_float_criteria() {
    let selector = normalize(
        registry("product.json"),
        json!({"rating": {"$gte": "4.5"}}),
        Locale::default(),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&selector).unwrap(),
        json!({"rating": {"$gte": 4.5}})
    );
}

#[rstest]
#[case(json!({"$regex": "^(?!Re:)", "$options": "i"}))]
#[case(json!({"$regex": "^(\\w)\\1", "$options": ""}))]
#[case(json!({"$regex": "caf\u{00e9}", "$options": "iu"}))]
fn store_regexes_pass_through(#[case] pattern: Value) {
    let selector = normalize(
        registry("comment.json"),
        json!({"title": pattern.clone()}),
        Locale::default(),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&selector).unwrap(),
        json!({"title": pattern})
    );
}

#[test]
fn normalize_command_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("criteria.out.json");

    run_normalize(NormalizeConfig {
        schema: fixture("comment.json"),
        criteria: Some(fixture("comment_criteria.json")),
        inline: None,
        locale: "en".to_string(),
        verbose: true,
        output_format: Some("pretty".to_string()),
        output_file: Some(out.clone()),
    })
    .unwrap();

    let written = std::fs::read_to_string(out).unwrap();
    assert!(written.contains('\n'));
    let written: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(written["title"], json!("42"));
}

#[test]
fn normalize_command_reports_missing_schema() {
    let schema = fixture("missing.json");
    let err = run_normalize(NormalizeConfig {
        schema: schema.clone(),
        criteria: None,
        inline: Some("{}".to_string()),
        locale: "en".to_string(),
        verbose: false,
        output_format: None,
        output_file: None,
    })
    .unwrap_err();

    let query_err = err.downcast_ref::<QueryError>().unwrap();
    assert_eq!(query_err.code(), DQ0102);

    colored::control::set_override(false);
    let rendered = format_error(&err);
    assert!(rendered.starts_with("error[DQ0102]: IO error:"));
    assert!(rendered.ends_with(&format!("help: in schema '{}'", schema.display())));
}

#[test]
fn inspect_command_reports_alias_collision() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("person.json");
    std::fs::write(
        &schema,
        r#"{"name": "Person", "fields": [
            {"name": "name", "type": "String", "aliases": ["n"]},
            {"name": "nick", "type": "String", "aliases": ["n"]}
        ]}"#,
    )
    .unwrap();

    let err = run_inspect(InspectConfig {
        schema: schema.clone(),
        output_format: Some("json".to_string()),
        output_file: Some(dir.path().join("out.json")),
    })
    .unwrap_err();

    let query_err = err.downcast_ref::<QueryError>().unwrap();
    assert_eq!(query_err.code(), DQ0102);
    let diagnostic = query_err.to_diagnostic();
    assert!(diagnostic.message.contains("collides"));
    assert_eq!(
        diagnostic.help,
        Some(format!("in schema '{}'", schema.display()))
    );
}

#[test]
fn inspect_command_reports_unsupported_format() {
    let err = run_inspect(InspectConfig {
        schema: fixture("product.yaml"),
        output_format: None,
        output_file: None,
    })
    .unwrap_err();

    assert_eq!(err.downcast_ref::<QueryError>().unwrap().code(), DQ0103);
}
