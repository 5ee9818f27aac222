//! Loading the bundled model schemas through the registry

use docquery_diagnostics::{DQ0101, DQ0103, QueryError};
use docquery_schema::{FieldDefinition, Schema, SchemaError, SchemaRegistry};
use docquery_types::FieldType;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn comment_declares_association_keys() {
    let registry = SchemaRegistry::from_file(fixture("comment.json")).unwrap();

    assert_eq!(registry.name(), "Comment");
    assert_eq!(
        registry.field_names(),
        [
            "title",
            "text",
            "account_id",
            "movie_id",
            "rating_id",
            "wiki_page_id"
        ]
    );
    assert_eq!(
        registry.field("movie_id").unwrap().field_type,
        FieldType::ObjectId
    );
    assert!(registry.aliased_fields().is_empty());
}

#[test]
fn word_origin_uses_integer_ids() {
    let registry = SchemaRegistry::from_file(fixture("word_origin.json")).unwrap();

    assert_eq!(registry.field("_id").unwrap().field_type, FieldType::Integer);
    assert_eq!(
        registry.field("origin_id").unwrap().field_type,
        FieldType::Integer
    );
    assert_eq!(registry.field("city").unwrap().field_type, FieldType::String);
    assert!(registry.field("word").is_none());
}

#[test]
fn product_has_localized_aliased_description() {
    let registry = SchemaRegistry::from_file(fixture("product.json")).unwrap();

    let description = registry.field("description").unwrap();
    assert!(description.localized);
    assert_eq!(description.aliases, ["desc"]);

    assert_eq!(registry.canonical_name("desc"), "description");
    assert_eq!(registry.canonical_name("p"), "price");
    assert_eq!(
        registry.field("tags").unwrap().field_type,
        FieldType::array_of(FieldType::String)
    );
    assert!(registry.field("dimensions").unwrap().is_hash());
}

#[test]
fn runtime_alias_collision_is_rejected() {
    let registry = SchemaRegistry::from_file(fixture("product.json")).unwrap();

    let err = registry
        .add_field(FieldDefinition::new("discount", FieldType::Decimal).with_alias("p"))
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::AliasCollision {
            alias: "p".to_string(),
            field: "discount".to_string(),
            existing: "price".to_string(),
        }
    );
    assert!(registry.field("discount").is_none());

    let query_err: QueryError = err.into();
    assert_eq!(query_err.code(), DQ0101);
}

#[test]
fn unsupported_extension_maps_to_diagnostic() {
    let err = SchemaRegistry::from_file("schema.toml").unwrap_err();
    assert_eq!(err.code(), DQ0103);
}
