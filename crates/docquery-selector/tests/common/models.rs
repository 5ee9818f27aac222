//! Model schemas shared by the selector tests

use super::MockSchema;
use docquery_schema::FieldDefinition;
use docquery_types::FieldType;
use std::sync::Arc;

pub const MOVIE_ID: &str = "4e4d66343b39b68407000001";

/// Person with scalar, array and hash fields
pub fn person() -> Arc<MockSchema> {
    MockSchema::new([
        FieldDefinition::new("age", FieldType::Integer).with_alias("a"),
        FieldDefinition::new("title", FieldType::String),
        FieldDefinition::new("terms", FieldType::Boolean),
        FieldDefinition::new("score", FieldType::Float),
        FieldDefinition::new("salary", FieldType::Decimal),
        FieldDefinition::new("dob", FieldType::Date),
        FieldDefinition::new("lunch_time", FieldType::DateTime),
        FieldDefinition::new("aliases", FieldType::array_of(FieldType::String)),
        FieldDefinition::new("things", FieldType::array()),
        FieldDefinition::new("map", FieldType::Hash),
        FieldDefinition::new("extra", FieldType::Object),
    ])
}

/// Product with a localized, aliased description
pub fn product() -> Arc<MockSchema> {
    MockSchema::new([
        FieldDefinition::new("name", FieldType::String),
        FieldDefinition::new("description", FieldType::String)
            .localized()
            .with_alias("desc"),
        FieldDefinition::new("price", FieldType::Decimal),
    ])
}

/// Comment with association keys
pub fn comment() -> Arc<MockSchema> {
    MockSchema::new([
        FieldDefinition::new("title", FieldType::String),
        FieldDefinition::new("text", FieldType::String),
        FieldDefinition::new("account_id", FieldType::ObjectId),
        FieldDefinition::new("movie_id", FieldType::ObjectId),
        FieldDefinition::new("rating_id", FieldType::ObjectId),
        FieldDefinition::new("wiki_page_id", FieldType::ObjectId),
    ])
}
