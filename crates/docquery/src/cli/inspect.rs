//! Inspect command implementation

use super::output::{self, OutputFormat};
use crate::DocumentSchema;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

/// Configuration for inspect command
pub struct InspectConfig {
    pub schema: PathBuf,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: String,
    #[tabled(rename = "Type")]
    field_type: String,
    #[tabled(rename = "Localized")]
    localized: bool,
    #[tabled(rename = "Aliases")]
    aliases: String,
}

/// Print the fields of a schema file
pub fn inspect(config: InspectConfig) -> Result<()> {
    let format = OutputFormat::resolve(config.output_format.as_deref(), OutputFormat::Table)?;

    let registry = super::load_schema(&config.schema)?;
    let schema = registry.snapshot();

    match format {
        OutputFormat::Table => {
            output::write_output(&format_table(&schema), config.output_file.as_deref())
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let value = serde_json::to_value(&schema).context("Failed to serialize schema")?;
            output::print_output(&value, format, config.output_file.as_deref())
        }
    }
}

/// Render schema fields as a table headed by the schema name
pub fn format_table(schema: &DocumentSchema) -> String {
    let rows: Vec<FieldRow> = schema
        .fields()
        .map(|field| FieldRow {
            name: field.name.clone(),
            field_type: field.field_type.to_string(),
            localized: field.localized,
            aliases: field.aliases.join(", "),
        })
        .collect();

    let table = Table::new(rows).with(Style::modern()).to_string();
    format!("{} ({} fields)\n{}", schema.name(), schema.len(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDefinition, FieldType};

    #[test]
    fn test_format_table() {
        let schema = DocumentSchema::from_fields(
            "Product",
            [
                FieldDefinition::new("description", FieldType::String)
                    .localized()
                    .with_alias("desc"),
                FieldDefinition::new("tags", FieldType::array_of(FieldType::String)),
            ],
        )
        .unwrap();

        let table = format_table(&schema);
        let mut lines = table.lines();
        assert_eq!(lines.next(), Some("Product (2 fields)"));
        assert!(table.contains("Localized"));
        assert!(table.contains("description"));
        assert!(table.contains("Array<String>"));
        assert!(table.contains("desc"));
    }
}
