//! Normalize command implementation

use super::output::{self, OutputFormat};
use crate::Locale;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for normalize command
pub struct NormalizeConfig {
    pub schema: PathBuf,
    /// Criteria file; stdin when neither this nor `inline` is set
    pub criteria: Option<PathBuf>,
    pub inline: Option<String>,
    pub locale: String,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Typecast a criteria document against a schema file
pub fn normalize(config: NormalizeConfig) -> Result<()> {
    let format = OutputFormat::resolve(config.output_format.as_deref(), OutputFormat::JsonPretty)?;
    let locale: Locale = config.locale.parse()?;

    let registry = super::load_schema(&config.schema)?;
    log::info!(
        "loaded schema '{}' from {}",
        registry.name(),
        config.schema.display()
    );

    let criteria = read_criteria(&config)?;
    let selector = crate::normalize(Arc::new(registry), criteria, locale)?;

    let result = serde_json::to_value(&selector).context("Failed to serialize criteria")?;
    output::print_output(&result, format, config.output_file.as_deref())?;

    if config.verbose {
        eprintln!(
            "{}",
            output::format_success(&format!("Normalized {} condition(s)", selector.len()))
        );
    }

    Ok(())
}

fn read_criteria(config: &NormalizeConfig) -> Result<serde_json::Value> {
    let (source, text) = match (&config.inline, &config.criteria) {
        (Some(inline), _) => ("inline criteria".to_string(), inline.clone()),
        (None, Some(path)) => (
            path.display().to_string(),
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read criteria file: {}", path.display()))?,
        ),
        (None, None) => (
            "stdin".to_string(),
            io::read_to_string(io::stdin()).context("Failed to read criteria from stdin")?,
        ),
    };

    log::debug!("read {} bytes of criteria from {}", text.len(), source);
    serde_json::from_str(&text).with_context(|| format!("Failed to parse criteria from {}", source))
}
