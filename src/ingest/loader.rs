use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::records::Dataset;

/// Serialization format of a promise data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from the file extension; anything unrecognized is
    /// treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DataFormat::Yaml,
            _ => DataFormat::Json,
        }
    }
}

/// Parse promise data from a string
pub fn parse_dataset(content: &str, format: DataFormat) -> Result<Dataset> {
    let dataset: Dataset = match format {
        DataFormat::Json => serde_json::from_str(content).context("invalid JSON")?,
        DataFormat::Yaml => serde_saphyr::from_str(content).context("invalid YAML")?,
    };
    Ok(dataset)
}

/// Load promise data from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold either a
/// list of promises or a politician record.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read promise data at {}", path.display()))?;

    parse_dataset(&content, DataFormat::from_path(path))
        .with_context(|| format!("Failed to parse promise data in {}", path.display()))
}
