//! Serialization of finished documents to YAML or JSON.
//!
//! The pipeline returns a typed [`Document`](crate::document::Document);
//! these helpers render it for the host to persist or print. Writing the
//! artifact anywhere is host business; nothing here serves it.

use crate::document::Document;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a document to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Example
///
/// ```
/// use openapi_from_routes::generator::{create_generator, GeneratorOptions};
/// use openapi_from_routes::host::Host;
/// use openapi_from_routes::serializer::serialize_yaml;
///
/// let generation = create_generator(Host::builder().build(), GeneratorOptions::default())
///     .generate()
///     .unwrap();
/// let yaml = serialize_yaml(&generation.document).unwrap();
/// assert!(yaml.contains("openapi: 3.1.0"));
/// ```
pub fn serialize_yaml(document: &Document) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    serde_yaml::to_string(document).context("Failed to serialize OpenAPI document to YAML")
}

/// Serializes a document to pretty-printed JSON.
///
/// The output is stable across runs for identical input: all document maps
/// are ordered, so the rendered bytes are too.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(document: &Document) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    serde_json::to_string_pretty(document).context("Failed to serialize OpenAPI document to JSON")
}

/// Writes string content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
