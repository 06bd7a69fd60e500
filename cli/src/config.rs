#![deny(missing_docs)]

//! # Package Definition Files
//!
//! The file form of the `generate` inputs: a YAML or JSON document holding
//! the same fields as the command-line flags. Flags override file values
//! when both are given.
//!
//! Metadata entries are lists of `key`/`value` objects, not maps, so the
//! file preserves insertion order and may repeat keys; both are observable
//! in the rendered manifests.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One ordered metadata or generator-option entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigEntry {
    /// Entry key.
    pub key: String,
    /// Entry value.
    pub value: String,
}

/// Deserialized package definition. Every field is optional; the merge with
/// command-line flags decides what is ultimately required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Contract package identifier.
    pub package_id: Option<String>,
    /// Package version.
    pub version: Option<String>,
    /// Manifest authors.
    pub authors: Option<String>,
    /// Manifest description.
    pub description: Option<String>,
    /// Path to the spec file to embed.
    pub spec_path: Option<PathBuf>,
    /// Spec kind ("openapi" or "asyncapi").
    pub kind: Option<String>,
    /// Root output directory.
    pub output_dir: Option<PathBuf>,
    /// Client package identifier.
    pub client_package_id: Option<String>,
    /// Client class name.
    pub client_class_name: Option<String>,
    /// Client generator output path.
    pub client_output_path: Option<String>,
    /// Extra manifest metadata entries, in order.
    #[serde(default)]
    pub properties: Vec<ConfigEntry>,
    /// Client generator options, in order.
    #[serde(default)]
    pub nswag_options: Vec<ConfigEntry>,
    /// Skip the companion client package.
    #[serde(default)]
    pub no_client: bool,
}

/// Loads a package definition, picking the format from the file extension.
pub fn load(path: &Path) -> CliResult<PackageConfig> {
    let content = fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| CliError::General(format!("Failed to parse config {:?}: {}", path, e))),
        "json" => serde_json::from_str(&content)
            .map_err(|e| CliError::General(format!("Failed to parse config {:?}: {}", path, e))),
        other => Err(CliError::General(format!(
            "Unsupported config format '{}' (expected .yaml, .yml or .json): {:?}",
            other, path
        ))),
    }
}

/// Flattens config entries into the `(key, value)` pairs the core consumes.
pub fn entries_to_pairs(entries: &[ConfigEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.key.clone(), e.value.clone()))
        .collect()
}
