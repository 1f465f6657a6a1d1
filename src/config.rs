//! Settings file support for sq.
//!
//! Provides YAML-based settings through `sq.config.yml` files, including
//! data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use spdx_sq::shared::Result;

pub const CONFIG_FILENAME: &str = "sq.config.yml";

/// Top-level settings file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// SPDX JSON document to query instead of discovering one
    pub sbom: Option<PathBuf>,
    /// Forces terminal colors on or off
    pub color: Option<bool>,
    /// Default row limit for flat listings
    pub limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load settings from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read settings file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty YAML file deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse settings file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover settings in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered settings file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded settings.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref sbom) = config.sbom {
        if sbom.as_os_str().to_string_lossy().trim().is_empty() {
            bail!(
                "Invalid settings: 'sbom' must not be empty.\n\n\
                 💡 Hint: Set 'sbom' to the path of an SPDX JSON file or remove the key to enable discovery."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the settings file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown settings field '{}' will be ignored.",
            key
        );
    }
}
