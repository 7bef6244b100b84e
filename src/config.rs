//! Configuration file support for host-sbom.
//!
//! Provides YAML-based configuration through `host-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "host-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tools: Option<Vec<String>>,
    pub format: Option<String>,
    pub diff: Option<PathBuf>,
    pub filename: Option<PathBuf>,
    pub force: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The `format` key parsed into an [`OutputFormat`]
    ///
    /// # Errors
    /// Returns an error if the key names an unknown format
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format.parse::<OutputFormat>().map_err(|message| {
                    SbomError::InvalidConfig {
                        message,
                        hint: "Set format to one of plain, json or spdx-json".to_string(),
                    }
                    .into()
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref tools) = config.tools {
        if let Some(i) = tools.iter().position(|tool| tool.trim().is_empty()) {
            return Err(SbomError::InvalidConfig {
                message: format!("tools[{}] must not be empty", i),
                hint: "List package managers by name, e.g. [dpkg, npm]".to_string(),
            }
            .into());
        }
    }
    config.output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
