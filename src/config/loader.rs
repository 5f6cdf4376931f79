// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_FILE_ID_PROPERTY, DEFAULT_SOURCE_DIRECTORY};
use crate::errors::ConfigError;
use crate::model::UnsupportedRecordPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the file-collaborators processor.
///
/// Loaded from YAML, or from TOML when the file has a `.toml` extension.
///
/// # Fields
/// * `file_id` - Literal file id, or `${attribute}` to read it from the incoming attributes
/// * `attribute_prefix` - Prefix joined with `.` in front of every produced attribute (optional)
/// * `unsupported_records` - What to do with collaborations of unknown type or status
/// * `source` - Where collaborations are read from
///
/// # Example
/// ```yaml
/// file_id: "${box.id}"
/// attribute_prefix: "box.collaborations"
/// unsupported_records: skip
/// source:
///   directory: ./collaborations
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_file_id")]
    pub file_id: String,
    #[serde(default)]
    pub attribute_prefix: Option<String>,
    #[serde(default)]
    pub unsupported_records: UnsupportedRecordPolicy,
    #[serde(default)]
    pub source: SourceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_id: default_file_id(),
            attribute_prefix: None,
            unsupported_records: UnsupportedRecordPolicy::default(),
            source: SourceConfig::default(),
        }
    }
}

fn default_file_id() -> String {
    DEFAULT_FILE_ID_PROPERTY.to_string()
}

/// Location of the JSON listings read by the file source.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceConfig {
    pub directory: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
        }
    }
}

/// Parse a config from text; `toml` selects TOML, anything else YAML.
pub fn parse_config(content: &str, toml: bool) -> Result<Config, ConfigError> {
    if toml {
        Ok(toml::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    parse_config(&content, is_toml)
}

/// Load and validate a config from a YAML or TOML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
