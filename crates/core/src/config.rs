//! Digit-grouping format configuration via `fnkit.toml`
//!
//! A missing file means defaults: `,` separator, groups of 3.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name looked up by callers that keep one next to their data.
pub const CONFIG_FILE_NAME: &str = "fnkit.toml";

/// Default separator inserted between digit groups
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default number of digits per group
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// How digit strings are split into groups
///
/// # Example
///
/// ```toml
/// separator = ","
/// group_size = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Text inserted between groups
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Characters per group, counted from the right
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            group_size: default_group_size(),
        }
    }
}

impl FormatConfig {
    /// Check the values are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero group size or an empty separator.
    pub fn validate(&self) -> Result<()> {
        if self.group_size == 0 {
            return Err(Error::invalid_config("group_size must be at least 1"));
        }
        if self.separator.is_empty() {
            return Err(Error::invalid_config("separator must not be empty"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# fnkit digit-grouping format
#
# Text placed between groups (default: ",")
separator = ","

# Digits per group, counted from the right (default: 3)
group_size = 3
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FormatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            target: "fnkit::config",
            path = %path.display(),
            separator = %config.separator,
            group_size = config.group_size,
            "Loaded format config"
        );
        Ok(config)
    }

    /// Read config from `path`, or fall back to defaults when it does not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(target: "fnkit::config", path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
