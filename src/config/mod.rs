//! Configuration management for `plotify.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── hatch      # [hatch]
//! │   ├── preview    # [preview]
//! │   └── service    # [service]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # PlotifyConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                      |
//! |--------------|----------------------------------------------|
//! | `[preview]`  | Preview normalization (max height)           |
//! | `[service]`  | Processing service root URL                  |
//! | `[hatch]`    | Default hatching parameters                  |
//!
//! Every section is optional; a missing file yields the defaults.

pub mod section;
pub mod types;
mod util;

pub use section::{PreviewConfig, ServiceConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::log;
use crate::service::HatchParams;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when none is given.
pub const CONFIG_FILE: &str = "plotify.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing plotify.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotifyConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    /// Defaults for hatching requests
    #[serde(default)]
    pub hatch: HatchParams,
}

impl PlotifyConfig {
    /// Load configuration for the CLI.
    ///
    /// An explicit path must exist. Otherwise `plotify.toml` is searched
    /// upward from the working directory, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(
                find_config_file(path).ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))?,
            ),
            None => find_config_file(Path::new(CONFIG_FILE)),
        };

        let Some(path) = path else {
            crate::debug!("config"; "no {} found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.validate()?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.preview.validate(&mut diag);
        self.service.validate(&mut diag);
        self.hatch.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PlotifyConfig {
    let (parsed, ignored) = PlotifyConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
