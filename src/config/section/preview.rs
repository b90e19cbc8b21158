//! `[preview]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [preview]
//! max_height = "16rem"        # CSS max-height of on-screen previews
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::display::DEFAULT_MAX_HEIGHT;

/// Preview normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// CSS `max-height` written into the preview style.
    pub max_height: String,
}

impl PreviewConfig {
    pub const MAX_HEIGHT: FieldPath = FieldPath::new("preview.max_height");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_height.trim().is_empty() {
            diag.error_with_hint(
                Self::MAX_HEIGHT,
                "must not be empty",
                format!("use a CSS length such as \"{DEFAULT_MAX_HEIGHT}\""),
            );
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_preview_config() {
        let config = test_parse_config("[preview]\nmax_height = \"100%\"");
        assert_eq!(config.preview.max_height, "100%");
    }

    #[test]
    fn test_preview_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.preview.max_height, "16rem");
    }

    #[test]
    fn test_empty_max_height_rejected() {
        let mut diag = ConfigDiagnostics::new();
        PreviewConfig {
            max_height: " ".into(),
        }
        .validate(&mut diag);
        assert_eq!(diag.errors()[0].field, PreviewConfig::MAX_HEIGHT);
    }
}
