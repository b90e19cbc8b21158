//! `[service]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [service]
//! url = "http://localhost:8000"   # Root of the processing service
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::service::DEFAULT_URL;

/// Processing service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub url: String,
}

impl ServiceConfig {
    pub const URL: FieldPath = FieldPath::new("service.url");

    /// Parsed service root. Only fails on a config that did not validate.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match Url::parse(&self.url) {
            Ok(url) if url.cannot_be_a_base() => {
                diag.error(Self::URL, format!("`{}` cannot be used as a base URL", self.url));
            }
            Ok(_) => {}
            Err(err) => diag.error_with_hint(
                Self::URL,
                format!("invalid URL `{}`: {err}", self.url),
                format!("use an absolute URL such as \"{DEFAULT_URL}\""),
            ),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}
