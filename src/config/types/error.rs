//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "service.url")
    pub field: FieldPath,
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field.key().cyan(), "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Validation errors collected across all sections.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Errors grouped by config section, sections in first-reported order.
    pub fn by_section(&self) -> Vec<(&'static str, Vec<&ConfigDiagnostic>)> {
        let mut groups: Vec<(&'static str, Vec<&ConfigDiagnostic>)> = Vec::new();
        for err in &self.errors {
            let section = err.field.section();
            match groups.iter_mut().find(|(name, _)| *name == section) {
                Some((_, errors)) => errors.push(err),
                None => groups.push((section, vec![err])),
            }
        }
        groups
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "config validation failed:".red().bold())?;
        for (section, errors) in self.by_section() {
            write!(f, "\n\n{}", format_args!("[{section}]").bold())?;
            for err in errors {
                write!(f, "\n  {err}")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("plotify.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("plotify.toml"));

        let missing = ConfigError::NotFound(PathBuf::from("other.toml"));
        assert!(missing.to_string().contains("other.toml"));
    }

    #[test]
    fn test_diagnostics_display_lists_every_error() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("hatch.spacing"), "must be positive");
        diag.error_with_hint(FieldPath::new("service.url"), "invalid URL", "use http://..");

        let text = diag.to_string();
        assert!(text.contains("[hatch]"));
        assert!(text.contains("spacing"));
        assert!(text.contains("must be positive"));
        assert!(text.contains("use http://.."));
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostics_grouped_by_section() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("hatch.spacing"), "must be positive");
        diag.error(FieldPath::new("service.url"), "invalid URL");
        diag.error(FieldPath::new("hatch.unit"), "unsupported unit");

        let groups = diag.by_section();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "hatch");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "service");

        let text = diag.to_string();
        let hatch = text.find("[hatch]").unwrap();
        let service = text.find("[service]").unwrap();
        assert!(hatch < text.find("unsupported unit").unwrap());
        assert!(text.find("unsupported unit").unwrap() < service);
        assert!(text.contains("found"));
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
