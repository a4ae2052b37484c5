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

    #[error("Config file `{0}` not found, run `reco init` to create one")]
    NotFound(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "themeConfig.nav[0].link")
    pub field: FieldPath,
    /// Error description
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
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collects every problem found while validating a config.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Experimental fields, shown as one grouped hint.
    hints: Vec<FieldPath>,
    /// Deprecated fields and suspicious values.
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Add a hint for experimental fields (collected for batch display).
    pub fn experimental_hint(&mut self, field: FieldPath) {
        self.hints.push(field);
    }

    /// Add a general hint (printed immediately).
    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        crate::log!("hint"; "[{}] {}", field.as_str(), message.into());
    }

    /// Print collected hints and warnings in a grouped format.
    pub fn print_hints_and_warnings(&self) {
        if !self.warnings.is_empty() {
            crate::log!("warning"; "config warnings:");
            for warning in &self.warnings {
                eprintln!("- {}: {}", warning.field.as_str(), warning.message);
            }
        }

        if !self.hints.is_empty() {
            crate::log!("hint"; "experimental fields, may change or be removed:");
            for field in &self.hints {
                eprintln!("- {}", field.as_str());
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Turn every warning into an error (`check --strict`).
    pub fn promote_warnings(&mut self) {
        self.errors.append(&mut self.warnings);
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
impl ConfigDiagnostics {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn hints(&self) -> &[FieldPath] {
        &self.hints
    }

    /// Whether an error was reported for exactly this field path.
    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.field.as_str() == path)
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
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
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let not_found = ConfigError::NotFound(PathBuf::from("site.toml"));
        assert!(format!("{not_found}").contains("reco init"));
    }

    #[test]
    fn test_diagnostics_collect_all_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("title"), "must not be empty");
        diag.error_with_hint(FieldPath::new("base"), "must start with `/`", "use \"/\"");
        assert_eq!(diag.len(), 2);
        assert!(diag.has_error_at("base"));
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use \"/\""));

        let display = format!("{}", diag.into_result().unwrap_err());
        assert!(display.contains("title"));
        assert!(display.contains("2"));
    }

    #[test]
    fn test_promote_warnings() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::owned("themeConfig.serach"), "unknown field");
        assert!(!diag.has_errors());
        diag.promote_warnings();
        assert!(diag.has_error_at("themeConfig.serach"));
        assert!(diag.warnings().is_empty());
    }
}
