//! Pre-initialization validation.
//!
//! Validates target directory state before writing the config.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `reco init` - initialize in current directory (no config yet)
    CurrentDir,
    /// `reco init <name>` - create new subdirectory (must not exist or be empty)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: `config_name` must not exist yet
/// - `NewDir`: directory must be empty or not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let existing = root.join(config_name);
            if existing.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `reco init <name>` to create in a new subdirectory.",
                    existing.display()
                );
            }
        }
        InitMode::NewDir => {
            if !is_empty(root)? {
                bail!(
                    "Directory '{}' already exists and is not empty.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = "site.toml";

    #[test]
    fn test_current_dir_without_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "docs").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_current_dir_with_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG), "title = \"x\"").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_non_empty_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, Path::new(CONFIG), InitMode::NewDir).is_ok());
    }
}
