//! Site initialization module.
//!
//! Writes a commented default configuration for a new site.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{cli::Cli, config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub use validate::InitMode;

/// Create a new site configuration
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the directory when initializing a new one
/// 3. Write the config and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout.
/// `--dest` and `--base` apply to loaded configs only; the template keeps
/// its defaults.
pub fn new_site(cli: &Cli, name: Option<&PathBuf>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    let config_name = cli
        .config
        .file_name()
        .map_or_else(|| PathBuf::from("site.toml"), PathBuf::from);

    let config_path = init_at(&root, &config_name, mode)?;
    log!("init"; "wrote {}", config_path.display());
    Ok(())
}

/// Write the config and ignore files under `root`.
fn init_at(root: &Path, config_name: &Path, mode: InitMode) -> Result<PathBuf> {
    validate::validate_target(root, config_name, mode)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;

    let config_path = root.join(config_name);
    config::write_config(&config_path)?;

    // Ignore exactly the dest the written template declares
    let written: SiteConfig = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read '{}'", config_path.display()))?
        .parse()?;
    config::write_ignore_files(root, &written.dest)?;

    Ok(config_path)
}
