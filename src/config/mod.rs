//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head = [[tag, attrs, content?], ...]
//! │   └── theme/     # [themeConfig], nav, blogConfig, friendLink
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── path       # PathResolver
//! │   ├── status     # Field status checks
//! │   └── theme      # ThemeRef, ThemeResolver
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key             | Purpose                                         |
//! |-----------------|-------------------------------------------------|
//! | `title`         | Page `<title>`                                  |
//! | `description`   | Meta description                                |
//! | `dest`          | Build output directory                          |
//! | `base`          | Base URL path the site is deployed under        |
//! | `theme`         | Theme package name or local theme directory     |
//! | `head`          | Extra `<head>` elements                         |
//! | `[themeConfig]` | Options read by the theme                       |

pub mod section;
pub mod types;
mod util;

pub use section::{HeadTag, NavItem, ThemeConfig};
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, NodeModulesResolver, PathResolver, ThemeRef,
    ThemeResolver,
};

use crate::cli::Cli;
use crate::log;
use crate::utils::path::{is_external_link, normalize_path};
use anyhow::{Context, Result};
use macros::Config;
use section::head::validate_head;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use util::find_config_file_from;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Unknown keys found while parsing (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub ignored: Vec<String>,

    /// Site title, used as the page `<title>`.
    #[config(default = "My Blog")]
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Build output directory, relative to this file.
    #[config(default = "dist")]
    pub dest: String,

    /// Base URL path the site is deployed under, e.g. "/blog/".
    #[config(default = "/")]
    pub base: String,

    /// Theme package name ("reco") or local directory ("./theme").
    #[serde(skip_serializing_if = "Option::is_none")]
    #[config(default = "reco")]
    pub theme: Option<ThemeRef>,

    /// Extra `<head>` elements.
    #[config(status = hidden)]
    pub head: Vec<HeadTag>,

    /// Options read by the theme.
    #[config(sub)]
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            ignored: Vec::new(),
            title: String::new(),
            description: String::new(),
            dest: "dist".into(),
            base: "/".into(),
            theme: None,
            head: Vec::new(),
            theme_config: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file_from(&cwd, &cli.config)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.finalize(&config_path, cli);

        crate::debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Set paths and apply CLI overrides.
    fn finalize(&mut self, config_path: &Path, cli: &Cli) {
        self.config_path = normalize_path(config_path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.dest, cli.dest.as_ref());
        Self::update_option(&mut self.base, cli.base.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        config.ignored = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
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
            eprintln!("- {field}");
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize to pretty JSON, keys in declaration order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path resolver for the output directory and base-prefixed URLs.
    pub fn paths(&self) -> PathResolver<'_> {
        PathResolver::new(&self.root, &self.dest, &self.base)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration; `None` skips theme resolution.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate_with(&self, resolver: Option<&dyn ThemeResolver>) -> Result<()> {
        let diag = self.diagnostics(resolver);
        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect every diagnostic without printing anything.
    pub fn diagnostics(&self, resolver: Option<&dyn ThemeResolver>) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_field_status(&mut diag);
        self.validate_required(&mut diag);
        self.validate_base(&mut diag);
        validate_head(&self.head, &Self::FIELDS.head, &mut diag);
        self.theme_config.validate(&mut diag);

        if let Some(resolver) = resolver {
            self.validate_theme(resolver, &mut diag);
        }

        diag
    }

    /// `title`, `dest` and `theme` must be present and non-empty.
    fn validate_required(&self, diag: &mut ConfigDiagnostics) {
        let fields = Self::FIELDS;

        if self.title.trim().is_empty() {
            diag.error(fields.title, "site title must not be empty");
        }

        if self.dest.trim().is_empty() {
            diag.error_with_hint(
                fields.dest,
                "output directory must not be empty",
                "e.g. dest = \"dist\"",
            );
        }

        match &self.theme {
            None => diag.error_with_hint(
                fields.theme,
                "no theme configured",
                "e.g. theme = \"reco\" or theme = \"./theme\"",
            ),
            Some(theme) if theme.is_empty() => {
                diag.error(fields.theme, "theme must not be empty");
            }
            Some(_) => {}
        }
    }

    /// `base` is a path that starts and ends with `/`.
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let base = &self.base;
        if is_external_link(base) {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("`{base}` is a URL, only the path is expected"),
                "e.g. base = \"/blog/\"",
            );
        } else if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("`{base}` must start and end with `/`"),
                format!("use base = \"/{}/\"", base.trim_matches('/')).replace("//", "/"),
            );
        }
    }

    /// The theme must resolve to an installed package or directory.
    fn validate_theme(&self, resolver: &dyn ThemeResolver, diag: &mut ConfigDiagnostics) {
        let Some(theme) = self.theme.as_ref().filter(|t| !t.is_empty()) else {
            return;
        };

        if let Some(dir) = resolver.resolve(theme, self.get_root()) {
            crate::debug!("config"; "theme `{}` resolved to {}", theme, dir.display());
            return;
        }

        let hint = match theme {
            ThemeRef::Path(_) => format!(
                "create the directory relative to {}",
                self.config_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "site.toml".into())
            ),
            ThemeRef::Package(name) => {
                let candidates = ThemeRef::package_candidates(name);
                format!(
                    "install it first, e.g. `npm install {}`",
                    candidates.last().map_or(name.as_str(), String::as_str)
                )
            }
        };
        diag.error_with_hint(
            Self::FIELDS.theme,
            format!("theme `{theme}` is not installed"),
            hint,
        );
    }
}

/// Parse configuration from a TOML string; unknown keys are ignored.
impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ntheme = \"reco\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A full blog configuration.
#[cfg(test)]
pub const EXAMPLE_CONFIG: &str = r#"
title = "小七のblog"
description = "想法 + 实践 = Bug"
dest = "example/public"
base = "/"
theme = "../../packages/vuepress-theme-reco"
head = [
    ["link", { rel = "icon", href = "/favicon.ico" }],
    ["meta", { name = "viewport", content = "width=device-width,initial-scale=1,user-scalable=no" }],
]

[themeConfig]
type = "blog"
logo = "/head.png"
authorAvatar = "/head.png"
search = true
searchMaxSuggestions = 10
sidebarDepth = 4
lastUpdated = "Last Updated"
author = "小七"
record = "苏ICP备19064892号"
startYear = "2019"

[[themeConfig.nav]]
text = "Home"
icon = "reco-home"
link = "/"

[[themeConfig.nav]]
text = "Github"
icon = "reco-github"
link = "https://github.com/qianxiaoqi"

[themeConfig.blogConfig.category]
location = 2
text = "Category"

[themeConfig.blogConfig.tag]
location = 3
text = "Tag"
"#;

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use section::theme::SiteKind;

    /// Accepts every theme.
    struct InstalledTheme;

    impl ThemeResolver for InstalledTheme {
        fn resolve(&self, _: &ThemeRef, root: &Path) -> Option<PathBuf> {
            Some(root.to_path_buf())
        }
    }

    /// Rejects every theme.
    struct MissingTheme;

    impl ThemeResolver for MissingTheme {
        fn resolve(&self, _: &ThemeRef, _: &Path) -> Option<PathBuf> {
            None
        }
    }

    fn example() -> SiteConfig {
        let (config, ignored) = SiteConfig::parse_with_ignored(EXAMPLE_CONFIG).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        config
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[themeConfig\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.title, "");
        assert_eq!(config.dest, "dist");
        assert_eq!(config.base, "/");
        assert!(config.theme.is_none());
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_example_config() {
        let config = example();
        assert_eq!(config.title, "小七のblog");
        assert_eq!(config.dest, "example/public");
        assert_eq!(
            config.theme,
            Some(ThemeRef::Path("../../packages/vuepress-theme-reco".into()))
        );
        assert_eq!(config.head.len(), 2);

        let theme = &config.theme_config;
        assert_eq!(theme.kind, SiteKind::Blog);
        assert_eq!(theme.nav.len(), 2);
        assert_eq!(theme.nav[1].link, "https://github.com/qianxiaoqi");
        assert_eq!(theme.sidebar_depth, 4);
        assert_eq!(theme.record.as_deref(), Some("苏ICP备19064892号"));

        let diag = config.diagnostics(Some(&InstalledTheme));
        assert!(!diag.has_errors(), "{:?}", diag.errors());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = example();
        let serialized = config.to_toml().unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();
        assert_eq!(config, reparsed);

        // Serialization is idempotent
        assert_eq!(serialized, reparsed.to_toml().unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let config = example();
        let json = config.to_json().unwrap();
        let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, reparsed);
        assert!(json.find("\"title\"").unwrap() < json.find("\"themeConfig\"").unwrap());
    }

    #[test]
    fn test_round_trip_with_head_content() {
        let config = test_parse_config(r#"head = [["script", { async = "" }, "window.x = 1"]]"#);
        let reparsed = SiteConfig::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config.head, reparsed.head);
        assert_eq!(reparsed.head[0].content.as_deref(), Some("window.x = 1"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\n[themeConfig]\nserach = true\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.title, "Test");
        assert!(ignored.iter().any(|f| f == "themeConfig.serach"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_required_keys() {
        let config = SiteConfig {
            dest: String::new(),
            ..SiteConfig::default()
        };
        let diag = config.diagnostics(None);
        assert!(diag.has_error_at("title"));
        assert!(diag.has_error_at("dest"));
        assert!(diag.has_error_at("theme"));

        let config = test_parse_config("");
        assert!(!config.diagnostics(None).has_errors());
    }

    #[test]
    fn test_base_must_be_slashed() {
        for (base, ok) in [
            ("/", true),
            ("/blog/", true),
            ("blog/", false),
            ("/blog", false),
            ("https://example.com/blog/", false),
        ] {
            let config = SiteConfig {
                base: base.into(),
                ..test_parse_config("")
            };
            assert_eq!(
                !config.diagnostics(None).has_error_at("base"),
                ok,
                "base = {base:?}"
            );
        }
    }

    #[test]
    fn test_theme_resolution() {
        let config = test_parse_config("");
        assert!(!config.diagnostics(Some(&InstalledTheme)).has_errors());

        let diag = config.diagnostics(Some(&MissingTheme));
        assert!(diag.has_error_at("theme"));
        assert!(
            diag.errors()[0]
                .hint
                .as_deref()
                .unwrap()
                .contains("vuepress-theme-reco")
        );
    }

    #[test]
    fn test_theme_resolution_local_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("theme")).unwrap();
        let mut config = test_parse_config("");
        config.theme = Some(ThemeRef::from("./theme"));
        config.root = dir.path().to_path_buf();

        assert!(config.validate_with(Some(&NodeModulesResolver)).is_ok());

        config.theme = Some(ThemeRef::from("./missing"));
        assert!(config.validate_with(Some(&NodeModulesResolver)).is_err());
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "title = \"Blog\"\ntheme = \"reco\"\nbogus = 1\n").unwrap();

        let cli = Cli::try_parse_from([
            "reco",
            "-C",
            path.to_str().unwrap(),
            "--dest",
            "out",
            "--base",
            "/blog/",
            "show",
        ])
        .unwrap();
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.title, "Blog");
        assert_eq!(config.dest, "out");
        assert_eq!(config.base, "/blog/");
        assert_eq!(config.ignored, vec!["bogus".to_string()]);
        assert_eq!(config.get_root(), normalize_path(dir.path()).as_path());
        assert!(config.paths().output_dir().ends_with("out"));
    }

    #[test]
    fn test_load_missing_config() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let cli = Cli::try_parse_from(["reco", "-C", path.to_str().unwrap(), "check"]).unwrap();
        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_root_template_fields() {
        assert_eq!(SiteConfig::FIELDS.theme_config.as_str(), "themeConfig");
        assert_eq!(SiteConfig::FIELDS.title.as_str(), "title");
        let template = SiteConfig::template();
        assert!(template.contains("title = \"My Blog\""));
        assert!(template.contains("theme = \"reco\""));
        assert!(template.contains("[themeConfig]"));
        assert!(!template.contains("head ="));
    }
}
