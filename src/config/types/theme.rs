//! Theme reference and resolution.
//!
//! The `theme` key names an external theme package. It is never executed
//! here, only located, through a [`ThemeResolver`].

use crate::utils::path::{expand_tilde, normalize_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Conventional prefix of theme package names.
const THEME_PREFIX: &str = "vuepress-theme-";

/// Directory searched for installed packages.
const PACKAGE_DIR: &str = "node_modules";

/// Value of the `theme` key.
///
/// `./x`, `../x`, `/x` and `~/x` are local directories, anything else is
/// a package name (`reco`, `vuepress-theme-reco`, `@org/theme`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeRef {
    Path(PathBuf),
    Package(String),
}

impl ThemeRef {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Path(path) => path.as_os_str().is_empty(),
            Self::Package(name) => name.trim().is_empty(),
        }
    }

    /// Package names to look up, literal name first.
    ///
    /// `reco` → `reco`, `vuepress-theme-reco`;
    /// `@org/x` → `@org/x`, `@org/vuepress-theme-x`.
    pub fn package_candidates(name: &str) -> Vec<String> {
        let mut names = vec![name.to_string()];
        let long = match name.split_once('/') {
            Some((scope, short)) if scope.starts_with('@') && !short.starts_with(THEME_PREFIX) => {
                Some(format!("{scope}/{THEME_PREFIX}{short}"))
            }
            None if !name.starts_with(THEME_PREFIX) => Some(format!("{THEME_PREFIX}{name}")),
            _ => None,
        };
        names.extend(long);
        names
    }
}

impl From<String> for ThemeRef {
    fn from(value: String) -> Self {
        let is_path = value.starts_with("./")
            || value.starts_with("../")
            || value.starts_with('/')
            || value.starts_with('~')
            || value == "."
            || value == "..";
        if is_path {
            Self::Path(PathBuf::from(value))
        } else {
            Self::Package(value)
        }
    }
}

impl From<ThemeRef> for String {
    fn from(value: ThemeRef) -> Self {
        match value {
            ThemeRef::Path(path) => path.to_string_lossy().into_owned(),
            ThemeRef::Package(name) => name,
        }
    }
}

impl From<&str> for ThemeRef {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for ThemeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Package(name) => f.write_str(name),
        }
    }
}

/// Locates the installed theme for a [`ThemeRef`].
pub trait ThemeResolver {
    /// Return the theme directory, or `None` when it is not installed.
    fn resolve(&self, theme: &ThemeRef, root: &Path) -> Option<PathBuf>;
}

/// Resolves local paths against the project root and packages through
/// `node_modules` directories of the root and its ancestors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeModulesResolver;

impl ThemeResolver for NodeModulesResolver {
    fn resolve(&self, theme: &ThemeRef, root: &Path) -> Option<PathBuf> {
        match theme {
            ThemeRef::Path(path) => {
                let expanded = expand_tilde(&path.to_string_lossy());
                let full = if expanded.is_absolute() {
                    expanded
                } else {
                    root.join(expanded)
                };
                full.is_dir().then(|| normalize_path(&full))
            }
            ThemeRef::Package(name) => {
                let candidates = ThemeRef::package_candidates(name);
                root.ancestors()
                    .map(|dir| dir.join(PACKAGE_DIR))
                    .filter(|dir| dir.is_dir())
                    .find_map(|modules| {
                        candidates
                            .iter()
                            .map(|c| modules.join(c))
                            .find(|p| p.is_dir())
                    })
            }
        }
    }
}
