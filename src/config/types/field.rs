//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config key, as written in `site.toml`.
///
/// Static paths come from `#[derive(Config)]`; indexed paths into arrays
/// are built with [`FieldPath::index`] and [`FieldPath::field`].
///
/// ```ignore
/// diag.error(ThemeConfig::FIELDS.sidebar_depth, "must be positive");
/// // [themeConfig.sidebarDepth]
///
/// let link = ThemeConfig::FIELDS.nav.index(1).field("link");
/// // [themeConfig.nav[1].link]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path built at runtime (unknown keys, array elements).
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element `i` of an array field.
    pub fn index(&self, i: usize) -> Self {
        Self::owned(format!("{}[{i}]", self.0))
    }

    /// Child key of a table field.
    pub fn field(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self::owned(key)
        } else {
            Self::owned(format!("{}.{key}", self.0))
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
