//! `[themeConfig]` section: options read by the theme.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! type = "blog"
//! logo = "/head.png"
//! authorAvatar = "/head.png"
//! search = true
//! searchMaxSuggestions = 10
//! sidebarDepth = 4
//! lastUpdated = "Last Updated"
//! author = "小七"
//! record = "苏ICP备19064892号"
//! startYear = "2019"
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! icon = "reco-home"
//! link = "/"
//!
//! [themeConfig.blogConfig.category]
//! location = 2
//! text = "Category"
//! ```

pub mod blog;
pub mod friend;
pub mod nav;

pub use nav::NavItem;

use blog::BlogConfig;
use friend::FriendLink;

use crate::config::ConfigDiagnostics;
use crate::config::util::check_link;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Deepest heading level a sidebar can show.
const MAX_SIDEBAR_DEPTH: u32 = 6;

/// Theme options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "themeConfig")]
pub struct ThemeConfig {
    /// Layout kind: "blog" or "docs".
    #[serde(rename = "type")]
    #[config(default = "blog")]
    pub kind: SiteKind,

    #[config(status = hidden)]
    pub nav: Vec<NavItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[config(status = hidden)]
    pub blog_config: Option<BlogConfig>,

    /// Logo shown in the nav bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Avatar shown on the home page and in the author card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,

    /// Enable the search box.
    pub search: bool,

    /// Number of search suggestions.
    pub search_max_suggestions: u32,

    /// Generate the sidebar from page headings ("auto").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarMode>,

    /// Heading depth shown in the sidebar.
    pub sidebar_depth: u32,

    /// Label of the last-updated timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Author shown in the footer and on posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Site registration number shown in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,

    /// First year of the copyright range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,

    /// Code highlight theme.
    pub code_theme: CodeTheme,

    /// Friend links shown on the home page.
    #[config(status = experimental)]
    pub friend_link: Vec<FriendLink>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            kind: SiteKind::default(),
            nav: Vec::new(),
            blog_config: None,
            logo: None,
            author_avatar: None,
            search: true,
            search_max_suggestions: 10,
            sidebar: None,
            sidebar_depth: 1,
            last_updated: None,
            author: None,
            record: None,
            start_year: None,
            code_theme: CodeTheme::default(),
            friend_link: Vec::new(),
        }
    }
}

/// Site layout kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Blog,
    #[default]
    Docs,
}

/// Sidebar generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    Auto,
}

/// Prism highlight themes bundled with the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTheme {
    #[serde(rename = "default", alias = "")]
    Standard,
    Coy,
    Dark,
    Funky,
    Okaidia,
    Solarizedlight,
    #[default]
    Tomorrow,
    Twilight,
}

impl ThemeConfig {
    /// Validate theme options.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = Self::FIELDS;

        // Generated taxonomy pages share the nav with user entries.
        let mut links: FxHashSet<&str> = FxHashSet::default();
        if let Some(blog) = &self.blog_config {
            blog.validate(&fields.blog_config, diag);
            links.extend(blog.entries().map(|e| e.taxonomy.link()));
        }

        for (i, item) in self.nav.iter().enumerate() {
            let entry = fields.nav.index(i);
            item.validate(&entry, diag);
            if !item.link.is_empty() && !links.insert(item.link.as_str()) {
                diag.warn(entry.field("link"), format!("`{}` already in the nav bar", item.link));
            }
        }

        for (field, value) in [
            (&fields.logo, &self.logo),
            (&fields.author_avatar, &self.author_avatar),
        ] {
            if let Some(value) = value {
                check_link(value, field, diag);
            }
        }

        if self.search_max_suggestions == 0 {
            diag.error_with_hint(
                fields.search_max_suggestions.clone(),
                "must be a positive integer",
                format!("set {} = false to disable search", fields.search),
            );
        }

        if self.sidebar_depth == 0 {
            diag.error(fields.sidebar_depth.clone(), "must be a positive integer");
        } else if self.sidebar_depth > MAX_SIDEBAR_DEPTH {
            diag.hint(
                fields.sidebar_depth.clone(),
                format!("headings only go to h{MAX_SIDEBAR_DEPTH}, deeper levels have no effect"),
            );
        }

        if let Some(year) = &self.start_year
            && !is_year(year)
        {
            diag.error_with_hint(
                fields.start_year.clone(),
                format!("`{year}` is not a four-digit year"),
                "e.g. startYear = \"2019\"",
            );
        }

        for (i, link) in self.friend_link.iter().enumerate() {
            link.validate(&fields.friend_link.index(i), diag);
        }
    }
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme_config;
        assert_eq!(theme.kind, SiteKind::Docs);
        assert!(theme.search);
        assert_eq!(theme.search_max_suggestions, 10);
        assert_eq!(theme.sidebar_depth, 1);
        assert_eq!(theme.code_theme, CodeTheme::Tomorrow);
        assert!(theme.nav.is_empty());
        assert!(theme.blog_config.is_none());
    }

    #[test]
    fn test_camel_case_keys() {
        let config = test_parse_config(
            r#"[themeConfig]
type = "blog"
authorAvatar = "/head.png"
searchMaxSuggestions = 5
sidebarDepth = 4
sidebar = "auto"
lastUpdated = "Last Updated"
startYear = "2019"
codeTheme = "okaidia""#,
        );
        let theme = &config.theme_config;
        assert_eq!(theme.kind, SiteKind::Blog);
        assert_eq!(theme.author_avatar.as_deref(), Some("/head.png"));
        assert_eq!(theme.search_max_suggestions, 5);
        assert_eq!(theme.sidebar_depth, 4);
        assert_eq!(theme.sidebar, Some(SidebarMode::Auto));
        assert_eq!(theme.last_updated.as_deref(), Some("Last Updated"));
        assert_eq!(theme.code_theme, CodeTheme::Okaidia);
    }

    #[test]
    fn test_code_theme_default_aliases() {
        let config = test_parse_config("[themeConfig]\ncodeTheme = \"default\"");
        assert_eq!(config.theme_config.code_theme, CodeTheme::Standard);
        let config = test_parse_config("[themeConfig]\ncodeTheme = \"\"");
        assert_eq!(config.theme_config.code_theme, CodeTheme::Standard);
    }

    #[test]
    fn test_field_paths_follow_serde_names() {
        assert_eq!(
            ThemeConfig::FIELDS.search_max_suggestions.as_str(),
            "themeConfig.searchMaxSuggestions"
        );
        assert_eq!(ThemeConfig::FIELDS.kind.as_str(), "themeConfig.type");
        assert_eq!(
            ThemeConfig::FIELDS.blog_config.as_str(),
            "themeConfig.blogConfig"
        );
    }

    #[test]
    fn test_positive_integers() {
        let theme = ThemeConfig {
            search_max_suggestions: 0,
            sidebar_depth: 0,
            ..ThemeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_error_at("themeConfig.searchMaxSuggestions"));
        assert!(diag.has_error_at("themeConfig.sidebarDepth"));
    }

    #[test]
    fn test_start_year() {
        let mut theme = ThemeConfig {
            start_year: Some("19".into()),
            ..ThemeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_error_at("themeConfig.startYear"));

        theme.start_year = Some("2019".into());
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_nav_errors_are_indexed() {
        let config = test_parse_config(
            r#"[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.nav]]
text = ""
link = "https://github.com/x""#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme_config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("themeConfig.nav[1].text"));
    }

    #[test]
    fn test_duplicate_nav_links_warn() {
        let config = test_parse_config(
            r#"[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.nav]]
text = "Categories"
link = "/categories/"

[[themeConfig.nav]]
text = "Start"
link = "/"

[themeConfig.blogConfig.category]
location = 2"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme_config.validate(&mut diag);
        assert!(!diag.has_errors());
        let warned: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warned, ["themeConfig.nav[1].link", "themeConfig.nav[2].link"]);
    }

    #[test]
    fn test_friend_link_is_experimental() {
        let theme = ThemeConfig {
            friend_link: vec![FriendLink {
                title: "reco".into(),
                link: "https://vuepress-theme-reco.recoluan.com".into(),
                ..FriendLink::default()
            }],
            ..ThemeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate_field_status(&mut diag);
        assert_eq!(diag.hints()[0].as_str(), "themeConfig.friendLink");
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_template_parses() {
        let template = ThemeConfig::template_with_header();
        assert!(template.contains("[themeConfig]"));
        assert!(template.contains("searchMaxSuggestions = 10"));
        assert!(template.contains("type = \"blog\""));
        let parsed: toml::Value = toml::from_str(&template).unwrap();
        assert!(parsed.get("themeConfig").is_some());
    }
}
