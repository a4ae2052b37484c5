//! Navigation with generated taxonomy menus.
//!
//! Category and tag menus from `blogConfig` are inserted into the user's
//! nav at their 1-based `location`, category first:
//!
//! ```text
//! nav      = [Home, Github]
//! category = 2              → [Home, Category, Github]
//! tag      = 3              → [Home, Category, Tag, Github]
//! ```

use crate::config::{NavItem, SiteConfig, ThemeConfig};
use crate::utils::path::is_external_link;
use serde::Serialize;

/// The nav bar as the theme draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBar {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Max suggestions when search is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<u32>,
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link with `base` applied.
    pub href: String,
    pub external: bool,
}

/// User nav entries with taxonomy menus inserted.
///
/// Without `blogConfig` the nav is returned exactly as configured.
pub fn resolve_nav(theme: &ThemeConfig) -> Vec<NavItem> {
    let mut nav = theme.nav.clone();

    let Some(blog) = &theme.blog_config else {
        return nav;
    };

    for entry in blog.entries() {
        let index = (entry.location.max(1) as usize - 1).min(nav.len());
        let item = NavItem::new(entry.text, entry.taxonomy.link()).with_icon(entry.taxonomy.icon());
        nav.insert(index, item);
    }

    nav
}

/// Build the nav bar for `config`, prefixing site paths with `base`.
pub fn render_navbar(config: &SiteConfig) -> NavBar {
    let theme = &config.theme_config;
    let paths = config.paths();

    let items = resolve_nav(theme)
        .into_iter()
        .map(|item| NavLink {
            href: paths.url_for(&item.link),
            external: is_external_link(&item.link),
            text: item.text,
            icon: item.icon,
        })
        .collect();

    NavBar {
        title: config.title.clone(),
        logo: theme.logo.as_deref().map(|logo| paths.url_for(logo)),
        search: theme.search.then_some(theme.search_max_suggestions),
        items,
    }
}
