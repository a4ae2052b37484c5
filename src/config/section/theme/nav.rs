//! `themeConfig.nav` entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Home"
//! icon = "reco-home"
//! link = "/"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A top navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Label shown in the nav bar.
    pub text: String,

    /// Icon class, e.g. `reco-home`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Root-relative path or external URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            link: link.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Validate this entry; `field` is the path of the entry itself.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "nav entry text must not be empty");
        }
        if self.link.trim().is_empty() {
            diag.error_with_hint(
                field.field("link"),
                "nav entry link must not be empty",
                "use \"/\" for the home page",
            );
        } else {
            check_link(&self.link, &field.field("link"), diag);
        }
        if self.icon.as_deref().is_some_and(|i| i.trim().is_empty()) {
            diag.error(field.field("icon"), "icon must not be empty when set");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entries() {
        let mut diag = ConfigDiagnostics::new();
        NavItem::new("Home", "/")
            .with_icon("reco-home")
            .validate(&FieldPath::new("nav[0]"), &mut diag);
        NavItem::new("Github", "https://github.com/x").validate(&FieldPath::new("nav[1]"), &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_empty_text_and_link() {
        let mut diag = ConfigDiagnostics::new();
        NavItem::default().validate(&FieldPath::new("nav[0]"), &mut diag);
        assert!(diag.has_error_at("nav[0].text"));
        assert!(diag.has_error_at("nav[0].link"));
    }

    #[test]
    fn test_relative_link_rejected() {
        let mut diag = ConfigDiagnostics::new();
        NavItem::new("Guide", "guide/").validate(&FieldPath::new("nav[0]"), &mut diag);
        assert!(diag.has_error_at("nav[0].link"));
    }
}
