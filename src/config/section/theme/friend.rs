//! `themeConfig.friendLink` entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.friendLink]]
//! title = "vuepress-theme-reco"
//! desc = "A simple and beautiful vuepress Blog & Doc theme."
//! avatar = "https://vuepress-theme-reco.recoluan.com/icon_vuepress_reco.png"
//! link = "https://vuepress-theme-reco.recoluan.com"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendLink {
    pub title: String,
    pub desc: String,
    pub link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar image path or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl FriendLink {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(field.field("title"), "friend link title must not be empty");
        }
        if self.link.trim().is_empty() {
            diag.error(field.field("link"), "friend link must not be empty");
        } else {
            check_link(&self.link, &field.field("link"), diag);
        }
        if let Some(email) = &self.email
            && !is_plausible_email(email)
        {
            diag.error(field.field("email"), format!("`{email}` is not an email address"));
        }
        if let Some(avatar) = &self.avatar {
            check_link(avatar, &field.field("avatar"), diag);
        }
    }
}

/// `local@domain` with both parts non-empty and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
