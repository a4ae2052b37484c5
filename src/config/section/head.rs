//! `head` entries: extra elements injected into every page's `<head>`.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/favicon.ico" }],
//!     ["meta", { name = "viewport", content = "width=device-width,initial-scale=1" }],
//!     ["script", {}, "console.log('hi')"],
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html::is_void_element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `[tag, attrs, content?]` entry of `head`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHeadTag", into = "RawHeadTag")]
pub struct HeadTag {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    /// Inner HTML for non-void elements (inline scripts, styles).
    pub content: Option<String>,
}

/// Array form used in the config file.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawHeadTag {
    WithContent(String, BTreeMap<String, String>, String),
    Plain(String, BTreeMap<String, String>),
}

impl From<RawHeadTag> for HeadTag {
    fn from(raw: RawHeadTag) -> Self {
        match raw {
            RawHeadTag::WithContent(tag, attrs, content) => Self {
                tag,
                attrs,
                content: Some(content),
            },
            RawHeadTag::Plain(tag, attrs) => Self {
                tag,
                attrs,
                content: None,
            },
        }
    }
}

impl From<HeadTag> for RawHeadTag {
    fn from(tag: HeadTag) -> Self {
        match tag.content {
            Some(content) => Self::WithContent(tag.tag, tag.attrs, content),
            None => Self::Plain(tag.tag, tag.attrs),
        }
    }
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    #[cfg(test)]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Validate every head entry; `field` is the path of the `head` array.
pub fn validate_head(tags: &[HeadTag], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, tag) in tags.iter().enumerate() {
        let entry = field.index(i);

        if !is_valid_name(&tag.tag) || !tag.tag.starts_with(|c: char| c.is_ascii_alphabetic()) {
            diag.error_with_hint(
                entry.clone(),
                format!("invalid tag name `{}`", tag.tag),
                "use an HTML element name such as \"link\" or \"meta\"",
            );
        }

        for name in tag.attrs.keys().filter(|name| !is_valid_name(name)) {
            diag.error(entry.clone(), format!("invalid attribute name `{name}`"));
        }

        if tag.content.is_some() && is_void_element(&tag.tag) {
            diag.error_with_hint(
                entry,
                format!("`<{}>` is a void element and cannot have content", tag.tag),
                "drop the third array item",
            );
        }
    }
}

/// ASCII alphanumerics plus `-`, `_` and `:`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_head_tags_in_order() {
        let config = test_parse_config(
            r#"head = [
    ["link", { rel = "icon", href = "/favicon.ico" }],
    ["meta", { name = "viewport", content = "width=device-width" }],
    ["script", {}, "console.log(1)"],
]"#,
        );
        let head = &config.head;
        assert_eq!(head.len(), 3);
        assert_eq!(head[0].tag, "link");
        assert_eq!(head[0].attrs["href"], "/favicon.ico");
        assert_eq!(head[1].tag, "meta");
        assert!(head[1].content.is_none());
        assert_eq!(head[2].content.as_deref(), Some("console.log(1)"));
    }

    #[test]
    fn test_validate_head() {
        let tags = vec![
            HeadTag::new("link").attr("rel", "icon"),
            HeadTag::new(""),
            HeadTag::new("meta").attr("bad name", "x"),
            HeadTag::new("meta").with_content("oops"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_head(&tags, &FieldPath::new("head"), &mut diag);

        assert!(!diag.has_error_at("head[0]"));
        assert!(diag.has_error_at("head[1]"));
        assert!(diag.has_error_at("head[2]"));
        assert!(diag.has_error_at("head[3]"));
    }
}
