//! `<head>` rendering.

use crate::config::{HeadTag, SiteConfig};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};
use std::fmt::Write;

/// Render the page `<head>` contents, one element per line.
///
/// `<title>` and the description meta come first, followed by the
/// `head` entries in configured order. Attributes are written in
/// alphabetical order; an empty value renders as a bare boolean attribute.
pub fn render_head(config: &SiteConfig) -> String {
    let mut out = String::new();

    if !config.title.is_empty() {
        let _ = writeln!(out, "<title>{}</title>", escape(&config.title));
    }
    if !config.description.is_empty() {
        let tag = HeadTag::new("meta")
            .attr("name", "description")
            .attr("content", config.description.as_str());
        render_tag(&tag, &mut out);
    }
    for tag in &config.head {
        render_tag(tag, &mut out);
    }

    out
}

fn render_tag(tag: &HeadTag, out: &mut String) {
    let name = tag.tag.to_ascii_lowercase();
    out.push('<');
    out.push_str(&name);
    for (attr, value) in &tag.attrs {
        out.push(' ');
        out.push_str(attr);
        if !value.is_empty() {
            let _ = write!(out, "=\"{}\"", escape_attr(value));
        }
    }
    out.push('>');

    if !is_void_element(&name) {
        match tag.content.as_deref() {
            Some(content) if is_raw_text_element(&name) => out.push_str(content),
            Some(content) => out.push_str(&escape(content)),
            None => {}
        }
        let _ = write!(out, "</{name}>");
    }
    out.push('\n');
}
