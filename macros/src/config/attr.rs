//! Attribute parsing helpers for the Config derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, Meta};

/// Field status for template generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Normal,
    /// Reported as a hint when set, commented out in the template.
    Experimental,
    /// Left out of the template.
    Hidden,
}

/// Get section name from `#[config(section = "xxx")]`.
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get template default from `#[config(default = "xxx")]`.
pub fn get_default_value(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "default")
}

/// Get `#[serde(rename_all = "xxx")]` from a struct.
pub fn get_serde_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get `#[serde(rename = "xxx")]` from a field.
pub fn get_serde_rename(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename")
}

/// Read `key = "value"` out of `#[namespace(...)]` attributes.
fn get_string_attr(attrs: &[Attribute], namespace: &str, key: &str) -> Option<String> {
    let mut value = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(namespace)) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                Ok(())
            } else {
                skip_value(&meta)
            }
        });
        if value.is_some() {
            break;
        }
    }
    value
}

/// Check for a bare flag like `#[config(skip)]`.
pub fn has_flag(attrs: &[Attribute], key: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_value(&meta)
        });
    }
    found
}

/// Parse `#[config(status = experimental)]`.
pub fn parse_field_status(attrs: &[Attribute]) -> FieldStatus {
    let mut status = FieldStatus::Normal;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("status") {
                return skip_value(&meta);
            }
            let ident: syn::Ident = meta.value()?.parse()?;
            status = match ident.to_string().as_str() {
                "experimental" => FieldStatus::Experimental,
                "hidden" => FieldStatus::Hidden,
                _ => return Err(meta.error("unknown config status")),
            };
            Ok(())
        });
    }
    status
}

/// Consume the value of a nested meta item we are not interested in.
///
/// Handles `key`, `key = "lit"`, `key = ident` and `key(...)`.
fn skip_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let value = meta.value()?;
        if value.parse::<Lit>().is_err() {
            value.parse::<syn::Ident>()?;
        }
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}

/// Extract doc comment from `#[doc = "..."]` attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let joined = docs.join("\n");
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
