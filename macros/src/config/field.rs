//! Field information collected from a struct definition.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_default_value, get_serde_rename, has_flag, parse_field_status,
};
use crate::config::types::apply_rename_rule;

pub use crate::config::attr::FieldStatus;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// Key as written in the TOML file.
    pub toml_name: String,
    pub doc: Option<String>,
    pub status: FieldStatus,
    pub default: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse a named field, applying the struct's serde rename rule.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;
        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);

        let toml_name = get_serde_rename(attrs).unwrap_or_else(|| match rename_all {
            Some(rule) => apply_rename_rule(raw, rule),
            None => raw.to_string(),
        });

        Some(Self {
            name: ident.clone(),
            toml_name,
            doc: extract_doc_comment(attrs),
            status: parse_field_status(attrs),
            default: get_default_value(attrs),
            skip: has_flag(attrs, "skip"),
            sub: has_flag(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Full dotted path of this field inside `section`.
    pub fn path_in(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{section}.{}", self.toml_name)
        }
    }
}
