//! Name and type helpers for the Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to its compact string form (`Option<String>`).
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name.
///
/// `ThemeConfig` → `theme`, `BlogSettings` → `blog`.
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("Config")
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    apply_rename_rule(&to_snake_case(name), "camelCase")
}

/// Convert PascalCase to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Apply a serde `rename_all` rule to a snake_case field name.
pub fn apply_rename_rule(field: &str, rule: &str) -> String {
    let words = field.split('_').filter(|w| !w.is_empty());
    match rule {
        "camelCase" => words
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_string() } else { capitalize(w) })
            .collect(),
        "PascalCase" => words.map(capitalize).collect(),
        "kebab-case" => words.collect::<Vec<_>>().join("-"),
        "SCREAMING_SNAKE_CASE" => field.to_ascii_uppercase(),
        "lowercase" => field.replace('_', "").to_ascii_lowercase(),
        "UPPERCASE" => field.replace('_', "").to_ascii_uppercase(),
        _ => field.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a `#[config(default = "...")]` value for the template.
///
/// Numbers and booleans are written as-is, everything else as a string.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    let inner = ty
        .strip_prefix("Option<")
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(ty);

    let is_scalar = matches!(
        inner,
        "bool"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "usize"
            | "i8"
            | "i16"
            | "i32"
            | "i64"
            | "isize"
            | "f32"
            | "f64"
    );

    if is_scalar {
        value.to_string()
    } else {
        format!("{value:?}")
    }
}
