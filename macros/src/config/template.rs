//! TOML template generation for the Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::{FieldInfo, FieldStatus};
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes = fields.iter().map(|f| generate_field_template_code(f));
    quote! { #(#field_codes)* }
}

/// Generate TOML template code for a single field.
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = match &info.doc {
        Some(doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    };

    // Sub sections render as their own table
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let status_comment = match info.status {
        FieldStatus::Normal => None,
        FieldStatus::Experimental => Some("# (experimental) this option may change or be removed\n"),
        FieldStatus::Hidden => return quote! {},
    };
    let status_code = match status_comment {
        Some(comment) => quote! { out.push_str(#comment); },
        None => quote! {},
    };
    let prefix = if status_comment.is_some() { "# " } else { "" };

    let ty_str = type_to_string(&info.ty);

    if let Some(default_val) = &info.default {
        let line = format!(
            "{prefix}{toml_name} = {}\n",
            format_default_for_type(default_val, &ty_str)
        );
        return quote! {
            #doc_code
            #status_code
            out.push_str(#line);
        };
    }

    // Unset optional values are left commented out
    if ty_str.starts_with("Option<") {
        let line = format!("# {toml_name} = \"\"\n");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    quote! {
        #doc_code
        #status_code
        out.push_str(#prefix);
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push('\n');
    }
}
