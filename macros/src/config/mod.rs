//! Config derive macro - generates FIELDS, template() and experimental-field checks.

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{extract_doc_comment, get_section, get_serde_rename_all};
use field::{FieldInfo, FieldStatus};
use template::generate_template_code;
use types::infer_section;

/// Generate Config implementation.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{name}Fields"), name.span());

    let section = get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();
    let rename_all = get_serde_rename_all(&input.attrs);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|f| FieldInfo::from_field(f, rename_all.as_deref()))
        .collect();
    let visible: Vec<&FieldInfo> = field_infos.iter().filter(|f| !f.skip).collect();

    // FIELDS
    let field_defs = visible.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });
    let field_inits = visible.iter().map(|f| {
        let name = &f.name;
        let full_path = f.path_in(&section);
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    // template()
    let template_fields: Vec<&FieldInfo> = visible
        .iter()
        .copied()
        .filter(|f| f.status != FieldStatus::Hidden)
        .collect();
    let template_code = generate_template_code(&template_fields);

    // validate_field_status()
    let own_fields: Vec<&FieldInfo> = visible.iter().copied().filter(|f| !f.sub).collect();

    let status_checks: Vec<TokenStream> = own_fields
        .iter()
        .filter(|f| f.status == FieldStatus::Experimental)
        .map(|f| {
            let field_name = &f.name;
            let full_path = f.path_in(&section);
            quote! {
                if self.#field_name != default.#field_name {
                    crate::config::types::check_experimental(#full_path, diag);
                }
            }
        })
        .collect();

    let nested_calls = visible.iter().filter(|f| f.sub).map(|f| {
        let field_name = &f.name;
        quote! { self.#field_name.validate_field_status(diag); }
    });

    let default_def = if status_checks.is_empty() {
        quote! {}
    } else {
        quote! { let default = Self::default(); }
    };

    quote! {
        /// Generated field path accessors.
        #[allow(dead_code)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        #[allow(dead_code)]
        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            #[allow(unused_variables)]
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #template_code
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                for line in Self::TEMPLATE_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                if !Self::TEMPLATE_SECTION.is_empty() {
                    out.push('[');
                    out.push_str(Self::TEMPLATE_SECTION);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }

            /// Report experimental fields that differ from their defaults.
            #[allow(unused_variables)]
            pub fn validate_field_status(&self, diag: &mut crate::config::ConfigDiagnostics) {
                #default_def
                #(#status_checks)*
                #(#nested_calls)*
            }
        }
    }
}
