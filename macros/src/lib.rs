//! Proc macros for reco.
//!
//! # Config derive macro
//!
//! Generates field path accessors, a commented TOML template and
//! status checks for a configuration struct.
//!
//! ```ignore
//! #[derive(Default, Serialize, Deserialize, Config)]
//! #[serde(default, rename_all = "camelCase")]
//! #[config(section = "themeConfig")]
//! pub struct ThemeConfig {
//!     /// Heading depth shown in the sidebar.
//!     pub sidebar_depth: u32,
//!
//!     /// Friend links shown on the home page.
//!     #[config(status = experimental)]
//!     pub friend_link: Vec<FriendLink>,
//! }
//!
//! // Generates:
//! // - ThemeConfig::FIELDS.sidebar_depth -> FieldPath("themeConfig.sidebarDepth")
//! // - ThemeConfig::template() -> TOML string with comments
//! // - ThemeConfig::template_with_header() -> with [themeConfig] header
//! // - ThemeConfig::validate_field_status(&mut diag)
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root table)
//!
//! Field-level:
//! - `#[config(skip)]` - Not part of the file format
//! - `#[config(sub)]` - Nested config section, rendered as its own table
//! - `#[config(default = "x")]` - Value written to the template
//! - `#[config(status = experimental | hidden)]`
//!
//! TOML key names follow `#[serde(rename_all = "...")]` on the struct and
//! `#[serde(rename = "...")]` on the field, so field paths always match what
//! users write in `site.toml`.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template() and validate_field_status().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
