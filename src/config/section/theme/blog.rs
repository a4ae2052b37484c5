//! `themeConfig.blogConfig`: placement of the generated taxonomy menus.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.blogConfig.category]
//! location = 2     # position in the nav bar, 1-based
//! text = "Category"
//!
//! [themeConfig.blogConfig.tag]
//! location = 3
//! text = "Tag"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Auto-generated taxonomy menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TaxonomyConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TaxonomyConfig>,
}

/// Placement and label of one taxonomy menu. Unset values use the
/// defaults of the [`Taxonomy`] it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
        }
    }

    pub const fn default_location(self) -> u32 {
        match self {
            Self::Category => 2,
            Self::Tag => 3,
        }
    }

    pub const fn default_text(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Tag => "Tag",
        }
    }

    /// Index page generated for this taxonomy.
    pub const fn link(self) -> &'static str {
        match self {
            Self::Category => "/categories/",
            Self::Tag => "/tag/",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Category => "reco-category",
            Self::Tag => "reco-tag",
        }
    }
}

/// A taxonomy menu with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry<'a> {
    pub taxonomy: Taxonomy,
    pub location: u32,
    pub text: &'a str,
}

impl BlogConfig {
    /// Configured menus, category before tag.
    pub fn entries(&self) -> impl Iterator<Item = TaxonomyEntry<'_>> {
        [
            (Taxonomy::Category, self.category.as_ref()),
            (Taxonomy::Tag, self.tag.as_ref()),
        ]
        .into_iter()
        .filter_map(|(taxonomy, config)| {
            config.map(|c| TaxonomyEntry {
                taxonomy,
                location: c.location.unwrap_or(taxonomy.default_location()),
                text: c.text.as_deref().unwrap_or(taxonomy.default_text()),
            })
        })
    }

    /// Validate; `field` is the path of `blogConfig`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let entries: Vec<_> = self.entries().collect();

        for entry in &entries {
            if entry.text.trim().is_empty() {
                diag.error(
                    field.field(entry.taxonomy.key()).field("text"),
                    "menu text must not be empty",
                );
            }
        }

        // Locations 0 and 1 both mean the first slot.
        if let [first, second] = entries.as_slice()
            && first.location.max(1) == second.location.max(1)
        {
            diag.error_with_hint(
                field.field(second.taxonomy.key()).field("location"),
                format!(
                    "location {} is also used by `{}`",
                    second.location,
                    first.taxonomy.key()
                ),
                "give category and tag distinct locations",
            );
        }
    }
}
