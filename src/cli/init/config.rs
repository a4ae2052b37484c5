//! Configuration file generation.
//!
//! Creates site.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteConfig;

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Root keys that must precede the `[themeConfig]` table.
const HEAD_EXAMPLE: &str = r#"# Extra <head> elements: [tag, { attrs }, content?]
head = [
    ["link", { rel = "icon", href = "/favicon.ico" }],
    ["meta", { name = "viewport", content = "width=device-width,initial-scale=1,user-scalable=no" }],
]

"#;

const NAV_EXAMPLE: &str = r#"
# Top navigation, in display order
[[themeConfig.nav]]
text = "Home"
icon = "reco-home"
link = "/"

[[themeConfig.nav]]
text = "TimeLine"
icon = "reco-date"
link = "/timeline/"

# Generated category and tag menus, inserted at a 1-based nav position
[themeConfig.blogConfig.category]
location = 2
text = "Category"

[themeConfig.blogConfig.tag]
location = 3
text = "Tag"
"#;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# reco site configuration (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(HEAD_EXAMPLE);
    out.push_str(&SiteConfig::template());
    out.push_str(NAV_EXAMPLE);

    out
}

/// Write the default configuration to `path`.
pub fn write_config(path: &Path) -> Result<()> {
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write .gitignore with the output directory and installed packages.
///
/// Existing ignore files are left untouched.
pub fn write_ignore_files(root: &Path, dest: &str) -> Result<()> {
    let patterns = [
        format!("/{}/", dest.trim_matches('/')),
        "node_modules/".to_string(),
        ".DS_Store".to_string(),
    ];
    let content = patterns.join("\n") + "\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
