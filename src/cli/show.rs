//! `reco show`: print the effective configuration.

use super::ShowFormat;
use crate::config::SiteConfig;
use anyhow::Result;

/// Print `config` with defaults and CLI overrides applied.
pub fn show_config(config: &SiteConfig, format: ShowFormat) -> Result<()> {
    print!("{}", format_config(config, format)?);
    Ok(())
}

fn format_config(config: &SiteConfig, format: ShowFormat) -> Result<String> {
    Ok(match format {
        ShowFormat::Toml => config.to_toml()?,
        ShowFormat::Json => config.to_json()? + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_are_shown() {
        let config = test_parse_config("");
        let toml = format_config(&config, ShowFormat::Toml).unwrap();
        assert!(toml.contains("dest = \"dist\""));
        assert!(toml.contains("searchMaxSuggestions = 10"));

        let json: serde_json::Value =
            serde_json::from_str(&format_config(&config, ShowFormat::Json).unwrap()).unwrap();
        assert_eq!(json["base"], "/");
        assert_eq!(json["themeConfig"]["sidebarDepth"], 1);
    }

    #[test]
    fn test_json_keeps_declaration_order() {
        let config = test_parse_config("");
        let json = format_config(&config, ShowFormat::Json).unwrap();
        let title = json.find("\"title\"").unwrap();
        let theme_config = json.find("\"themeConfig\"").unwrap();
        assert!(title < theme_config);
    }
}
