//! `reco check`: validate the configuration.

use crate::config::{
    ConfigDiagnostics, ConfigError, FieldPath, NodeModulesResolver, SiteConfig, ThemeResolver,
};
use crate::log;
use anyhow::Result;

/// Validate `config`, printing every problem at once.
pub fn check_site(config: &SiteConfig, strict: bool) -> Result<()> {
    let diag = collect(config, Some(&NodeModulesResolver), strict);
    diag.print_hints_and_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

/// In strict mode unknown keys and warnings are errors.
fn collect(
    config: &SiteConfig,
    resolver: Option<&dyn ThemeResolver>,
    strict: bool,
) -> ConfigDiagnostics {
    let mut diag = config.diagnostics(resolver);
    if strict {
        for path in &config.ignored {
            diag.warn(FieldPath::owned(path.as_str()), "unknown field");
        }
        diag.promote_warnings();
    }
    diag
}
