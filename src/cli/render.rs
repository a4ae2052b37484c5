//! `reco render`: print views derived from the configuration.

use super::RenderTarget;
use crate::config::SiteConfig;
use crate::render::{NavBar, footer, render_head, render_navbar};
use anyhow::Result;
use chrono::Datelike;

/// Print `target` for `config`; `year` defaults to the current local year.
pub fn render_view(
    config: &SiteConfig,
    target: RenderTarget,
    json: bool,
    year: Option<i32>,
) -> Result<()> {
    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    print!("{}", render_target(config, target, json, year)?);
    Ok(())
}

fn render_target(config: &SiteConfig, target: RenderTarget, json: bool, year: i32) -> Result<String> {
    let out = match (target, json) {
        (RenderTarget::Head, false) => render_head(config),
        (RenderTarget::Head, true) => {
            serde_json::to_string_pretty(&render_head(config).lines().collect::<Vec<_>>())? + "\n"
        }
        (RenderTarget::Nav, false) => nav_text(&render_navbar(config)),
        (RenderTarget::Nav, true) => serde_json::to_string_pretty(&render_navbar(config))? + "\n",
        (RenderTarget::Footer, false) => {
            let footer = footer(&config.theme_config, year);
            match footer.record {
                Some(record) => format!("{}\n{record}\n", footer.copyright),
                None => format!("{}\n", footer.copyright),
            }
        }
        (RenderTarget::Footer, true) => {
            serde_json::to_string_pretty(&footer(&config.theme_config, year))? + "\n"
        }
    };
    Ok(out)
}

/// One `text  href` line per entry.
fn nav_text(bar: &NavBar) -> String {
    let width = bar.items.iter().map(|i| i.text.chars().count()).max().unwrap_or(0);
    bar.items
        .iter()
        .map(|item| {
            let pad = width - item.text.chars().count();
            format!("{}{}  {}\n", item.text, " ".repeat(pad), item.href)
        })
        .collect()
}
