//! reco - Typed site configuration for the reco blog theme.

mod cli;
mod config;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` runs before any config exists
    if let Commands::Init { name, dry } = &cli.command {
        return cli::init::new_site(&cli, name.as_ref(), *dry);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check { strict } => cli::check::check_site(&config, *strict),
        Commands::Show { format } => cli::show::show_config(&config, *format),
        Commands::Render { target, json, year } => {
            // Views need a well-formed config, not an installed theme
            config.validate_with(None)?;
            cli::render::render_view(&config, *target, *json, *year)
        }
    }
}
