//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site configuration tool for the reco blog theme
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the build output directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<String>,

    /// Override the base URL path, e.g. "/blog/"
    #[arg(short, long)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml for a new site
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate site.toml and report every problem at once
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown keys and warnings as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the effective configuration with defaults applied
    Show {
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },

    /// Print a view derived from the configuration
    #[command(visible_alias = "r")]
    Render {
        #[arg(value_enum)]
        target: RenderTarget,

        /// Emit JSON instead of text/HTML
        #[arg(long)]
        json: bool,

        /// Year used as the end of the copyright range (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// `<head>` HTML
    Head,
    /// Nav bar with taxonomy menus
    Nav,
    /// Copyright and record lines
    Footer,
}
