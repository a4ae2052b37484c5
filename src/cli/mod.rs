//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod render;
pub mod show;

pub use args::{Cli, Commands, RenderTarget, ShowFormat};
