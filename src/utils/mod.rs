//! Utility modules.

pub mod html;
pub mod path;
