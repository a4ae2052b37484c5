//! Configuration section definitions.
//!
//! | Module  | TOML key         | Purpose                                  |
//! |---------|------------------|------------------------------------------|
//! | `head`  | `head`           | Extra `<head>` elements                  |
//! | `theme` | `[themeConfig]`  | Nav, taxonomy menus, search, footer, ... |

pub mod head;
pub mod theme;

pub use head::HeadTag;
pub use theme::{NavItem, ThemeConfig};
