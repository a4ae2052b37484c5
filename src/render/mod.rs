//! Read-only views derived from a loaded [`SiteConfig`](crate::config::SiteConfig).
//!
//! | Module   | View                                             |
//! |----------|--------------------------------------------------|
//! | `nav`    | Nav bar with taxonomy menus spliced in           |
//! | `head`   | `<head>` HTML                                    |
//! | `footer` | Copyright and record lines                       |

pub mod footer;
pub mod head;
pub mod nav;

pub use footer::footer;
pub use head::render_head;
pub use nav::{NavBar, render_navbar};
