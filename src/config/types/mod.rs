//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Dotted field paths for diagnostics           |
//! | `path`   | Output directory and URL resolution          |
//! | `status` | Experimental field reporting                 |
//! | `theme`  | Theme reference and resolver seam            |

mod error;
mod field;
mod path;
mod status;
mod theme;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use path::PathResolver;
pub use status::check_experimental;
pub use theme::{NodeModulesResolver, ThemeRef, ThemeResolver};
