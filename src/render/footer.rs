//! Footer lines.

use crate::config::ThemeConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// `© 2019 - 2024 author`
    pub copyright: String,
    /// Site registration number, when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
}

/// Build the footer for `current_year`.
///
/// The year range collapses to a single year when `startYear` is unset,
/// unparsable, or not before `current_year`.
pub fn footer(theme: &ThemeConfig, current_year: i32) -> Footer {
    let years = match theme.start_year.as_deref().and_then(|y| y.parse::<i32>().ok()) {
        Some(start) if start < current_year => format!("{start} - {current_year}"),
        _ => current_year.to_string(),
    };

    let copyright = match theme.author.as_deref().filter(|a| !a.trim().is_empty()) {
        Some(author) => format!("© {years} {author}"),
        None => format!("© {years}"),
    };

    Footer {
        copyright,
        record: theme.record.clone().filter(|r| !r.trim().is_empty()),
    }
}
