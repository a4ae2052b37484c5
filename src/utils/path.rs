//! Path and URL utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to joining relative paths with the current directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Check if a link has a URL scheme (`https:`, `mailto:`, ...).
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos].starts_with(|c: char| c.is_ascii_alphabetic())
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://github.com/x"));
        assert!(is_external_link("mailto:me@example.com"));
        assert!(!is_external_link("/timeline/"));
        assert!(!is_external_link("head.png"));
        assert!(!is_external_link(":foo"));
    }

    #[test]
    fn test_expand_tilde_plain_path() {
        assert_eq!(expand_tilde("dist"), PathBuf::from("dist"));
    }
}
