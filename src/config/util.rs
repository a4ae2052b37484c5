//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;
use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`.
///
/// An absolute `config_name` is used as-is. Directories never match.
///
/// ```text
/// /home/user/blog/docs/posts/  ← start
/// /home/user/blog/site.toml    ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

/// Check that `value` is a root-relative path or an absolute http(s) URL.
pub fn check_link(value: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if value.starts_with('/') && !value.starts_with("//") {
        return;
    }

    if !is_external_link(value) {
        diag.error_with_hint(
            field.clone(),
            format!("`{value}` is neither a root-relative path nor a URL"),
            "start site paths with `/`, e.g. \"/timeline/\"",
        );
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) => match parsed.scheme() {
            "mailto" => {}
            "http" | "https" if parsed.host_str().is_some() => {}
            "http" | "https" => {
                diag.error(field.clone(), format!("URL `{value}` has no host"));
            }
            scheme => {
                diag.error_with_hint(
                    field.clone(),
                    format!("scheme '{scheme}' not supported"),
                    "use http, https or mailto",
                );
            }
        },
        Err(e) => {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn link_errors(value: &str) -> usize {
        let mut diag = ConfigDiagnostics::new();
        check_link(value, &FieldPath::new("link"), &mut diag);
        diag.len()
    }

    #[test]
    fn test_check_link() {
        assert_eq!(link_errors("/"), 0);
        assert_eq!(link_errors("/timeline/"), 0);
        assert_eq!(link_errors("https://github.com/qianxiaoqi"), 0);
        assert_eq!(link_errors("mailto:me@example.com"), 0);

        assert_eq!(link_errors("timeline/"), 1);
        assert_eq!(link_errors("//cdn.example.com/x.js"), 1);
        assert_eq!(link_errors("ftp://example.com"), 1);
        assert_eq!(link_errors("https://"), 1);
    }

    #[test]
    fn test_find_config_file_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "title = \"x\"").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml"));
        assert_eq!(found, Some(dir.path().join("site.toml")));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.toml");
        fs::write(&file, "title = \"x\"").unwrap();

        assert_eq!(find_config_file_from(Path::new("/"), &file), Some(file));
        assert!(find_config_file_from(Path::new("/"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_config_file_from(dir.path(), Path::new("reco-missing-config.toml"));
        assert!(found.is_none());
    }
}
