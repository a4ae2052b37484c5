//! Output directory and URL resolution.

use crate::utils::path::{expand_tilde, is_external_link, normalize_path};
use std::path::{Path, PathBuf};

/// Resolves `dest` and `base` against the project root.
///
/// ```ignore
/// let paths = config.paths();
/// paths.output_dir();          // /home/me/blog/dist
/// paths.url_for("/head.png");  // /blog/head.png when base = "/blog/"
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    root: &'a Path,
    dest: &'a str,
    base: &'a str,
}

impl<'a> PathResolver<'a> {
    pub const fn new(root: &'a Path, dest: &'a str, base: &'a str) -> Self {
        Self { root, dest, base }
    }

    /// Absolute build output directory.
    pub fn output_dir(&self) -> PathBuf {
        let dest = expand_tilde(self.dest);
        if dest.is_absolute() {
            normalize_path(&dest)
        } else {
            normalize_path(&self.root.join(dest))
        }
    }

    /// Prefix a root-relative path with `base`.
    ///
    /// External links and relative paths are returned unchanged.
    pub fn url_for(&self, path: &str) -> String {
        if is_external_link(path) || !path.starts_with('/') {
            return path.to_string();
        }
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_root_base() {
        let paths = PathResolver::new(Path::new("/site"), "dist", "/");
        assert_eq!(paths.url_for("/head.png"), "/head.png");
        assert_eq!(paths.url_for("/"), "/");
    }

    #[test]
    fn test_url_for_sub_base() {
        let paths = PathResolver::new(Path::new("/site"), "dist", "/blog/");
        assert_eq!(paths.url_for("/head.png"), "/blog/head.png");
        assert_eq!(paths.url_for("/"), "/blog/");
        assert_eq!(
            paths.url_for("https://github.com/x"),
            "https://github.com/x"
        );
        assert_eq!(paths.url_for("relative.png"), "relative.png");
    }

    #[test]
    fn test_output_dir_relative_and_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathResolver::new(dir.path(), "public", "/");
        assert!(paths.output_dir().ends_with("public"));
        assert!(paths.output_dir().is_absolute());

        let abs = dir.path().join("out");
        let abs_str = abs.to_string_lossy().into_owned();
        let paths = PathResolver::new(Path::new("/elsewhere"), &abs_str, "/");
        assert!(paths.output_dir().ends_with("out"));
        assert!(!paths.output_dir().starts_with("/elsewhere"));
    }
}
