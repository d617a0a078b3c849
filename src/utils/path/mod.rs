//! Path utilities.
//!
//! Pure functions for path manipulation, plus `normalize_path` which
//! consults the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
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

/// Join the normal components of a relative path with `/`.
///
/// `./web-components/` → `web-components`, on every platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Import prefix that reaches `to_dir` from a module living in `from_dir`.
///
/// Both directories are relative to the same root. The result always ends
/// with `/` so a file name can be appended directly.
///
/// # Example
/// ```ignore
/// relative_prefix(Path::new(".denowebcomponents"), Path::new("web-components"))
///     == "../web-components/"
/// relative_prefix(Path::new(""), Path::new("web-components"))
///     == "./web-components/"
/// ```
pub fn relative_prefix(from_dir: &Path, to_dir: &Path) -> String {
    let depth = from_dir
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();

    let up = if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    };

    let target = to_slash(to_dir);
    if target.is_empty() {
        up
    } else {
        format!("{up}{target}/")
    }
}

/// Relative path without `..` or root components.
pub fn is_plain_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("./web-components/")), "web-components");
        assert_eq!(to_slash(Path::new("src/components")), "src/components");
        assert_eq!(to_slash(Path::new("")), "");
    }

    #[test]
    fn test_relative_prefix_from_work_dir() {
        assert_eq!(
            relative_prefix(Path::new(".denowebcomponents"), Path::new("web-components")),
            "../web-components/"
        );
        assert_eq!(
            relative_prefix(Path::new("gen/wc"), Path::new("src/components")),
            "../../src/components/"
        );
    }

    #[test]
    fn test_relative_prefix_from_root() {
        assert_eq!(
            relative_prefix(Path::new(""), Path::new("web-components")),
            "./web-components/"
        );
        assert_eq!(relative_prefix(Path::new("."), Path::new("")), "./");
    }

    #[test]
    fn test_is_plain_relative() {
        assert!(is_plain_relative(Path::new("web-components")));
        assert!(is_plain_relative(Path::new("./static")));
        assert!(!is_plain_relative(Path::new("../outside")));
        assert!(!is_plain_relative(Path::new("/abs/path")));
    }

    #[test]
    fn test_normalize_path_absolute_fallback() {
        let path = Path::new("/definitely/not/existing/path");
        assert_eq!(normalize_path(path), path);
    }
}
