//! App shell scaffolding.
//!
//! Writes `routes/_app.tsx` so the host app loads the compiled bundle.
//! An existing file is never overwritten; the content is handed back for
//! manual merging instead.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::WcgenConfig;
use crate::render::render_app_shell;

/// Result of a scaffold attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(PathBuf),
    /// Nothing was written; `content` is what would have been.
    Exists { path: PathBuf, content: String },
}

/// Write the app shell unless it already exists.
pub fn create_app_shell(config: &WcgenConfig) -> Result<ScaffoldOutcome> {
    let path = config.app_shell_path();
    let content = render_app_shell(&config.bundle_url());

    if path.exists() {
        return Ok(ScaffoldOutcome::Exists { path, content });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, &content)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    Ok(ScaffoldOutcome::Created(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use tempfile::TempDir;

    #[test]
    fn test_create_app_shell() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let outcome = create_app_shell(&config).unwrap();
        let path = config.app_shell_path();
        assert_eq!(outcome, ScaffoldOutcome::Created(path.clone()));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<script src=\"/web-components.js\"></script>"));
    }

    #[test]
    fn test_existing_app_shell_untouched() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        let path = config.app_shell_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export default function App() {}").unwrap();

        let outcome = create_app_shell(&config).unwrap();
        match outcome {
            ScaffoldOutcome::Exists { path: p, content } => {
                assert_eq!(p, path);
                assert!(content.contains("/web-components.js"));
            }
            other => panic!("expected Exists, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export default function App() {}"
        );
    }

    #[test]
    fn test_app_shell_uses_configured_bundle_name() {
        let temp = TempDir::new().unwrap();
        let mut config = test_config(temp.path());
        config.paths.bundle_name = "elements.js".into();

        create_app_shell(&config).unwrap();
        let content = fs::read_to_string(config.app_shell_path()).unwrap();
        assert!(content.contains("<script src=\"/elements.js\"></script>"));
    }
}
