//! Component discovery.
//!
//! Lists the files directly inside the component directory and derives one
//! [`Component`] per file. The result is sorted by file name so every
//! generated document is byte-reproducible.

mod naming;

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::pipeline::PipelineError;

pub use naming::{import_name, is_valid_identifier};

/// A discovered component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// File name relative to the component directory.
    pub path: String,
    /// Identifier the module is imported under.
    pub import_name: String,
}

impl Component {
    /// Build a component from its file name, validating the derived identifier.
    pub fn from_file_name(file_name: &str) -> Result<Self, PipelineError> {
        let ident = import_name(file_name);
        if !is_valid_identifier(&ident) {
            return Err(PipelineError::InvalidIdentifier {
                file: file_name.to_string(),
                ident,
            });
        }
        Ok(Self {
            path: file_name.to_string(),
            import_name: ident,
        })
    }
}

/// Read every component file directly inside `dir`.
pub fn read_components(dir: &Path) -> Result<Vec<Component>, PipelineError> {
    if !dir.is_dir() {
        return Err(PipelineError::MissingSource(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| PipelineError::ReadDir(dir.to_path_buf(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::ReadDir(dir.to_path_buf(), e))?;
        // Follows symlinks, so a linked component file still counts.
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&name) {
            crate::debug!("scan"; "skipping {}", name);
            continue;
        }
        names.push(name);
    }
    names.sort();

    let components = names
        .iter()
        .map(|name| Component::from_file_name(name))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique(&components)?;
    Ok(components)
}

/// Fail if two components derive the same import identifier.
pub fn ensure_unique(components: &[Component]) -> Result<(), PipelineError> {
    let mut seen: FxHashMap<&str, &str> = FxHashMap::default();
    for component in components {
        if let Some(first) = seen.insert(&component.import_name, &component.path) {
            return Err(PipelineError::Collision {
                ident: component.import_name.clone(),
                first: first.to_string(),
                second: component.path.clone(),
            });
        }
    }
    Ok(())
}

/// Hidden files and editor artifacts.
pub(crate) fn is_ignored(name: &str) -> bool {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    name.starts_with('.')
        || name.ends_with('~')
        || matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "export const name = 'x-y';").unwrap();
    }

    #[test]
    fn test_read_components_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "zoo-card.ts");
        touch(temp.path(), "my-button.ts");
        touch(temp.path(), "app-header.tsx");

        let components = read_components(temp.path()).unwrap();
        let paths: Vec<_> = components.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["app-header.tsx", "my-button.ts", "zoo-card.ts"]);
        assert_eq!(components[1].import_name, "MyButton");
    }

    #[test]
    fn test_read_components_skips_dirs_and_hidden() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "my-button.ts");
        touch(temp.path(), ".DS_Store");
        touch(temp.path(), "my-button.ts~");
        touch(temp.path(), "my-card.ts.swp");
        fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "deep-thing.ts");

        let components = read_components(temp.path()).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].path, "my-button.ts");
    }

    #[test]
    fn test_read_components_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(read_components(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_components_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("web-components");
        let err = read_components(&missing).unwrap_err();
        assert!(matches!(err, PipelineError::MissingSource(p) if p == missing));
    }

    #[test]
    fn test_read_components_collision() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "my-button.ts");
        touch(temp.path(), "my_button.tsx");

        let err = read_components(temp.path()).unwrap_err();
        match err {
            PipelineError::Collision {
                ident,
                first,
                second,
            } => {
                assert_eq!(ident, "MyButton");
                assert_eq!(first, "my-button.ts");
                assert_eq!(second, "my_button.tsx");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_read_components_invalid_identifier() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "404-page.ts");

        let err = read_components(temp.path()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_ensure_unique_ok() {
        let components = vec![
            Component::from_file_name("a-one.ts").unwrap(),
            Component::from_file_name("a-two.ts").unwrap(),
        ];
        assert!(ensure_unique(&components).is_ok());
    }
}
