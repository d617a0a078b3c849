//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! components = "web-components"          # Component sources (relative to project root)
//! work_dir = ".denowebcomponents"        # Generated registry + entry modules
//! static_dir = "static"                  # Where the compiled bundle is written
//! bundle_name = "web-components.js"      # Bundle file name inside `static_dir`
//! types_file = "web-component-types.d.ts"
//! routes_dir = "routes"                  # Where `scaffold` writes `_app.tsx`
//! ```

use std::path::{Component, PathBuf};

use serde::Deserialize;

use crate::utils::path::is_plain_relative;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub components: PathBuf,
    pub work_dir: PathBuf,
    pub static_dir: PathBuf,
    pub bundle_name: String,
    pub types_file: PathBuf,
    pub routes_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components: "web-components".into(),
            work_dir: ".denowebcomponents".into(),
            static_dir: "static".into(),
            bundle_name: "web-components.js".into(),
            types_file: "web-component-types.d.ts".into(),
            routes_dir: "routes".into(),
        }
    }
}

impl PathsConfig {
    /// Collect validation errors for this section.
    pub fn validate(&self, errors: &mut Vec<String>) {
        let dirs = [
            ("paths.components", &self.components),
            ("paths.work_dir", &self.work_dir),
            ("paths.static_dir", &self.static_dir),
            ("paths.types_file", &self.types_file),
            ("paths.routes_dir", &self.routes_dir),
        ];
        for (field, path) in dirs {
            if !path.components().any(|c| matches!(c, Component::Normal(_))) {
                errors.push(format!(
                    "[{field}] must not be empty or the project root itself"
                ));
            } else if !is_plain_relative(path) {
                errors.push(format!(
                    "[{field}] `{}` must be relative to the project root without `..`",
                    path.display()
                ));
            }
        }

        if self.bundle_name.is_empty()
            || self.bundle_name.contains(['/', '\\'])
            || self.bundle_name.starts_with('.')
        {
            errors.push(format!(
                "[paths.bundle_name] `{}` must be a plain file name",
                self.bundle_name
            ));
        }

        if self.types_file.file_name().is_none() {
            errors.push("[paths.types_file] must name a file".into());
        }
    }
}
