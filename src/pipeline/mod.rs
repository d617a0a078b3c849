//! Generation pipeline.
//!
//! One run turns the current component directory into every derived
//! artifact:
//!
//! ```text
//! ensure dirs → discover → render registry + entry → write work dir
//!             → bundle entry → write static bundle → render + write types
//! ```
//!
//! Steps run strictly in order and the first failure aborts the run. Every
//! output is rewritten wholesale, so a run on an unchanged directory produces
//! byte-identical files.

mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::bundle::Bundler;
use crate::component::read_components;
use crate::config::WcgenConfig;
use crate::render::{render_entry, render_registry, render_types};

pub use error::PipelineError;

/// Registry module file name inside the work dir.
pub const REGISTRY_FILE: &str = "index.ts";
/// Entry module file name inside the work dir.
pub const ENTRY_FILE: &str = "entry.ts";

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub components: usize,
    pub bundle_bytes: usize,
    pub written: Vec<PathBuf>,
}

/// Runs the generation steps against one project.
pub struct Pipeline {
    config: Arc<WcgenConfig>,
    bundler: Box<dyn Bundler>,
    /// Held for the whole run so two runs never write the same files at once.
    running: Mutex<()>,
}

impl Pipeline {
    pub fn new(config: Arc<WcgenConfig>, bundler: Box<dyn Bundler>) -> Self {
        Self {
            config,
            bundler,
            running: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &WcgenConfig {
        &self.config
    }

    /// Execute one full pass.
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let _guard = self.running.lock();
        let config = &*self.config;

        let components_dir = config.components_dir();
        let work_dir = config.work_dir();
        for dir in [&components_dir, &work_dir, &config.static_dir()] {
            ensure_dir(dir)?;
        }

        let components = read_components(&components_dir)?;
        crate::debug!("build"; "found {} component(s)", components.len());

        let mut written = Vec::with_capacity(4);

        let registry = render_registry(&components, &config.registry_prefix());
        let entry = render_entry(&format!("./{REGISTRY_FILE}"));
        written.push(write_document(&work_dir.join(REGISTRY_FILE), &registry)?);
        let entry_path = write_document(&work_dir.join(ENTRY_FILE), &entry)?;
        written.push(entry_path.clone());

        let code = self
            .bundler
            .bundle(&entry_path)
            .map_err(|e| PipelineError::Compile {
                entry: entry_path.clone(),
                source: e.into(),
            })?;
        written.push(write_document(&config.bundle_path(), &code)?);

        let types = render_types(
            &components,
            &config.types_prefix(),
            &config.types.jsx_module,
        );
        written.push(write_document(&config.types_path(), &types)?);

        Ok(RunReport {
            components: components.len(),
            bundle_bytes: code.len(),
            written,
        })
    }
}

/// Create a directory (and parents) if missing.
fn ensure_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|e| PipelineError::CreateDir(dir.to_path_buf(), e))
}

/// Overwrite `path` with `content`, creating the parent directory if needed.
fn write_document(path: &Path, content: &str) -> Result<PathBuf, PipelineError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| PipelineError::Write(path.to_path_buf(), e))?;
    Ok(path.to_path_buf())
}
