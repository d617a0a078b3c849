//! Project configuration management for `wcgen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths] [bundle] [types] [watch]
//! ├── error          # ConfigError
//! ├── util           # config file lookup
//! └── mod.rs         # WcgenConfig (this file)
//! ```
//!
//! The config file is optional: every field has a default matching the
//! conventional Fresh layout. CLI flags override file values.

pub mod section;
mod error;
mod util;

pub use error::ConfigError;
pub use section::{BundleConfig, PathsConfig, TypesConfig, WatchConfig};

use util::find_config_file;

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::{normalize_path, relative_prefix},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Default config file name.
pub const CONFIG_FILE: &str = "wcgen.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing wcgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WcgenConfig {
    /// Config file the values were read from, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub paths: PathsConfig,
    pub bundle: BundleConfig,
    pub types: TypesConfig,
    pub watch: WatchConfig,
}

impl WcgenConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Without `--config`, searches upward from the root (or cwd) for
    /// `wcgen.toml` and falls back to defaults if none exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let start = cli.root.as_ref().map_or_else(|| cwd.clone(), |r| cwd.join(r));

        let config_path = match &cli.config {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => find_config_file(&start, Path::new(CONFIG_FILE)),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => {
                crate::debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        let root = match (&cli.root, &config_path) {
            (Some(_), _) => start,
            (None, Some(path)) => path.parent().map_or(start, Path::to_path_buf),
            (None, None) => start,
        };
        config.set_root(&root);
        config.config_path = config_path;
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.paths.components, cli.components.as_ref());

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Watch {
                build_args,
                debounce,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.watch.debounce_ms, debounce.as_ref());
            }
            Commands::List | Commands::Scaffold { .. } | Commands::Init => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.bundle.minify, args.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        self.paths.validate(&mut errors);
        self.bundle.validate(&mut errors);
        self.watch.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    // ========================================================================
    // path accessors
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path (normalized to absolute form)
    pub fn set_root(&mut self, path: &Path) {
        self.root = normalize_path(path);
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.paths.components)
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.join(&self.paths.work_dir)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(&self.paths.static_dir)
    }

    /// Compiled bundle location.
    pub fn bundle_path(&self) -> PathBuf {
        self.static_dir().join(&self.paths.bundle_name)
    }

    /// Public URL of the bundle (static files are served from `/`).
    pub fn bundle_url(&self) -> String {
        format!("/{}", self.paths.bundle_name)
    }

    pub fn types_path(&self) -> PathBuf {
        self.root.join(&self.paths.types_file)
    }

    pub fn app_shell_path(&self) -> PathBuf {
        self.root.join(&self.paths.routes_dir).join("_app.tsx")
    }

    /// Import prefix for component paths inside the registry module.
    pub fn registry_prefix(&self) -> String {
        relative_prefix(&self.paths.work_dir, &self.paths.components)
    }

    /// Import prefix for component paths inside the type declarations.
    pub fn types_prefix(&self) -> String {
        let types_dir = self.paths.types_file.parent().unwrap_or(Path::new(""));
        relative_prefix(types_dir, &self.paths.components)
    }

    pub fn debounce(&self) -> Duration {
        self.watch.debounce()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> WcgenConfig {
    let (parsed, ignored) = WcgenConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`.
#[cfg(test)]
pub fn test_config(root: &Path) -> WcgenConfig {
    let mut config = WcgenConfig::default();
    config.set_root(root);
    config
}

// ============================================================================
// tests
// ============================================================================
