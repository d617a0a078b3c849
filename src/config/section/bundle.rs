//! `[bundle]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! command = ["deno", "bundle", "--quiet", "$WCGEN_ENTRY"]
//! minify = false
//! ```
//!
//! The command must print the compiled script to stdout.
//! `$WCGEN_ENTRY`, `$WCGEN_ROOT` and `$WCGEN_WORK_DIR` are substituted.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Bundler command line.
    pub command: Vec<String>,

    /// Minify the compiled script.
    pub minify: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            command: ["deno", "bundle", "--quiet", "$WCGEN_ENTRY"]
                .map(String::from)
                .to_vec(),
            minify: false,
        }
    }
}

impl BundleConfig {
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.command.first().is_none_or(|p| p.trim().is_empty()) {
            errors.push("[bundle.command] must name a program".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_bundle_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.bundle.command[0], "deno");
        assert!(config.bundle.command.contains(&"$WCGEN_ENTRY".to_string()));
        assert!(!config.bundle.minify);
    }

    #[test]
    fn test_bundle_custom_command() {
        let config = test_parse_config(
            "[bundle]\ncommand = [\"esbuild\", \"$WCGEN_ENTRY\", \"--bundle\"]\nminify = true",
        );
        assert_eq!(config.bundle.command, ["esbuild", "$WCGEN_ENTRY", "--bundle"]);
        assert!(config.bundle.minify);
    }

    #[test]
    fn test_bundle_empty_command_invalid() {
        let config = test_parse_config("[bundle]\ncommand = []");
        let mut errors = Vec::new();
        config.bundle.validate(&mut errors);
        assert_eq!(errors.len(), 1);
    }
}
