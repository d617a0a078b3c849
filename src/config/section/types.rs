//! `[types]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [types]
//! jsx_module = "https://esm.sh/preact@10.10.0"   # Module whose JSX namespace is augmented
//! ```

use serde::Deserialize;

use crate::render::DEFAULT_JSX_MODULE;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    pub jsx_module: String,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            jsx_module: DEFAULT_JSX_MODULE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_types_config() {
        let config = test_parse_config("[types]\njsx_module = \"preact\"");
        assert_eq!(config.types.jsx_module, "preact");

        let config = test_parse_config("");
        assert_eq!(config.types.jsx_module, "https://esm.sh/preact@10.10.0");
    }
}
