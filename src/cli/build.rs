//! One-shot commands: `list` and `build`.

use std::sync::Arc;

use anyhow::Result;

use crate::{
    bundle::CommandBundler,
    component::read_components,
    config::WcgenConfig,
    log,
    pipeline::{Pipeline, RunReport},
};

/// Create the pipeline wired to the configured bundler command.
pub fn make_pipeline(config: Arc<WcgenConfig>) -> Pipeline {
    let bundler = CommandBundler::from_config(&config);
    Pipeline::new(config, Box::new(bundler))
}

/// Print discovered components in registry order.
pub fn list_components(config: &WcgenConfig) -> Result<()> {
    let dir = config.components_dir();
    let components = read_components(&dir)?;

    if components.is_empty() {
        log!("list"; "no components in {}", config.root_relative(&dir).display());
        return Ok(());
    }

    for component in &components {
        println!("{:<24} {}", component.import_name, component.path);
    }
    Ok(())
}

/// Run the pipeline once.
pub fn build(config: Arc<WcgenConfig>) -> Result<()> {
    let pipeline = make_pipeline(config);
    let report = pipeline.run()?;

    for path in &report.written {
        crate::debug!("build"; "wrote {}", pipeline.config().root_relative(path).display());
    }
    log!("build"; "{}", summarize(pipeline.config(), &report));
    Ok(())
}

/// One-line description of a run for terminal output.
pub fn summarize(config: &WcgenConfig, report: &RunReport) -> String {
    let noun = if report.components == 1 {
        "component"
    } else {
        "components"
    };
    format!(
        "{} {} -> {} ({} bytes)",
        report.components,
        noun,
        config.root_relative(config.bundle_path()).display(),
        report.bundle_bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_summarize() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        let report = RunReport {
            components: 1,
            bundle_bytes: 120,
            written: vec![PathBuf::from("a")],
        };
        assert_eq!(
            summarize(&config, &report),
            "1 component -> static/web-components.js (120 bytes)"
        );

        let report = RunReport {
            components: 3,
            ..report
        };
        assert!(summarize(&config, &report).starts_with("3 components"));
    }

    #[test]
    fn test_list_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        assert!(list_components(&config).is_err());
    }
}
