//! Bundler adapter.
//!
//! Compiling the generated entry module and everything it imports into one
//! script is delegated to an external tool. [`Bundler`] is the seam: the
//! pipeline only hands over an entry path and receives script text back.
//!
//! [`CommandBundler`] runs the configured command line, substituting
//! `$WCGEN_*` variables in its arguments:
//!
//! | Variable          | Value                              |
//! |-------------------|------------------------------------|
//! | `$WCGEN_ENTRY`    | absolute path of the entry module  |
//! | `$WCGEN_ROOT`     | project root                       |
//! | `$WCGEN_WORK_DIR` | directory holding generated input  |

mod minify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;

use crate::config::WcgenConfig;
use crate::utils::exec::{Cmd, FilterRule};

pub use minify::minify_js;

/// Progress chatter printed by `deno bundle` on stderr.
const BUNDLER_FILTER: FilterRule = FilterRule::new(&["Download ", "Check ", "Bundle "]);

/// Compiles an entry module into a single self-contained script.
pub trait Bundler: Send + Sync {
    fn bundle(&self, entry: &Path) -> Result<String>;
}

/// Bundler backed by an external command that prints the script to stdout.
#[derive(Debug, Clone)]
pub struct CommandBundler {
    command: Vec<String>,
    root: PathBuf,
    work_dir: PathBuf,
    minify: bool,
}

impl CommandBundler {
    pub fn from_config(config: &WcgenConfig) -> Self {
        Self {
            command: config.bundle.command.clone(),
            root: config.get_root().to_path_buf(),
            work_dir: config.work_dir(),
            minify: config.bundle.minify,
        }
    }
}

impl Bundler for CommandBundler {
    fn bundle(&self, entry: &Path) -> Result<String> {
        if self.command.is_empty() {
            bail!("no bundler command configured");
        }

        let vars = bundle_vars(entry, &self.root, &self.work_dir);
        let resolved = resolve_args(&self.command, &vars);
        crate::debug!("bundle"; "running `{}`", resolved.join(" "));

        let output = Cmd::from_slice(&resolved)
            .cwd(&self.root)
            .envs(&vars)
            .filter(&BUNDLER_FILTER)
            .run()?;

        let code = String::from_utf8(output.stdout)
            .with_context(|| format!("`{}` printed non UTF-8 output", resolved[0]))?;
        if code.trim().is_empty() {
            bail!("`{}` printed no script", resolved[0]);
        }

        if !self.minify {
            return Ok(code);
        }
        match minify_js(&code) {
            Some(minified) => Ok(minified),
            None => {
                crate::debug!("bundle"; "minification skipped: output did not parse");
                Ok(code)
            }
        }
    }
}

// ============================================================================
// Command Argument Resolution
// ============================================================================

/// Build `$WCGEN_*` variables for the bundler command.
pub fn bundle_vars(entry: &Path, root: &Path, work_dir: &Path) -> FxHashMap<String, String> {
    let mut vars = FxHashMap::default();
    vars.insert("WCGEN_ENTRY".into(), entry.display().to_string());
    vars.insert("WCGEN_ROOT".into(), root.display().to_string());
    vars.insert("WCGEN_WORK_DIR".into(), work_dir.display().to_string());
    vars
}

/// Resolve `$WCGEN_*` variables in command arguments.
pub fn resolve_args(args: &[String], vars: &FxHashMap<String, String>) -> Vec<String> {
    args.iter()
        .map(|arg| {
            let mut result = arg.clone();
            for (key, value) in vars {
                let pattern = format!("${}", key);
                result = result.replace(&pattern, value);
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_bundler(script: &str, root: &Path) -> CommandBundler {
        CommandBundler {
            command: vec!["sh".into(), "-c".into(), script.into()],
            root: root.to_path_buf(),
            work_dir: root.join(".denowebcomponents"),
            minify: false,
        }
    }

    #[test]
    fn test_resolve_args() {
        let vars = bundle_vars(
            Path::new("/site/.wc/entry.ts"),
            Path::new("/site"),
            Path::new("/site/.wc"),
        );
        let args = vec![
            "esbuild".into(),
            "$WCGEN_ENTRY".into(),
            "--outdir=$WCGEN_WORK_DIR/out".into(),
            "--bundle".into(),
        ];

        let resolved = resolve_args(&args, &vars);
        assert_eq!(resolved[0], "esbuild");
        assert_eq!(resolved[1], "/site/.wc/entry.ts");
        assert_eq!(resolved[2], "--outdir=/site/.wc/out");
        assert_eq!(resolved[3], "--bundle");
    }

    #[test]
    fn test_resolve_args_no_vars() {
        let vars = FxHashMap::default();
        let args = vec!["deno".into(), "bundle".into()];
        assert_eq!(resolve_args(&args, &vars), args);
    }

    #[test]
    fn test_empty_command_fails() {
        let bundler = CommandBundler {
            command: Vec::new(),
            root: PathBuf::from("/"),
            work_dir: PathBuf::from("/"),
            minify: false,
        };
        assert!(bundler.bundle(Path::new("/entry.ts")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_stdout_is_bundle() {
        let temp = tempfile::TempDir::new().unwrap();
        let entry = temp.path().join("entry.ts");
        std::fs::write(&entry, "console.log('hi');").unwrap();

        let bundler = shell_bundler("cat \"$WCGEN_ENTRY\"", temp.path());
        let code = bundler.bundle(&entry).unwrap();
        assert_eq!(code, "console.log('hi');");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failure_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let bundler = shell_bundler("echo 'error: unexpected token' >&2; exit 1", temp.path());
        let err = bundler.bundle(&temp.path().join("entry.ts")).unwrap_err();
        assert!(format!("{err:#}").contains("unexpected token"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_empty_output_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let bundler = shell_bundler("true", temp.path());
        assert!(bundler.bundle(&temp.path().join("entry.ts")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_minifies() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut bundler = shell_bundler(
            "printf '%s\\n' '// comment' 'const greeting = \"hello\";' 'console.log(greeting);'",
            temp.path(),
        );
        bundler.minify = true;
        let code = bundler.bundle(&temp.path().join("entry.ts")).unwrap();
        assert!(!code.contains("// comment"));
        assert!(code.contains("hello"));
    }
}
