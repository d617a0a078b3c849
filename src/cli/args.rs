//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Generate a registry, type declarations and a browser bundle for web components
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root (default: directory of wcgen.toml, or the current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: wcgen.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Component directory (relative to project root)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub components: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List discovered components and their import names
    #[command(visible_alias = "l")]
    List,

    /// Generate registry, type declarations and the bundle once
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then rebuild whenever the component directory changes
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Quiet window in milliseconds before a burst of changes triggers a rebuild
        #[arg(short, long)]
        debounce: Option<u64>,
    },

    /// Write routes/_app.tsx loading the bundle, unless it already exists
    #[command(visible_alias = "s")]
    Scaffold {
        /// Print the app shell instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Scaffold the app shell, then build once
    #[command(visible_alias = "i")]
    Init,
}

/// Shared build arguments for Build and Watch commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Minify the compiled bundle
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch() {
        let cli = Cli::parse_from(["wcgen", "watch", "--debounce", "50", "-m"]);
        match cli.command {
            Commands::Watch {
                build_args,
                debounce,
            } => {
                assert_eq!(debounce, Some(50));
                assert_eq!(build_args.minify, Some(true));
            }
            other => panic!("expected watch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["wcgen", "build", "--components", "src/elements", "-v"]);
        assert_eq!(cli.components, Some(PathBuf::from("src/elements")));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Build {
                build_args: BuildArgs { minify: None }
            }
        ));
    }

    #[test]
    fn test_components_has_no_short_flag() {
        assert!(Cli::try_parse_from(["wcgen", "build", "-c", "elements"]).is_err());
        let cli = Cli::try_parse_from(["wcgen", "build", "-C", "wcgen.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("wcgen.toml")));
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
