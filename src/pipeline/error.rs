//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("component directory `{0}` not found")]
    MissingSource(PathBuf),

    #[error("failed to read component directory `{0}`")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("`{file}` derives `{ident}`, which is not a valid import identifier")]
    InvalidIdentifier { file: String, ident: String },

    #[error("`{first}` and `{second}` both derive the import identifier `{ident}`")]
    Collision {
        ident: String,
        first: String,
        second: String,
    },

    #[error("bundler failed to compile `{entry}`")]
    Compile {
        entry: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

impl PipelineError {
    /// Short label used by watch status output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingSource(_) | Self::ReadDir(..) => "missing input",
            Self::InvalidIdentifier { .. } | Self::Collision { .. } => "naming error",
            Self::Compile { .. } => "compile error",
            Self::CreateDir(..) | Self::Write(..) => "write error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display_names_both_files() {
        let err = PipelineError::Collision {
            ident: "MyButton".into(),
            first: "my-button.ts".into(),
            second: "my_button.tsx".into(),
        };
        let display = err.to_string();
        assert!(display.contains("my-button.ts"));
        assert!(display.contains("my_button.tsx"));
        assert!(display.contains("MyButton"));
        assert_eq!(err.label(), "naming error");
    }

    #[test]
    fn test_compile_error_keeps_source() {
        let err = PipelineError::Compile {
            entry: PathBuf::from("entry.ts"),
            source: anyhow::anyhow!("unexpected token").into(),
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("unexpected token"));
    }
}
