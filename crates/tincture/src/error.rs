//! Error types for loading themes.
//!
//! Only failures that prevent a theme from existing at all are errors.
//! A missing or mistyped field inside an otherwise valid script is resolved
//! by per-field defaults and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while executing a theme script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read theme script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script failed to parse or raised an error while running.
    ///
    /// The message is the interpreter's diagnostic, normally prefixed with
    /// `file:line:`.
    #[error("theme script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The interpreter could not be prepared before the script ran, or its
    /// globals could not be read back afterwards.
    ///
    /// Holds the interpreter's message rather than its error value, which
    /// is not thread-safe.
    #[error("failed to prepare script environment: {0}")]
    Environment(String),
}

impl ScriptError {
    pub(crate) fn environment(err: mlua::Error) -> Self {
        ScriptError::Environment(err.to_string())
    }

    /// Returns the interpreter diagnostic for evaluation failures.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ScriptError::EvaluationFailed(message) => Some(message),
            _ => None,
        }
    }
}

/// Errors raised by [`ThemeRegistry`](crate::ThemeRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A registered directory does not exist or is not a directory.
    #[error("theme directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Walking a directory failed.
    #[error("failed to read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No theme is registered under the requested name.
    #[error("theme not found: \"{name}\"")]
    NotFound { name: String },

    /// Two registered directories provide a theme with the same name.
    #[error(
        "theme \"{name}\" is defined twice:\n  - {} (from {})\n  - {} (from {})",
        .existing_path.display(),
        .existing_dir.display(),
        .conflicting_path.display(),
        .conflicting_dir.display()
    )]
    Collision {
        name: String,
        existing_path: PathBuf,
        existing_dir: PathBuf,
        conflicting_path: PathBuf,
        conflicting_dir: PathBuf,
    },

    /// The theme was found but its script failed.
    #[error("theme \"{name}\" failed to load: {source}")]
    Script {
        name: String,
        #[source]
        source: ScriptError,
    },
}

/// Errors raised while reading a [`LoaderConfig`](crate::LoaderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid loader config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
