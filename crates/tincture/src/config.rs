//! Loader configuration.
//!
//! Resource limits and the recognized script extensions can be read from
//! YAML. Every field is optional; a missing field keeps its default, and an
//! explicit `null` disables a limit.
//!
//! ```yaml
//! instruction_limit: 10000000
//! memory_limit: 33554432
//! extensions: [".theme", ".lua"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::script::{ExecutionLimits, DEFAULT_INSTRUCTION_LIMIT, DEFAULT_MEMORY_LIMIT};

/// Script extensions recognized by default, in priority order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".theme", ".lua"];

/// Settings shared by [`ThemeLoader`](crate::ThemeLoader) and
/// [`ThemeRegistry`](crate::ThemeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// VM instructions a script may execute. `None` disables the budget.
    pub instruction_limit: Option<u64>,
    /// Interpreter memory cap in bytes. `None` disables the cap.
    pub memory_limit: Option<usize>,
    /// Recognized script extensions, highest priority first.
    pub extensions: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            instruction_limit: Some(DEFAULT_INSTRUCTION_LIMIT),
            memory_limit: Some(DEFAULT_MEMORY_LIMIT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl LoaderConfig {
    /// Parses a config from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed YAML or unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn with_instruction_limit(mut self, limit: Option<u64>) -> Self {
        self.instruction_limit = limit;
        self
    }

    pub fn with_memory_limit(mut self, limit: Option<usize>) -> Self {
        self.memory_limit = limit;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Execution limits described by this config.
    pub fn limits(&self) -> ExecutionLimits {
        ExecutionLimits {
            instructions: self.instruction_limit,
            memory: self.memory_limit,
        }
    }
}
