//! Loading themes from scripts.
//!
//! [`ThemeLoader`] ties the script runtime to the theme builder: one call runs
//! one script in a fresh interpreter and returns the compiled [`Theme`].

use std::path::Path;

use crate::config::LoaderConfig;
use crate::error::ScriptError;
use crate::script::{ExecutionLimits, ScriptRuntime};
use crate::theme::{builder, Theme};

/// Name of the theme compiled into the library.
pub const BUNDLED_THEME_NAME: &str = "default";

/// Source of the theme compiled into the library.
pub const BUNDLED_THEME_SOURCE: &str = include_str!("../themes/default.theme");

/// Compiles theme scripts into [`Theme`]s.
///
/// The loader holds no interpreter; it is cheap to clone and safe to share
/// across threads. Each load gets its own interpreter.
#[derive(Debug, Clone, Default)]
pub struct ThemeLoader {
    runtime: ScriptRuntime,
}

impl ThemeLoader {
    /// Creates a loader with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_limits(config.limits())
    }

    pub fn with_limits(limits: ExecutionLimits) -> Self {
        Self {
            runtime: ScriptRuntime::with_limits(limits),
        }
    }

    pub fn limits(&self) -> ExecutionLimits {
        self.runtime.limits()
    }

    /// Loads the theme script at `path`. The theme is named after the file
    /// stem.
    ///
    /// # Errors
    ///
    /// - [`ScriptError::Read`] if the file cannot be read
    /// - [`ScriptError::EvaluationFailed`] if the script fails; no theme is
    ///   produced in that case
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Theme, ScriptError> {
        let path = path.as_ref();
        log::debug!("loading theme from {}", path.display());
        let env = self.runtime.load(path)?;
        Ok(builder::build(&env, path))
    }

    /// Loads a theme from inline source under the given name.
    pub fn load_source(&self, name: &str, source: &str) -> Result<Theme, ScriptError> {
        log::debug!("loading inline theme '{}'", name);
        let env = self.runtime.load_source(name, source)?;
        Ok(builder::build_named(&env, name))
    }

    /// Loads the theme at `path`, falling back to [`bundled_default`] on any
    /// failure.
    ///
    /// [`bundled_default`]: ThemeLoader::bundled_default
    pub fn load_or_fallback<P: AsRef<Path>>(&self, path: P) -> Theme {
        let path = path.as_ref();
        match self.load(path) {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!(
                    "falling back to bundled theme, {} failed: {}",
                    path.display(),
                    err
                );
                Self::bundled_default()
            }
        }
    }

    /// The theme compiled into the library.
    pub fn bundled_default() -> Theme {
        Self::new()
            .load_source(BUNDLED_THEME_NAME, BUNDLED_THEME_SOURCE)
            .unwrap_or_else(|err| {
                log::error!("bundled theme failed to load: {}", err);
                Theme::default()
            })
    }
}

/// Loads the theme at `path` with the default configuration.
///
/// ```rust,no_run
/// let theme = tincture::load_theme("themes/night.theme")?;
/// println!("{}: {}", theme.name(), theme.description());
/// # Ok::<(), tincture::ScriptError>(())
/// ```
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<Theme, ScriptError> {
    ThemeLoader::new().load(path)
}
