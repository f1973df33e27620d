//! # Tincture - Lua theme descriptors for syntax highlighters
//!
//! Tincture compiles theme scripts into immutable, strongly typed [`Theme`]
//! values. A theme script is a small Lua program that assigns well-known
//! globals (`Default`, `String`, `Keywords`, ...) to tables of colors and
//! attributes. Tincture runs it in a fresh, resource-bounded interpreter,
//! reads the globals back, and builds a theme in which every style slot is
//! always present.
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture::{KeywordClass, LexerState, ThemeLoader};
//!
//! let theme = ThemeLoader::new().load_source("night", r##"
//!     Description = "Night"
//!     Default  = { Colour = "#d6deeb" }
//!     Canvas   = { Colour = "#011627" }
//!     Keywords = { { Colour = "#c792ea", Bold = true } }
//! "##)?;
//!
//! assert_eq!(theme.name(), "night");
//! assert_eq!(theme.canvas().color(), "#011627");
//!
//! let kwa = KeywordClass::new(1).unwrap();
//! assert!(theme.keyword(kwa).unwrap().is_bold());
//! assert!(theme.style_for(LexerState::Number).unwrap().is_default());
//! # Ok::<(), tincture::ScriptError>(())
//! ```
//!
//! ## What a script sees
//!
//! Before a script runs, its interpreter is populated with:
//!
//! - every lexer state and output format constant (`HL_STRING`,
//!   `HL_FORMAT_HTML`, ...) from [`tincture_symbols`]
//! - the `Identifiers` and `Digits` regex patterns
//! - the feature flags `IgnoreCase`, `EnableIndentation` and
//!   `DisableHighlighting`, all `false`
//! - the placeholders `HL_LANG_DIR`, `HL_INPUT_FILE`, `HL_PLUGIN_PARAM` and
//!   `HL_OUTPUT`, all `""`
//!
//! ## Leniency
//!
//! Only a script that fails to run is an error. A missing or mistyped field
//! falls back to its default: an empty color, `false` for attributes, an
//! empty description. A theme that declares neither a canvas nor base16
//! slots is a standard theme with an empty canvas.
//!
//! ## Modules
//!
//! - [`script`]: isolated script execution and the owned [`Environment`]
//! - [`theme`]: the [`Theme`] model and its builder
//! - [`style`]: hex colors and terminal styles
//! - [`registry`]: name-based lookup over directories of scripts
//!
//! Loading is synchronous. Independent loads may run on separate threads;
//! each one owns its interpreter.

mod config;
mod error;
mod loader;
pub mod registry;
pub mod script;
pub mod style;
pub mod theme;

pub use config::{LoaderConfig, DEFAULT_EXTENSIONS};
pub use error::{ConfigError, RegistryError, ScriptError};
pub use loader::{load_theme, ThemeLoader, BUNDLED_THEME_NAME, BUNDLED_THEME_SOURCE};
pub use registry::{LoadReport, ThemeRegistry, ThemeSource};
pub use script::{
    Environment, ExecutionLimits, Lookup, ScriptRuntime, ScriptTable, ScriptValue,
};
pub use style::Rgb;
pub use theme::{
    Base16Palette, KeywordClass, KeywordStyle, StyleSlot, Theme, ThemeProperties, ThemeProperty,
};

// Symbol table re-exports
pub use tincture_symbols::{FeatureFlags, LexerState, OutputFormat, SymbolTable};
