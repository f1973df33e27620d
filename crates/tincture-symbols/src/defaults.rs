//! Default scalars and patterns preloaded into every theme script.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Global name of the identifier pattern.
pub const IDENTIFIERS_GLOBAL: &str = "Identifiers";

/// Global name of the numeric-literal pattern.
pub const DIGITS_GLOBAL: &str = "Digits";

/// Pattern matching an identifier.
pub const IDENTIFIER_PATTERN: &str = r"[a-zA-Z_]\w*";

/// Pattern matching a numeric literal (hex, decimal, exponent, C suffixes).
pub const NUMBER_PATTERN: &str = r"(?:0x|0X)[0-9a-fA-F]+|\d*[\.]?\d+(?:[eE][\-\+]\d+)?[lLuU]*";

/// Globals reserved for future extension. Always bound to `""` at load time.
pub const PLACEHOLDER_GLOBALS: &[&str] =
    &["HL_LANG_DIR", "HL_INPUT_FILE", "HL_PLUGIN_PARAM", "HL_OUTPUT"];

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"));

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"));

/// Compiled form of [`IDENTIFIER_PATTERN`].
pub fn identifier_regex() -> &'static Regex {
    &IDENTIFIER_REGEX
}

/// Compiled form of [`NUMBER_PATTERN`].
pub fn number_regex() -> &'static Regex {
    &NUMBER_REGEX
}

/// Scalar feature flags a script may read or override.
///
/// All flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub ignore_case: bool,
    pub enable_indentation: bool,
    pub disable_highlighting: bool,
}

impl FeatureFlags {
    pub const IGNORE_CASE: &'static str = "IgnoreCase";
    pub const ENABLE_INDENTATION: &'static str = "EnableIndentation";
    pub const DISABLE_HIGHLIGHTING: &'static str = "DisableHighlighting";

    /// Global names of the flags, in binding order.
    pub const NAMES: [&'static str; 3] = [
        Self::IGNORE_CASE,
        Self::ENABLE_INDENTATION,
        Self::DISABLE_HIGHLIGHTING,
    ];

    /// Returns `(global name, value)` pairs in binding order.
    pub fn entries(&self) -> [(&'static str, bool); 3] {
        [
            (Self::IGNORE_CASE, self.ignore_case),
            (Self::ENABLE_INDENTATION, self.enable_indentation),
            (Self::DISABLE_HIGHLIGHTING, self.disable_highlighting),
        ]
    }

    /// Builds flags from a lookup function, keeping the default for any
    /// flag the lookup does not answer.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<bool>,
    {
        let defaults = Self::default();
        Self {
            ignore_case: lookup(Self::IGNORE_CASE).unwrap_or(defaults.ignore_case),
            enable_indentation: lookup(Self::ENABLE_INDENTATION)
                .unwrap_or(defaults.enable_indentation),
            disable_highlighting: lookup(Self::DISABLE_HIGHLIGHTING)
                .unwrap_or(defaults.disable_highlighting),
        }
    }
}
