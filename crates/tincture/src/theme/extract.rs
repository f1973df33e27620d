//! Reads a [`ThemeProperty`] out of a script table.

use crate::script::{Lookup, ScriptTable};

use super::property::ThemeProperty;

pub const COLOUR_KEY: &str = "Colour";
pub const BOLD_KEY: &str = "Bold";
pub const ITALIC_KEY: &str = "Italic";

/// Builds a property from a `{ Colour = ..., Bold = ..., Italic = ... }`
/// table. Absent or mistyped fields take their defaults, as does a missing
/// table.
pub fn extract(table: Option<&ScriptTable>) -> ThemeProperty {
    let Some(table) = table else {
        return ThemeProperty::default();
    };
    ThemeProperty::new(
        table.string(COLOUR_KEY).unwrap_or_default(),
        table.boolean(BOLD_KEY).unwrap_or_default(),
        table.boolean(ITALIC_KEY).unwrap_or_default(),
    )
}

/// Extracts the property stored under `key` in `scope`.
pub fn extract_field<L: Lookup + ?Sized>(scope: &L, key: &str) -> ThemeProperty {
    extract(scope.table(key))
}
