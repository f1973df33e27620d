//! Turns an executed script's globals into a [`Theme`].

use std::path::Path;

use crate::script::{Environment, Lookup};

use super::extract::{extract, extract_field};
use super::property::{KeywordClass, KeywordStyle, StyleSlot, ThemeProperties};
use super::theme::{Base16Palette, Theme};

pub const DESCRIPTION_KEY: &str = "Description";
pub const CATEGORIES_KEY: &str = "Categories";
pub const KEYWORDS_KEY: &str = "Keywords";

/// Global whose presence as a string marks a base16 theme.
pub const BASE16_MARKER: &str = "base00";

/// Builds the theme defined by `env`, named after the file stem of `path`.
pub fn build(env: &Environment, path: &Path) -> Theme {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    build_named(env, name)
}

/// Builds the theme defined by `env` under an explicit name.
///
/// Never fails: every field the script left out or mistyped takes its
/// default.
pub fn build_named(env: &Environment, name: impl Into<String>) -> Theme {
    let name = name.into();
    let description = env.string(DESCRIPTION_KEY).unwrap_or_default().to_string();
    let categories = env.strings(CATEGORIES_KEY);

    let base16_palette = env.string(BASE16_MARKER).map(|_| base16_palette(env));
    if base16_palette.is_none() && env.table(StyleSlot::Canvas.key()).is_none() {
        log::trace!("theme '{}' declares neither base16 slots nor a canvas", name);
    }

    let mut properties = ThemeProperties::default();
    for slot in StyleSlot::ALL {
        *properties.get_mut(slot) = extract_field(env, slot.key());
    }
    properties.keywords = keywords(env, &name);

    log::debug!(
        "built theme '{}' ({} keyword classes, base16: {})",
        name,
        properties.keywords.len(),
        base16_palette.is_some()
    );

    Theme::new(name, description, categories, base16_palette, properties)
}

fn keywords(env: &Environment, theme: &str) -> Vec<KeywordStyle> {
    let Some(list) = env.table(KEYWORDS_KEY) else {
        return Vec::new();
    };

    list.sequence()
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let Some(table) = entry.as_table() else {
                log::trace!(
                    "theme '{}': skipping {} at Keywords[{}]",
                    theme,
                    entry.type_name(),
                    i + 1
                );
                return None;
            };
            let class = KeywordClass::new(i + 1)?;
            Some(KeywordStyle {
                class,
                property: extract(Some(table)),
            })
        })
        .collect()
}

fn base16_palette(env: &Environment) -> Base16Palette {
    let slots = std::array::from_fn(|i| {
        let upper = Base16Palette::slot_name(i);
        let lower = upper.to_ascii_lowercase();
        env.string(&upper)
            .or_else(|| env.string(&lower))
            .unwrap_or_default()
            .to_string()
    });
    Base16Palette::new(slots)
}
