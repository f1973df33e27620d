//! The compiled theme.

use serde::{Deserialize, Serialize};
use tincture_symbols::LexerState;

use super::property::{KeywordClass, StyleSlot, ThemeProperties, ThemeProperty};

/// The sixteen `base00`..`base0F` values of a base16 theme.
///
/// Slots the script left unset or set to a non-string are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Base16Palette([String; 16]);

impl Base16Palette {
    pub(crate) fn new(slots: [String; 16]) -> Self {
        Self(slots)
    }

    /// Script name of slot `index`, e.g. `base0A`.
    pub fn slot_name(index: usize) -> String {
        format!("base{index:02X}")
    }

    /// Value of slot `index` (`0..16`).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A compiled, immutable syntax-highlighting theme.
///
/// Created by [`ThemeLoader`](crate::ThemeLoader) from a theme script. Every
/// slot is always present; anything the script did not declare holds
/// [`ThemeProperty::default`].
///
/// ```rust
/// use tincture::{LexerState, ThemeLoader};
///
/// let theme = ThemeLoader::new()
///     .load_source("demo", r##"
///         Description = "Demo"
///         Default = { Colour = "#101010" }
///         String = { Colour = "#a0f0a0", Italic = true }
///     "##)
///     .unwrap();
///
/// assert_eq!(theme.description(), "Demo");
/// let string = theme.style_for(LexerState::String).unwrap();
/// assert_eq!(string.color(), "#a0f0a0");
/// assert!(string.is_italic());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTheme")]
pub struct Theme {
    name: String,
    description: String,
    categories: Vec<String>,
    is_base16_flavor: bool,
    base16_palette: Option<Base16Palette>,
    properties: ThemeProperties,
}

impl Theme {
    pub(crate) fn new(
        name: String,
        description: String,
        categories: Vec<String>,
        base16_palette: Option<Base16Palette>,
        properties: ThemeProperties,
    ) -> Self {
        Self {
            name,
            description,
            categories,
            is_base16_flavor: base16_palette.is_some(),
            base16_palette,
            properties,
        }
    }

    /// File stem of the script the theme was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_base16_flavor(&self) -> bool {
        self.is_base16_flavor
    }

    pub fn base16_palette(&self) -> Option<&Base16Palette> {
        self.base16_palette.as_ref()
    }

    pub fn properties(&self) -> &ThemeProperties {
        &self.properties
    }

    pub fn canvas(&self) -> &ThemeProperty {
        &self.properties.canvas
    }

    /// Style applied to text in `state`.
    ///
    /// `None` for states that are not styled through a slot: keywords (see
    /// [`Theme::keyword`]), `*_END` transitions and sentinels.
    pub fn style_for(&self, state: LexerState) -> Option<&ThemeProperty> {
        StyleSlot::for_state(state).map(|slot| self.properties.get(slot))
    }

    /// Style of a keyword class, if the theme declares one.
    pub fn keyword(&self, class: KeywordClass) -> Option<&ThemeProperty> {
        self.properties.keyword(class)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Serialized form of [`Theme`], checked before it becomes one.
#[derive(Deserialize)]
struct RawTheme {
    name: String,
    description: String,
    categories: Vec<String>,
    is_base16_flavor: bool,
    base16_palette: Option<Base16Palette>,
    properties: ThemeProperties,
}

impl TryFrom<RawTheme> for Theme {
    type Error = String;

    fn try_from(raw: RawTheme) -> Result<Self, Self::Error> {
        if raw.is_base16_flavor != raw.base16_palette.is_some() {
            return Err(format!(
                "theme \"{}\": is_base16_flavor is {} but base16_palette is {}",
                raw.name,
                raw.is_base16_flavor,
                if raw.base16_palette.is_some() { "present" } else { "absent" }
            ));
        }
        Ok(Theme::new(
            raw.name,
            raw.description,
            raw.categories,
            raw.base16_palette,
            raw.properties,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::property::KeywordStyle;

    fn sample() -> Theme {
        let mut properties = ThemeProperties {
            default: ThemeProperty::new("#cccccc", false, false),
            string: ThemeProperty::new("#a0f0a0", false, true),
            ..Default::default()
        };
        properties.keywords.push(KeywordStyle {
            class: KeywordClass::new(2).unwrap(),
            property: ThemeProperty::new("#ff0000", true, false),
        });
        Theme::new(
            "sample".into(),
            "Sample theme".into(),
            vec!["dark".into(), "contrast".into()],
            None,
            properties,
        )
    }

    #[test]
    fn test_style_for_slot_states() {
        let theme = sample();
        assert_eq!(
            theme.style_for(LexerState::Standard).map(ThemeProperty::color),
            Some("#cccccc")
        );
        assert!(theme.style_for(LexerState::String).unwrap().is_italic());
        assert!(theme.style_for(LexerState::Number).unwrap().is_default());
        assert_eq!(theme.style_for(LexerState::Keyword), None);
    }

    #[test]
    fn test_keyword_lookup_by_class() {
        let theme = sample();
        assert!(theme.keyword(KeywordClass::new(2).unwrap()).unwrap().is_bold());
        assert_eq!(theme.keyword(KeywordClass::new(1).unwrap()), None);
    }

    #[test]
    fn test_categories() {
        let theme = sample();
        assert!(theme.has_category("dark"));
        assert!(!theme.has_category("light"));
    }

    #[test]
    fn test_palette_implies_flavor() {
        let theme = Theme::new(
            "b16".into(),
            String::new(),
            Vec::new(),
            Some(Base16Palette::default()),
            ThemeProperties::default(),
        );
        assert!(theme.is_base16_flavor());
        assert!(!sample().is_base16_flavor());
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(Base16Palette::slot_name(0), "base00");
        assert_eq!(Base16Palette::slot_name(10), "base0A");
        assert_eq!(Base16Palette::slot_name(15), "base0F");
    }

    #[test]
    fn test_json_round_trip() {
        let theme = sample();
        let json = theme.to_json().unwrap();
        assert!(json.contains("\"class\": 2"));
        assert_eq!(Theme::from_json(&json).unwrap(), theme);
    }

    #[test]
    fn test_from_json_rejects_flavor_without_palette() {
        let json = sample()
            .to_json()
            .unwrap()
            .replace("\"is_base16_flavor\": false", "\"is_base16_flavor\": true");
        let err = Theme::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("base16_palette is absent"), "{err}");
    }

    #[test]
    fn test_from_json_rejects_palette_without_flavor() {
        let base16 = Theme::new(
            "b16".into(),
            String::new(),
            Vec::new(),
            Some(Base16Palette::default()),
            ThemeProperties::default(),
        );
        let json = base16
            .to_json()
            .unwrap()
            .replace("\"is_base16_flavor\": true", "\"is_base16_flavor\": false");
        assert!(Theme::from_json(&json).is_err());
        assert_eq!(Theme::from_json(&base16.to_json().unwrap()).unwrap(), base16);
    }

    #[test]
    fn test_yaml_output() {
        let yaml = sample().to_yaml().unwrap();
        assert!(yaml.contains("description: Sample theme"));
    }
}
