//! Terminal styles from theme properties.
//!
//! Converts a [`ThemeProperty`] into a [`console::Style`] using the xterm
//! 256-color palette, so themes can be previewed directly in a terminal.

mod color;

pub use color::Rgb;

use console::Style;

use crate::theme::ThemeProperty;

impl ThemeProperty {
    /// Parsed color, or `None` if empty or not a hex color.
    pub fn rgb(&self) -> Option<Rgb> {
        if self.color().is_empty() {
            return None;
        }
        Rgb::parse(self.color()).ok()
    }

    /// Foreground style with the property's attributes.
    ///
    /// An empty or unparsable color leaves the foreground unset; bold and
    /// italic still apply.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(rgb) = self.rgb() {
            style = style.color256(rgb.to_ansi256());
        }
        if self.is_bold() {
            style = style.bold();
        }
        if self.is_italic() {
            style = style.italic();
        }
        style
    }

    /// Background style, for the canvas slot.
    pub fn to_background_style(&self) -> Style {
        match self.rgb() {
            Some(rgb) => Style::new().on_color256(rgb.to_ansi256()),
            None => Style::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_property() {
        assert_eq!(
            ThemeProperty::new("#ff0000", false, false).rgb(),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(ThemeProperty::default().rgb(), None);
        assert_eq!(ThemeProperty::new("teal", false, false).rgb(), None);
    }

    #[test]
    fn test_to_style() {
        let style = ThemeProperty::new("#ff0000", true, true).to_style();
        assert_eq!(style, Style::new().color256(196).bold().italic());
    }

    #[test]
    fn test_to_style_without_color_keeps_attributes() {
        let style = ThemeProperty::new("not-a-color", true, false).to_style();
        assert_eq!(style, Style::new().bold());
    }

    #[test]
    fn test_to_background_style() {
        let style = ThemeProperty::new("#000000", true, false).to_background_style();
        assert_eq!(style, Style::new().on_color256(16));
        assert_eq!(ThemeProperty::default().to_background_style(), Style::new());
    }
}
