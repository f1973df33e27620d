//! Hex color values as written in theme scripts.
//!
//! Themes spell colors as CSS-style hex strings, `"#rrggbb"` or the short
//! `"#rgb"` form. The leading `#` is optional.
//!
//! ```rust
//! use tincture::Rgb;
//!
//! let orange = Rgb::parse("#ff6b35").unwrap();
//! assert_eq!(orange, Rgb::new(255, 107, 53));
//! assert_eq!(Rgb::parse("#fff").unwrap().to_hex(), "#ffffff");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color, with or without the leading `#`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex color: {}", s))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color length: {} (expected 3 or 6 digits)",
                s
            )),
        }
    }

    /// Nearest entry in the xterm 256-color palette.
    ///
    /// Grays map onto the 24-step grayscale ramp, everything else onto the
    /// 6x6x6 cube.
    pub fn to_ansi256(self) -> u8 {
        let Self { r, g, b } = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgb::parse("#ff6b35"), Ok(Rgb::new(255, 107, 53)));
        assert_eq!(Rgb::parse("FF6B35"), Ok(Rgb::new(255, 107, 53)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Rgb::parse("#fff"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("#a0c"), Ok(Rgb::new(170, 0, 204)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Rgb::parse("  #000000 "), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb::parse("").is_err());
        assert!(Rgb::parse("#ff").is_err());
        assert!(Rgb::parse("#gggggg").is_err());
        assert!(Rgb::parse("#ff00ff00").is_err());
        assert!(Rgb::parse("#ééé").is_err());
        assert!(Rgb::parse("red").is_err());
    }

    #[test]
    fn test_parse_rejects_signed_channels() {
        assert!(Rgb::parse("#+f+f+f").is_err());
        assert!(Rgb::parse("+f+f+f").is_err());
        assert!(Rgb::parse("#+1+2+3").is_err());
        assert!(Rgb::parse("#-1").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_to_ansi256_grayscale() {
        assert_eq!(Rgb::new(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb::new(255, 255, 255).to_ansi256(), 231);
        assert_eq!(Rgb::new(128, 128, 128).to_ansi256(), 243);
    }

    #[test]
    fn test_to_ansi256_cube() {
        assert_eq!(Rgb::new(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Rgb::new(0, 255, 0).to_ansi256(), 46);
        assert_eq!(Rgb::new(0, 0, 255).to_ansi256(), 21);
    }
}
