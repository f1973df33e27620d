//! Output formats understood by the highlighting engine.

symbol_enum! {
    /// Target markup produced by the highlighting engine.
    ///
    /// Code 7 belonged to a retired HTML 3.2 writer. It stays reserved and is
    /// never handed out again.
    pub enum OutputFormat ("output format") {
        Html = 0 => "HL_FORMAT_HTML",
        Xhtml = 1 => "HL_FORMAT_XHTML",
        Tex = 2 => "HL_FORMAT_TEX",
        Latex = 3 => "HL_FORMAT_LATEX",
        Rtf = 4 => "HL_FORMAT_RTF",
        /// 16-color ANSI escape sequences.
        Ansi = 5 => "HL_FORMAT_ANSI",
        /// xterm 256-color escape sequences.
        Xterm256 = 6 => "HL_FORMAT_XTERM256",
        Svg = 8 => "HL_FORMAT_SVG",
        BbCode = 9 => "HL_FORMAT_BBCODE",
        Pango = 10 => "HL_FORMAT_PANGO",
        /// Flat OpenDocument text.
        OdtFlat = 11 => "HL_FORMAT_ODT",
        /// 24-bit escape sequences.
        TrueColor = 12 => "HL_FORMAT_TRUECOLOR",
    }
}

/// Codes that are permanently retired and must never be reassigned.
pub const RESERVED_FORMAT_CODES: &[i64] = &[7];

impl OutputFormat {
    /// Returns `true` for formats written as terminal escape sequences.
    pub fn is_escape_sequence(self) -> bool {
        matches!(
            self,
            OutputFormat::Ansi | OutputFormat::Xterm256 | OutputFormat::TrueColor
        )
    }

    /// Returns `true` for formats that carry a document-level background.
    pub fn supports_canvas(self) -> bool {
        !matches!(self, OutputFormat::Ansi | OutputFormat::BbCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_code_is_unassigned() {
        for code in RESERVED_FORMAT_CODES {
            assert_eq!(OutputFormat::from_code(*code), None);
        }
    }

    #[test]
    fn test_escape_formats() {
        let escapes: Vec<_> = OutputFormat::ALL
            .iter()
            .filter(|f| f.is_escape_sequence())
            .collect();
        assert_eq!(
            escapes,
            vec![
                &OutputFormat::Ansi,
                &OutputFormat::Xterm256,
                &OutputFormat::TrueColor
            ]
        );
    }

    #[test]
    fn test_display_uses_script_name() {
        assert_eq!(OutputFormat::OdtFlat.to_string(), "HL_FORMAT_ODT");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OutputFormat::Xterm256).unwrap();
        assert_eq!(json, "\"xterm256\"");
        let parsed: OutputFormat = serde_json::from_str("\"odt_flat\"").unwrap();
        assert_eq!(parsed, OutputFormat::OdtFlat);
    }
}
