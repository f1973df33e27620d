//! Lexer states reported by the highlighting engine.
//!
//! The engine tags every run of source text with one of these states. A theme
//! maps the *style states* (codes below [`LexerState::Keyword`]) to colors;
//! the remaining codes mark transitions and engine-internal sentinels that a
//! script may compare against in hook functions.

symbol_enum! {
    /// Lexical category of a run of source text.
    ///
    /// Codes are frozen: variants are only ever appended.
    pub enum LexerState ("lexer state") {
        /// Plain text outside any other category.
        Standard = 0 => "HL_STANDARD",
        String = 1 => "HL_STRING",
        Number = 2 => "HL_NUMBER",
        LineComment = 3 => "HL_LINE_COMMENT",
        BlockComment = 4 => "HL_BLOCK_COMMENT",
        /// Escape sequence inside a string.
        Escape = 5 => "HL_ESC_SEQ",
        /// Preprocessor directive.
        Directive = 6 => "HL_PREPROC",
        /// String inside a preprocessor directive.
        DirectiveString = 7 => "HL_PREPROC_STRING",
        LineNumber = 8 => "HL_LINENUMBER",
        /// Operator or symbol.
        Operator = 9 => "HL_OPERATOR",
        /// Interpolated expression inside a string.
        Interpolation = 10 => "HL_INTERPOLATION",
        Keyword = 11 => "HL_KEYWORD",
        StringEnd = 12 => "HL_STRING_END",
        NumberEnd = 13 => "HL_NUMBER_END",
        LineCommentEnd = 14 => "HL_LINE_COMMENT_END",
        BlockCommentEnd = 15 => "HL_BLOCK_COMMENT_END",
        EscapeEnd = 16 => "HL_ESC_SEQ_END",
        DirectiveEnd = 17 => "HL_PREPROC_END",
        OperatorEnd = 18 => "HL_OPERATOR_END",
        InterpolationEnd = 19 => "HL_INTERPOLATION_END",
        KeywordEnd = 20 => "HL_KEYWORD_END",
        IdentifierBegin = 21 => "HL_IDENTIFIER_BEGIN",
        IdentifierEnd = 22 => "HL_IDENTIFIER_END",
        EmbeddedCodeBegin = 23 => "HL_EMBEDDED_CODE_BEGIN",
        EmbeddedCodeEnd = 24 => "HL_EMBEDDED_CODE_END",
        Unknown = 100 => "HL_UNKNOWN",
        /// Returned by hooks to reject a match.
        Reject = 101 => "HL_REJECT",
        Eol = 102 => "HL_EOL",
        Eof = 103 => "HL_EOF",
        Whitespace = 104 => "HL_WS",
        TestPos = 105 => "HL_TESTPOS",
    }
}

/// First code of the engine-internal sentinel range.
pub const SENTINEL_BASE: i64 = 100;

impl LexerState {
    /// Returns `true` for states a theme assigns a style to directly.
    ///
    /// Keywords are styled per keyword class rather than through the state
    /// itself, so [`LexerState::Keyword`] is not a style state.
    pub fn is_style_state(self) -> bool {
        self.code() < LexerState::Keyword.code()
    }

    /// Returns `true` for the `*_END` states marking exit from a category.
    pub fn is_end_marker(self) -> bool {
        matches!(
            self,
            LexerState::StringEnd
                | LexerState::NumberEnd
                | LexerState::LineCommentEnd
                | LexerState::BlockCommentEnd
                | LexerState::EscapeEnd
                | LexerState::DirectiveEnd
                | LexerState::OperatorEnd
                | LexerState::InterpolationEnd
                | LexerState::KeywordEnd
                | LexerState::IdentifierEnd
                | LexerState::EmbeddedCodeEnd
        )
    }

    /// Returns `true` for engine-internal sentinel codes (`>= 100`).
    pub fn is_sentinel(self) -> bool {
        self.code() >= SENTINEL_BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_dense_below_sentinels() {
        let regular: Vec<i64> = LexerState::ALL
            .iter()
            .filter(|s| !s.is_sentinel())
            .map(|s| s.code())
            .collect();
        let expected: Vec<i64> = (0..=24).collect();
        assert_eq!(regular, expected);
    }

    #[test]
    fn test_style_states() {
        let styled: Vec<_> = LexerState::ALL
            .iter()
            .copied()
            .filter(|s| s.is_style_state())
            .collect();
        assert_eq!(styled.len(), 11);
        assert!(styled.contains(&LexerState::Interpolation));
        assert!(!styled.contains(&LexerState::Keyword));
    }

    #[test]
    fn test_end_markers_are_not_style_states() {
        for state in LexerState::ALL {
            if state.is_end_marker() {
                assert!(!state.is_style_state(), "{state}");
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HL_ESC_SEQ".parse::<LexerState>(), Ok(LexerState::Escape));
        assert!("ESC_SEQ".parse::<LexerState>().is_err());
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(LexerState::try_from(101), Ok(LexerState::Reject));
        assert_eq!(
            LexerState::try_from(25),
            Err(crate::SymbolError::UnknownCode {
                kind: "lexer state",
                code: 25
            })
        );
    }
}
