//! Style values and the fixed set of style slots a theme declares.

use std::fmt;

use serde::{Deserialize, Serialize};
use tincture_symbols::LexerState;

/// Color plus bold/italic flags for one syntactic category.
///
/// `color` is kept exactly as the script wrote it, usually `#rrggbb`, and
/// may be empty when the script did not set one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeProperty {
    color: String,
    is_bold: bool,
    is_italic: bool,
}

impl ThemeProperty {
    pub fn new(color: impl Into<String>, is_bold: bool, is_italic: bool) -> Self {
        Self {
            color: color.into(),
            is_bold,
            is_italic,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_bold(&self) -> bool {
        self.is_bold
    }

    pub fn is_italic(&self) -> bool {
        self.is_italic
    }

    /// True when no color and no attribute is set.
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// One of the named style slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSlot {
    Default,
    Canvas,
    Number,
    Escape,
    String,
    BlockComment,
    LineComment,
    DirectiveString,
    Operator,
    LineNumber,
    Directive,
    Interpolation,
}

impl StyleSlot {
    /// Every slot, in declaration order.
    pub const ALL: [StyleSlot; 12] = [
        StyleSlot::Default,
        StyleSlot::Canvas,
        StyleSlot::Number,
        StyleSlot::Escape,
        StyleSlot::String,
        StyleSlot::BlockComment,
        StyleSlot::LineComment,
        StyleSlot::DirectiveString,
        StyleSlot::Operator,
        StyleSlot::LineNumber,
        StyleSlot::Directive,
        StyleSlot::Interpolation,
    ];

    /// Global name the slot is read from in a theme script.
    pub const fn key(self) -> &'static str {
        match self {
            StyleSlot::Default => "Default",
            StyleSlot::Canvas => "Canvas",
            StyleSlot::Number => "Number",
            StyleSlot::Escape => "Escape",
            StyleSlot::String => "String",
            StyleSlot::BlockComment => "BlockComment",
            StyleSlot::LineComment => "LineComment",
            StyleSlot::DirectiveString => "StringPreProc",
            StyleSlot::Operator => "Operator",
            StyleSlot::LineNumber => "LineNum",
            StyleSlot::Directive => "PreProcessor",
            StyleSlot::Interpolation => "Interpolation",
        }
    }

    /// Slot that styles text in the given lexer state.
    ///
    /// Only style states have a slot; keywords are styled per class and the
    /// remaining states are transitions or sentinels.
    pub const fn for_state(state: LexerState) -> Option<StyleSlot> {
        match state {
            LexerState::Standard => Some(StyleSlot::Default),
            LexerState::String => Some(StyleSlot::String),
            LexerState::Number => Some(StyleSlot::Number),
            LexerState::LineComment => Some(StyleSlot::LineComment),
            LexerState::BlockComment => Some(StyleSlot::BlockComment),
            LexerState::Escape => Some(StyleSlot::Escape),
            LexerState::Directive => Some(StyleSlot::Directive),
            LexerState::DirectiveString => Some(StyleSlot::DirectiveString),
            LexerState::LineNumber => Some(StyleSlot::LineNumber),
            LexerState::Operator => Some(StyleSlot::Operator),
            LexerState::Interpolation => Some(StyleSlot::Interpolation),
            _ => None,
        }
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 1-based position of an entry in a script's `Keywords` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordClass(usize);

impl KeywordClass {
    /// Returns `None` for `0`; classes start at 1.
    pub fn new(index: usize) -> Option<Self> {
        (index >= 1).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// CSS-style class name: `kwa` for 1, `kwb` for 2, ... `kwz` for 26,
    /// then `kw27`, `kw28`, ...
    pub fn css_class(self) -> String {
        match self.0 {
            n @ 1..=26 => format!("kw{}", (b'a' + (n - 1) as u8) as char),
            n => format!("kw{n}"),
        }
    }
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_class())
    }
}

/// Style of one keyword group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordStyle {
    pub class: KeywordClass,
    pub property: ThemeProperty,
}

/// Every style a theme declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeProperties {
    pub default: ThemeProperty,
    pub canvas: ThemeProperty,
    pub number: ThemeProperty,
    pub escape: ThemeProperty,
    pub string: ThemeProperty,
    pub block_comment: ThemeProperty,
    pub line_comment: ThemeProperty,
    pub directive_string: ThemeProperty,
    pub operator: ThemeProperty,
    pub line_number: ThemeProperty,
    pub directive: ThemeProperty,
    pub interpolation: ThemeProperty,
    /// In `Keywords` order.
    pub keywords: Vec<KeywordStyle>,
}

impl ThemeProperties {
    pub fn get(&self, slot: StyleSlot) -> &ThemeProperty {
        match slot {
            StyleSlot::Default => &self.default,
            StyleSlot::Canvas => &self.canvas,
            StyleSlot::Number => &self.number,
            StyleSlot::Escape => &self.escape,
            StyleSlot::String => &self.string,
            StyleSlot::BlockComment => &self.block_comment,
            StyleSlot::LineComment => &self.line_comment,
            StyleSlot::DirectiveString => &self.directive_string,
            StyleSlot::Operator => &self.operator,
            StyleSlot::LineNumber => &self.line_number,
            StyleSlot::Directive => &self.directive,
            StyleSlot::Interpolation => &self.interpolation,
        }
    }

    pub(crate) fn get_mut(&mut self, slot: StyleSlot) -> &mut ThemeProperty {
        match slot {
            StyleSlot::Default => &mut self.default,
            StyleSlot::Canvas => &mut self.canvas,
            StyleSlot::Number => &mut self.number,
            StyleSlot::Escape => &mut self.escape,
            StyleSlot::String => &mut self.string,
            StyleSlot::BlockComment => &mut self.block_comment,
            StyleSlot::LineComment => &mut self.line_comment,
            StyleSlot::DirectiveString => &mut self.directive_string,
            StyleSlot::Operator => &mut self.operator,
            StyleSlot::LineNumber => &mut self.line_number,
            StyleSlot::Directive => &mut self.directive,
            StyleSlot::Interpolation => &mut self.interpolation,
        }
    }

    /// Style of a keyword class, if the theme declares one.
    pub fn keyword(&self, class: KeywordClass) -> Option<&ThemeProperty> {
        self.keywords
            .iter()
            .find(|k| k.class == class)
            .map(|k| &k.property)
    }
}
