//! Unified name/code lookup across lexer states and output formats.
//!
//! Lexer states and output formats share one flat global namespace inside a
//! theme script, but their numeric ranges overlap (`HL_STANDARD` and
//! `HL_FORMAT_HTML` are both `0`). Name-to-code lookup is therefore global,
//! while code-to-name lookup is always scoped to one enumeration.

use crate::{LexerState, OutputFormat};

/// Version of the symbol table. Bumped whenever entries are appended.
pub const SYMBOL_TABLE_VERSION: u32 = 1;

/// A resolved symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    State(LexerState),
    Format(OutputFormat),
}

impl Symbol {
    /// Returns the numeric code of the symbol.
    pub fn code(self) -> i64 {
        match self {
            Symbol::State(state) => state.code(),
            Symbol::Format(format) => format.code(),
        }
    }

    /// Returns the script-visible name of the symbol.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::State(state) => state.name(),
            Symbol::Format(format) => format.name(),
        }
    }
}

/// Read-only view over every published symbol.
///
/// The table has no state of its own; it is a namespace for lookups over
/// [`LexerState`] and [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTable;

impl SymbolTable {
    /// Resolves a script-visible name to its symbol.
    pub fn lookup(name: &str) -> Option<Symbol> {
        LexerState::from_name(name)
            .map(Symbol::State)
            .or_else(|| OutputFormat::from_name(name).map(Symbol::Format))
    }

    /// Resolves a script-visible name to its numeric code.
    pub fn code_of(name: &str) -> Option<i64> {
        Self::lookup(name).map(Symbol::code)
    }

    /// Returns the name of the lexer state with the given code.
    pub fn state_name_of(code: i64) -> Option<&'static str> {
        LexerState::from_code(code).map(LexerState::name)
    }

    /// Returns the name of the output format with the given code.
    pub fn format_name_of(code: i64) -> Option<&'static str> {
        OutputFormat::from_code(code).map(OutputFormat::name)
    }

    /// Iterates `(name, code)` for every symbol: lexer states first, then
    /// output formats, each in code order.
    pub fn entries() -> impl Iterator<Item = (&'static str, i64)> {
        LexerState::ALL
            .iter()
            .map(|s| (s.name(), s.code()))
            .chain(OutputFormat::ALL.iter().map(|f| (f.name(), f.code())))
    }

    /// Total number of published symbols.
    pub fn len() -> usize {
        LexerState::ALL.len() + OutputFormat::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_across_tables() {
        let names: HashSet<_> = SymbolTable::entries().map(|(name, _)| name).collect();
        assert_eq!(names.len(), SymbolTable::len());
    }

    #[test]
    fn test_overlapping_codes_resolve_by_name() {
        assert_eq!(
            SymbolTable::lookup("HL_STANDARD"),
            Some(Symbol::State(LexerState::Standard))
        );
        assert_eq!(
            SymbolTable::lookup("HL_FORMAT_HTML"),
            Some(Symbol::Format(OutputFormat::Html))
        );
        assert_eq!(SymbolTable::code_of("HL_STANDARD"), Some(0));
        assert_eq!(SymbolTable::code_of("HL_FORMAT_HTML"), Some(0));
    }

    #[test]
    fn test_scoped_reverse_lookup() {
        assert_eq!(SymbolTable::state_name_of(9), Some("HL_OPERATOR"));
        assert_eq!(SymbolTable::format_name_of(9), Some("HL_FORMAT_BBCODE"));
        assert_eq!(SymbolTable::format_name_of(7), None);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(SymbolTable::lookup("HL_NOPE"), None);
        assert_eq!(SymbolTable::code_of("IgnoreCase"), None);
    }
}
