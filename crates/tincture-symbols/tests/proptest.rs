//! Property-based tests for the symbol table.

use proptest::prelude::*;
use tincture_symbols::{LexerState, OutputFormat, Symbol, SymbolTable};

fn lexer_state() -> impl Strategy<Value = LexerState> {
    prop::sample::select(LexerState::ALL.to_vec())
}

fn output_format() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

proptest! {
    /// name -> code -> name is the identity for lexer states.
    #[test]
    fn lexer_state_round_trips(state in lexer_state()) {
        let code = SymbolTable::code_of(state.name()).unwrap();
        prop_assert_eq!(SymbolTable::state_name_of(code), Some(state.name()));
        prop_assert_eq!(LexerState::from_code(code), Some(state));
    }

    /// name -> code -> name is the identity for output formats.
    #[test]
    fn output_format_round_trips(format in output_format()) {
        let code = SymbolTable::code_of(format.name()).unwrap();
        prop_assert_eq!(SymbolTable::format_name_of(code), Some(format.name()));
        prop_assert_eq!(OutputFormat::from_code(code), Some(format));
    }

    /// Reverse lookup never invents a symbol for an arbitrary code.
    #[test]
    fn from_code_is_consistent_with_all(code in -10i64..200) {
        match LexerState::from_code(code) {
            Some(state) => prop_assert_eq!(state.code(), code),
            None => prop_assert!(LexerState::ALL.iter().all(|s| s.code() != code)),
        }
        match OutputFormat::from_code(code) {
            Some(format) => prop_assert_eq!(format.code(), code),
            None => prop_assert!(OutputFormat::ALL.iter().all(|f| f.code() != code)),
        }
    }

    /// Arbitrary strings resolve only when they are published names.
    #[test]
    fn lookup_rejects_unpublished_names(name in "[A-Z_]{1,24}") {
        let published = SymbolTable::entries().any(|(n, _)| n == name);
        prop_assert_eq!(SymbolTable::lookup(&name).is_some(), published);
    }

    /// Parsing a symbol's display form yields the symbol again.
    #[test]
    fn display_parses_back(state in lexer_state()) {
        let text = state.to_string();
        prop_assert_eq!(text.parse::<LexerState>(), Ok(state));
        prop_assert_eq!(SymbolTable::lookup(&text), Some(Symbol::State(state)));
    }
}
