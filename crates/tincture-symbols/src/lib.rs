//! Tincture Symbols - the frozen symbol table shared by theme scripts and
//! highlighting engines.
//!
//! Theme scripts refer to lexer states and output formats by global name
//! (`HL_STRING`, `HL_FORMAT_HTML`, ...). Engines written in other languages
//! refer to the same entities by numeric code. This crate is the single
//! source of truth for both spellings:
//!
//! - [`LexerState`]: lexical categories, including `*_END` transitions and
//!   engine sentinels
//! - [`OutputFormat`]: target markup formats
//! - [`SymbolTable`]: global name lookup across both tables
//! - [`FeatureFlags`], [`IDENTIFIER_PATTERN`], [`NUMBER_PATTERN`]: the other
//!   defaults every theme script sees
//!
//! # Stability
//!
//! Codes are part of the public interface. Variants may be appended, never
//! renumbered or removed; [`SYMBOL_TABLE_VERSION`] is bumped on every append.
//!
//! ```rust
//! use tincture_symbols::{LexerState, OutputFormat, SymbolTable};
//!
//! assert_eq!(LexerState::BlockComment.code(), 4);
//! assert_eq!(LexerState::from_name("HL_BLOCK_COMMENT"), Some(LexerState::BlockComment));
//! assert_eq!(OutputFormat::TrueColor.name(), "HL_FORMAT_TRUECOLOR");
//! assert_eq!(SymbolTable::code_of("HL_REJECT"), Some(101));
//! ```

#[macro_use]
mod macros;

mod defaults;
mod error;
mod format;
mod state;
mod table;

pub use defaults::{
    identifier_regex, number_regex, FeatureFlags, DIGITS_GLOBAL, IDENTIFIERS_GLOBAL,
    IDENTIFIER_PATTERN, NUMBER_PATTERN, PLACEHOLDER_GLOBALS,
};
pub use error::{Result, SymbolError};
pub use format::{OutputFormat, RESERVED_FORMAT_CODES};
pub use state::{LexerState, SENTINEL_BASE};
pub use table::{Symbol, SymbolTable, SYMBOL_TABLE_VERSION};
