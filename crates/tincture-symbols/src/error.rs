//! Error types for the symbol table.

use thiserror::Error;

/// Errors produced when resolving symbolic names or numeric codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The name is not part of the symbol table.
    #[error("unknown symbol name '{0}'")]
    UnknownName(String),

    /// The code does not identify any variant of the given kind.
    #[error("unknown {kind} code {code}")]
    UnknownCode {
        /// Which enumeration was searched ("lexer state" or "output format").
        kind: &'static str,
        code: i64,
    },
}

/// Result type for symbol table operations.
pub type Result<T> = std::result::Result<T, SymbolError>;
