//! Theme script execution.
//!
//! [`ScriptRuntime`] runs one script in a fresh interpreter and returns the
//! resulting globals as an owned [`Environment`]. Values are read back through
//! the [`Lookup`] trait, whose accessors answer `None` for both absent and
//! mistyped keys.

mod environment;
mod runtime;
mod value;

pub use environment::Environment;
pub use runtime::{
    ExecutionLimits, ScriptRuntime, DEFAULT_INSTRUCTION_LIMIT, DEFAULT_MEMORY_LIMIT,
};
pub use value::{Lookup, ScriptTable, ScriptValue};
