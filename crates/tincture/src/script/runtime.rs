//! Sandboxed execution of theme scripts.
//!
//! Every load constructs a fresh interpreter, preloads the shared symbol
//! table into it, runs the script and copies the resulting globals out into
//! an owned [`Environment`]. The interpreter is dropped before the call
//! returns, so concurrent loads on separate threads never observe each
//! other.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use mlua::{ChunkMode, Function, HookTriggers, Lua, MultiValue, Table, Thread, VmState};
use tincture_symbols::{
    FeatureFlags, SymbolTable, DIGITS_GLOBAL, IDENTIFIERS_GLOBAL, IDENTIFIER_PATTERN,
    NUMBER_PATTERN, PLACEHOLDER_GLOBALS,
};

use super::environment::{Builtins, Environment};
use crate::error::ScriptError;

/// Default number of VM instructions a script may execute.
pub const DEFAULT_INSTRUCTION_LIMIT: u64 = 10_000_000;

/// Default cap on interpreter memory, in bytes.
pub const DEFAULT_MEMORY_LIMIT: usize = 32 * 1024 * 1024;

/// Instructions between two budget checks.
const HOOK_STRIDE: u32 = 1000;

/// Resource bounds applied to each script execution.
///
/// `None` disables the corresponding bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionLimits {
    pub instructions: Option<u64>,
    pub memory: Option<usize>,
}

impl ExecutionLimits {
    /// No instruction budget and no memory cap.
    pub const UNLIMITED: Self = Self {
        instructions: None,
        memory: None,
    };
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            instructions: Some(DEFAULT_INSTRUCTION_LIMIT),
            memory: Some(DEFAULT_MEMORY_LIMIT),
        }
    }
}

/// Runs theme scripts in isolated interpreters.
#[derive(Debug, Clone, Default)]
pub struct ScriptRuntime {
    limits: ExecutionLimits,
}

impl ScriptRuntime {
    /// Creates a runtime with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ExecutionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ExecutionLimits {
        self.limits
    }

    /// Executes the script at `path` and returns its globals.
    ///
    /// # Errors
    ///
    /// - [`ScriptError::Read`] if the file cannot be read
    /// - [`ScriptError::EvaluationFailed`] if the script fails to parse, raises
    ///   an error, or exceeds a resource limit
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Environment, ScriptError> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.execute(&format!("@{}", path.display()), &source)
    }

    /// Executes an inline script. `name` appears in diagnostics.
    pub fn load_source(&self, name: &str, source: &str) -> Result<Environment, ScriptError> {
        self.execute(&format!("={name}"), source.as_bytes())
    }

    fn execute(&self, chunk_name: &str, source: &[u8]) -> Result<Environment, ScriptError> {
        let lua = Lua::new();
        let builtins = Builtins::capture(&lua).map_err(ScriptError::environment)?;
        preload(&lua).map_err(ScriptError::environment)?;
        let budget = self.apply_limits(&lua).map_err(ScriptError::environment)?;

        lua.load(source)
            .set_name(chunk_name)
            .set_mode(ChunkMode::Text)
            .exec()
            .and_then(|()| budget.as_ref().map_or(Ok(()), InstructionBudget::check))
            .map_err(|err| ScriptError::EvaluationFailed(diagnostic(&err)))?;

        // Harvesting runs no script code; lift the limits for it.
        lua.remove_hook();
        lua.set_memory_limit(0).map_err(ScriptError::environment)?;
        Environment::harvest(&lua, &builtins).map_err(ScriptError::environment)
    }

    fn apply_limits(&self, lua: &Lua) -> mlua::Result<Option<InstructionBudget>> {
        if let Some(bytes) = self.limits.memory {
            lua.set_memory_limit(bytes)?;
        }
        self.limits
            .instructions
            .map(|limit| {
                let budget = InstructionBudget::new(limit);
                budget.install(lua)?;
                Ok(budget)
            })
            .transpose()
    }
}

/// Instruction count shared by every coroutine of one execution.
///
/// Once exhausted it stays exhausted: the hook keeps raising, and every
/// protected call or coroutine resume re-raises on return, so a script
/// cannot catch the error and carry on.
#[derive(Clone)]
struct InstructionBudget {
    limit: u64,
    executed: Arc<AtomicU64>,
    exhausted: Arc<AtomicBool>,
}

impl InstructionBudget {
    fn new(limit: u64) -> Self {
        Self {
            limit,
            executed: Arc::new(AtomicU64::new(0)),
            exhausted: Arc::new(AtomicBool::new(false)),
        }
    }

    fn triggers() -> HookTriggers {
        HookTriggers::new().every_nth_instruction(HOOK_STRIDE)
    }

    fn tick(&self) -> mlua::Result<VmState> {
        let stride = u64::from(HOOK_STRIDE);
        let total = self.executed.fetch_add(stride, Ordering::Relaxed) + stride;
        if total > self.limit {
            self.exhausted.store(true, Ordering::Relaxed);
        }
        self.check().map(|()| VmState::Continue)
    }

    fn check(&self) -> mlua::Result<()> {
        if self.exhausted.load(Ordering::Relaxed) {
            Err(mlua::Error::runtime(format!(
                "instruction budget of {} exceeded",
                self.limit
            )))
        } else {
            Ok(())
        }
    }

    fn install(&self, lua: &Lua) -> mlua::Result<()> {
        let budget = self.clone();
        lua.set_hook(Self::triggers(), move |_lua, _debug| budget.tick());

        let globals = lua.globals();
        for name in ["pcall", "xpcall"] {
            let original: Function = globals.get(name)?;
            globals.set(name, self.rethrowing(lua, original)?)?;
        }

        let coroutine: Table = globals.get("coroutine")?;
        let original: Function = coroutine.get("resume")?;
        coroutine.set("resume", self.rethrowing(lua, original)?)?;

        let budget = self.clone();
        let create = lua.create_function(move |lua, body: Function| {
            let thread = lua.create_thread(body)?;
            budget.watch(&thread);
            Ok(thread)
        })?;
        coroutine.set("create", create)?;

        let budget = self.clone();
        let wrap = lua.create_function(move |lua, body: Function| {
            let thread = lua.create_thread(body)?;
            budget.watch(&thread);
            let budget = budget.clone();
            lua.create_function(move |_lua, args: MultiValue| {
                let results = thread.resume::<MultiValue>(args);
                budget.check()?;
                results
            })
        })?;
        coroutine.set("wrap", wrap)
    }

    /// Hooks a coroutine; hooks are per thread.
    fn watch(&self, thread: &Thread) {
        let budget = self.clone();
        thread.set_hook(Self::triggers(), move |_lua, _debug| budget.tick());
    }

    /// Wraps a function that catches errors so that an exhausted budget
    /// escapes it.
    fn rethrowing(&self, lua: &Lua, original: Function) -> mlua::Result<Function> {
        let budget = self.clone();
        lua.create_function(move |_lua, args: MultiValue| {
            let results = original.call::<MultiValue>(args)?;
            budget.check()?;
            Ok(results)
        })
    }
}

/// Binds everything a theme script may read before it runs.
fn preload(lua: &Lua) -> mlua::Result<()> {
    let globals = lua.globals();
    for name in PLACEHOLDER_GLOBALS {
        globals.set(*name, "")?;
    }
    globals.set(IDENTIFIERS_GLOBAL, IDENTIFIER_PATTERN)?;
    globals.set(DIGITS_GLOBAL, NUMBER_PATTERN)?;
    for (name, code) in SymbolTable::entries() {
        globals.set(name, code)?;
    }
    for (name, value) in FeatureFlags::default().entries() {
        globals.set(name, value)?;
    }
    Ok(())
}

/// Extracts the interpreter's own message, which carries `chunk:line:`.
fn diagnostic(err: &mlua::Error) -> String {
    match err {
        mlua::Error::SyntaxError { message, .. } => message.clone(),
        mlua::Error::RuntimeError(message) => message.clone(),
        mlua::Error::MemoryError(message) => message.clone(),
        mlua::Error::CallbackError { cause, .. } => diagnostic(cause),
        other => other.to_string(),
    }
}
