//! The global namespace left behind by an executed theme script.

use std::collections::{BTreeMap, HashMap};
use std::ffi::c_void;

use mlua::{Lua, Table, Value};
use tincture_symbols::FeatureFlags;

use super::value::{Lookup, ScriptTable, ScriptValue};

/// Nesting depth beyond which tables are not captured.
const MAX_DEPTH: usize = 16;

/// Owned snapshot of a script's globals after execution.
///
/// Holds every global the script defined plus the preloaded constants and
/// flags (whether or not the script touched them). Interpreter built-ins the
/// script left untouched (`string`, `math`, `_G`, ...) are not included.
///
/// The snapshot has no tie to the interpreter that produced it; it is plain
/// data and can be sent across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    globals: BTreeMap<String, ScriptValue>,
}

impl Environment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a global, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.globals.insert(name.into(), value.into());
        self
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&ScriptValue> {
        self.globals.get(name)
    }

    /// Iterates global names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.globals.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    /// Effective feature flags after the script ran.
    ///
    /// A flag the script rebound to a non-boolean keeps its default.
    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags::from_lookup(|name| self.boolean(name))
    }

    /// Copies the interpreter's globals into an owned snapshot.
    pub(crate) fn harvest(lua: &Lua, builtins: &Builtins) -> mlua::Result<Self> {
        let mut globals = BTreeMap::new();
        let mut path = Vec::new();

        for pair in lua.globals().pairs::<Value, Value>() {
            let (key, value) = pair?;
            let Value::String(key) = key else {
                continue;
            };
            let key = String::from(key.to_string_lossy());
            if builtins.is_untouched(&key, &value) {
                continue;
            }
            match snapshot(&value, &mut path)? {
                ScriptValue::Unsupported(type_name) => {
                    log::trace!("dropping {} global '{}'", type_name, key);
                }
                value => {
                    globals.insert(key, value);
                }
            }
        }

        Ok(Self { globals })
    }
}

impl Lookup for Environment {
    fn lookup(&self, key: &str) -> Option<&ScriptValue> {
        self.get(key)
    }
}

impl FromIterator<(String, ScriptValue)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, ScriptValue)>>(iter: I) -> Self {
        Self {
            globals: iter.into_iter().collect(),
        }
    }
}

/// Identity of the globals a fresh interpreter starts with.
///
/// Captured before anything is preloaded so that harvesting can skip
/// built-ins the script never replaced.
pub(crate) struct Builtins(HashMap<String, *const c_void>);

impl Builtins {
    pub(crate) fn capture(lua: &Lua) -> mlua::Result<Self> {
        let mut seen = HashMap::new();
        for pair in lua.globals().pairs::<Value, Value>() {
            let (key, value) = pair?;
            if let Value::String(key) = key {
                seen.insert(String::from(key.to_string_lossy()), value.to_pointer());
            }
        }
        Ok(Self(seen))
    }

    fn is_untouched(&self, key: &str, value: &Value) -> bool {
        let pointer = value.to_pointer();
        !pointer.is_null() && self.0.get(key) == Some(&pointer)
    }
}

fn snapshot(value: &Value, path: &mut Vec<*const c_void>) -> mlua::Result<ScriptValue> {
    let captured = match value {
        Value::Boolean(b) => ScriptValue::Boolean(*b),
        Value::Integer(n) => ScriptValue::Integer(*n),
        Value::Number(n) => ScriptValue::Number(*n),
        Value::String(s) => ScriptValue::String(String::from(s.to_string_lossy())),
        Value::Table(t) => match snapshot_table(t, path)? {
            Some(table) => ScriptValue::Table(table),
            None => ScriptValue::Unsupported("table"),
        },
        other => ScriptValue::Unsupported(other.type_name()),
    };
    Ok(captured)
}

fn snapshot_table(
    table: &Table,
    path: &mut Vec<*const c_void>,
) -> mlua::Result<Option<ScriptTable>> {
    let pointer = table.to_pointer();
    if path.len() >= MAX_DEPTH || path.contains(&pointer) {
        return Ok(None);
    }
    path.push(pointer);

    let mut indexed = BTreeMap::new();
    let mut fields = BTreeMap::new();
    for pair in table.pairs::<Value, Value>() {
        let (key, value) = pair?;
        let value = snapshot(&value, path)?;
        match key {
            // Unsupported entries hold their index so the sequence has no
            // hole where they were.
            Value::Integer(index) if index >= 1 => {
                indexed.insert(index, value);
            }
            Value::String(key) if !matches!(value, ScriptValue::Unsupported(_)) => {
                fields.insert(String::from(key.to_string_lossy()), value);
            }
            _ => {}
        }
    }
    path.pop();

    // Sequence semantics: 1..=n, stopping at the first hole.
    let mut sequence = Vec::new();
    for (expected, (index, value)) in (1..).zip(indexed) {
        if index != expected {
            break;
        }
        sequence.push(value);
    }

    Ok(Some(ScriptTable::from_parts(sequence, fields)))
}
