//! Owned snapshot of script values.
//!
//! Values harvested from the interpreter are copied into these types so that
//! nothing downstream holds a reference into a live interpreter. Only data a
//! theme can meaningfully declare is kept: booleans, numbers, strings and
//! tables. Functions, userdata and coroutines are dropped during harvest,
//! except inside a sequence, where they leave an
//! [`Unsupported`](ScriptValue::Unsupported) marker so later entries keep
//! their position.

use std::collections::BTreeMap;

/// A value read out of an executed theme script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
    Table(ScriptTable),
    /// A sequence entry that could not be copied out: a function, userdata,
    /// thread, or a table that is cyclic or nested too deeply. Carries the
    /// interpreter's type name.
    Unsupported(&'static str),
}

impl ScriptValue {
    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScriptValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ScriptValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the table payload, if this is a table.
    pub fn as_table(&self) -> Option<&ScriptTable> {
        match self {
            ScriptValue::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Boolean(_) => "boolean",
            ScriptValue::Integer(_) => "integer",
            ScriptValue::Number(_) => "number",
            ScriptValue::String(_) => "string",
            ScriptValue::Table(_) => "table",
            ScriptValue::Unsupported(type_name) => type_name,
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Boolean(value)
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Integer(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<ScriptTable> for ScriptValue {
    fn from(value: ScriptTable) -> Self {
        ScriptValue::Table(value)
    }
}

/// A table read out of an executed theme script.
///
/// The sequence part holds the values at keys `1..=n`, stopping at the first
/// missing index. String keys land in `fields`. Any other key (negative or
/// sparse integers, floats, booleans, tables) is not representable and is
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptTable {
    sequence: Vec<ScriptValue>,
    fields: BTreeMap<String, ScriptValue>,
}

impl ScriptTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the sequence part, returning `self` for chaining.
    pub fn push(mut self, value: impl Into<ScriptValue>) -> Self {
        self.sequence.push(value.into());
        self
    }

    /// Sets a string-keyed field, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The values at keys `1..=n`.
    pub fn sequence(&self) -> &[ScriptValue] {
        &self.sequence
    }

    /// Iterates string-keyed fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ScriptValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if neither part holds a value.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty() && self.fields.is_empty()
    }

    pub(crate) fn from_parts(
        sequence: Vec<ScriptValue>,
        fields: BTreeMap<String, ScriptValue>,
    ) -> Self {
        Self { sequence, fields }
    }
}

/// Key/value lookup over a script namespace.
///
/// Every accessor answers `None` when the key is absent *or* holds a value of
/// a different type. Callers pair these with `unwrap_or_default` (or an
/// explicit fallback) to get lenient extraction without type coercion.
pub trait Lookup {
    /// Returns the raw value bound to `key`.
    fn lookup(&self, key: &str) -> Option<&ScriptValue>;

    fn string(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(ScriptValue::as_str)
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.lookup(key).and_then(ScriptValue::as_bool)
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.lookup(key).and_then(ScriptValue::as_integer)
    }

    fn table(&self, key: &str) -> Option<&ScriptTable> {
        self.lookup(key).and_then(ScriptValue::as_table)
    }

    /// Returns the string entries of the sequence bound to `key`, skipping
    /// entries of any other type. Absent or mistyped keys yield an empty list.
    fn strings(&self, key: &str) -> Vec<String> {
        self.table(key)
            .map(|t| {
                t.sequence()
                    .iter()
                    .filter_map(|v| {
                        let s = v.as_str();
                        if s.is_none() {
                            log::trace!("skipping {} entry in '{}'", v.type_name(), key);
                        }
                        s.map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Lookup for ScriptTable {
    fn lookup(&self, key: &str) -> Option<&ScriptValue> {
        self.fields.get(key)
    }
}
