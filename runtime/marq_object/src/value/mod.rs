//! Runtime values.
//!
//! The variant set is closed: a program can only ever produce numbers,
//! strings, bools, arrays, and null. String and array payloads live behind
//! [`Heap<T>`], whose constructor is private to this module, so every
//! allocation goes through the factory methods on [`Value`].

mod heap;

use std::fmt;

pub use heap::Heap;

/// A runtime value.
///
/// Values are immutable once constructed; operations build new values
/// rather than mutating in place. Cloning shares heap payloads.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// Floating-point number. All arithmetic is IEEE-754, so division by
    /// zero yields an infinity or NaN rather than an error.
    Number(f64),
    /// String payload, shared by reference.
    Str(Heap<String>),
    /// Boolean, reachable through the seeded `true`/`false` variables.
    Bool(bool),
    /// Ordered array of values, shared by reference.
    Array(Heap<Vec<Value>>),
    /// The null value, reachable through the seeded `null` variable.
    Null,
}

impl Value {
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(Heap::new(text.into()))
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    pub fn null() -> Self {
        Value::Null
    }

    /// The tag naming this value's type in error messages.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Number(_) => TypeTag::Number,
            Value::Str(_) => TypeTag::String,
            Value::Bool(_) => TypeTag::Bool,
            Value::Array(_) => TypeTag::Array,
            Value::Null => TypeTag::Null,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical display form: numbers bare, strings quoted, arrays
    /// bracketed with `", "` separators, recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{value}"),
            Value::Str(text) => write!(f, "\"{text}\""),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Array(elements) => {
                let inner: Vec<_> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Null => f.write_str("null"),
        }
    }
}

/// Display names for the value types.
///
/// These are the exact words type errors use, so they are part of the
/// observable behavior.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Number,
    String,
    Bool,
    Array,
    Null,
}

impl TypeTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::String => "String",
            Self::Bool => "Bool",
            Self::Array => "Array",
            Self::Null => "Null",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
