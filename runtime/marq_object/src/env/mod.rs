//! Evaluation state: the operand stack and the variable table.
//!
//! One [`Env`] lives for a whole session. Programs mutate it in place, and
//! a failing instruction leaves everything mutated so far exactly where it
//! was, which is what lets a REPL keep going after an error.

use rustc_hash::FxHashMap;

use marq_diagnostic::{stack_empty, stack_too_shallow, undefined_variable, Error};

use crate::Value;

/// The operand stack.
///
/// Values enter and leave at the top. Operations that need more values than
/// the stack holds fail without touching it, so callers never see a
/// half-consumed stack.
#[derive(Clone, Debug)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            values: Vec::with_capacity(256),
        }
    }

    /// Push a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pop the top value off the stack.
    pub fn pop(&mut self) -> Result<Value, Error> {
        self.values.pop().ok_or_else(stack_empty)
    }

    /// The top value, without consuming it.
    pub fn top(&self) -> Result<&Value, Error> {
        self.values.last().ok_or_else(stack_empty)
    }

    /// The top `count` values, topmost first, without consuming them.
    pub fn peek_many(&self, count: usize) -> Result<Vec<&Value>, Error> {
        if self.values.len() < count {
            return Err(stack_too_shallow(count, self.values.len()));
        }
        Ok(self.values.iter().rev().take(count).collect())
    }

    /// Pop the top `count` values, topmost first.
    ///
    /// Fails atomically: a too-shallow stack is left untouched.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Value>, Error> {
        if self.values.len() < count {
            return Err(stack_too_shallow(count, self.values.len()));
        }
        let mut removed = self.values.split_off(self.values.len() - count);
        removed.reverse();
        Ok(removed)
    }

    /// Current number of values on the stack.
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Discard everything above `depth`.
    ///
    /// Array literals record the depth before their elements run and use
    /// this to clear stray values each element leaves behind. A `depth` at
    /// or above the current depth is a no-op.
    pub fn truncate(&mut self, depth: usize) {
        self.values.truncate(depth);
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

/// The variable table.
///
/// Identifier to value, last write wins. Every fresh table starts with
/// `true`, `false`, and `null` bound, which is how programs reach those
/// values at all: the instruction set has no bool or null literals.
#[derive(Clone, Debug)]
pub struct Vars {
    bindings: FxHashMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert("true".to_string(), Value::bool(true));
        bindings.insert("false".to_string(), Value::bool(false));
        bindings.insert("null".to_string(), Value::null());
        Vars { bindings }
    }

    /// Look up a variable.
    ///
    /// The returned value shares any heap payload with the binding, so
    /// reading a variable never deep-copies.
    pub fn get(&self, identifier: &str) -> Result<Value, Error> {
        self.bindings
            .get(identifier)
            .cloned()
            .ok_or_else(|| undefined_variable(identifier))
    }

    /// Bind a variable, overwriting any previous binding.
    pub fn set(&mut self, identifier: impl Into<String>, value: Value) {
        self.bindings.insert(identifier.into(), value);
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

/// The full evaluation state: operand stack plus variable table.
#[derive(Clone, Debug)]
pub struct Env {
    pub stack: Stack,
    pub vars: Vars,
}

impl Env {
    pub fn new() -> Self {
        Env {
            stack: Stack::new(),
            vars: Vars::new(),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
