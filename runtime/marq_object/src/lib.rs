//! Marq Object Model - Runtime Values and Evaluation State
//!
//! This crate defines everything an executing program touches:
//! - `Value`, the closed set of runtime value variants, with `Heap<T>` for
//!   shared string/array payloads
//! - `TypeTag`, the display names used by type errors
//! - `Stack`, the operand stack with atomic multi-element operations
//! - `Vars`, the variable table seeded with `true`, `false`, and `null`
//! - `Env`, the stack/table pair a session keeps alive between programs
//!
//! Values are immutable once constructed; cloning one shares the heap
//! allocation instead of deep-copying, which is what makes duplication on
//! the stack and variable binding cheap.

mod env;
mod value;

pub use env::{Env, Stack, Vars};
pub use value::{Heap, TypeTag, Value};
