//! Marq IR - Instruction Tree Types
//!
//! This crate contains the instruction tree produced by parsing a Marq
//! program:
//! - `Program` for a full instruction sequence
//! - `Stmt` for individual instructions
//! - `ArrayElement` for the slots of an array literal
//! - `BinaryOp` for the four arithmetic operators
//!
//! The tree is immutable after parsing and carries no runtime state. Every
//! node renders back to its canonical markup form through [`std::fmt::Display`],
//! which is what `marq parse` prints and what the round-trip tests rely on.

mod ast;
mod operators;

pub use ast::{ArrayElement, Program, Stmt};
pub use operators::BinaryOp;
