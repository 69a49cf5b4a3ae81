//! Marq Parser - Markup to Instruction Tree
//!
//! Parsing happens in two stages:
//!
//! Stage 1: the generic markup parser turns the source text into a document
//! tree. It is error-recovering per the HTML specification, so this stage
//! never fails on string input; malformed markup gets repaired, and fragment
//! input gets the `html`/`head`/`body` wrapper synthesized around it.
//!
//! Stage 2: the document tree is validated against the closed instruction
//! vocabulary and lowered into a [`marq_ir::Program`]. Every parse error the
//! runtime reports comes from this stage.
//!
//! Stage 2 accumulates: both the top-level walk and every `<ol>`'s child
//! walk validate all siblings before reporting, so one bad element never
//! hides the rest of the document's problems.

mod dom;
mod parser;

pub use parser::parse;

#[cfg(test)]
mod tests;
