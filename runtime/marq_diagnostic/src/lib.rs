//! Diagnostics for the Marq runtime.
//!
//! Every failure the runtime can report falls into one of four categories:
//! parsing, stack discipline, variable lookup, or operand types. The
//! categories are closed so callers can match on [`ErrorKind`] instead of
//! inspecting message strings.
//!
//! Factory functions (e.g. `unknown_tag()`) are the public API for
//! constructing errors: they keep the message wording in one place and give
//! each concrete failure a single call site to grep for.
//!
//! [`ErrorList`] is the accumulation half: the parser collects every
//! per-sibling failure into a list and merges the batch into one combined
//! error, so a document full of bad tags reports all of them at once.

mod error;
mod list;

pub use error::{
    binary_type_mismatch, expected_list_item, invalid_number, list_item_outside_list,
    missing_attribute, missing_text_child, stack_empty, stack_too_shallow, undefined_variable,
    unknown_tag, unsupported_operand, Error, ErrorKind,
};
pub use list::ErrorList;

#[cfg(test)]
mod tests;
