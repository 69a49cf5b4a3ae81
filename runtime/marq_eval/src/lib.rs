//! Marq Evaluator - Instruction Tree Execution
//!
//! This crate executes parsed programs:
//! - [`Evaluator`] walks an instruction tree against a mutable environment,
//!   strictly in document order, stopping at the first error
//! - [`Output`] is the destination for `Print` lines: stdout by default, an
//!   in-memory buffer for tests and embedding
//! - [`Runtime`] bundles parser, evaluator, and one long-lived environment
//!   into a session whose state persists across `eval` calls
//!
//! Unlike the parser, the evaluator never accumulates errors: prior effects
//! stand, the failing instruction reports, and nothing after it runs.

mod evaluator;
mod output;
mod runtime;

pub use evaluator::Evaluator;
pub use output::Output;
pub use runtime::Runtime;
