//! Ordered error accumulation.

use crate::{Error, ErrorKind};

/// An ordered batch of errors collected during one parsing pass.
///
/// The parser never gives up on the first bad sibling: it validates every
/// node, pushing each failure here in document order, and only then reports.
/// `join` merges the batch into a single [`Error`] whose message lists every
/// failure on its own line.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ErrorList {
    errors: Vec<Error>,
}

impl ErrorList {
    pub fn new() -> Self {
        ErrorList { errors: Vec::new() }
    }

    /// Append one error to the batch.
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Absorb every error from another batch, keeping order.
    pub fn merge(&mut self, other: ErrorList) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The collected errors, in the order they were pushed.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// `Ok(value)` if the batch is empty, otherwise `Err(self)`.
    ///
    /// This is how a walk over many siblings turns its accumulated failures
    /// into a `Result` at the end instead of short-circuiting.
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorList> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Merge the batch into one error.
    ///
    /// The combined error takes the kind of the first entry and joins every
    /// message with a newline. Joining an empty batch yields an empty Parse
    /// error; callers uphold the invariant that only non-empty batches reach
    /// this point (see `into_result`).
    pub fn join(self) -> Error {
        let kind = self.errors.first().map_or(ErrorKind::Parse, |e| e.kind);
        let message = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Error::new(kind, message)
    }
}

impl From<Error> for ErrorList {
    /// A single error is a batch of one, so leaf parsing functions can use
    /// `?` on `Result<_, Error>` inside accumulation contexts.
    fn from(error: Error) -> Self {
        ErrorList {
            errors: vec![error],
        }
    }
}
