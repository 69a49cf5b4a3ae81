//! The error type and its factory functions.

use std::fmt;

/// Category of a runtime error.
///
/// Displayed as the `XxxError` prefix of the rendered message, which is what
/// REPL users and test assertions see.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// The markup used an element outside the instruction vocabulary, or an
    /// element was missing a required attribute or text child.
    Parse,
    /// An instruction needed more operands than the stack holds.
    Stack,
    /// A variable read named an unbound identifier.
    Variable,
    /// An operator was applied to operands it is not defined for.
    Type,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "ParseError",
            Self::Stack => "StackError",
            Self::Variable => "VariableError",
            Self::Type => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized runtime error.
///
/// Factory functions below populate both fields; the message never repeats
/// the kind prefix.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    /// Create an error from a kind and message.
    ///
    /// Prefer the specific factory functions; this exists for the odd case
    /// a message is assembled elsewhere (e.g. `ErrorList::join`).
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
        }
    }
}

// Parse errors

/// An element outside the instruction vocabulary.
#[cold]
pub fn unknown_tag(tag: &str) -> Error {
    Error::new(ErrorKind::Parse, format!("unknown tag '{tag}'"))
}

/// A `<s>` or `<cite>` element with no text content to read.
#[cold]
pub fn missing_text_child(tag: &str) -> Error {
    Error::new(ErrorKind::Parse, format!("<{tag}> element has no text child"))
}

/// A required attribute was absent.
#[cold]
pub fn missing_attribute(attribute: &str) -> Error {
    Error::new(
        ErrorKind::Parse,
        format!("attribute '{attribute}' not found"),
    )
}

/// A `value` attribute that does not parse as a number.
#[cold]
pub fn invalid_number(value: &str) -> Error {
    Error::new(
        ErrorKind::Parse,
        format!("value '{value}' is not a valid number"),
    )
}

/// A `<li>` element outside an `<ol>` array literal.
#[cold]
pub fn list_item_outside_list() -> Error {
    Error::new(ErrorKind::Parse, "<li> element outside of <ol>")
}

/// An `<ol>` child that is not a `<li>` element.
#[cold]
pub fn expected_list_item(tag: &str) -> Error {
    Error::new(
        ErrorKind::Parse,
        format!("expected <li> inside <ol>, found <{tag}>"),
    )
}

// Stack errors

/// An operand was needed from an empty stack.
#[cold]
pub fn stack_empty() -> Error {
    Error::new(ErrorKind::Stack, "stack empty")
}

/// More operands were needed than the stack holds.
#[cold]
pub fn stack_too_shallow(needed: usize, depth: usize) -> Error {
    let word = if depth == 1 { "value" } else { "values" };
    Error::new(
        ErrorKind::Stack,
        format!("stack holds {depth} {word}, need {needed}"),
    )
}

// Variable errors

/// A read of an unbound variable.
#[cold]
pub fn undefined_variable(identifier: &str) -> Error {
    Error::new(
        ErrorKind::Variable,
        format!("variable '{identifier}' not found"),
    )
}

// Type errors

/// A binary operator applied to a pair of types it is not defined for.
#[cold]
pub fn binary_type_mismatch(operation: &str, left: &str, right: &str) -> Error {
    Error::new(
        ErrorKind::Type,
        format!("cannot apply {operation} to {left} and {right}"),
    )
}

/// A binary operator applied to a type that supports none of its forms.
#[cold]
pub fn unsupported_operand(operation: &str, type_name: &str) -> Error {
    Error::new(
        ErrorKind::Type,
        format!("{operation} is not defined for {type_name} values"),
    )
}
