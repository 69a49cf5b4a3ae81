//! Binary Operators
//!
//! The four arithmetic operators of the instruction set. Each one is spelled
//! as a dedicated element in source markup.

use std::fmt;

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the operation name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        }
    }

    /// Returns the markup tag that spells this operator.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "dd",
            Self::Sub => "sub",
            Self::Mul => "ul",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
