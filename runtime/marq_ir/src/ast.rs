//! Instruction tree nodes.
//!
//! A program is a flat sequence of statements; the only nesting comes from
//! array literals, whose `<li>` slots each hold their own statement sequence.

use std::fmt;
use std::fmt::Write as _;

use crate::BinaryOp;

/// A parsed program: the instruction sequence in document order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    /// Number of top-level statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A single instruction.
///
/// The variant set is closed: the parser rejects any element outside this
/// vocabulary, so the evaluator can match exhaustively.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Push a number literal (`<data value="...">`).
    Number(f64),
    /// Push a string literal (`<s>...</s>`).
    Str(String),
    /// Build and push an array (`<ol>` with `<li>` slots).
    Array(Vec<ArrayElement>),
    /// Apply a binary arithmetic operator to the top two values.
    Binary(BinaryOp),
    /// Push a second reference to the top value (`<dt>`).
    Duplicate,
    /// Pop and discard the top value (`<del>`).
    Delete,
    /// Pop the top value into a variable (`<var title="...">`).
    SetVariable(String),
    /// Push the value bound to a variable (`<cite>name</cite>`).
    GetVariable(String),
    /// Print the top value without consuming it (`<output>`).
    Print,
}

/// One `<li>` slot of an array literal.
///
/// The slot's statements run on the shared operand stack; the single value
/// left for the slot becomes one element of the finished array.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ArrayElement {
    pub statements: Vec<Stmt>,
}

impl ArrayElement {
    pub fn new(statements: Vec<Stmt>) -> Self {
        ArrayElement { statements }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Number(value) => write!(f, r#"<data value="{value}"></data>"#),
            Stmt::Str(text) => {
                f.write_str("<s>")?;
                write_escaped_text(f, text)?;
                f.write_str("</s>")
            }
            Stmt::Array(elements) => {
                f.write_str("<ol>")?;
                for element in elements {
                    write!(f, "{element}")?;
                }
                f.write_str("</ol>")
            }
            Stmt::Binary(op) => write!(f, "<{tag}></{tag}>", tag = op.tag()),
            Stmt::Duplicate => f.write_str("<dt></dt>"),
            Stmt::Delete => f.write_str("<del></del>"),
            Stmt::SetVariable(identifier) => {
                f.write_str(r#"<var title=""#)?;
                write_escaped_attribute(f, identifier)?;
                f.write_str(r#""></var>"#)
            }
            Stmt::GetVariable(identifier) => {
                f.write_str("<cite>")?;
                write_escaped_text(f, identifier)?;
                f.write_str("</cite>")
            }
            Stmt::Print => f.write_str("<output></output>"),
        }
    }
}

impl fmt::Display for ArrayElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<li>")?;
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        f.write_str("</li>")
    }
}

/// Escape text content so the rendering re-parses to the same payload.
fn write_escaped_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            other => f.write_char(other)?,
        }
    }
    Ok(())
}

/// Escape a double-quoted attribute value.
fn write_escaped_attribute(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            other => f.write_char(other)?,
        }
    }
    Ok(())
}
