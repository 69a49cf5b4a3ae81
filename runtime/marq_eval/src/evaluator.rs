//! The tree-walking evaluator.

use tracing::trace;

use marq_diagnostic::{binary_type_mismatch, unsupported_operand, Error};
use marq_ir::{ArrayElement, BinaryOp, Program, Stmt};
use marq_object::{Env, TypeTag, Value};

use crate::Output;

/// Executes instruction trees against an environment.
///
/// Execution is strict document order and fails fast: the first error aborts
/// the run, and every mutation made before it stays in place. There is no
/// rollback; a REPL session carries whatever the failing program managed to
/// do.
pub struct Evaluator {
    output: Output,
}

impl Evaluator {
    /// An evaluator whose `Print` lines go to stdout.
    pub fn new() -> Self {
        Evaluator {
            output: Output::Stdout,
        }
    }

    /// An evaluator whose `Print` lines go to an in-memory buffer.
    pub fn with_buffer() -> Self {
        Evaluator {
            output: Output::Buffer(String::new()),
        }
    }

    /// Print output captured so far (empty for the stdout evaluator).
    pub fn captured_output(&self) -> &str {
        self.output.captured()
    }

    /// Run a whole program.
    pub fn run(&mut self, program: &Program, env: &mut Env) -> Result<(), Error> {
        for stmt in &program.statements {
            self.run_stmt(stmt, env)?;
        }
        Ok(())
    }

    /// Run a single instruction.
    pub fn run_stmt(&mut self, stmt: &Stmt, env: &mut Env) -> Result<(), Error> {
        trace!(instruction = %stmt, "exec");
        match stmt {
            Stmt::Number(value) => {
                env.stack.push(Value::number(*value));
                Ok(())
            }
            Stmt::Str(text) => {
                env.stack.push(Value::string(text.clone()));
                Ok(())
            }
            Stmt::Array(elements) => self.run_array(elements, env),
            Stmt::Binary(op) => run_binary(*op, env),
            Stmt::Duplicate => {
                // Clone shares the heap payload: both stack slots now hold
                // the same allocation
                let top = env.stack.top()?.clone();
                env.stack.push(top);
                Ok(())
            }
            Stmt::Delete => {
                env.stack.pop()?;
                Ok(())
            }
            Stmt::SetVariable(identifier) => {
                let value = env.stack.pop()?;
                env.vars.set(identifier.clone(), value);
                Ok(())
            }
            Stmt::GetVariable(identifier) => {
                let value = env.vars.get(identifier)?;
                env.stack.push(value);
                Ok(())
            }
            Stmt::Print => {
                let line = env.stack.top()?.to_string();
                self.output.println(&line);
                Ok(())
            }
        }
    }

    /// Build an array literal.
    ///
    /// The stack depth is recorded up front. Each slot's sequence runs on
    /// the shared stack, the slot takes the one value left on top, and
    /// anything else above the recorded depth is discarded. The pop is
    /// permissive: a slot that nets nothing may consume a value that
    /// predates the literal, and only an outright empty stack is an error.
    fn run_array(&mut self, elements: &[ArrayElement], env: &mut Env) -> Result<(), Error> {
        let depth = env.stack.depth();
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            for stmt in &element.statements {
                self.run_stmt(stmt, env)?;
            }
            values.push(env.stack.pop()?);
            env.stack.truncate(depth);
        }
        env.stack.push(Value::array(values));
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a binary operator to the top two values.
///
/// Both operands are peeked before anything pops, so a type error leaves
/// the stack exactly as it was. The right operand is the top of the stack,
/// the left sits beneath it: `10 3 <sub>` computes `10 - 3`.
fn run_binary(op: BinaryOp, env: &mut Env) -> Result<(), Error> {
    let operands = env.stack.peek_many(2)?;
    let (right, left) = (operands[0], operands[1]);

    let result = match (left, right) {
        (Value::Number(left), Value::Number(right)) => apply_numeric(op, *left, *right),
        (Value::Str(left), Value::Str(right)) => {
            if op == BinaryOp::Add {
                Value::string(format!("{left}{right}"))
            } else {
                return Err(unsupported_operand(op.name(), TypeTag::String.as_str()));
            }
        }
        (left, right) if left.type_tag() == right.type_tag() => {
            return Err(unsupported_operand(op.name(), left.type_tag().as_str()));
        }
        (left, right) => {
            return Err(binary_type_mismatch(
                op.name(),
                left.type_tag().as_str(),
                right.type_tag().as_str(),
            ));
        }
    };

    env.stack.pop_many(2)?;
    env.stack.push(result);
    Ok(())
}

/// Numeric arithmetic is plain IEEE-754: division by zero yields an
/// infinity or NaN rather than an error.
fn apply_numeric(op: BinaryOp, left: f64, right: f64) -> Value {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
    };
    Value::number(result)
}
