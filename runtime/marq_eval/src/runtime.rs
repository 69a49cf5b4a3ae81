//! A persistent evaluation session.

use tracing::debug;

use marq_diagnostic::Error;
use marq_object::Env;
use marq_parse::parse;

use crate::Evaluator;

/// One session: parser plus evaluator plus one long-lived environment.
///
/// Stack contents and variable bindings persist from one `eval` call to the
/// next, which is what lets a REPL build state line by line. A failed call
/// keeps whatever it mutated before failing.
pub struct Runtime {
    env: Env,
    evaluator: Evaluator,
}

impl Runtime {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Runtime {
            env: Env::new(),
            evaluator: Evaluator::new(),
        }
    }

    /// A session capturing `Print` output in a buffer.
    pub fn with_buffer() -> Self {
        Runtime {
            env: Env::new(),
            evaluator: Evaluator::with_buffer(),
        }
    }

    /// Parse and execute one source text against the session environment.
    pub fn eval(&mut self, source: &str) -> Result<(), Error> {
        let program = parse(source)?;
        debug!(statements = program.len(), "executing program");
        self.evaluator.run(&program, &mut self.env)
    }

    /// The session environment, for inspecting the stack and variables.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Captured print output (empty unless built `with_buffer`).
    pub fn captured_output(&self) -> &str {
        self.evaluator.captured_output()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
