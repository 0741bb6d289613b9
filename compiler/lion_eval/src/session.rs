//! Driver-side state carried between evaluation cycles.
//!
//! A [`Session`] owns the current stack and root environment. Each cycle
//! parses and applies one piece of source against copies of both; the copies
//! replace the session state only if the whole cycle succeeds. A failed cycle
//! leaves the stack and every binding exactly as they were.

use lion_ir::{Quote, Stack, Symbol, Value};

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;

#[derive(Debug, Default)]
pub struct Session {
    interpreter: Interpreter,
    stack: Stack,
    env: Environment,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Session {
            interpreter,
            stack: Stack::new(),
            env: Environment::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Seed a binding in the root environment.
    pub fn define(&mut self, name: &str, quote: Quote) {
        self.env.set(Symbol::new(name), quote);
    }

    /// Seed a value on the stack.
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Parse `source` and run it as one cycle.
    pub fn eval(&mut self, source: &str) -> EvalResult<&[Value]> {
        let program = lion_parse::parse(source)?;
        self.run(&program)
    }

    /// Run `program` as one cycle.
    ///
    /// On success the resulting stack and bindings become the session state
    /// and the new stack is returned. On error the state is unchanged.
    pub fn run(&mut self, program: &Quote) -> EvalResult<&[Value]> {
        let (stack, env) = self.interpreter.apply(&self.stack, &self.env, program)?;
        tracing::debug!(depth = stack.len(), "cycle committed");
        self.stack = stack;
        self.env = env;
        Ok(&self.stack)
    }

    /// Empty the stack, keeping bindings.
    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }
}

/// A clone gets its own root scope holding copies of the bindings, so
/// defining a name in one session is never seen by the other.
impl Clone for Session {
    fn clone(&self) -> Self {
        Session {
            interpreter: self.interpreter.clone(),
            stack: self.stack.clone(),
            env: self.env.fork(),
        }
    }
}
