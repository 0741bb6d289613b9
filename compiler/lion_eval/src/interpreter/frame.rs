//! The view of the machine a builtin runs against.

use lion_ir::{Quote, Stack, Symbol, Text, Value};
use lion_stack::DepthGuard;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{wrong_operand_type, EvalError, EvalResult};
use crate::registry::Builtin;

/// The stack, environment and interpreter a builtin is invoked with.
///
/// The interpreter guarantees the stack holds at least the builtin's arity.
/// Operands are addressed by 1-based position from the deepest one, so for
/// `a b +` operand 1 is `a` and operand 2 is `b`. A builtin checks every
/// operand it needs before calling [`discard`](Self::discard), which keeps
/// the stack intact when a check fails.
pub struct Frame<'a> {
    interpreter: &'a Interpreter,
    builtin: Builtin,
    stack: &'a mut Stack,
    env: &'a mut Environment,
    guard: DepthGuard,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(
        interpreter: &'a Interpreter,
        builtin: Builtin,
        stack: &'a mut Stack,
        env: &'a mut Environment,
        guard: DepthGuard,
    ) -> Self {
        Frame {
            interpreter,
            builtin,
            stack,
            env,
            guard,
        }
    }

    /// Name of the running builtin.
    pub fn op(&self) -> &'static str {
        self.builtin.name()
    }

    pub fn stack(&self) -> &[Value] {
        self.stack.as_slice()
    }

    pub fn env(&self) -> &Environment {
        &*self.env
    }

    /// Operand at `position`, counting from 1 at the deepest operand.
    ///
    /// Only valid before [`discard`](Self::discard).
    pub fn operand(&self, position: usize) -> &Value {
        debug_assert!((1..=self.builtin.arity()).contains(&position));
        &self.stack[self.stack.len() - self.builtin.arity() + position - 1]
    }

    pub fn number(&self, position: usize) -> EvalResult<f64> {
        match self.operand(position) {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch(position, "a number")),
        }
    }

    pub fn boolean(&self, position: usize) -> EvalResult<bool> {
        match self.operand(position) {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(position, "a boolean")),
        }
    }

    pub fn string(&self, position: usize) -> EvalResult<Text> {
        match self.operand(position) {
            Value::String(text) => Ok(text.clone()),
            _ => Err(self.mismatch(position, "a string")),
        }
    }

    pub fn quote(&self, position: usize) -> EvalResult<Quote> {
        match self.operand(position) {
            Value::Quote(quote) => Ok(quote.clone()),
            _ => Err(self.mismatch(position, "a quoted list")),
        }
    }

    /// The error for an operand at `position` that is not `expected`.
    pub fn mismatch(&self, position: usize, expected: &'static str) -> EvalError {
        wrong_operand_type(self.op(), position, expected, self.operand(position))
    }

    /// Pop all of this builtin's operands.
    pub fn discard(&mut self) {
        let keep = self.stack.len() - self.builtin.arity();
        self.stack.truncate(keep);
    }

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Bind `name` in the current scope.
    pub fn bind(&mut self, name: Symbol, quote: Quote) {
        tracing::debug!(symbol = %name, len = quote.len(), "bind");
        self.env.set(name, quote);
    }

    /// Apply `program` in place against this frame's stack and scope.
    pub fn apply(&mut self, program: &Quote) -> EvalResult<()> {
        self.interpreter
            .apply_nested(self.stack, self.env, program, self.guard)
    }

    /// Apply `program` against this frame's stack in a fresh child scope.
    pub fn call(&mut self, program: &Quote) -> EvalResult<()> {
        let mut scope = self.env.child();
        self.interpreter
            .apply_nested(self.stack, &mut scope, program, self.guard)
    }
}
