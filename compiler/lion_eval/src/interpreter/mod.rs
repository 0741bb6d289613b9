//! Quote application.
//!
//! [`Interpreter::apply`] runs a quote left to right against a stack and an
//! environment. Literals (numbers, booleans, strings and nested quotes) are
//! pushed. A symbol is resolved in order:
//!
//! 1. a binding in the environment, whose quote is applied in place against
//!    the same stack and the same environment;
//! 2. a builtin in the registry, invoked through a [`Frame`];
//! 3. otherwise evaluation stops with `UndefinedSymbol`.
//!
//! The first error stops the whole application. Elements already processed
//! keep their effects on the working stack and environment; the public entry
//! points work on copies, so the caller's values are never touched.
//!
//! Every nested application (symbol expansion, the `apply`, `call` and `dip`
//! builtins) goes one level down a [`DepthGuard`] and runs on a stack grown
//! on demand.

mod builder;
mod frame;

use std::sync::Arc;

use lion_ir::{Quote, Stack, Symbol, Value};
use lion_stack::{descend, DepthGuard};

use crate::environment::Environment;
use crate::errors::{undefined_symbol, wrong_arity, EvalResult};
use crate::registry::{Builtin, BuiltinRegistry};

pub use builder::InterpreterBuilder;
pub use frame::Frame;

/// Bounds applied to a single evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalLimits {
    /// Deepest allowed nesting of quote applications.
    pub max_depth: usize,
}

impl EvalLimits {
    pub const DEFAULT_MAX_DEPTH: usize = 10_000;
}

impl Default for EvalLimits {
    fn default() -> Self {
        EvalLimits {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Applies quotes using a fixed builtin registry and limits.
#[derive(Clone, Debug)]
pub struct Interpreter {
    registry: Arc<BuiltinRegistry>,
    limits: EvalLimits,
}

impl Interpreter {
    /// An interpreter with the standard builtins and default limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    pub fn limits(&self) -> EvalLimits {
        self.limits
    }

    /// Apply `program` to copies of `stack` and `env`.
    ///
    /// On success returns the resulting stack and environment. Bindings made
    /// by the program, directly or through symbol expansion, are in the
    /// returned environment; `env` itself is left unchanged.
    pub fn apply(
        &self,
        stack: &[Value],
        env: &Environment,
        program: &Quote,
    ) -> EvalResult<(Stack, Environment)> {
        let mut stack = stack.to_vec();
        let mut env = env.fork();
        self.apply_in(&mut stack, &mut env, program, self.root_guard())
            .inspect_err(|err| tracing::debug!(%err, "apply aborted"))?;
        Ok((stack, env))
    }

    /// Apply `program` to a copy of `stack` in a fresh child scope of `env`.
    ///
    /// Bindings made during the call live in the child scope and are dropped
    /// with it.
    pub fn call(&self, stack: &[Value], env: &Environment, program: &Quote) -> EvalResult<Stack> {
        let mut stack = stack.to_vec();
        let mut scope = env.child();
        self.apply_in(&mut stack, &mut scope, program, self.root_guard())
            .inspect_err(|err| tracing::debug!(%err, "call aborted"))?;
        Ok(stack)
    }

    fn root_guard(&self) -> DepthGuard {
        DepthGuard::new(self.limits.max_depth)
    }

    /// Apply `program` in place, one level below `guard`.
    pub(crate) fn apply_nested(
        &self,
        stack: &mut Stack,
        env: &mut Environment,
        program: &Quote,
        guard: DepthGuard,
    ) -> EvalResult<()> {
        descend(guard, |inner| self.apply_in(stack, env, program, inner))?
    }

    /// Apply `program` in place at the level of `guard`.
    pub(crate) fn apply_in(
        &self,
        stack: &mut Stack,
        env: &mut Environment,
        program: &Quote,
        guard: DepthGuard,
    ) -> EvalResult<()> {
        let _span =
            tracing::debug_span!("apply", depth = guard.depth(), len = program.len()).entered();
        for value in program {
            match value {
                Value::Number(_) | Value::Boolean(_) | Value::String(_) | Value::Quote(_) => {
                    stack.push(value.clone());
                }
                Value::Symbol(name) => self.eval_symbol(stack, env, name, guard)?,
            }
        }
        Ok(())
    }

    fn eval_symbol(
        &self,
        stack: &mut Stack,
        env: &mut Environment,
        name: &Symbol,
        guard: DepthGuard,
    ) -> EvalResult<()> {
        if let Some(body) = env.get(name.as_str()) {
            tracing::trace!(symbol = %name, "expanding binding");
            return self.apply_nested(stack, env, &body, guard);
        }
        if let Some(builtin) = self.registry.get(name.as_str()) {
            tracing::trace!(symbol = %name, "invoking builtin");
            return self.invoke(builtin, stack, env, guard);
        }
        Err(undefined_symbol(name.as_str()))
    }

    fn invoke(
        &self,
        builtin: Builtin,
        stack: &mut Stack,
        env: &mut Environment,
        guard: DepthGuard,
    ) -> EvalResult<()> {
        if stack.len() < builtin.arity() {
            return Err(wrong_arity(builtin.name(), builtin.arity(), stack.len()));
        }
        let mut frame = Frame::new(self, builtin, stack, env, guard);
        (builtin.func())(&mut frame)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
