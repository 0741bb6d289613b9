//! Lion Eval - the evaluator for Lion programs.
//!
//! # Architecture
//!
//! - [`Environment`]: chain of name-to-quote scopes, children never write to
//!   their parents
//! - [`BuiltinRegistry`]: read-only table of builtin operators, shared
//!   through an `Arc`
//! - [`Interpreter`]: `apply` and `call` over a stack and an environment
//! - [`Session`]: a stack and root environment carried between evaluation
//!   cycles, keeping the last good state when a cycle fails
//!
//! Errors are built through the constructors in [`errors`].

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod registry;
mod session;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{EvalLimits, Frame, Interpreter, InterpreterBuilder};
pub use registry::{Builtin, BuiltinFn, BuiltinRegistry};
pub use session::Session;

pub use lion_ir::{Quote, Stack, Symbol, Value};
