//! Evaluation errors and their constructors.
//!
//! Builtins and the interpreter build errors through the functions in this
//! module rather than naming `EvalError` variants directly, so message
//! wording lives in one place.
//!
//! ```ignore
//! use lion_eval::errors::{division_by_zero, undefined_symbol};
//! ```

use lion_ir::Value;
use lion_parse::ParseError;
use lion_stack::DepthExceeded;
use thiserror::Error;

/// Result alias used throughout the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Why an evaluation stopped.
///
/// Operand positions are 1-based from the deepest operand: in `a b +`,
/// `a` is the first argument and `b` the second.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A symbol with no binding in scope and no builtin of that name.
    #[error("undefined symbol '{name}'")]
    UndefinedSymbol { name: String },

    /// An operator found fewer values on the stack than it consumes.
    #[error("'{op}' expects {}", arity_words(.expected))]
    WrongArity {
        op: String,
        expected: usize,
        found: usize,
    },

    /// An operand of the wrong kind.
    #[error("'{op}' expects {expected} as its {} argument, found {found}", ordinal(.position))]
    WrongOperandType {
        op: String,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Raised by the `parse` builtin.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Symbol expansion nested deeper than the interpreter allows.
    #[error("expansion depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
}

impl From<DepthExceeded> for EvalError {
    fn from(err: DepthExceeded) -> Self {
        depth_limit_exceeded(err.limit)
    }
}

fn arity_words(expected: &usize) -> String {
    match expected {
        0 => "no arguments".to_string(),
        1 => "at least one argument".to_string(),
        2 => "two arguments".to_string(),
        3 => "three arguments".to_string(),
        n => format!("{n} arguments"),
    }
}

fn ordinal(position: &usize) -> String {
    match position {
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        n => format!("{n}th"),
    }
}

// Name Resolution

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::UndefinedSymbol {
        name: name.to_string(),
    }
}

// Operand Errors

/// Not enough operands on the stack for `op`.
#[cold]
pub fn wrong_arity(op: &str, expected: usize, found: usize) -> EvalError {
    EvalError::WrongArity {
        op: op.to_string(),
        expected,
        found,
    }
}

/// Operand at `position` of `op` is not what `op` accepts.
///
/// `expected` reads as a noun phrase: "a number", "a quoted list".
#[cold]
pub fn wrong_operand_type(
    op: &str,
    position: usize,
    expected: &'static str,
    found: &Value,
) -> EvalError {
    EvalError::WrongOperandType {
        op: op.to_string(),
        position,
        expected,
        found: found.type_name(),
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

// Resource Errors

#[cold]
pub fn depth_limit_exceeded(limit: usize) -> EvalError {
    EvalError::DepthLimitExceeded { limit }
}

#[cold]
pub fn parse_error(err: ParseError) -> EvalError {
    EvalError::Parse(err)
}
