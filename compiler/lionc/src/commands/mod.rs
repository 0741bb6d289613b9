//! Command handlers for the `lion` CLI.
//!
//! Handlers return `Err(message)` instead of exiting so the binary decides
//! how to report failures. Shared helpers live here in the module root.

use std::sync::Arc;

use lion_eval::{BuiltinRegistry, EvalLimits, Interpreter, Session};

mod debug;
mod run;

pub use debug::parse_file;
pub use run::{eval_inline, eval_source, run_file};

/// Options shared by `run` and `eval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub max_depth: usize,
    /// Use the extended registry with the stack combinators.
    pub combinators: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: EvalLimits::DEFAULT_MAX_DEPTH,
            combinators: false,
        }
    }
}

impl RunOptions {
    pub fn interpreter(&self) -> Interpreter {
        let registry = if self.combinators {
            BuiltinRegistry::extended()
        } else {
            BuiltinRegistry::standard()
        };
        Interpreter::builder()
            .registry(Arc::new(registry))
            .max_depth(self.max_depth)
            .build()
    }

    pub fn session(&self) -> Session {
        Session::new(self.interpreter())
    }
}

/// Split `args` into run options and the remaining positional arguments.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Vec<String>), String> {
    let mut options = RunOptions::default();
    let mut rest = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = value
                .parse()
                .map_err(|_| format!("invalid value for --max-depth: '{value}'"))?;
        } else if arg == "--combinators" {
            options.combinators = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((options, rest))
}

/// Read a source file, turning I/O failures into a readable message.
pub(super) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
