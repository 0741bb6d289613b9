//! The `run` and `eval` commands: evaluate a program and print the stack.

use lion_eval::{EvalResult, Stack};
use lion_ir::StackView;

use super::{read_file, RunOptions};

/// Evaluate `source` in a fresh session and return the final stack.
pub fn eval_source(source: &str, options: &RunOptions) -> EvalResult<Stack> {
    let mut session = options.session();
    session.eval(source).map(<[_]>::to_vec)
}

/// Evaluate a file and print its final stack.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), String> {
    let source = read_file(path)?;
    eval_and_print(&source, options).map_err(|msg| format!("{path}: {msg}"))
}

/// Evaluate inline source and print its final stack.
pub fn eval_inline(source: &str, options: &RunOptions) -> Result<(), String> {
    eval_and_print(source, options)
}

fn eval_and_print(source: &str, options: &RunOptions) -> Result<(), String> {
    let stack = eval_source(source, options).map_err(|err| err.to_string())?;
    println!("{}", StackView(&stack));
    Ok(())
}
