use lion_ir::Value;

use crate::errors::{division_by_zero, EvalResult};
use crate::interpreter::Frame;

/// Pop two numbers `a b` and push `op(a, b)`.
fn binary(frame: &mut Frame<'_>, op: fn(f64, f64) -> f64) -> EvalResult<()> {
    let a = frame.number(1)?;
    let b = frame.number(2)?;
    frame.discard();
    frame.push(Value::Number(op(a, b)));
    Ok(())
}

pub(super) fn add(frame: &mut Frame<'_>) -> EvalResult<()> {
    binary(frame, |a, b| a + b)
}

pub(super) fn sub(frame: &mut Frame<'_>) -> EvalResult<()> {
    binary(frame, |a, b| a - b)
}

pub(super) fn mul(frame: &mut Frame<'_>) -> EvalResult<()> {
    binary(frame, |a, b| a * b)
}

pub(super) fn div(frame: &mut Frame<'_>) -> EvalResult<()> {
    let a = frame.number(1)?;
    let b = frame.number(2)?;
    if b == 0.0 {
        return Err(division_by_zero());
    }
    frame.discard();
    frame.push(Value::Number(a / b));
    Ok(())
}
