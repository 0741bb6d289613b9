use lion_ir::{Quote, Value};

use crate::errors::EvalResult;
use crate::interpreter::Frame;

/// `"text" parse` → the quote read from `text`.
pub(super) fn parse(frame: &mut Frame<'_>) -> EvalResult<()> {
    let text = frame.string(1)?;
    let quote = lion_parse::parse(text.as_str())?;
    frame.discard();
    frame.push(Value::Quote(quote));
    Ok(())
}

/// `[program] apply` runs `program` in the current scope.
pub(super) fn apply(frame: &mut Frame<'_>) -> EvalResult<()> {
    let program = frame.quote(1)?;
    frame.discard();
    frame.apply(&program)
}

/// `[value] [name] bind` binds `value` to `name` in the current scope.
pub(super) fn bind(frame: &mut Frame<'_>) -> EvalResult<()> {
    let value = frame.quote(1)?;
    let Value::Quote(name) = frame.operand(2) else {
        return Err(frame.mismatch(2, "a quoted list"));
    };
    if name.len() != 1 {
        return Err(frame.mismatch(2, "a quoted list with one element"));
    }
    let Some(name) = name.single_symbol().cloned() else {
        return Err(frame.mismatch(2, "a quoted symbol"));
    };
    frame.discard();
    frame.bind(name, value);
    Ok(())
}

/// `x wrap` → `[x]`.
pub(super) fn wrap(frame: &mut Frame<'_>) -> EvalResult<()> {
    let value = frame.operand(1).clone();
    frame.discard();
    frame.push(Value::Quote(Quote::wrap(value)));
    Ok(())
}
