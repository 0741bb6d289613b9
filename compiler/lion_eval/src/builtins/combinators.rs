use std::iter;

use lion_ir::{Quote, Value};

use crate::errors::EvalResult;
use crate::interpreter::Frame;

/// `x dup` → `x x`.
pub(super) fn dup(frame: &mut Frame<'_>) -> EvalResult<()> {
    let value = frame.operand(1).clone();
    frame.push(value);
    Ok(())
}

/// `x drop` → nothing.
pub(super) fn drop(frame: &mut Frame<'_>) -> EvalResult<()> {
    frame.discard();
    Ok(())
}

/// `a b swap` → `b a`.
pub(super) fn swap(frame: &mut Frame<'_>) -> EvalResult<()> {
    let a = frame.operand(1).clone();
    let b = frame.operand(2).clone();
    frame.discard();
    frame.push(b);
    frame.push(a);
    Ok(())
}

/// `x [program] dip` runs `program` with `x` set aside, then pushes `x`.
pub(super) fn dip(frame: &mut Frame<'_>) -> EvalResult<()> {
    let program = frame.quote(2)?;
    let value = frame.operand(1).clone();
    frame.discard();
    frame.apply(&program)?;
    frame.push(value);
    Ok(())
}

/// `[program] call` runs `program` in a child scope; its bindings are
/// dropped when it returns.
pub(super) fn call(frame: &mut Frame<'_>) -> EvalResult<()> {
    let program = frame.quote(1)?;
    frame.discard();
    frame.call(&program)
}

/// `[a] [b] cat` → `[a b]`.
pub(super) fn cat(frame: &mut Frame<'_>) -> EvalResult<()> {
    let first = frame.quote(1)?;
    let second = frame.quote(2)?;
    frame.discard();
    frame.push(first.concat(&second).into());
    Ok(())
}

/// `x [q...] cons` → `[x q...]`.
pub(super) fn cons(frame: &mut Frame<'_>) -> EvalResult<()> {
    let quote = frame.quote(2)?;
    let head = frame.operand(1).clone();
    frame.discard();
    let joined: Quote = iter::once(head).chain(quote.iter().cloned()).collect();
    frame.push(joined.into());
    Ok(())
}

/// `[x rest...] uncons` → `x [rest...]`.
pub(super) fn uncons(frame: &mut Frame<'_>) -> EvalResult<()> {
    let quote = frame.quote(1)?;
    let Some((head, rest)) = quote.split_first() else {
        return Err(frame.mismatch(1, "a non-empty quoted list"));
    };
    let (head, rest) = (head.clone(), Quote::from(rest.to_vec()));
    frame.discard();
    frame.push(head);
    frame.push(rest.into());
    Ok(())
}

/// `a b eq?` → `true` when `a` and `b` are structurally equal.
pub(super) fn eq(frame: &mut Frame<'_>) -> EvalResult<()> {
    let equal = frame.operand(1) == frame.operand(2);
    frame.discard();
    frame.push(Value::Boolean(equal));
    Ok(())
}

/// `flag [then] [else] ifte` applies `then` when `flag` is `true`, otherwise
/// `else`, in place.
pub(super) fn ifte(frame: &mut Frame<'_>) -> EvalResult<()> {
    let flag = frame.boolean(1)?;
    let then = frame.quote(2)?;
    let otherwise = frame.quote(3)?;
    frame.discard();
    frame.apply(if flag { &then } else { &otherwise })
}
