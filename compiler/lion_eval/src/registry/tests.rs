use super::*;
use lion_ir::Value;
use pretty_assertions::assert_eq;

fn nothing(_frame: &mut Frame<'_>) -> EvalResult<()> {
    Ok(())
}

fn push_one(frame: &mut Frame<'_>) -> EvalResult<()> {
    frame.push(Value::Number(1.0));
    Ok(())
}

#[test]
fn test_standard_has_exactly_the_core_operators() {
    assert_eq!(
        BuiltinRegistry::standard().names(),
        vec!["*", "+", "-", "/", "apply", "bind", "parse", "wrap"]
    );
}

#[test]
fn test_extended_adds_combinators() {
    let registry = BuiltinRegistry::extended();
    assert_eq!(registry.len(), 18);
    for name in [
        "dup", "drop", "swap", "dip", "call", "cat", "cons", "uncons", "eq?", "ifte",
    ] {
        assert!(registry.contains(name), "missing {name}");
    }
}

#[test]
fn test_arities() {
    let registry = BuiltinRegistry::extended();
    let arity = |name| registry.get(name).map(|b| b.arity());
    assert_eq!(arity("parse"), Some(1));
    assert_eq!(arity("bind"), Some(2));
    assert_eq!(arity("/"), Some(2));
    assert_eq!(arity("dip"), Some(2));
    assert_eq!(arity("uncons"), Some(1));
    assert_eq!(arity("ifte"), Some(3));
    assert_eq!(arity("missing"), None);
}

#[test]
fn test_empty_and_register() {
    let mut registry = BuiltinRegistry::empty();
    assert!(registry.is_empty());
    assert!(registry.register("noop", 0, nothing).is_none());

    let replaced = registry.register("noop", 1, push_one);
    assert_eq!(replaced.map(|b| b.arity()), Some(0));
    assert_eq!(registry.get("noop").map(|b| b.arity()), Some(1));
    assert_eq!(registry.names(), vec!["noop"]);
}

#[test]
fn test_debug_lists_names() {
    let mut registry = BuiltinRegistry::empty();
    registry.register("b", 0, nothing);
    registry.register("a", 0, nothing);
    assert_eq!(format!("{registry:?}"), r#"{"a", "b"}"#);
}
