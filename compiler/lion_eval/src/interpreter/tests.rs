use super::*;
use crate::errors::EvalError;
use pretty_assertions::assert_eq;

fn program(source: &str) -> Quote {
    lion_parse::parse(source).unwrap()
}

fn apply_with(interpreter: &Interpreter, source: &str) -> EvalResult<(Stack, Environment)> {
    interpreter.apply(&[], &Environment::new(), &program(source))
}

fn eval(source: &str) -> EvalResult<Stack> {
    apply_with(&Interpreter::new(), source).map(|(stack, _)| stack)
}

#[test]
fn test_literals_are_pushed_in_order() {
    assert_eq!(
        eval("1 true \"s\" [x y]").unwrap(),
        vec![
            Value::Number(1.0),
            Value::Boolean(true),
            Value::string("s"),
            Value::quote([Value::symbol("x"), Value::symbol("y")]),
        ]
    );
}

#[test]
fn test_embedded_quotes_are_not_executed() {
    assert_eq!(eval("[undefined]").unwrap(), vec![Value::quote([Value::symbol("undefined")])]);
}

#[test]
fn test_empty_program() {
    let (stack, env) = apply_with(&Interpreter::new(), "").unwrap();
    assert!(stack.is_empty());
    assert!(env.flatten().is_empty());
}

#[test]
fn test_binding_takes_precedence_over_builtin() {
    let mut env = Environment::new();
    env.set(Symbol::new("+"), program("100"));
    let (stack, _) = Interpreter::new().apply(&[], &env, &program("1 2 +")).unwrap();
    assert_eq!(stack, vec![Value::Number(1.0), Value::Number(2.0), Value::Number(100.0)]);
}

#[test]
fn test_expansion_runs_in_caller_scope() {
    // a bind inside an expanded body is visible afterwards
    let mut env = Environment::new();
    env.set(Symbol::new("define_x"), program("[42] [x] bind"));
    let (stack, env) = Interpreter::new()
        .apply(&[], &env, &program("define_x x"))
        .unwrap();
    assert_eq!(stack, vec![Value::Number(42.0)]);
    assert_eq!(env.get("x"), Some(program("42")));
}

#[test]
fn test_apply_leaves_inputs_untouched() {
    let stack = vec![Value::Number(1.0)];
    let env = Environment::new();
    let (out, out_env) = Interpreter::new()
        .apply(&stack, &env, &program("2 [3] [y] bind"))
        .unwrap();
    assert_eq!(out, vec![Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(stack, vec![Value::Number(1.0)]);
    assert_eq!(env.get("y"), None);
    assert_eq!(out_env.get("y"), Some(program("3")));
}

#[test]
fn test_error_stops_at_first_failure() {
    let err = eval("1 2 + foo 3").unwrap_err();
    assert_eq!(
        err,
        EvalError::UndefinedSymbol {
            name: "foo".to_string(),
        }
    );
}

#[test]
fn test_arity_checked_before_invocation() {
    let err = eval("1 +").unwrap_err();
    assert_eq!(
        err,
        EvalError::WrongArity {
            op: "+".to_string(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn test_call_scopes_bindings() {
    let env = Environment::new();
    let stack = Interpreter::new()
        .call(&[], &env, &program("[7] [seven] bind seven"))
        .unwrap();
    assert_eq!(stack, vec![Value::Number(7.0)]);
    assert_eq!(env.get("seven"), None);
}

#[test]
fn test_call_sees_parent_bindings() {
    let mut env = Environment::new();
    env.set(Symbol::new("two"), program("2"));
    let stack = Interpreter::new().call(&[], &env, &program("two two *")).unwrap();
    assert_eq!(stack, vec![Value::Number(4.0)]);
}

#[test]
fn test_self_referential_binding_hits_depth_limit() {
    let interpreter = Interpreter::builder().max_depth(64).build();
    let err = apply_with(&interpreter, "[loop] [loop] bind loop").unwrap_err();
    assert_eq!(err, EvalError::DepthLimitExceeded { limit: 64 });
}

#[test]
fn test_recursive_call_hits_depth_limit_at_default() {
    // every `call` adds a scope, so each lookup of `x` walks a longer chain
    let interpreter = Interpreter::builder()
        .registry(Arc::new(BuiltinRegistry::extended()))
        .build();
    let err = apply_with(&interpreter, "[[x] call] [x] bind x").unwrap_err();
    assert_eq!(
        err,
        EvalError::DepthLimitExceeded {
            limit: EvalLimits::DEFAULT_MAX_DEPTH,
        }
    );
}

#[test]
fn test_nesting_within_limit_succeeds() {
    let interpreter = Interpreter::builder().max_depth(3).build();
    let mut env = Environment::new();
    env.set(Symbol::new("a"), program("1"));
    env.set(Symbol::new("b"), program("a"));
    env.set(Symbol::new("c"), program("b"));
    let (stack, _) = interpreter.apply(&[], &env, &program("c")).unwrap();
    assert_eq!(stack, vec![Value::Number(1.0)]);

    env.set(Symbol::new("d"), program("c"));
    let err = interpreter.apply(&[], &env, &program("d")).unwrap_err();
    assert_eq!(err, EvalError::DepthLimitExceeded { limit: 3 });
}

#[test]
fn test_deep_expansion_chain_does_not_overflow() {
    let mut env = Environment::new();
    env.set(Symbol::new("s0"), program("1"));
    for i in 1..5_000 {
        env.set(Symbol::new(&format!("s{i}")), program(&format!("s{}", i - 1)));
    }
    let (stack, _) = Interpreter::new().apply(&[], &env, &program("s4999")).unwrap();
    assert_eq!(stack, vec![Value::Number(1.0)]);
}

#[test]
fn test_custom_registry() {
    fn answer(frame: &mut Frame<'_>) -> EvalResult<()> {
        frame.push(Value::Number(42.0));
        Ok(())
    }

    let mut registry = BuiltinRegistry::empty();
    registry.register("answer", 0, answer);
    let interpreter = Interpreter::builder().registry(Arc::new(registry)).build();

    let (stack, _) = apply_with(&interpreter, "answer").unwrap();
    assert_eq!(stack, vec![Value::Number(42.0)]);
    assert_eq!(
        apply_with(&interpreter, "1 2 +").unwrap_err(),
        EvalError::UndefinedSymbol {
            name: "+".to_string(),
        }
    );
}

#[test]
fn test_default_limits() {
    let interpreter = Interpreter::new();
    assert_eq!(interpreter.limits().max_depth, EvalLimits::DEFAULT_MAX_DEPTH);
    assert_eq!(interpreter.registry().len(), 8);
}
