use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn parse_ok(text: &str) -> Vec<Value> {
    match parse(text) {
        Ok(quote) => quote.to_vec(),
        Err(err) => panic!("parse of {text:?} failed: {err}"),
    }
}

fn parse_err(text: &str) -> ParseError {
    match parse(text) {
        Ok(quote) => panic!("parse of {text:?} succeeded with {quote}"),
        Err(err) => err,
    }
}

// Atoms

#[test]
fn test_numbers_booleans_symbols() {
    assert_eq!(
        parse_ok("1 -2.5 true false foo + bind"),
        vec![
            num(1.0),
            num(-2.5),
            Value::Boolean(true),
            Value::Boolean(false),
            Value::symbol("foo"),
            Value::symbol("+"),
            Value::symbol("bind"),
        ]
    );
}

#[test]
fn test_number_spellings() {
    assert_eq!(parse_ok("1e3 .5 5. +4"), vec![num(1000.0), num(0.5), num(5.0), num(4.0)]);
}

#[test]
fn test_out_of_range_literal_is_symbol() {
    assert_eq!(read_atom("1e400"), Value::symbol("1e400"));
    assert_eq!(read_atom("-1e400"), Value::symbol("-1e400"));
    assert_eq!(read_atom("1e-400"), num(0.0));
    assert_eq!(read_atom("inf"), num(f64::INFINITY));
    assert_eq!(read_atom("-Infinity"), num(f64::NEG_INFINITY));
    assert!(matches!(read_atom("NaN"), Value::Number(n) if n.is_nan()));
}

#[test]
fn test_number_is_tried_before_literals() {
    // `True` is not the boolean literal
    assert_eq!(parse_ok("True"), vec![Value::symbol("True")]);
    assert_eq!(read_atom("-"), Value::symbol("-"));
    assert_eq!(read_atom("1_000"), Value::symbol("1_000"));
}

#[test]
fn test_atoms_split_on_delimiters() {
    assert_eq!(
        parse_ok("a[b]c\"d\"e(f)g"),
        vec![
            Value::symbol("a"),
            Value::quote([Value::symbol("b")]),
            Value::symbol("c"),
            Value::string("d"),
            Value::symbol("e"),
            Value::symbol("g"),
        ]
    );
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(parse_ok(""), Vec::<Value>::new());
    assert_eq!(parse_ok(" \t\r\n "), Vec::<Value>::new());
}

// Comments

#[test]
fn test_comment_transparency() {
    assert_eq!(parse("(x) 1 2").unwrap(), parse("1 2").unwrap());
}

#[test]
fn test_nested_comments() {
    assert_eq!(parse_ok("1 (a (b) c) 2"), vec![num(1.0), num(2.0)]);
}

#[test]
fn test_unterminated_comment() {
    let err = parse_err("1 (a (b) c");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
    assert_eq!(err.span, Span::new(2, 10));
}

#[test]
fn test_unmatched_close_paren() {
    let err = parse_err("1 2 )");
    assert_eq!(err.kind, ParseErrorKind::UnmatchedCloseParen);
    assert_eq!(err.span, Span::new(4, 5));
}

// Strings

#[test]
fn test_string_text_is_raw() {
    assert_eq!(
        parse_ok(r#""hello world" "a\"b" "tab\t""#),
        vec![
            Value::string("hello world"),
            Value::string(r#"a\"b"#),
            Value::string(r"tab\t"),
        ]
    );
}

#[test]
fn test_string_may_contain_delimiters() {
    assert_eq!(parse_ok(r#""( [ ] )""#), vec![Value::string("( [ ] )")]);
}

#[test]
fn test_unterminated_string() {
    let err = parse_err("\"unterminated");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(0, 13));
}

#[test]
fn test_escape_at_end_of_input() {
    let err = parse_err("1 \"abc\\");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.span.start, 2);
}

// Quotes

#[test]
fn test_nested_structure() {
    let quote = parse("[1 [2 3]]").unwrap();
    assert_eq!(
        quote,
        Quote::from(vec![Value::quote([
            num(1.0),
            Value::quote([num(2.0), num(3.0)]),
        ])])
    );
}

#[test]
fn test_empty_quote() {
    assert_eq!(parse_ok("[] [ ]"), vec![Value::quote([]), Value::quote([])]);
}

#[test]
fn test_comments_inside_quotes() {
    assert_eq!(parse_ok("[1 (one) 2]"), vec![Value::quote([num(1.0), num(2.0)])]);
}

#[test]
fn test_unterminated_quote() {
    let err = parse_err("[1 2");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.span, Span::new(0, 4));
}

#[test]
fn test_unmatched_close_bracket() {
    let err = parse_err("1 2]");
    assert_eq!(err.kind, ParseErrorKind::UnmatchedCloseBracket);
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn test_nested_error_span_points_into_outer_text() {
    // the body `1 "x` fails on its own; the span is in outer-text offsets
    let err = parse_err("ab [1 \"x]");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(6, 8));
}

#[test]
fn test_bracket_inside_string_closes_quote() {
    // brackets are counted on raw text before the body is read
    let err = parse_err(r#"[1 "]" 2]"#);
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
}

#[test]
fn test_deep_nesting() {
    let depth = 50_000;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let parsed = parse(&text).unwrap();
    assert_eq!(parsed.to_string(), format!("[{text}]"));
    assert_eq!(parsed, parse(&text).unwrap());

    let mut value = parsed;
    let mut levels = 0;
    while let Some(Value::Quote(inner)) = value.first() {
        let inner = inner.clone();
        value = inner;
        levels += 1;
    }
    assert_eq!(levels, depth);
}

#[test]
fn test_deep_unterminated_nesting() {
    let text = format!("{}{}", "[".repeat(50_000), "]".repeat(49_999));
    let err = parse(&text).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.span, Span::new(0, 99_999));
}

// Properties

proptest! {
    #[test]
    fn prop_number_round_trip(d in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let rendered = Value::Number(d).to_string();
        let parsed = parse(&rendered).unwrap();
        prop_assert_eq!(parsed.as_slice(), &[Value::Number(d)]);
    }

    #[test]
    fn prop_decimal_literal_round_trip(whole in -1_000_000i64..1_000_000, frac in 0u32..10_000) {
        let literal = format!("{whole}.{frac:04}");
        let expected: f64 = literal.parse().unwrap();
        let parsed = parse(&literal).unwrap();
        let rendered = parsed[0].to_string();
        prop_assert_eq!(rendered.parse::<f64>().unwrap(), expected);
    }

    #[test]
    fn prop_comments_are_transparent(
        words in proptest::collection::vec("[a-z]{1,6}|[0-9]{1,4}", 0..8),
        comment in "[a-z ]{0,12}",
        at in 0usize..8,
    ) {
        let plain = words.join(" ");
        let mut commented = words.clone();
        commented.insert(at.min(words.len()), format!("({comment})"));
        prop_assert_eq!(parse(&commented.join(" ")).unwrap(), parse(&plain).unwrap());
    }
}
