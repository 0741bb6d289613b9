//! Recursive-descent reader from source text to a [`Quote`].
//!
//! A single left-to-right pass over the text. Whitespace separates tokens,
//! `( ... )` comments are skipped, `"..."` produces a string, and everything
//! else up to the next delimiter is an atom. Bracket pairs are matched once
//! over the raw text before reading starts; a `[ ... ]` body is then read by
//! an independent recursive parse limited to the body's range, so the parser
//! itself never tracks nesting and the whole read stays linear.
//!
//! # Atoms
//!
//! An atom is tried as a base-10 float first (which includes spellings such
//! as `1e3`, `.5`, `inf` and `NaN`), then as the literals `true` and `false`.
//! Anything else is a symbol. A decimal literal too large for an `f64`,
//! such as `1e400`, is out of range rather than infinite, and so is a symbol
//! too; only an explicit `inf` or `infinity` reads as an infinite number.

use lion_ir::{Quote, Span, Value};
use lion_stack::ensure_sufficient_stack;

use crate::cursor::{match_brackets, Cursor, StringEnd};
use crate::error::{ParseError, ParseErrorKind};

/// Parse source text into a quote of its top-level values.
///
/// Comments produce no element. Nested `[...]` bodies become single
/// `Value::Quote` elements. Error spans are byte ranges in `text`.
pub fn parse(text: &str) -> Result<Quote, ParseError> {
    let brackets = match_brackets(text);
    let quote = Parser::new(text, &brackets).program()?;
    tracing::trace!(bytes = text.len(), elements = quote.len(), "parsed program");
    Ok(quote)
}

/// Classify a non-empty atom token.
pub(crate) fn read_atom(token: &str) -> Value {
    if let Ok(number) = token.parse::<f64>() {
        if number.is_finite() || spells_infinity(token) {
            return Value::Number(number);
        }
    }
    match token {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => Value::symbol(token),
    }
}

fn spells_infinity(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

struct Parser<'a> {
    text: &'a str,
    /// `(open, close)` offsets of every matched bracket pair, by `open`.
    brackets: &'a [(usize, usize)],
    cursor: Cursor<'a>,
    values: Vec<Value>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, brackets: &'a [(usize, usize)]) -> Self {
        Parser {
            text,
            brackets,
            cursor: Cursor::new(text),
            values: Vec::new(),
        }
    }

    /// A parser for the body `text[start..end]` of a bracket pair.
    fn body(text: &'a str, brackets: &'a [(usize, usize)], start: usize, end: usize) -> Self {
        Parser {
            text,
            brackets,
            cursor: Cursor::range(text, start, end),
            values: Vec::new(),
        }
    }

    fn program(mut self) -> Result<Quote, ParseError> {
        loop {
            self.cursor.eat_whitespace();
            let start = self.cursor.pos();
            let Some(byte) = self.cursor.current() else {
                break;
            };
            match byte {
                b'(' => self.comment(start)?,
                b')' => {
                    return Err(self.error(ParseErrorKind::UnmatchedCloseParen, start, start + 1))
                }
                b'"' => self.string(start)?,
                b'[' => self.list(start)?,
                b']' => {
                    return Err(self.error(ParseErrorKind::UnmatchedCloseBracket, start, start + 1))
                }
                _ => self.atom(start),
            }
        }
        Ok(Quote::from(self.values))
    }

    fn comment(&mut self, start: usize) -> Result<(), ParseError> {
        self.cursor.advance();
        if self.cursor.skip_balanced(b'(', b')') {
            Ok(())
        } else {
            Err(self.error_to_end(ParseErrorKind::UnterminatedComment, start))
        }
    }

    fn string(&mut self, start: usize) -> Result<(), ParseError> {
        self.cursor.advance();
        match self.cursor.eat_string_body() {
            StringEnd::Closed => {
                let text = self.cursor.slice(start + 1, self.cursor.pos());
                self.cursor.advance();
                self.values.push(Value::string(text));
                Ok(())
            }
            StringEnd::MissingQuote | StringEnd::DanglingEscape => {
                Err(self.error_to_end(ParseErrorKind::UnterminatedString, start))
            }
        }
    }

    fn list(&mut self, start: usize) -> Result<(), ParseError> {
        let Ok(index) = self.brackets.binary_search_by_key(&start, |&(open, _)| open) else {
            return Err(self.error_to_end(ParseErrorKind::UnterminatedQuote, start));
        };
        let close = self.brackets[index].1;
        let (text, brackets) = (self.text, self.brackets);
        let nested =
            ensure_sufficient_stack(|| Parser::body(text, brackets, start + 1, close).program())?;
        self.cursor.seek(close + 1);
        self.values.push(Value::Quote(nested));
        Ok(())
    }

    fn atom(&mut self, start: usize) {
        self.cursor.eat_atom();
        let token = self.cursor.slice(start, self.cursor.pos());
        if !token.is_empty() {
            self.values.push(read_atom(token));
        }
    }

    fn error(&self, kind: ParseErrorKind, start: usize, end: usize) -> ParseError {
        ParseError::new(kind, Span::from_offsets(start, end))
    }

    fn error_to_end(&self, kind: ParseErrorKind, start: usize) -> ParseError {
        self.error(kind, start, self.cursor.end())
    }
}

#[cfg(test)]
mod tests;
