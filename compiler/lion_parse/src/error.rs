//! Parse error types.
//!
//! Every parse failure is one of five kinds, each with the span of the
//! construct that caused it. Unterminated constructs span from their opening
//! delimiter to the end of input; stray closers span the single closing byte.

use lion_ir::Span;
use thiserror::Error;

/// What went wrong while reading source text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// `(` without a matching `)`.
    #[error("unterminated comment: missing closing parenthesis ')'")]
    UnterminatedComment,
    /// `)` with no open comment.
    #[error("unexpected closing parenthesis ')' without matching opening parenthesis")]
    UnmatchedCloseParen,
    /// `"` without a closing `"`, or a `\` as the last byte of a string.
    #[error("unterminated string: missing closing quote")]
    UnterminatedString,
    /// `[` without a matching `]`.
    #[error("unterminated quoted expression: missing closing bracket ']'")]
    UnterminatedQuote,
    /// `]` with no open quote.
    #[error("unexpected closing bracket ']' without matching opening bracket")]
    UnmatchedCloseBracket,
}

/// A parse error located in the text given to the outermost `parse` call.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} (at {span})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
