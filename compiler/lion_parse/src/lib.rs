//! Lion Parse - reads Lion source text into a [`Quote`](lion_ir::Quote).
//!
//! ```text
//! program   := (comment | string | list | atom | ws)*
//! comment   := '(' .*? ')'            ; nested, skipped entirely
//! string    := '"' (escaped-char | any-but-quote)* '"'
//! list      := '[' program ']'
//! atom      := number | 'true' | 'false' | symbol
//! ```
//!
//! String escapes are not decoded: a `\` and the character after it are kept
//! verbatim in the string's text.

mod cursor;
mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
