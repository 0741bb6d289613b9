//! Runtime values for the Lion evaluator.
//!
//! `Value` is a closed sum type; the evaluator and the builtins match on it
//! exhaustively. Heap-backed variants (`Symbol`, `String`, `Quote`) hold
//! `Arc` slices, so cloning a value never copies its contents and never
//! creates a handle through which the original could be changed.
//!
//! ```text
//! let q = Value::quote([Value::Number(1.0), Value::symbol("dup")]);
//! assert_eq!(q.to_string(), "[1 dup]");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use lion_stack::ensure_sufficient_stack;

/// The operand stack. The end of the vector is the top.
pub type Stack = Vec<Value>;

/// An identifier resolved at evaluation time.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Symbol(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets scopes keyed by `Symbol` be queried with a plain `&str`.
impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", &*self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw string contents, exactly as written between the quotes.
///
/// Escape sequences are kept verbatim: the text of `"a\"b"` is `a\"b`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(Arc<str>);

impl Text {
    pub fn new(text: &str) -> Self {
        Text(Arc::from(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", &*self.0)
    }
}

/// An immutable ordered list of values.
///
/// A quote is data when it is pushed and a program when it is applied.
/// The empty quote is a valid program that does nothing.
///
/// Nesting depth is bounded only by memory. Dropping a quote is iterative;
/// comparing and printing one grow the native stack as they descend.
#[derive(Clone)]
pub struct Quote(Arc<[Value]>);

impl Quote {
    /// The empty quote.
    pub fn empty() -> Self {
        Quote::default()
    }

    /// A one-element quote holding `value`.
    pub fn wrap(value: Value) -> Self {
        Quote(Arc::from(vec![value]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// The symbol of a quote that holds exactly one symbol, such as `[name]`.
    ///
    /// This is the shape `bind` expects for the name operand.
    pub fn single_symbol(&self) -> Option<&Symbol> {
        match &*self.0 {
            [Value::Symbol(symbol)] => Some(symbol),
            _ => None,
        }
    }

    /// A new quote with the elements of `self` followed by those of `other`.
    #[must_use]
    pub fn concat(&self, other: &Quote) -> Quote {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl Default for Quote {
    fn default() -> Self {
        Quote(Arc::from(Vec::new()))
    }
}

impl PartialEq for Quote {
    fn eq(&self, other: &Quote) -> bool {
        ensure_sufficient_stack(|| self.0[..] == other.0[..])
    }
}

impl Drop for Quote {
    fn drop(&mut self) {
        // Unshared nested quotes are detached and dropped from a work list,
        // so the recursive drop glue never sees more than one level.
        let Some(values) = Arc::get_mut(&mut self.0) else {
            return;
        };
        let mut pending: Vec<Quote> = values.iter_mut().filter_map(take_nested).collect();
        while let Some(mut quote) = pending.pop() {
            if let Some(values) = Arc::get_mut(&mut quote.0) {
                pending.extend(values.iter_mut().filter_map(take_nested));
            }
        }
    }
}

fn take_nested(value: &mut Value) -> Option<Quote> {
    match value {
        Value::Quote(quote) if !quote.is_empty() => Some(std::mem::take(quote)),
        _ => None,
    }
}

impl Deref for Quote {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Quote {
    fn from(values: Vec<Value>) -> Self {
        Quote(Arc::from(values))
    }
}

impl FromIterator<Value> for Quote {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Quote(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Quote {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str("Quote")?;
            f.debug_list().entries(self.0.iter()).finish()
        })
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str("[")?;
            for (i, value) in self.0.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")
        })
    }
}

/// Runtime value in the Lion evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit float. Renders as the shortest decimal that round-trips.
    Number(f64),
    /// Identifier looked up in the environment, then in the builtins.
    Symbol(Symbol),
    /// Raw string between unescaped `"` characters.
    String(Text),
    Boolean(bool),
    /// List literal: data when pushed, a program when applied.
    Quote(Quote),
}

impl Value {
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    pub fn string(text: &str) -> Self {
        Value::String(Text::new(text))
    }

    pub fn quote(values: impl IntoIterator<Item = Value>) -> Self {
        Value::Quote(values.into_iter().collect())
    }

    /// Lower-case name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Quote(_) => "quote",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_quote(&self) -> Option<&Quote> {
        match self {
            Value::Quote(q) => Some(q),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display is the shortest round-tripping decimal, never exponent form
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::String(s) => write!(f, "\"{}\"", s.as_str()),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Quote(q) => write!(f, "{q}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Quote> for Value {
    fn from(q: Quote) -> Self {
        Value::Quote(q)
    }
}

/// Display adapter rendering a stack bottom-to-top as `[a b c]`.
pub struct StackView<'a>(pub &'a [Value]);

impl fmt::Display for StackView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Value;
    // tag + fat Arc pointer
    crate::static_assert_size!(Value, 24);
}
