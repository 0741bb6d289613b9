//! The table of builtin operators consulted when a symbol has no binding.
//!
//! A registry is built once, wrapped in an `Arc` and handed to the
//! interpreter; it is never modified while evaluating. Tests and embedders
//! can assemble their own from [`BuiltinRegistry::empty`].

use std::fmt;

use rustc_hash::FxHashMap;

use crate::builtins;
use crate::errors::EvalResult;
use crate::interpreter::Frame;

/// The function behind a builtin.
pub type BuiltinFn = fn(&mut Frame<'_>) -> EvalResult<()>;

/// A named operator with a fixed arity.
///
/// The interpreter checks the arity before calling the function, so a
/// builtin only ever sees a stack holding at least `arity` values.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    arity: usize,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, arity: usize, func: BuiltinFn) -> Self {
        Builtin { name, arity, func }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub fn func(&self) -> BuiltinFn {
        self.func
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Builtin operators by name.
#[derive(Clone, Default)]
pub struct BuiltinRegistry {
    entries: FxHashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// A registry with no operators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The core operators: `parse`, `apply`, `bind`, `wrap`, `+`, `-`, `*`
    /// and `/`.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.extend(builtins::CORE);
        registry.extend(builtins::ARITHMETIC);
        registry
    }

    /// [`standard`](Self::standard) plus the stack combinators `dup`,
    /// `drop`, `swap`, `dip`, `call` and `cat`, the list operators `cons`
    /// and `uncons`, `eq?` and `ifte`.
    pub fn extended() -> Self {
        let mut registry = Self::standard();
        registry.extend(builtins::COMBINATORS);
        registry
    }

    /// Add `func` under `name`, returning the builtin it replaced.
    pub fn register(
        &mut self,
        name: &'static str,
        arity: usize,
        func: BuiltinFn,
    ) -> Option<Builtin> {
        self.entries.insert(name, Builtin::new(name, arity, func))
    }

    fn extend(&mut self, builtins: &[Builtin]) {
        for builtin in builtins {
            self.entries.insert(builtin.name, *builtin);
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests;
