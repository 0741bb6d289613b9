//! Lexical scopes for quote bindings.
//!
//! An [`Environment`] is a handle to one [`Scope`]; each scope owns its own
//! name-to-quote map and an optional link to a parent scope. Lookup walks the
//! chain outward and the first match wins. Writes always land in the scope
//! the handle points at, so a child never changes what its ancestors see and
//! any number of children may share one parent.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lion_ir::{Quote, Symbol};

/// A single-threaded, reference-counted, interior-mutable cell.
///
/// All scope allocations go through [`LocalScope::new`]. Scopes are never
/// shared across threads, so this wraps `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One level of the scope chain.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Symbol, Quote>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn define(&mut self, name: Symbol, quote: Quote) {
        self.bindings.insert(name, quote);
    }

    /// Look `name` up here, then in each ancestor.
    pub fn lookup(&self, name: &str) -> Option<Quote> {
        if let Some(quote) = self.bindings.get(name) {
            return Some(quote.clone());
        }
        let mut next = self.parent.clone();
        while let Some(handle) = next {
            let scope = handle.borrow();
            if let Some(quote) = scope.bindings.get(name) {
                return Some(quote.clone());
            }
            next = scope.parent.clone();
        }
        None
    }

    /// Number of bindings in this scope alone.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        // Unlink ancestors held only by this chain one at a time.
        let mut next = self.parent.take();
        while let Some(LocalScope(rc)) = next {
            next = Rc::try_unwrap(rc)
                .ok()
                .and_then(|cell| cell.into_inner().parent.take());
        }
    }
}

/// A handle to the innermost scope of a chain.
///
/// Cloning the handle shares the scope: a binding made through one clone is
/// visible through the other. Use [`fork`](Self::fork) for an independent
/// copy of the innermost scope.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A root environment with no bindings.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A fresh, empty scope whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// A new innermost scope holding a copy of this scope's bindings and
    /// the same parent link.
    ///
    /// Bindings written to the fork do not appear here, and bindings written
    /// here afterwards do not appear in the fork. Ancestors stay shared.
    #[must_use]
    pub fn fork(&self) -> Self {
        let scope = self.scope.borrow().clone();
        Environment {
            scope: LocalScope::new(scope),
        }
    }

    /// The quote bound to `name` in this scope or the nearest ancestor.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Quote> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope, replacing any binding it already has here.
    #[inline]
    pub fn set(&mut self, name: Symbol, quote: Quote) {
        self.scope.borrow_mut().define(name, quote);
    }

    pub fn is_root(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    /// Number of scopes from here to the root, counting both ends.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.scope.borrow().parent.clone();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.borrow().parent.clone();
        }
        depth
    }

    /// Whether both handles point at the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Every binding visible from here, sorted by name.
    ///
    /// A name bound in several scopes appears once, with the innermost
    /// quote.
    pub fn flatten(&self) -> Vec<(Symbol, Quote)> {
        let mut visible: FxHashMap<Symbol, Quote> = FxHashMap::default();
        let mut next = Some(self.scope.clone());
        while let Some(handle) = next {
            let scope = handle.borrow();
            for (name, quote) in &scope.bindings {
                visible
                    .entry(name.clone())
                    .or_insert_with(|| quote.clone());
            }
            next = scope.parent.clone();
        }
        let mut bindings: Vec<_> = visible.into_iter().collect();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));
        bindings
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, quote)) in self.flatten().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {quote}")?;
        }
        f.write_str("}")
    }
}
