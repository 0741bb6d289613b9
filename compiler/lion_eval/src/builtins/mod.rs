//! Builtin operator implementations.
//!
//! Each builtin reads its operands through a [`Frame`](crate::Frame), checks
//! them deepest first, and only then pops them. A failed check leaves the
//! stack as it was.

mod arithmetic;
mod combinators;
mod quoting;

use crate::registry::Builtin;

/// `parse`, `apply`, `bind` and `wrap`.
pub(crate) const CORE: &[Builtin] = &[
    Builtin::new("parse", 1, quoting::parse),
    Builtin::new("apply", 1, quoting::apply),
    Builtin::new("bind", 2, quoting::bind),
    Builtin::new("wrap", 1, quoting::wrap),
];

/// `+`, `-`, `*` and `/` on two numbers.
pub(crate) const ARITHMETIC: &[Builtin] = &[
    Builtin::new("+", 2, arithmetic::add),
    Builtin::new("-", 2, arithmetic::sub),
    Builtin::new("*", 2, arithmetic::mul),
    Builtin::new("/", 2, arithmetic::div),
];

/// Stack shuffling, quote combinators, equality and the conditional.
pub(crate) const COMBINATORS: &[Builtin] = &[
    Builtin::new("dup", 1, combinators::dup),
    Builtin::new("drop", 1, combinators::drop),
    Builtin::new("swap", 2, combinators::swap),
    Builtin::new("dip", 2, combinators::dip),
    Builtin::new("call", 1, combinators::call),
    Builtin::new("cat", 2, combinators::cat),
    Builtin::new("cons", 2, combinators::cons),
    Builtin::new("uncons", 1, combinators::uncons),
    Builtin::new("eq?", 2, combinators::eq),
    Builtin::new("ifte", 3, combinators::ifte),
];
