//! Lion IR - the value model shared by the parser and the evaluator.
//!
//! This crate contains:
//! - [`Value`], the closed set of runtime values
//! - [`Quote`], the immutable list that doubles as data and as a program
//! - [`Stack`], the operand sequence the evaluator threads through a program
//! - [`Span`], byte ranges used to locate parse errors
//!
//! # Design Philosophy
//!
//! Values are immutable once constructed. Strings, symbols and quotes are
//! reference-counted slices, so pushing or binding a value is a pointer copy
//! and no consumer can observe another consumer's changes.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod value;

pub use span::Span;
pub use value::{Quote, Stack, StackView, Symbol, Text, Value};
