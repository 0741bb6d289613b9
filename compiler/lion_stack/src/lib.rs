//! Stack safety for the recursive parts of Lion.
//!
//! Two things can recurse without a bound set by the program itself: parsing
//! of nested `[...]` bodies and the expansion of bound symbols (a quote bound
//! to `loop` may mention `loop`). This crate covers both:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so deep but
//!   finite nesting never overflows.
//! - [`DepthGuard`] counts nesting levels and refuses to go past a limit, so
//!   unbounded expansion fails with an error instead of exhausting memory.
//!
//! [`descend`] combines the two and is what recursive call sites use.
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - if less than this remains, the stack is grown
//! - **Growth size**: 1MB - each growth allocates this much additional space

use thiserror::Error;

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets this uses `stacker::maybe_grow`; on WASM it calls `f`
/// directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned when a [`DepthGuard`] would go past its limit.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("nesting depth limit of {limit} exceeded")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Nesting level of a recursive walk, together with the level it may not pass.
///
/// The guard is `Copy` and is passed down by value: each recursive step calls
/// [`enter`](Self::enter) and hands the result to the callee, so returning
/// from a call restores the caller's level without any bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthGuard {
    depth: usize,
    limit: usize,
}

impl DepthGuard {
    /// A guard at depth 0 that allows `limit` nested levels.
    pub const fn new(limit: usize) -> Self {
        DepthGuard { depth: 0, limit }
    }

    /// A guard that never trips.
    pub const fn unlimited() -> Self {
        DepthGuard::new(usize::MAX)
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// The guard for one level deeper.
    #[inline]
    pub fn enter(self) -> Result<DepthGuard, DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        Ok(DepthGuard {
            depth: self.depth + 1,
            limit: self.limit,
        })
    }
}

/// Run `f` one nesting level below `guard`, on a stack with room to spare.
///
/// Fails without calling `f` if the level would exceed the guard's limit.
#[inline]
pub fn descend<R>(
    guard: DepthGuard,
    f: impl FnOnce(DepthGuard) -> R,
) -> Result<R, DepthExceeded> {
    let inner = guard.enter()?;
    Ok(ensure_sufficient_stack(|| f(inner)))
}
