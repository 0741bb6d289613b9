//! Interpreter construction.

use std::sync::Arc;

use super::{EvalLimits, Interpreter};
use crate::registry::BuiltinRegistry;

/// Builder for [`Interpreter`].
///
/// ```ignore
/// let interpreter = Interpreter::builder()
///     .registry(Arc::new(BuiltinRegistry::extended()))
///     .max_depth(256)
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    registry: Option<Arc<BuiltinRegistry>>,
    limits: EvalLimits,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `registry` instead of [`BuiltinRegistry::standard`].
    #[must_use]
    pub fn registry(mut self, registry: Arc<BuiltinRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set how deeply quote applications may nest.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            registry: self
                .registry
                .unwrap_or_else(|| Arc::new(BuiltinRegistry::standard())),
            limits: self.limits,
        }
    }
}
