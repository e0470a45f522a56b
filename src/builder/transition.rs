//! Builder for declaring transitions.

use crate::core::{Guard, StateId, Transition};
use crate::error::TransitionDeclarationError;

/// Builder for declaring a guarded transition with a fluent API.
pub struct TransitionBuilder<I> {
    from: Option<StateId>,
    to: Option<StateId>,
    guard: Option<Guard<I>>,
}

impl<I> TransitionBuilder<I> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the origin state (required).
    pub fn from(mut self, id: impl Into<StateId>) -> Self {
        self.from = Some(id.into());
        self
    }

    /// Set the destination state (required).
    ///
    /// The destination may be declared after this transition.
    pub fn to(mut self, id: impl Into<StateId>) -> Self {
        self.to = Some(id.into());
        self
    }

    /// Set the guard (required, or use `when`).
    pub fn guard(mut self, guard: Guard<I>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Validate the declaration, returning the origin and the transition.
    pub fn build(self) -> Result<(StateId, Transition<I>), TransitionDeclarationError> {
        let from = self.from.ok_or(TransitionDeclarationError::MissingOrigin)?;
        let to = self.to.ok_or(TransitionDeclarationError::MissingDestination)?;
        let guard = self.guard.ok_or(TransitionDeclarationError::MissingGuard)?;

        Ok((from, Transition::new(to, guard)))
    }
}

impl<I> Default for TransitionBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
