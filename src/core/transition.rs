//! Guarded transitions between states.

use super::guard::Guard;
use super::state::StateId;
use std::fmt;

/// A transition toward `to`, taken when its guard accepts the input.
///
/// The destination is not checked against the registry when the transition
/// is declared; it is resolved only when the transition fires.
pub struct Transition<I> {
    pub to: StateId,
    pub guard: Guard<I>,
}

impl<I> Transition<I> {
    pub fn new(to: StateId, guard: Guard<I>) -> Self {
        Self { to, guard }
    }

    /// Check whether this transition fires for `input`.
    pub fn accepts(&self, input: &I) -> bool {
        self.guard.check(input)
    }
}

impl<I> fmt::Debug for Transition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition").field("to", &self.to).finish()
    }
}
