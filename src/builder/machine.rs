//! Builder for constructing state machines.

use crate::builder::state::StateBuilder;
use crate::builder::transition::TransitionBuilder;
use crate::core::{EntryAction, StateId, Transition};
use crate::error::FsmError;
use crate::machine::Machine;

/// Builder for constructing state machines with a fluent API.
///
/// States are registered before transitions when the machine is built, so
/// declarations can be listed in any order.
pub struct MachineBuilder<I> {
    initial: StateId,
    states: Vec<(StateId, EntryAction)>,
    transitions: Vec<(StateId, Transition<I>)>,
}

impl<I> MachineBuilder<I> {
    /// Create a new builder. The initial state defaults to `0`.
    pub fn new() -> Self {
        Self {
            initial: StateId::INITIAL,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the state entered by `start()`.
    pub fn initial(mut self, id: impl Into<StateId>) -> Self {
        self.initial = id.into();
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: StateBuilder) -> Result<Self, FsmError> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<I>) -> Result<Self, FsmError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Build the state machine.
    ///
    /// Fails on duplicate state ids and on transitions whose origin was never
    /// declared. Destinations are not checked.
    pub fn build(self) -> Result<Machine<I>, FsmError> {
        let mut machine = Machine::with_initial(self.initial);

        for (id, entry) in self.states {
            machine.insert_state(id, entry)?;
        }
        for (origin, transition) in self.transitions {
            machine.add_transition(origin, transition.to, transition.guard)?;
        }

        Ok(machine)
    }
}

impl<I> Default for MachineBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
