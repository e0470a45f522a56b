//! The state machine engine: registry, cursor and run-to-suspension loop.

use crate::core::{EntryAction, Guard, StateId, StateRecord, Transition};
use crate::error::{FsmError, LifecycleError, StateDeclarationError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle of the machine itself, independent of the declared states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Declared but `start()` has not run yet
    Unstarted,

    /// Suspended between inputs
    Running,
}

/// Result of feeding one input to the machine
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SendOutcome {
    /// A guard accepted the input and the destination's entry action ran
    Transitioned { from: StateId, to: StateId },

    /// No guard accepted the input; nothing changed
    Unmatched,
}

/// Finite state machine over inputs of type `I`.
///
/// States are registered with [`add_state`](Self::add_state), transitions with
/// [`add_transition`](Self::add_transition). After [`start`](Self::start) the
/// machine runs the initial state's entry action and then waits; every
/// [`send`](Self::send) evaluates the current state's transitions in
/// registration order and moves along the first one whose guard accepts.
///
/// # Example
///
/// ```rust
/// use cursor_fsm::core::{Guard, StateId};
/// use cursor_fsm::machine::{Machine, SendOutcome};
///
/// let mut machine = Machine::new();
/// machine.add_state(0, || {}).unwrap();
/// machine.add_state(1, || {}).unwrap();
/// machine.add_transition(0, 1, Guard::equals(2)).unwrap();
///
/// machine.start().unwrap();
/// assert_eq!(machine.send(7).unwrap(), SendOutcome::Unmatched);
/// machine.send(2).unwrap();
/// assert_eq!(machine.current_state(), StateId(1));
/// ```
pub struct Machine<I> {
    states: HashMap<StateId, StateRecord<I>>,
    current: StateId,
    phase: Phase,
    pending_entry: bool,
}

impl<I> Machine<I> {
    /// Create an empty machine whose initial state is `0`.
    pub fn new() -> Self {
        Self::with_initial(StateId::INITIAL)
    }

    /// Create an empty machine that will start in `initial`.
    ///
    /// `initial` does not need to be registered until `start()`.
    pub fn with_initial(initial: impl Into<StateId>) -> Self {
        Self {
            states: HashMap::new(),
            current: initial.into(),
            phase: Phase::Unstarted,
            pending_entry: true,
        }
    }

    /// Register a state and its entry action.
    ///
    /// The entry action is not invoked here. Registering an id twice fails
    /// and keeps the original state.
    pub fn add_state<F>(&mut self, id: impl Into<StateId>, entry: F) -> Result<(), FsmError>
    where
        F: FnMut() + Send + 'static,
    {
        self.insert_state(id.into(), EntryAction::new(entry))
    }

    pub(crate) fn insert_state(&mut self, id: StateId, entry: EntryAction) -> Result<(), FsmError> {
        if self.states.contains_key(&id) {
            return Err(StateDeclarationError::AlreadyExists { id }.into());
        }

        self.states.insert(id, StateRecord::new(entry));
        tracing::debug!(state = %id, "state registered");
        Ok(())
    }

    /// Remove a state and its outgoing transitions.
    ///
    /// Transitions in other states that point at `id` are kept; taking one of
    /// them later fails with [`FsmError::NotFound`].
    pub fn del_state(&mut self, id: impl Into<StateId>) -> Result<(), FsmError> {
        let id = id.into();
        match self.states.remove(&id) {
            Some(record) => {
                tracing::debug!(
                    state = %id,
                    transitions = record.transitions().len(),
                    "state deleted"
                );
                Ok(())
            }
            None => Err(FsmError::NotFound { id }),
        }
    }

    /// Append a guarded transition to `origin`'s transition list.
    ///
    /// `destination` is only resolved when the transition fires, so it may be
    /// registered later.
    pub fn add_transition(
        &mut self,
        origin: impl Into<StateId>,
        destination: impl Into<StateId>,
        guard: Guard<I>,
    ) -> Result<(), FsmError> {
        let origin = origin.into();
        let destination = destination.into();

        let record = self
            .states
            .get_mut(&origin)
            .ok_or(FsmError::NotFound { id: origin })?;
        record.push_transition(Transition::new(destination, guard));

        tracing::debug!(
            from = %origin,
            to = %destination,
            priority = record.transitions().len() - 1,
            "transition registered"
        );
        Ok(())
    }

    /// Check whether `id` is registered.
    pub fn contains_state(&self, id: impl Into<StateId>) -> bool {
        self.states.contains_key(&id.into())
    }

    /// Identifier of the current state.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Run the initial state's entry action, then suspend awaiting input.
    ///
    /// Fails if called twice, or if the initial state is not registered (the
    /// machine then stays unstarted). The machine only counts as started once
    /// the entry action has returned, so a panicking action can be retried.
    pub fn start(&mut self) -> Result<(), FsmError> {
        if self.phase == Phase::Running {
            return Err(LifecycleError::AlreadyStarted.into());
        }

        let current = self.current;
        let record = self
            .states
            .get_mut(&current)
            .ok_or(FsmError::NotFound { id: current })?;

        Self::run_pending_entry(record, &mut self.pending_entry);
        self.phase = Phase::Running;
        tracing::info!(state = %current, "state machine started");
        Ok(())
    }

    /// Resume the machine with `input`.
    ///
    /// Guards of the current state are evaluated in registration order until
    /// one accepts. The destination's entry action has completed by the time
    /// this returns. An input no guard accepts is not an error.
    pub fn send(&mut self, input: I) -> Result<SendOutcome, FsmError> {
        if self.phase != Phase::Running {
            return Err(LifecycleError::NotStarted.into());
        }

        let from = self.current;
        let selected = self
            .states
            .get(&from)
            .ok_or(FsmError::NotFound { id: from })?
            .select(&input);

        let Some(to) = selected else {
            tracing::trace!(state = %from, "input matched no transition");
            return Ok(SendOutcome::Unmatched);
        };

        // Resolve before moving the cursor so a dangling destination leaves
        // the machine where it was.
        let Some(record) = self.states.get_mut(&to) else {
            tracing::warn!(
                from = %from,
                to = %to,
                "transition fired toward an unregistered state"
            );
            return Err(FsmError::NotFound { id: to });
        };

        self.current = to;
        self.pending_entry = true;
        tracing::debug!(from = %from, to = %to, "transition taken");
        Self::run_pending_entry(record, &mut self.pending_entry);

        Ok(SendOutcome::Transitioned { from, to })
    }

    fn run_pending_entry(record: &mut StateRecord<I>, pending: &mut bool) {
        if *pending {
            record.enter();
            *pending = false;
        }
    }
}

impl<I> Default for Machine<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> std::fmt::Debug for Machine<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("states", &self.states.len())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .finish()
    }
}
