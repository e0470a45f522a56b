//! Thread-safe handle around a [`Machine`].

use super::engine::{Machine, Phase, SendOutcome};
use crate::core::{Guard, StateId};
use crate::error::FsmError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle that serializes every operation on one machine.
///
/// Each call holds the lock for its whole duration, so a `send` from one
/// thread runs its guards and entry action to completion before any other
/// call proceeds. Guards and entry actions must not call back into the same
/// handle: the lock is not reentrant.
///
/// # Example
///
/// ```rust
/// use cursor_fsm::core::{Guard, StateId};
/// use cursor_fsm::machine::{Machine, SharedMachine};
///
/// let mut machine = Machine::new();
/// machine.add_state(0, || {}).unwrap();
/// machine.add_state(1, || {}).unwrap();
/// machine.add_transition(0, 1, Guard::equals(1u8)).unwrap();
///
/// let shared = SharedMachine::new(machine);
/// shared.start().unwrap();
///
/// let worker = shared.clone();
/// std::thread::spawn(move || worker.send(1).unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.current_state(), StateId(1));
/// ```
pub struct SharedMachine<I> {
    inner: Arc<Mutex<Machine<I>>>,
}

impl<I> SharedMachine<I> {
    pub fn new(machine: Machine<I>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn add_state<F>(&self, id: impl Into<StateId>, entry: F) -> Result<(), FsmError>
    where
        F: FnMut() + Send + 'static,
    {
        self.inner.lock().add_state(id, entry)
    }

    pub fn del_state(&self, id: impl Into<StateId>) -> Result<(), FsmError> {
        self.inner.lock().del_state(id)
    }

    pub fn add_transition(
        &self,
        origin: impl Into<StateId>,
        destination: impl Into<StateId>,
        guard: Guard<I>,
    ) -> Result<(), FsmError> {
        self.inner.lock().add_transition(origin, destination, guard)
    }

    pub fn start(&self) -> Result<(), FsmError> {
        self.inner.lock().start()
    }

    pub fn send(&self, input: I) -> Result<SendOutcome, FsmError> {
        self.inner.lock().send(input)
    }

    pub fn current_state(&self) -> StateId {
        self.inner.lock().current_state()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().phase()
    }

    /// Run `f` with exclusive access to the underlying machine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Machine<I>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl<I> Clone for SharedMachine<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I> From<Machine<I>> for SharedMachine<I> {
    fn from(machine: Machine<I>) -> Self {
        Self::new(machine)
    }
}
