//! State identifiers, entry actions and state records.
//!
//! A state is nothing more than an integer identifier bound to an entry
//! action and an ordered list of outgoing transitions.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier of a state, unique within one machine.
///
/// # Example
///
/// ```rust
/// use cursor_fsm::core::StateId;
///
/// let id = StateId::from(2);
/// assert_eq!(id, StateId(2));
/// assert_eq!(id.to_string(), "2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub i64);

impl StateId {
    /// The state a machine starts in unless configured otherwise.
    pub const INITIAL: StateId = StateId(0);

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StateId {
    fn from(id: i64) -> Self {
        StateId(id)
    }
}

impl From<i32> for StateId {
    fn from(id: i32) -> Self {
        StateId(i64::from(id))
    }
}

impl From<StateId> for i64 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side-effecting action run each time its state is entered.
///
/// # Example
///
/// ```rust
/// use cursor_fsm::core::EntryAction;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// let mut action = EntryAction::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// action.run();
/// action.run();
/// assert_eq!(hits.load(Ordering::SeqCst), 2);
/// ```
pub struct EntryAction {
    action: Box<dyn FnMut() + Send>,
}

impl EntryAction {
    pub fn new<F>(action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        EntryAction {
            action: Box::new(action),
        }
    }

    /// Run the action to completion on the caller's thread.
    pub fn run(&mut self) {
        (self.action)()
    }
}

impl fmt::Debug for EntryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntryAction")
    }
}

/// A registered state: its entry action and outgoing transitions in
/// registration order.
pub struct StateRecord<I> {
    entry: EntryAction,
    transitions: Vec<Transition<I>>,
}

impl<I> StateRecord<I> {
    pub fn new(entry: EntryAction) -> Self {
        Self {
            entry,
            transitions: Vec::new(),
        }
    }

    /// Append a transition; it gets the lowest priority so far.
    pub fn push_transition(&mut self, transition: Transition<I>) {
        self.transitions.push(transition);
    }

    pub fn transitions(&self) -> &[Transition<I>] {
        &self.transitions
    }

    /// Destination of the first transition whose guard accepts `input`.
    ///
    /// Guards after the first match are never evaluated.
    pub fn select(&self, input: &I) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.accepts(input))
            .map(|t| t.to)
    }

    pub fn enter(&mut self) {
        self.entry.run();
    }
}

impl<I> fmt::Debug for StateRecord<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRecord")
            .field("transitions", &self.transitions)
            .finish()
    }
}
