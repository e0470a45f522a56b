//! Builder API for ergonomic state machine construction.
//!
//! The builders report incomplete declarations as typed errors and let states
//! and transitions be listed in any order.

pub mod machine;
pub mod state;
pub mod transition;

pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, StateId};

/// Declare a state with its entry action.
///
/// # Example
///
/// ```
/// use cursor_fsm::builder::{entry_state, MachineBuilder};
///
/// let machine = MachineBuilder::<u8>::new()
///     .state(entry_state(0, || println!("idle")))
///     .unwrap()
///     .build()
///     .unwrap();
/// assert!(machine.contains_state(0));
/// ```
pub fn entry_state<F>(id: impl Into<StateId>, entry: F) -> StateBuilder
where
    F: FnMut() + Send + 'static,
{
    StateBuilder::new().id(id).on_entry(entry)
}

/// Declare a transition from `from` to `to` taken when `guard` accepts.
///
/// # Example
///
/// ```
/// use cursor_fsm::builder::{entry_state, guarded_transition, MachineBuilder};
/// use cursor_fsm::core::{Guard, StateId};
///
/// let mut machine = MachineBuilder::new()
///     .state(entry_state(0, || {}))
///     .unwrap()
///     .state(entry_state(1, || {}))
///     .unwrap()
///     .transition(guarded_transition(0, 1, Guard::equals('x')))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// machine.start().unwrap();
/// machine.send('x').unwrap();
/// assert_eq!(machine.current_state(), StateId(1));
/// ```
pub fn guarded_transition<I>(
    from: impl Into<StateId>,
    to: impl Into<StateId>,
    guard: Guard<I>,
) -> TransitionBuilder<I> {
    TransitionBuilder::new().from(from).to(to).guard(guard)
}
