//! cursor-fsm: a minimal finite state machine runtime.
//!
//! States are integer identifiers bound to an entry action. Transitions are
//! guarded by predicates over an input value supplied by the caller. The
//! machine keeps a single current-state cursor and is driven synchronously:
//! `start()` runs the initial state's entry action, then every `send(input)`
//! evaluates the current state's transitions in registration order and moves
//! along the first one whose guard accepts, running the destination's entry
//! action before returning.
//!
//! # Core Concepts
//!
//! - **State**: an integer [`StateId`] with an [`EntryAction`](core::EntryAction)
//! - **Guards**: predicates over the input that decide whether a transition fires
//! - **First match wins**: transitions are tried in the order they were added
//! - **Lazy destinations**: a transition may point at a state declared later;
//!   an unknown destination is reported only when the transition fires
//!
//! # Example
//!
//! ```rust
//! use cursor_fsm::{Guard, Machine, StateId};
//! use std::sync::{Arc, Mutex};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let mut machine = Machine::new();
//! for (id, name) in [(0, "A"), (1, "B"), (2, "C")] {
//!     let log = Arc::clone(&log);
//!     machine.add_state(id, move || log.lock().unwrap().push(name)).unwrap();
//! }
//! machine.add_transition(0, 1, Guard::equals(2)).unwrap();
//! machine.add_transition(1, 2, Guard::equals(3)).unwrap();
//! machine.add_transition(2, 0, Guard::equals(0)).unwrap();
//!
//! machine.start().unwrap();
//! for input in [2, 3, 0, 3] {
//!     machine.send(input).unwrap();
//! }
//!
//! assert_eq!(*log.lock().unwrap(), vec!["A", "B", "C", "A"]);
//! assert_eq!(machine.current_state(), StateId(0));
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Guard, StateId};
pub use crate::error::{ErrorKind, FsmError};
pub use crate::machine::{Machine, Phase, SendOutcome, SharedMachine};
