//! Core state machine types.
//!
//! This module contains the building blocks the engine operates on:
//! - State identifiers and entry actions
//! - Guard predicates over input values
//! - Transitions and per-state transition lists

mod guard;
mod state;
mod transition;

pub use guard::Guard;
pub use state::{EntryAction, StateId, StateRecord};
pub use transition::Transition;
