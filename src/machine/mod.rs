//! State machine execution.
//!
//! [`Machine`] owns the state registry and the current-state cursor. It is
//! driven synchronously: `start()` runs the initial entry action, then each
//! `send(input)` evaluates guards and runs at most one entry action before
//! returning. [`SharedMachine`] wraps a machine for use from several threads.

mod engine;
mod shared;

pub use engine::{Machine, Phase, SendOutcome};
pub use shared::SharedMachine;
