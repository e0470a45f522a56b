//! Three-State Cycle
//!
//! This demo drives a machine through three states with integer inputs.
//!
//! Key concepts:
//! - Entry actions run once per entry, including the initial state on start
//! - Guards are tried in registration order; inputs no guard accepts are ignored
//! - Engine events are emitted through `tracing`
//!
//! Run with: RUST_LOG=cursor_fsm=debug cargo run --example three_state

use cursor_fsm::builder::{entry_state, guarded_transition, MachineBuilder};
use cursor_fsm::{FsmError, Guard, SendOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Three-State Cycle ===\n");

    let mut machine = MachineBuilder::new()
        .state(entry_state(0, || println!("entered state A")))?
        .state(entry_state(1, || println!("entered state B")))?
        .state(entry_state(2, || println!("entered state C")))?
        .transition(guarded_transition(0, 1, Guard::equals(2)))?
        .transition(guarded_transition(1, 2, Guard::equals(3)))?
        .transition(guarded_transition(2, 0, Guard::equals(0)))?
        .build()?;

    machine.start()?;

    for input in [2, 3, 0, 3] {
        match machine.send(input)? {
            SendOutcome::Transitioned { from, to } => {
                println!("  input {input}: {from} -> {to}");
            }
            SendOutcome::Unmatched => {
                let state = machine.current_state();
                println!("  input {input}: no transition, still in {state}");
            }
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
