//! End-to-end scenarios for the machine's registration and execution rules.

use cursor_fsm::error::{LifecycleError, StateDeclarationError};
use cursor_fsm::{ErrorKind, FsmError, Guard, Machine, SendOutcome, StateId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<&'static str>>>;

fn record(log: &Log, marker: &'static str) -> impl FnMut() + Send + 'static {
    let log = Arc::clone(log);
    move || log.lock().unwrap().push(marker)
}

fn counted(counter: &Arc<AtomicUsize>, accept: bool) -> Guard<i32> {
    let counter = Arc::clone(counter);
    Guard::new(move |_: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        accept
    })
}

#[test]
fn three_state_cycle_fires_entry_actions_in_order() {
    let log = Log::default();
    let mut machine = Machine::new();
    machine.add_state(0, record(&log, "A")).unwrap();
    machine.add_state(1, record(&log, "B")).unwrap();
    machine.add_state(2, record(&log, "C")).unwrap();
    machine.add_transition(0, 1, Guard::equals(2)).unwrap();
    machine.add_transition(1, 2, Guard::equals(3)).unwrap();
    machine.add_transition(2, 0, Guard::equals(0)).unwrap();

    machine.start().unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["A"]);

    machine.send(2).unwrap();
    machine.send(3).unwrap();
    machine.send(0).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["A", "B", "C", "A"]);

    let last = machine.send(3).unwrap();
    assert_eq!(last, SendOutcome::Unmatched);
    assert_eq!(machine.current_state(), StateId(0));
    assert_eq!(*log.lock().unwrap(), vec!["A", "B", "C", "A"]);
}

#[test]
fn duplicate_registration_keeps_original_state() {
    let log = Log::default();
    let mut machine: Machine<i32> = Machine::new();
    machine.add_state(0, record(&log, "first")).unwrap();

    let err = machine.add_state(0, record(&log, "second")).unwrap_err();
    assert_eq!(
        err,
        FsmError::StateDeclaration(StateDeclarationError::AlreadyExists { id: StateId(0) })
    );

    machine.start().unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["first"]);
}

#[test]
fn first_matching_guard_wins() {
    let g1 = Arc::new(AtomicUsize::new(0));
    let g2 = Arc::new(AtomicUsize::new(0));
    let g3 = Arc::new(AtomicUsize::new(0));

    let mut machine = Machine::new();
    machine.add_state(0, || {}).unwrap();
    machine.add_state(1, || {}).unwrap();
    machine.add_state(2, || {}).unwrap();
    machine.add_state(3, || {}).unwrap();
    machine.add_transition(0, 1, counted(&g1, false)).unwrap();
    machine.add_transition(0, 2, counted(&g2, true)).unwrap();
    machine.add_transition(0, 3, counted(&g3, true)).unwrap();

    machine.start().unwrap();
    let outcome = machine.send(0).unwrap();

    assert_eq!(
        outcome,
        SendOutcome::Transitioned {
            from: StateId(0),
            to: StateId(2)
        }
    );
    assert_eq!(g1.load(Ordering::SeqCst), 1);
    assert_eq!(g2.load(Ordering::SeqCst), 1);
    assert_eq!(g3.load(Ordering::SeqCst), 0);
}

#[test]
fn self_loop_runs_entry_action_once_per_entry() {
    let entries = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&entries);

    let mut machine = Machine::new();
    machine
        .add_state(0, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    machine.add_transition(0, 0, Guard::equals(1)).unwrap();

    machine.start().unwrap();
    assert_eq!(entries.load(Ordering::SeqCst), 1);

    machine.send(1).unwrap();
    assert_eq!(entries.load(Ordering::SeqCst), 2);

    machine.send(5).unwrap();
    assert_eq!(entries.load(Ordering::SeqCst), 2);

    machine.send(1).unwrap();
    assert_eq!(entries.load(Ordering::SeqCst), 3);
}

#[test]
fn forward_reference_resolves_once_declared() {
    let log = Log::default();
    let mut machine = Machine::new();
    machine.add_state(0, record(&log, "zero")).unwrap();
    machine.add_transition(0, 5, Guard::equals(1)).unwrap();
    machine.add_state(5, record(&log, "five")).unwrap();

    machine.start().unwrap();
    machine.send(1).unwrap();

    assert_eq!(machine.current_state(), StateId(5));
    assert_eq!(*log.lock().unwrap(), vec!["zero", "five"]);
}

#[test]
fn forward_reference_never_declared_is_not_found() {
    let mut machine = Machine::new();
    machine.add_state(0, || {}).unwrap();
    machine.add_transition(0, 5, Guard::equals(1)).unwrap();

    machine.start().unwrap();
    let err = machine.send(1).unwrap_err();

    assert_eq!(err, FsmError::NotFound { id: StateId(5) });
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(machine.current_state(), StateId(0));
}

#[test]
fn deleted_destination_dangles_until_fired() {
    let log = Log::default();
    let mut machine = Machine::new();
    machine.add_state(0, record(&log, "A")).unwrap();
    machine.add_state(1, record(&log, "B")).unwrap();
    machine.add_transition(0, 1, Guard::equals(1)).unwrap();

    machine.del_state(1).unwrap();
    machine.start().unwrap();

    let err = machine.send(1).unwrap_err();
    assert_eq!(err, FsmError::NotFound { id: StateId(1) });
    assert_eq!(machine.current_state(), StateId(0));
    assert_eq!(*log.lock().unwrap(), vec!["A"]);

    // Re-declaring the destination makes the same transition usable again.
    machine.add_state(1, record(&log, "B2")).unwrap();
    machine.send(1).unwrap();
    assert_eq!(machine.current_state(), StateId(1));
    assert_eq!(*log.lock().unwrap(), vec!["A", "B2"]);
}

#[test]
fn failed_send_does_not_block_later_matches() {
    let mut machine = Machine::new();
    machine.add_state(0, || {}).unwrap();
    machine.add_state(2, || {}).unwrap();
    machine.add_transition(0, 1, Guard::equals(1)).unwrap();
    machine.add_transition(0, 2, Guard::equals(2)).unwrap();
    machine.start().unwrap();

    assert!(machine.send(1).is_err());
    assert_eq!(
        machine.send(2).unwrap(),
        SendOutcome::Transitioned {
            from: StateId(0),
            to: StateId(2)
        }
    );
}

#[test]
fn lifecycle_is_enforced() {
    let mut machine: Machine<i32> = Machine::new();
    machine.add_state(0, || {}).unwrap();

    assert_eq!(
        machine.send(1).unwrap_err(),
        FsmError::Lifecycle(LifecycleError::NotStarted)
    );

    machine.start().unwrap();
    assert_eq!(
        machine.start().unwrap_err(),
        FsmError::Lifecycle(LifecycleError::AlreadyStarted)
    );
}

#[test]
fn states_can_be_declared_after_start() {
    let mut machine = Machine::new();
    machine.add_state(0, || {}).unwrap();
    machine.start().unwrap();

    machine.add_state(1, || {}).unwrap();
    machine.add_transition(0, 1, Guard::equals("next")).unwrap();
    machine.send("next").unwrap();

    assert_eq!(machine.current_state(), StateId(1));
}
