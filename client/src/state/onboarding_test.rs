use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::*;
use crate::state::stepper::{Nav, StepperState};

/// In-memory flag store that counts writes.
#[derive(Default)]
struct MemoryFlags {
    values: RefCell<HashMap<String, bool>>,
    writes: Cell<usize>,
}

impl FlagStore for MemoryFlags {
    fn read_flag(&self, key: &str) -> bool {
        self.values.borrow().get(key).copied().unwrap_or(false)
    }

    fn write_flag(&self, key: &str, value: bool) {
        self.values.borrow_mut().insert(key.to_owned(), value);
        self.writes.set(self.writes.get() + 1);
    }
}

// =============================================================
// Flag gating
// =============================================================

#[test]
fn fresh_store_shows_onboarding() {
    let store = MemoryFlags::default();
    assert!(should_show_onboarding(&store));
}

#[test]
fn completed_store_hides_onboarding() {
    let store = MemoryFlags::default();
    complete_onboarding(&store, || {});
    assert!(!should_show_onboarding(&store));
    assert!(store.read_flag(ONBOARDING_FLAG_KEY));
}

// =============================================================
// Completion entry points
// =============================================================

#[test]
fn go_next_on_last_step_writes_flag_and_calls_back_once() {
    let store = MemoryFlags::default();
    let calls = Cell::new(0);
    let mut s = StepperState::new(5);

    for _ in 0..4 {
        settle(s.go_next(), &store, || calls.set(calls.get() + 1));
    }
    assert_eq!(store.writes.get(), 0);
    assert_eq!(calls.get(), 0);

    let t = settle(s.go_next(), &store, || calls.set(calls.get() + 1));
    assert!(t.is_completed());
    assert_eq!(store.writes.get(), 1);
    assert_eq!(calls.get(), 1);
    assert!(store.read_flag(ONBOARDING_FLAG_KEY));
}

#[test]
fn explicit_complete_matches_go_next_on_last_step() {
    let via_next = MemoryFlags::default();
    let via_complete = MemoryFlags::default();
    let next_calls = Cell::new(0);
    let complete_calls = Cell::new(0);

    let mut a = StepperState::new(3);
    a.jump_to(2);
    settle(a.apply(Nav::Next), &via_next, || next_calls.set(next_calls.get() + 1));

    let mut b = StepperState::new(3);
    settle(b.apply(Nav::Complete), &via_complete, || complete_calls.set(complete_calls.get() + 1));

    assert_eq!(via_next.writes.get(), via_complete.writes.get());
    assert_eq!(next_calls.get(), 1);
    assert_eq!(complete_calls.get(), 1);
    assert_eq!(via_next.read_flag(ONBOARDING_FLAG_KEY), via_complete.read_flag(ONBOARDING_FLAG_KEY));
}

#[test]
fn completing_twice_rewrites_and_recalls() {
    let store = MemoryFlags::default();
    let calls = Cell::new(0);
    let mut s = StepperState::new(2);

    settle(s.complete(), &store, || calls.set(calls.get() + 1));
    settle(s.complete(), &store, || calls.set(calls.get() + 1));

    assert_eq!(store.writes.get(), 2);
    assert_eq!(calls.get(), 2);
    assert!(store.read_flag(ONBOARDING_FLAG_KEY));
}

#[test]
fn non_completing_transitions_have_no_side_effects() {
    let store = MemoryFlags::default();
    let calls = Cell::new(0);
    let mut s = StepperState::new(3);

    for nav in [Nav::Previous, Nav::Next, Nav::Skip, Nav::Skip, Nav::JumpTo(0), Nav::JumpTo(9)] {
        settle(s.apply(nav), &store, || calls.set(calls.get() + 1));
    }

    assert_eq!(store.writes.get(), 0);
    assert_eq!(calls.get(), 0);
    assert!(should_show_onboarding(&store));
}

#[test]
fn flag_store_is_usable_through_a_reference() {
    let store = MemoryFlags::default();
    let by_ref: &MemoryFlags = &store;
    complete_onboarding(&by_ref, || {});
    assert_eq!(store.writes.get(), 1);
}
