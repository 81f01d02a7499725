use super::*;

// =============================================================
// Open / close
// =============================================================

#[test]
fn new_tour_is_closed_on_first_step() {
    let t = TutorialState::new(4);
    assert!(!t.is_open());
    assert_eq!(t.stepper().current(), 0);
    assert_eq!(t.stepper().len(), 4);
}

#[test]
fn reopening_starts_from_first_step() {
    let mut t = TutorialState::new(4);
    t.open();
    t.go_next();
    t.go_next();
    assert_eq!(t.stepper().current(), 2);

    t.close();
    t.open();
    assert!(t.is_open());
    assert_eq!(t.stepper().current(), 0);
    assert!(t.stepper().completed().is_empty());
}

#[test]
fn open_while_open_keeps_position() {
    let mut t = TutorialState::new(4);
    t.open();
    t.go_next();
    t.go_next();
    t.go_next();
    t.open();
    assert_eq!(t.stepper().current(), 3);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn go_next_on_last_step_closes_tour() {
    let mut t = TutorialState::new(4);
    t.open();
    for _ in 0..3 {
        assert!(matches!(t.go_next(), Transition::Moved { .. }));
        assert!(t.is_open());
    }
    assert_eq!(t.go_next(), Transition::Completed);
    assert!(!t.is_open());
}

#[test]
fn go_previous_at_first_step_stays_open() {
    let mut t = TutorialState::new(4);
    t.open();
    assert_eq!(t.go_previous(), Transition::Stayed);
    assert!(t.is_open());
    t.go_next();
    assert_eq!(t.go_previous(), Transition::Moved { from: 1, to: 0 });
}

#[test]
fn finished_tour_reopens_fresh() {
    let mut t = TutorialState::new(2);
    t.open();
    t.go_next();
    t.go_next();
    assert!(!t.is_open());
    t.open();
    assert_eq!(t.stepper().current(), 0);
    assert!(t.stepper().completed().is_empty());
}
