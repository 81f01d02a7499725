//! Quick-tour popup state: open flag plus its step walk.
//!
//! Opening always starts from the first step. Finishing the last step only
//! closes the popup; nothing is persisted.

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use super::stepper::{StepperState, Transition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialState {
    open: bool,
    stepper: StepperState,
}

impl TutorialState {
    /// A closed tour over `len` steps.
    pub fn new(len: usize) -> Self {
        Self { open: false, stepper: StepperState::new(len) }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn stepper(&self) -> &StepperState {
        &self.stepper
    }

    /// Show the tour from its first step. Opening an already open tour keeps
    /// the current position.
    pub fn open(&mut self) {
        if !self.open {
            self.stepper.reset();
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance; finishing the last step closes the tour.
    pub fn go_next(&mut self) -> Transition {
        let transition = self.stepper.go_next();
        if transition.is_completed() {
            self.close();
        }
        transition
    }

    pub fn go_previous(&mut self) -> Transition {
        self.stepper.go_previous()
    }
}
