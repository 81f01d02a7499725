//! Linear step-walk state shared by the onboarding and tutorial flows.
//!
//! DESIGN
//! ======
//! `StepperState` is a pure value: every navigation call is one atomic
//! transition that reports what happened through `Transition`. Side effects
//! (flag persistence, closing a popup) belong to the caller, which reacts to
//! `Transition::Completed`. Keeping the walk pure lets both variants share it
//! and lets tests drive it without a reactive runtime.

#[cfg(test)]
#[path = "stepper_test.rs"]
mod stepper_test;

use std::collections::BTreeSet;

/// Result of applying one navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Guarded no-op; state is unchanged.
    Stayed,
    /// The current step moved.
    Moved { from: usize, to: usize },
    /// The walk finished; the caller must run its completion effect.
    Completed,
}

impl Transition {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Navigation commands accepted by `StepperState::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Next,
    Previous,
    Skip,
    JumpTo(usize),
    Complete,
}

/// Visual status of a single step indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Current,
    Visited,
    Skipped,
    Upcoming,
}

/// Position and bookkeeping for a fixed-length step sequence.
///
/// Invariant: `current < len` and `len >= 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepperState {
    len: usize,
    current: usize,
    completed: BTreeSet<usize>,
    skipped: BTreeSet<usize>,
}

impl StepperState {
    /// Create a stepper positioned on the first of `len` steps.
    ///
    /// A zero length is clamped to one so the current index is always valid.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            completed: BTreeSet::new(),
            skipped: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// False for every stepper `new` builds.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Mark the current step completed and advance, or complete on the last step.
    pub fn go_next(&mut self) -> Transition {
        if self.is_last() {
            return self.complete();
        }
        let from = self.current;
        self.completed.insert(from);
        self.current += 1;
        Transition::Moved { from, to: self.current }
    }

    /// Step back one position. Bookkeeping sets are left untouched.
    pub fn go_previous(&mut self) -> Transition {
        if self.is_first() {
            return Transition::Stayed;
        }
        let from = self.current;
        self.current -= 1;
        Transition::Moved { from, to: self.current }
    }

    /// Mark the current step skipped and advance. No-op on the last step.
    pub fn skip(&mut self) -> Transition {
        if self.is_last() {
            return Transition::Stayed;
        }
        let from = self.current;
        self.skipped.insert(from);
        self.current += 1;
        Transition::Moved { from, to: self.current }
    }

    /// Move directly to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Transition {
        if index >= self.len || index == self.current {
            return Transition::Stayed;
        }
        let from = self.current;
        self.current = index;
        Transition::Moved { from, to: index }
    }

    /// Finish the walk. Repeated calls keep reporting completion.
    #[allow(clippy::unused_self)]
    pub fn complete(&mut self) -> Transition {
        Transition::Completed
    }

    pub fn apply(&mut self, nav: Nav) -> Transition {
        match nav {
            Nav::Next => self.go_next(),
            Nav::Previous => self.go_previous(),
            Nav::Skip => self.skip(),
            Nav::JumpTo(index) => self.jump_to(index),
            Nav::Complete => self.complete(),
        }
    }

    /// Return to the first step and forget all bookkeeping.
    pub fn reset(&mut self) {
        *self = Self::new(self.len);
    }

    pub fn indicator(&self, index: usize) -> Indicator {
        if index == self.current {
            Indicator::Current
        } else if index < self.current {
            Indicator::Visited
        } else if self.skipped.contains(&index) {
            Indicator::Skipped
        } else {
            Indicator::Upcoming
        }
    }

    /// Progress through the walk as a percentage in `(0, 100]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.len as f64 * 100.0
    }

    /// One-based "n of m" label.
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.current + 1, self.len)
    }
}

/// Context the keyboard trigger path needs to decide whether a key applies.
///
/// Only a mounted, visible stepper listens for keys at all, so there is no
/// inactive case to model here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyContext {
    /// The stepper is presented as a dismissible modal.
    pub modal: bool,
    pub first: bool,
    pub last: bool,
}

impl KeyContext {
    pub fn for_state(state: &StepperState, modal: bool) -> Self {
        Self { modal, first: state.is_first(), last: state.is_last() }
    }
}

/// Map a `KeyboardEvent::key()` value to a navigation command.
///
/// Arrow keys never wrap past either end, and `Escape` only dismisses a
/// modal stepper.
pub fn key_command(key: &str, ctx: KeyContext) -> Option<Nav> {
    match key {
        "ArrowRight" if !ctx.last => Some(Nav::Next),
        "ArrowLeft" if !ctx.first => Some(Nav::Previous),
        "Escape" if ctx.modal => Some(Nav::Complete),
        _ => None,
    }
}
