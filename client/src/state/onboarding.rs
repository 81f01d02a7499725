//! First-run onboarding completion and its durable flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page reads the flag once on the client to decide whether the
//! onboarding modal opens. Completion writes the flag and then hands control
//! back to the host page through its callback. Persistence sits behind
//! `FlagStore` so the browser binding (`util::storage`) can be swapped for an
//! in-memory fake.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use super::stepper::Transition;

/// `localStorage` key recording that onboarding finished.
pub const ONBOARDING_FLAG_KEY: &str = "pawsquare-onboarding-complete";

/// Minimal boolean key-value persistence.
pub trait FlagStore {
    fn read_flag(&self, key: &str) -> bool;
    fn write_flag(&self, key: &str, value: bool);
}

impl<T: FlagStore + ?Sized> FlagStore for &T {
    fn read_flag(&self, key: &str) -> bool {
        (**self).read_flag(key)
    }

    fn write_flag(&self, key: &str, value: bool) {
        (**self).write_flag(key, value);
    }
}

/// Whether a first-time visitor should see onboarding.
pub fn should_show_onboarding<S: FlagStore>(store: &S) -> bool {
    !store.read_flag(ONBOARDING_FLAG_KEY)
}

/// Persist completion and notify the host.
///
/// Safe to call repeatedly: the flag is rewritten and the callback runs again.
pub fn complete_onboarding<S: FlagStore>(store: &S, on_complete: impl FnOnce()) {
    store.write_flag(ONBOARDING_FLAG_KEY, true);
    on_complete();
}

/// Run the completion effect for a stepper transition, if it completed.
///
/// Both entry points (`go_next` on the last step and an explicit `complete`)
/// funnel through here, so each logical completion writes the flag and
/// invokes the callback exactly once.
pub fn settle<S: FlagStore>(transition: Transition, store: &S, on_complete: impl FnOnce()) -> Transition {
    if transition.is_completed() {
        complete_onboarding(store, on_complete);
    }
    transition
}
