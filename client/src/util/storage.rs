//! Browser `localStorage` bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior. During SSR
//! there is no storage: reads report "unset" and writes are dropped. Callers
//! that gate UI on a flag read it from a client-side effect.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::onboarding::FlagStore;

/// String stored for a set flag.
const FLAG_TRUE: &str = "true";

/// Decode a stored flag value. Anything other than `"true"` counts as unset.
fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some(FLAG_TRUE)
}

fn encode_flag(value: bool) -> &'static str {
    if value { FLAG_TRUE } else { "false" }
}

/// Read a raw string from `localStorage`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`. Failures (quota, private mode) are
/// ignored.
pub fn save_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// `FlagStore` backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageFlags;

impl FlagStore for LocalStorageFlags {
    fn read_flag(&self, key: &str) -> bool {
        decode_flag(load_item(key).as_deref())
    }

    fn write_flag(&self, key: &str, value: bool) {
        save_item(key, encode_flag(value));
    }
}
