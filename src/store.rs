//! Persistent preference storage.
//!
//! Reads and writes are best-effort: when the host has no usable storage
//! (private mode, disabled cookies, SSR) every call quietly does nothing and
//! the caller falls back to its default.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Key/value capability backing the theme preference.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent or storage is unavailable.
    fn get_preference(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. No-op when storage is unavailable.
    fn set_preference(&self, key: &str, value: &str);
}

/// Browser `localStorage`, looked up afresh on every access.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get_preference(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_preference(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}

/// In-memory store for native builds and tests.
///
/// Availability can be switched off to mimic a browser with storage
/// disabled; while off, reads return `None` and writes are dropped.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
    writes: Cell<usize>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            available: Cell::new(true),
            writes: Cell::new(0),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that behaves like disabled browser storage.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.available.set(false);
        store
    }

    /// Seed a value without counting it as a write.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    /// Raw value regardless of availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of writes that reached the backing map.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_preference(&self, key: &str) -> Option<String> {
        if !self.available.get() {
            return None;
        }
        self.peek(key)
    }

    fn set_preference(&self, key: &str, value: &str) {
        if !self.available.get() {
            return;
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}
