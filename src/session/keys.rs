//! Typed session keys with serialize/deserialize pairs.
//!
//! The store itself only moves raw strings; this module layers typed access
//! on top. Each persisted value is described by a [`SessionKey`]: its name
//! in the store, a default for when nothing (or garbage) is stored, and the
//! string codec supplied by the value type's [`SessionValue`] impl.
//!
//! The two keys the plugin persists:
//!
//! - [`PAGE`]: current list page, stored as a decimal string, default `1`
//! - [`SEARCH_TEXT`]: current search text, stored verbatim, default `""`

use crate::domain::error::Result;
use crate::session::backend::SessionStore;

/// A value type that can round-trip through string storage.
///
/// `decode` returns `None` for values that do not parse or violate the
/// type's invariants; [`SessionKey::load`] falls back to the key's default
/// in that case, so a hand-edited or stale session file can never produce
/// an invalid in-memory value.
pub trait SessionValue: Sized {
    /// Encodes the value as its stored string form.
    fn encode(&self) -> String;

    /// Decodes a stored string, returning `None` when it is not a valid
    /// representation.
    fn decode(raw: &str) -> Option<Self>;
}

impl SessionValue for u32 {
    fn encode(&self) -> String {
        self.to_string()
    }

    /// Pages are 1-based; zero (and non-numeric input) is rejected so the
    /// default applies instead.
    fn decode(raw: &str) -> Option<Self> {
        raw.parse::<Self>().ok().filter(|n| *n >= 1)
    }
}

impl SessionValue for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// A named, typed slot in the session store.
pub struct SessionKey<T> {
    /// Key name as it appears in the store.
    pub name: &'static str,
    default: fn() -> T,
}

impl<T: SessionValue> SessionKey<T> {
    /// Creates a key definition.
    #[must_use]
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    /// Loads the value stored under this key, falling back to the default
    /// when the key is absent, unreadable, or fails to decode.
    pub fn load<S: SessionStore + ?Sized>(&self, store: &S) -> T {
        store
            .read(self.name)
            .ok()
            .flatten()
            .and_then(|raw| T::decode(&raw))
            .unwrap_or_else(self.default)
    }

    /// Stores a value under this key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store write fails.
    pub fn store<S: SessionStore + ?Sized>(&self, store: &mut S, value: &T) -> Result<()> {
        store.write(self.name, &value.encode())
    }
}

fn default_page() -> u32 {
    1
}

fn default_search_text() -> String {
    String::new()
}

/// Current list page number. Default `1`.
pub const PAGE: SessionKey<u32> = SessionKey::new("page", default_page);

/// Current search text. Default empty.
pub const SEARCH_TEXT: SessionKey<String> = SessionKey::new("search-text", default_search_text);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory store for codec tests.
    #[derive(Default)]
    struct MemoryStore(BTreeMap<String, String>);

    impl SessionStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn page_round_trips_through_text() {
        let mut store = MemoryStore::default();
        PAGE.store(&mut store, &7).unwrap();

        assert_eq!(store.0.get("page").map(String::as_str), Some("7"));
        assert_eq!(PAGE.load(&store), 7);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let store = MemoryStore::default();
        assert_eq!(PAGE.load(&store), 1);
        assert_eq!(SEARCH_TEXT.load(&store), "");
    }

    #[test]
    fn invalid_page_values_fall_back_to_default() {
        let mut store = MemoryStore::default();
        store.write("page", "zero").unwrap();
        assert_eq!(PAGE.load(&store), 1);

        store.write("page", "0").unwrap();
        assert_eq!(PAGE.load(&store), 1);
    }

    #[test]
    fn search_text_is_stored_verbatim() {
        let mut store = MemoryStore::default();
        SEARCH_TEXT.store(&mut store, &"Rick Sanchez".to_string()).unwrap();
        assert_eq!(SEARCH_TEXT.load(&store), "Rick Sanchez");
    }
}
