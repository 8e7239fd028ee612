//! Typed save/load over a [`KeyValueStore`].
//!
//! Stores persist a defined subset of their state on every mutation and
//! merge it over defaults on startup. Both directions are best-effort:
//! a failed write is logged and the in-memory state still changes, and
//! an unreadable blob is treated as absent.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::NexsalesResult;
use crate::repository::KeyValueStore;

/// Serialize `value` as JSON under `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> NexsalesResult<()> {
    let raw = serde_json::to_string(value)?;
    store.save(key, &raw)
}

/// Load and deserialize the JSON under `key`.
///
/// Returns `None` when the key is missing, unreadable, or does not parse.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Ignoring unparseable persisted state");
            None
        }
    }
}

/// [`save_json`], logging instead of returning the error.
pub fn persist_or_warn<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = save_json(store, key, value) {
        warn!(key, error = %e, "Failed to persist state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NexsalesError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    impl KeyValueStore for MapStore {
        fn load(&self, key: &str) -> NexsalesResult<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }
        fn save(&self, key: &str, value: &str) -> NexsalesResult<()> {
            self.0.lock().unwrap().insert(key.into(), value.into());
            Ok(())
        }
        fn remove(&self, key: &str) -> NexsalesResult<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> NexsalesResult<Option<String>> {
            Err(NexsalesError::Storage("disk gone".into()))
        }
        fn save(&self, _key: &str, _value: &str) -> NexsalesResult<()> {
            Err(NexsalesError::Storage("disk gone".into()))
        }
        fn remove(&self, _key: &str) -> NexsalesResult<()> {
            Err(NexsalesError::Storage("disk gone".into()))
        }
    }

    #[test]
    fn save_then_load() {
        let store = MapStore::default();
        save_json(&store, "k", &vec![1, 2, 3]).unwrap();
        let back: Option<Vec<i32>> = load_json(&store, "k");
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn garbage_is_treated_as_absent() {
        let store = MapStore::default();
        store.save("k", "{not json").unwrap();
        let back: Option<Vec<i32>> = load_json(&store, "k");
        assert!(back.is_none());
    }

    #[test]
    fn read_errors_are_treated_as_absent() {
        let back: Option<Vec<i32>> = load_json(&BrokenStore, "k");
        assert!(back.is_none());
        // Does not panic.
        persist_or_warn(&BrokenStore, "k", &1);
    }
}
