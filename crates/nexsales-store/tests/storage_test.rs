//! Integration tests for the key/value backends.

use nexsales_core::error::NexsalesError;
use nexsales_core::repository::KeyValueStore;
use nexsales_store::{FileStorage, MemoryStorage};

#[test]
fn memory_storage_round_trip() {
    let storage = MemoryStorage::new();
    assert!(storage.load("auth-storage").unwrap().is_none());

    storage.save("auth-storage", "{}").unwrap();
    assert_eq!(storage.load("auth-storage").unwrap().as_deref(), Some("{}"));

    storage.remove("auth-storage").unwrap();
    assert!(storage.is_empty());
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.save("settings-storage", r#"{"theme":"dark"}"#).unwrap();
    }

    let reopened = FileStorage::open(dir.path()).unwrap();
    assert_eq!(
        reopened.load("settings-storage").unwrap().as_deref(),
        Some(r#"{"theme":"dark"}"#)
    );
    assert!(dir.path().join("settings-storage.json").exists());
}

#[test]
fn file_storage_missing_and_removed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("nested")).unwrap();

    assert!(storage.load("auth-storage").unwrap().is_none());
    // Removing a missing key is fine.
    storage.remove("auth-storage").unwrap();

    storage.save("auth-storage", "{}").unwrap();
    storage.remove("auth-storage").unwrap();
    assert!(storage.load("auth-storage").unwrap().is_none());
}

#[test]
fn file_storage_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();

    let err = storage.save("../escape", "x").unwrap_err();
    assert!(matches!(err, NexsalesError::Storage(_)), "got {err:?}");
    assert!(storage.load("").is_err());
}
