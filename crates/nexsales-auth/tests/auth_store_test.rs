//! Integration tests for the session store.

use std::sync::Arc;
use std::time::Duration;

use nexsales_auth::{AuthConfig, AuthError, AuthStore};
use nexsales_core::models::session::AuthSnapshot;
use nexsales_core::models::user::UserRole;
use nexsales_core::persist::load_json;
use nexsales_core::repository::{AUTH_STORAGE_KEY, KeyValueStore};
use nexsales_store::{FileStorage, MemoryStorage};

fn store_with(storage: Arc<MemoryStorage>) -> AuthStore {
    AuthStore::restore(storage, AuthConfig::default())
}

fn persisted(storage: &MemoryStorage) -> AuthSnapshot {
    load_json(storage, AUTH_STORAGE_KEY).expect("session was persisted")
}

#[tokio::test(start_paused = true)]
async fn login_with_demo_pair_starts_session() {
    let storage = Arc::new(MemoryStorage::new());
    let auth = store_with(storage.clone());
    assert!(!auth.is_authenticated());

    let session = auth.login("admin@nexsales.com", "admin123").await.unwrap();

    assert!(session.token.starts_with("mock-jwt-token-"));
    assert_eq!(session.user.name, "Admin User");
    assert_eq!(session.user.role, UserRole::Admin);
    assert!(auth.is_authenticated());
    assert_eq!(auth.token(), Some(session.token.clone()));
    assert_eq!(persisted(&storage), AuthSnapshot::signed_in(&session));
}

#[tokio::test(start_paused = true)]
async fn login_waits_for_simulated_latency() {
    let auth = store_with(Arc::new(MemoryStorage::new()));
    let started = tokio::time::Instant::now();

    auth.login("admin@nexsales.com", "admin123").await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn any_other_pair_is_rejected() {
    let storage = Arc::new(MemoryStorage::new());
    let auth = store_with(storage.clone());

    for (email, password) in [
        ("admin@nexsales.com", "wrong"),
        ("someone@nexsales.com", "admin123"),
        ("ADMIN@nexsales.com", "admin123"),
        ("", ""),
    ] {
        let err = auth.login(email, password).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
    assert!(!auth.is_authenticated());
    assert!(storage.load(AUTH_STORAGE_KEY).unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn failed_login_keeps_existing_session() {
    let auth = store_with(Arc::new(MemoryStorage::new()));
    let session = auth.login("admin@nexsales.com", "admin123").await.unwrap();

    assert!(auth.login("admin@nexsales.com", "nope").await.is_err());
    assert_eq!(auth.token(), Some(session.token));
}

#[tokio::test(start_paused = true)]
async fn logout_is_idempotent() {
    let storage = Arc::new(MemoryStorage::new());
    let auth = store_with(storage.clone());
    auth.login("admin@nexsales.com", "admin123").await.unwrap();

    auth.logout();
    assert!(!auth.is_authenticated());
    assert!(auth.user().is_none());
    assert!(auth.token().is_none());
    assert_eq!(persisted(&storage), AuthSnapshot::signed_out());

    let mut rx = auth.subscribe();
    rx.mark_unchanged();
    auth.logout();
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn update_user_replaces_profile_when_signed_in() {
    let storage = Arc::new(MemoryStorage::new());
    let auth = store_with(storage.clone());
    let session = auth.login("admin@nexsales.com", "admin123").await.unwrap();

    let mut renamed = session.user.clone();
    renamed.name = "Jane Admin".into();
    renamed.avatar = None;
    assert!(auth.update_user(renamed.clone()));

    assert_eq!(auth.user(), Some(renamed.clone()));
    assert_eq!(auth.token(), Some(session.token));
    assert_eq!(persisted(&storage).user, Some(renamed));
}

#[tokio::test(start_paused = true)]
async fn update_user_without_session_is_ignored() {
    let storage = Arc::new(MemoryStorage::new());
    let auth = store_with(storage.clone());

    let user = AuthConfig::default().demo_user();
    assert!(!auth.update_user(user));
    assert!(auth.user().is_none());
    assert!(storage.is_empty());
}

#[tokio::test(start_paused = true)]
async fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let token = {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let auth = AuthStore::restore(storage, AuthConfig::default());
        auth.login("admin@nexsales.com", "admin123").await.unwrap().token
    };

    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let auth = AuthStore::restore(storage, AuthConfig::default());
    assert!(auth.is_authenticated());
    assert_eq!(auth.token(), Some(token));
}

#[test]
fn persisted_flag_is_trusted_without_revalidation() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .save(
            AUTH_STORAGE_KEY,
            r#"{"user":{"id":"9","email":"x@y.z","name":"X","role":"user"},"token":"forged","isAuthenticated":true}"#,
        )
        .unwrap();

    let auth = store_with(storage);
    assert!(auth.is_authenticated());
    assert_eq!(auth.token().as_deref(), Some("forged"));
}

#[test]
fn credential_hint_names_the_demo_pair() {
    assert_eq!(
        AuthConfig::default().credential_hint(),
        "admin@nexsales.com / admin123"
    );
}
