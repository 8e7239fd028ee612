//! Session store: login, logout and profile replacement.

use std::sync::Arc;

use nexsales_core::models::session::{AuthSnapshot, Session};
use nexsales_core::models::user::User;
use nexsales_core::persist::{load_json, persist_or_warn};
use nexsales_core::repository::{AUTH_STORAGE_KEY, KeyValueStore};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Holds at most one live session and mirrors it to durable storage
/// under [`AUTH_STORAGE_KEY`] after every change.
///
/// A restored `isAuthenticated` flag is taken at face value; nothing
/// re-checks the token.
#[derive(Clone)]
pub struct AuthStore {
    state: Arc<watch::Sender<AuthSnapshot>>,
    storage: Arc<dyn KeyValueStore>,
    config: Arc<AuthConfig>,
}

impl AuthStore {
    /// Build the store, merging any persisted session over the
    /// signed-out default.
    pub fn restore(storage: Arc<dyn KeyValueStore>, config: AuthConfig) -> Self {
        let snapshot = load_json::<AuthSnapshot>(storage.as_ref(), AUTH_STORAGE_KEY)
            .unwrap_or_default();
        if snapshot.is_authenticated {
            info!(
                user = snapshot.user.as_ref().map(|u| u.email.as_str()),
                "Restored persisted session"
            );
        }

        Self {
            state: Arc::new(watch::Sender::new(snapshot)),
            storage,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Observe session changes; the route guard watches
    /// `is_authenticated` through this.
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    /// Check the credentials after the simulated round trip and start a
    /// new session on success. A failure leaves any existing session
    /// in place.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tokio::time::sleep(self.config.login_latency).await;

        if email != self.config.demo_email || password != self.config.demo_password {
            warn!(email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            user: self.config.demo_user(),
            token: token::mint_token(&self.config.token_prefix),
        };
        self.state.send_replace(AuthSnapshot::signed_in(&session));
        self.persist();

        info!(email, user_id = %session.user.id, "Login succeeded");
        Ok(session)
    }

    /// Drop the session. Safe to call when already signed out.
    pub fn logout(&self) {
        let changed = self.state.send_if_modified(|s| {
            if *s == AuthSnapshot::signed_out() {
                return false;
            }
            *s = AuthSnapshot::signed_out();
            true
        });
        self.persist();

        if changed {
            info!("Logged out");
        } else {
            debug!("Logout ignored, no session");
        }
    }

    /// Replace the signed-in user wholesale. Returns `false` and changes
    /// nothing when no session is active.
    pub fn update_user(&self, user: User) -> bool {
        let updated = self.state.send_if_modified(|s| {
            if !s.is_authenticated {
                return false;
            }
            s.user = Some(user);
            true
        });

        if updated {
            self.persist();
            debug!("Updated session user");
        } else {
            debug!("User update ignored, not signed in");
        }
        updated
    }

    fn persist(&self) {
        let snapshot = self.snapshot();
        persist_or_warn(self.storage.as_ref(), AUTH_STORAGE_KEY, &snapshot);
    }
}
