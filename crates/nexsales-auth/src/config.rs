//! Authentication configuration.

use std::time::Duration;

use nexsales_core::models::user::{User, UserRole};

/// Configuration for the mock authentication backend.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The only email that signs in successfully.
    pub demo_email: String,
    /// Password paired with `demo_email`.
    pub demo_password: String,
    /// Display name of the signed-in user.
    pub demo_name: String,
    pub demo_role: UserRole,
    pub demo_avatar: Option<String>,
    /// Simulated round trip before the credential check (default: 1 s).
    pub login_latency: Duration,
    /// Prepended to the millisecond timestamp to form a token.
    pub token_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: "admin@nexsales.com".into(),
            demo_password: "admin123".into(),
            demo_name: "Admin User".into(),
            demo_role: UserRole::Admin,
            demo_avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Admin".into()),
            login_latency: Duration::from_secs(1),
            token_prefix: "mock-jwt-token-".into(),
        }
    }
}

impl AuthConfig {
    /// The user record handed out on a successful login.
    pub fn demo_user(&self) -> User {
        User {
            id: "1".into(),
            email: self.demo_email.clone(),
            name: self.demo_name.clone(),
            role: self.demo_role,
            avatar: self.demo_avatar.clone(),
        }
    }

    /// `"<email> / <password>"`, shown after a failed login.
    pub fn credential_hint(&self) -> String {
        format!("{} / {}", self.demo_email, self.demo_password)
    }
}
