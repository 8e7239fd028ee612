//! Session domain model.

use serde::{Deserialize, Serialize};

use super::user::User;

/// A live session handed back by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    /// Opaque token. Never validated against a server.
    pub token: String,
}

/// The persisted subset of the auth store.
///
/// Serialized fields use the same names as the browser storage layout
/// (`user`, `token`, `isAuthenticated`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthSnapshot {
    pub fn signed_in(session: &Session) -> Self {
        Self {
            user: Some(session.user.clone()),
            token: Some(session.token.clone()),
            is_authenticated: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Rebuild the session if both halves are present.
    pub fn session(&self) -> Option<Session> {
        match (&self.user, &self.token) {
            (Some(user), Some(token)) => Some(Session {
                user: user.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    fn session() -> Session {
        Session {
            user: User {
                id: "1".into(),
                email: "admin@nexsales.com".into(),
                name: "Admin User".into(),
                role: UserRole::Admin,
                avatar: None,
            },
            token: "mock-jwt-token-1".into(),
        }
    }

    #[test]
    fn signed_in_snapshot_round_trips_session() {
        let snapshot = AuthSnapshot::signed_in(&session());
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.session(), Some(session()));
    }

    #[test]
    fn persisted_field_names_use_camel_case() {
        let json = serde_json::to_value(AuthSnapshot::signed_in(&session())).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["user"]["role"], "admin");
        assert!(json["user"].get("avatar").is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_signed_out() {
        let snapshot: AuthSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, AuthSnapshot::signed_out());
    }
}
