//! Authentication error types.

use nexsales_core::error::NexsalesError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Anything other than the configured credential pair. Transport
    /// failures are not distinguished from a bad password.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl From<AuthError> for NexsalesError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => NexsalesError::AuthenticationFailed {
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_maps_to_authentication_failed() {
        let err: NexsalesError = AuthError::InvalidCredentials.into();
        assert!(matches!(
            &err,
            NexsalesError::AuthenticationFailed { reason } if reason == "invalid credentials"
        ));
        assert_eq!(err.to_string(), "Authentication failed: invalid credentials");
    }
}
