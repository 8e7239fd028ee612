//! Opaque session token minting.
//!
//! Tokens are never parsed or verified; they only need to differ
//! between logins.

use chrono::Utc;

/// `prefix` followed by the current Unix time in milliseconds.
pub fn mint_token(prefix: &str) -> String {
    format!("{prefix}{}", Utc::now().timestamp_millis())
}
