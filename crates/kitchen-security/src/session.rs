//! Server-side session records and opaque token generation

use chrono::{DateTime, Duration, Utc};
use kitchen_shared::constants::SESSION_TOKEN_BYTES;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session. Lives only on the server, keyed by its token;
/// the client holds nothing but the opaque token string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Uuid, email: String, role: String, ttl_seconds: i64) -> Self {
        Self {
            token: generate_session_token(),
            user_id,
            email,
            role,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_opaque_hex() {
        let token = generate_session_token();
        assert_eq!(token.len(), SESSION_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_expiry() {
        let live = Session::new(Uuid::new_v4(), "a@b.c".into(), "admin".into(), 60);
        assert!(!live.is_expired());

        let dead = Session::new(Uuid::new_v4(), "a@b.c".into(), "admin".into(), -1);
        assert!(dead.is_expired());
    }
}
