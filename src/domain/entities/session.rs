//! Login session entity.

use chrono::{DateTime, Utc};

/// A per-browser login session.
///
/// `token_hash` is the keyed HMAC-SHA256 of the opaque cookie token; the
/// raw token never touches the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub token_hash: String,
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true if the session has passed its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Input data for creating a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_hash: String,
    pub account_id: i64,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_is_expired() {
        let now = Utc::now();
        let session = Session {
            id: 1,
            token_hash: "abc".to_string(),
            account_id: 1,
            created_at: now - Duration::hours(2),
            expires_at: now - Duration::seconds(1),
        };
        assert!(session.is_expired(now));
    }

    #[test]
    fn test_session_not_expired() {
        let now = Utc::now();
        let session = Session {
            id: 1,
            token_hash: "abc".to_string(),
            account_id: 1,
            created_at: now,
            expires_at: now + Duration::hours(1),
        };
        assert!(!session.is_expired(now));
    }
}
