use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// `sub` is the user identifier, `role` the single authorization tag.
/// `iat` and `exp` are Unix timestamps in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now and expiring after `ttl`.
    pub fn for_user(user_id: impl ToString, role: impl ToString, ttl: Duration) -> Self {
        Self::for_user_at(user_id, role, ttl, Utc::now())
    }

    /// Create claims for a user as if issued at `issued_at`.
    ///
    /// # Arguments
    /// * `user_id` - Subject identifier
    /// * `role` - Role tag
    /// * `ttl` - Lifetime of the token
    /// * `issued_at` - Issuance instant
    pub fn for_user_at(
        user_id: impl ToString,
        role: impl ToString,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: user_id.to_string(),
            role: role.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is still valid at exactly its expiration second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
