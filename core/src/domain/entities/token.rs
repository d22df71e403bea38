//! Session token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token expiration time (24 hours)
pub const SESSION_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims structure carried in the signed session token payload
///
/// Claims are produced once at sign-in and are immutable afterwards. The
/// struct's field order is a wire contract: `revocation_key` relies on it,
/// and changing it would orphan outstanding revocation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    pub id: Uuid,

    /// Username at the time of issuance
    pub username: String,

    /// Whether the account was verified at issuance
    pub is_verified: bool,

    /// Whether the account held admin privileges at issuance
    pub is_admin: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `id` - The account's UUID
    /// * `username` - The account's username
    /// * `is_verified` - Whether the account is verified
    /// * `is_admin` - Whether the account is an admin
    /// * `expiry_seconds` - Token lifetime in seconds
    pub fn new_session(
        id: Uuid,
        username: String,
        is_verified: bool,
        is_admin: bool,
        expiry_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            id,
            username,
            is_verified,
            is_admin,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// A token whose expiry equals the current second is already expired;
    /// no leeway is granted.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Seconds until expiry, negative once the token has expired
    pub fn remaining_seconds(&self) -> i64 {
        self.exp - Utc::now().timestamp()
    }

    /// Canonical serialization of the claims, used as the revocation key
    ///
    /// The encoding is a stable contract: fields appear in declaration order
    /// (`id`, `username`, `is_verified`, `is_admin`, `iat`, `exp`) so every
    /// process derives the same key for the same token. Usernames are
    /// restricted to word characters at registration, so no JSON escaping
    /// is needed here.
    pub fn revocation_key(&self) -> String {
        format!(
            r#"{{"id":"{}","username":"{}","is_verified":{},"is_admin":{},"iat":{},"exp":{}}}"#,
            self.id, self.username, self.is_verified, self.is_admin, self.iat, self.exp
        )
    }
}

/// Signed session token returned to the client at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl IssuedToken {
    /// Creates a new issued token
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}
