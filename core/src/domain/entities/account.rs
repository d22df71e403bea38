//! Account entity representing a registered account in the Gatekey system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique display name chosen at sign-up
    pub username: String,

    /// Email address the verification message was sent to
    pub email: String,

    /// Bcrypt hash of the account password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the account has completed email verification
    pub is_verified: bool,

    /// One-time verification key, present until the account is verified
    pub verify_key: Option<String>,

    /// Whether the account has administrative privileges
    pub is_admin: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified Account awaiting email verification
    pub fn new_pending(
        username: String,
        email: String,
        password_hash: String,
        verify_key: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            is_verified: false,
            verify_key: Some(verify_key),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified and consumes the verification key
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.verify_key = None;
        self.updated_at = Utc::now();
    }

    /// Grants administrative privileges
    pub fn promote_to_admin(&mut self) {
        self.is_admin = true;
        self.updated_at = Utc::now();
    }

    /// Checks whether the account still has a pending verification key
    pub fn is_pending_verification(&self) -> bool {
        !self.is_verified && self.verify_key.is_some()
    }
}
