use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use gk_core::domain::entities::account::Account;
use gk_shared::validation::USERNAME_REGEX;

/// Request body for POST /api/v1/auth/signup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username: 4-20 letters, digits or underscores
    #[validate(
        length(min = 4, max = 20, message = "Username must be 4-20 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, digits and underscores"
        )
    )]
    pub username: String,

    /// Address the verification link is sent to
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    /// Plaintext password, 8-20 characters
    #[validate(length(min = 8, max = 20, message = "Password must be 8-20 characters"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/signin
///
/// Bounds are presence-only. A username that could never exist is answered
/// with the same invalid-credentials error as a wrong password, so the
/// endpoint reveals nothing about which usernames are registered.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query parameters for GET /api/v1/auth/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    /// One-time verification key from the emailed link
    pub key: String,
}

/// Public view of an account, returned by signup and verify
///
/// Narrower than the entity on purpose: the password hash and the pending
/// verification key never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            is_verified: account.is_verified,
            created_at: account.created_at,
        }
    }
}

/// Response body for a successful sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    /// Signed session token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Response body for a successful sign-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignoutResponse {
    pub message: String,
}

/// Response body for GET /api/v1/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Account identifier from the session claims
    pub id: Uuid,

    /// Username from the session claims
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "crusty_crab".to_string(),
            email: "crab@example.com".to_string(),
            password: "shell-secret".to_string(),
        }
    }

    #[test]
    fn test_signup_request_accepts_valid_input() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn test_signup_request_rejects_short_username() {
        let mut request = valid_signup();
        request.username = "abc".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_signup_request_rejects_bad_username_charset() {
        let mut request = valid_signup();
        request.username = "has space!".to_string();
        assert!(request.validate().is_err());

        request.username = "dots.not.ok".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_bad_email() {
        let mut request = valid_signup();
        request.email = "not-an-email".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_signup_request_rejects_out_of_bounds_password() {
        let mut request = valid_signup();
        request.password = "short".to_string();
        assert!(request.validate().is_err());

        request.password = "x".repeat(21);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signin_request_requires_both_fields() {
        let request = SigninRequest {
            username: String::new(),
            password: "whatever".to_string(),
        };
        assert!(request.validate().is_err());

        let request = SigninRequest {
            username: "crusty_crab".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_account_response_hides_credentials() {
        let account = Account::new_pending(
            "crusty_crab".to_string(),
            "crab@example.com".to_string(),
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            "one-time-key".to_string(),
        );

        let json = serde_json::to_string(&AccountResponse::from(&account)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("one-time-key"));
        assert!(json.contains("crusty_crab"));
    }
}
