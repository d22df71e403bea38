//! Configuration for the token codec

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_HOURS;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session token expiry in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: SESSION_TOKEN_EXPIRY_HOURS * 3600,
        }
    }
}
