//! Session token issue and verify implementation

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, TokenError};

use super::config::TokenCodecConfig;

/// Codec for the signed session token
///
/// Issuance and verification are pure functions of the token, the shared
/// secret, and the clock; no store is consulted. The revocation lookup is
/// layered on top by the session service, because a valid signature alone
/// cannot express "administratively dead".
pub struct TokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a new codec from configuration
    pub fn new(config: TokenCodecConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        // No clock leeway: a token is rejected as soon as its expiry passes
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed session token for an account
    ///
    /// Claims are minted once here and are immutable afterwards; the account
    /// flags are captured as they stand at sign-in.
    ///
    /// # Arguments
    ///
    /// * `account` - The account that just authenticated
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Encoded token plus its lifetime in seconds
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, account: &Account) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new_session(
            account.id,
            account.username.clone(),
            account.is_verified,
            account.is_admin,
            self.config.token_expiry_seconds,
        );
        let token = self.encode(&claims)?;
        Ok(IssuedToken::new(token, self.config.token_expiry_seconds))
    }

    /// Encodes arbitrary claims into a signed token
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a presented token and returns its claims
    ///
    /// Verification is stateless: structure, signature, and expiry only.
    /// Whether the token has been revoked is a separate question answered
    /// by the session service.
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded token as presented by the client
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(DomainError)` - `Expired`, `InvalidSignature`, or `Malformed`
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::Token(TokenError::Expired),
                    ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                    _ => DomainError::Token(TokenError::Malformed),
                }
            })?;

        Ok(token_data.claims)
    }
}
