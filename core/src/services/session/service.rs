//! Session validation and revocation implementation

use std::sync::Arc;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RevocationStore;
use crate::services::token::TokenCodec;

/// Sentinel value stored for a revoked token
pub const REVOKED_SENTINEL: &str = "invalid";

/// Session service joining the stateless token codec with the stateful
/// revocation exception list
///
/// Every protected request passes through `authenticate`; `sign_out` is the
/// only writer of revocation entries. Entries expire in the store at the
/// same instant the token they revoke would have expired naturally, so the
/// store never outlives its usefulness for a token and never drops the
/// entry early.
pub struct SessionService<R: RevocationStore> {
    token_codec: Arc<TokenCodec>,
    revocation_store: Arc<R>,
}

impl<R: RevocationStore> SessionService<R> {
    /// Create a new session service
    pub fn new(token_codec: Arc<TokenCodec>, revocation_store: Arc<R>) -> Self {
        Self {
            token_codec,
            revocation_store,
        }
    }

    /// Authenticate a presented token and return its claims
    ///
    /// This method:
    /// 1. Verifies structure, signature, and expiry statelessly
    /// 2. Looks the canonical claims key up in the revocation store
    ///
    /// A store outage fails the request. Treating it as "not revoked" would
    /// silently defeat revocation, and treating it as "revoked" would lock
    /// out every session for the duration of the outage.
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded session token from the request
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The authenticated identity
    /// * `Err(DomainError)` - Token rejected or store unreachable
    pub async fn authenticate(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.token_codec.verify(token)?;

        if self
            .revocation_store
            .get(&claims.revocation_key())
            .await?
            .is_some()
        {
            tracing::warn!(
                account_id = %claims.id,
                event = "revoked_token_presented",
                "Rejected revoked session token"
            );
            return Err(DomainError::Token(TokenError::Revoked));
        }

        Ok(claims)
    }

    /// Revoke a token for the rest of its lifetime
    ///
    /// The entry's TTL is the token's remaining lifetime, measured now. An
    /// already-expired token needs no entry; stateless verification rejects
    /// it on its own, so the call succeeds without touching the store.
    /// Re-revoking the same claims overwrites the previous entry, which
    /// makes concurrent duplicate sign-outs safe.
    ///
    /// # Arguments
    ///
    /// * `claims` - Claims of the authenticated token being signed out
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Revocation recorded (or nothing left to revoke)
    /// * `Err(DomainError)` - Store unreachable
    pub async fn sign_out(&self, claims: &Claims) -> DomainResult<()> {
        let ttl = claims.remaining_seconds();
        if ttl <= 0 {
            tracing::debug!(
                account_id = %claims.id,
                event = "sign_out_noop",
                "Token already expired, nothing to revoke"
            );
            return Ok(());
        }

        self.revocation_store
            .set_with_ttl(&claims.revocation_key(), REVOKED_SENTINEL, ttl as u64)
            .await?;

        tracing::info!(
            account_id = %claims.id,
            ttl_seconds = ttl,
            event = "session_revoked",
            "Revoked session token for its remaining lifetime"
        );

        Ok(())
    }
}
