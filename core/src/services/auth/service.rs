//! Main authentication service implementation

use std::sync::Arc;

use gk_shared::validation::validators;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::IssuedToken;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::token::TokenCodec;

use super::config::AuthServiceConfig;
use super::notifier::Notifier;

/// Authentication service for registration, verification, and sign-in
pub struct AuthService<A, N>
where
    A: AccountRepository,
    N: Notifier,
{
    /// Account repository for database operations
    account_repository: Arc<A>,
    /// Notifier that delivers the verification email
    notifier: Arc<N>,
    /// Codec that mints the session token at sign-in
    token_codec: Arc<TokenCodec>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<A, N> AuthService<A, N>
where
    A: AccountRepository,
    N: Notifier,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account persistence
    /// * `notifier` - Transport for the verification email
    /// * `token_codec` - Codec for issuing session tokens
    /// * `config` - Service configuration
    pub fn new(
        account_repository: Arc<A>,
        notifier: Arc<N>,
        token_codec: Arc<TokenCodec>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            notifier,
            token_codec,
            config,
        }
    }

    /// Register a new account and send its verification email
    ///
    /// This method:
    /// 1. Validates username, email, and password shape
    /// 2. Rejects the registration if either identity is already taken
    /// 3. Creates an unverified account with a fresh one-time key
    /// 4. Emails the verification link to the given address
    ///
    /// The account is kept even when the email cannot be delivered, so a
    /// later delivery retry does not collide with the half-registered
    /// identity.
    ///
    /// # Arguments
    ///
    /// * `username` - Requested username (4-20 word characters)
    /// * `email` - Address the verification link is sent to
    /// * `password` - Plaintext password (8-20 characters)
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The pending account awaiting verification
    /// * `Err(DomainError)` - Validation failed, identity taken, or the
    ///   email could not be delivered
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        // Step 1: Validate input shape
        if !validators::is_valid_username(username) {
            return Err(DomainError::Validation {
                message: "Username must be 4-20 letters, digits or underscores".to_string(),
            });
        }
        if !validators::is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Email must be valid".to_string(),
            });
        }
        if !validators::is_valid_password(password) {
            return Err(DomainError::Validation {
                message: "Password must be 8-20 characters".to_string(),
            });
        }

        // Step 2: Reject an already-taken username or email
        if self
            .account_repository
            .find_by_username_or_email(username, email)
            .await?
            .is_some()
        {
            tracing::debug!(
                username = username,
                event = "registration_rejected",
                "Username or email already in use"
            );
            return Err(DomainError::Auth(AuthError::AccountExists));
        }

        // Step 3: Create the pending account
        let account = self
            .account_repository
            .create_pending(username, email, password)
            .await?;

        // Step 4: Deliver the verification link
        let key = account.verify_key.as_deref().unwrap_or_default();
        let link = self.config.verification_link(key);

        if let Err(e) = self.notifier.send_verification_email(&account, &link).await {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "verification_email_failed",
                "Verification email could not be delivered"
            );
            return Err(DomainError::Auth(AuthError::NotificationFailed));
        }

        tracing::info!(
            account_id = %account.id,
            username = username,
            event = "account_registered",
            "Registered new account pending verification"
        );

        Ok(account)
    }

    /// Verify a pending account using its emailed one-time key
    ///
    /// The key is consumed by a successful verification, so presenting it a
    /// second time fails the same way an unknown key does.
    ///
    /// # Arguments
    ///
    /// * `key` - The one-time verification key from the link
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The now-verified account
    /// * `Err(DomainError)` - No pending account holds the key
    pub async fn verify_account(&self, key: &str) -> DomainResult<Account> {
        let account = self
            .account_repository
            .find_by_verify_key(key)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Verification key".to_string(),
            })?;

        let verified = self.account_repository.mark_verified(&account).await?;

        tracing::info!(
            account_id = %verified.id,
            event = "account_verified",
            "Account completed email verification"
        );

        Ok(verified)
    }

    /// Authenticate credentials and issue a session token
    ///
    /// This method:
    /// 1. Looks up the account by username
    /// 2. Checks the password against the stored hash
    /// 3. Requires the account to have completed verification
    /// 4. Issues the signed session token
    ///
    /// An unknown username and a wrong password fail identically so the
    /// response cannot be used to probe which usernames exist. The password
    /// is always checked before the verification flag; an unverified
    /// account never learns more from the error than an attacker would.
    ///
    /// # Arguments
    ///
    /// * `username` - The username presented at sign-in
    /// * `password` - The plaintext password presented at sign-in
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Signed session token and its lifetime
    /// * `Err(DomainError)` - Credentials rejected or account unverified
    pub async fn sign_in(&self, username: &str, password: &str) -> DomainResult<IssuedToken> {
        // Step 1: Look up the account
        let account = match self.account_repository.find_by_username(username).await? {
            Some(account) => account,
            None => {
                tracing::debug!(
                    username = username,
                    event = "sign_in_rejected",
                    "Unknown username"
                );
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        // Step 2: Check the password before anything else
        if !self
            .account_repository
            .compare_password(&account, password)
            .await?
        {
            tracing::debug!(
                account_id = %account.id,
                event = "sign_in_rejected",
                "Password mismatch"
            );
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: Only verified accounts may sign in
        if !account.is_verified {
            return Err(DomainError::Auth(AuthError::AccountNotVerified));
        }

        // Step 4: Mint the session token
        let issued = self.token_codec.issue(&account)?;

        tracing::info!(
            account_id = %account.id,
            expires_in = issued.expires_in,
            event = "signed_in",
            "Issued session token"
        );

        Ok(issued)
    }
}
