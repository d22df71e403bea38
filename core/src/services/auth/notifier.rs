//! Notifier trait for delivering the verification email

use async_trait::async_trait;

use crate::domain::entities::account::Account;

/// Trait for delivering the account verification email
///
/// Implementations send the message through a real transport; tests capture
/// it instead. Errors are plain strings because the domain only needs to
/// know that delivery failed, not why.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a verification email carrying the one-time link
    ///
    /// # Arguments
    /// * `account` - The freshly created, still unverified account
    /// * `link` - Absolute verification URL including the key
    ///
    /// # Returns
    /// * `Ok(String)` - Transport message id
    /// * `Err(String)` - Delivery failed
    async fn send_verification_email(
        &self,
        account: &Account,
        link: &str,
    ) -> Result<String, String>;
}
