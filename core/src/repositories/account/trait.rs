//! Account repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for Account entities,
//! following Domain-Driven Design principles. The trait is async-first and
//! uses Result types for proper error handling.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// This trait defines the contract for data access operations related to
/// accounts. Implementations handle the actual database operations while
/// maintaining the abstraction boundary between domain and infrastructure
/// layers. Password material never leaves the repository: hashing happens
/// inside `create_pending` and comparison inside `compare_password`.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use gk_core::repositories::AccountRepository;
/// use gk_core::domain::entities::account::Account;
/// use gk_core::errors::DomainError;
///
/// struct MySqlAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for MySqlAccountRepository {
///     async fn find_by_username_or_email(
///         &self,
///         _username: &str,
///         _email: &str,
///     ) -> Result<Option<Account>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_username(&self, _username: &str) -> Result<Option<Account>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_verify_key(&self, _key: &str) -> Result<Option<Account>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create_pending(
///         &self,
///         username: &str,
///         email: &str,
///         _password: &str,
///     ) -> Result<Account, DomainError> {
///         Ok(Account::new_pending(
///             username.to_string(),
///             email.to_string(),
///             "hash".to_string(),
///             "key".to_string(),
///         ))
///     }
///
///     async fn compare_password(
///         &self,
///         _account: &Account,
///         _password: &str,
///     ) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn mark_verified(&self, account: &Account) -> Result<Account, DomainError> {
///         let mut verified = account.clone();
///         verified.verify();
///         Ok(verified)
///     }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account matching either the given username or the given email
    ///
    /// Used by registration to detect an already-taken identity in a single
    /// query.
    ///
    /// # Arguments
    /// * `username` - Candidate username
    /// * `email` - Candidate email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - An account already uses the username or email
    /// * `Ok(None)` - Both are free
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account by its username
    ///
    /// # Arguments
    /// * `username` - The exact username to look up
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with that username
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use gk_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_username("crusty_crab").await? {
    ///     Some(account) => println!("Account found: {}", account.id),
    ///     None => println!("Account not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its pending verification key
    ///
    /// Only unverified accounts carry a key, so a verified account can never
    /// be returned from this lookup.
    ///
    /// # Arguments
    /// * `key` - The one-time verification key from the emailed link
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Pending account holding the key
    /// * `Ok(None)` - No pending account holds the key
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use gk_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(account) = repo.find_by_verify_key("a1b2c3d4").await? {
    ///     println!("Pending account: {}", account.username);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_verify_key(&self, key: &str) -> Result<Option<Account>, DomainError>;

    /// Create a new unverified account
    ///
    /// The plaintext password is hashed by the implementation and a fresh
    /// verification key is generated; neither is chosen by the caller.
    ///
    /// # Arguments
    /// * `username` - Username for the new account
    /// * `email` - Email address to verify
    /// * `password` - Plaintext password, hashed before storage
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account with its verification key set
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate username)
    ///
    /// # Example
    /// ```no_run
    /// # use gk_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let account = repo
    ///     .create_pending("crusty_crab", "crab@example.com", "correct-horse")
    ///     .await?;
    /// println!("Created account {} awaiting verification", account.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create_pending(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError>;

    /// Check a plaintext password against the account's stored hash
    ///
    /// # Arguments
    /// * `account` - The account whose hash to check against
    /// * `password` - Plaintext password presented at sign-in
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError)` - Hash comparison failed
    async fn compare_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError>;

    /// Mark an account as verified and consume its verification key
    ///
    /// # Arguments
    /// * `account` - The pending account to verify
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account with `is_verified` set and the
    ///   key cleared
    /// * `Err(DomainError)` - Update failed (e.g., account no longer exists)
    async fn mark_verified(&self, account: &Account) -> Result<Account, DomainError>;
}
