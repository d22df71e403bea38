//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

/// Bcrypt cost used by the mock. Low cost keeps tests fast.
const MOCK_BCRYPT_COST: u32 = 4;

/// Mock account repository for testing
///
/// Stores accounts in memory and hashes passwords with real bcrypt so that
/// sign-in paths exercise the same comparison logic as production.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    failing: Arc<AtomicBool>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent operation fail with an internal error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "simulated account store failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.username == username || a.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_verify_key(&self, key: &str) -> Result<Option<Account>, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.verify_key.as_deref() == Some(key))
            .cloned())
    }

    async fn create_pending(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;

        // Duplicate identity answers exactly like the real store's
        // unique-key violation
        if accounts
            .values()
            .any(|a| a.username == username || a.email == email)
        {
            return Err(DomainError::Auth(AuthError::AccountExists));
        }

        let password_hash =
            bcrypt::hash(password, MOCK_BCRYPT_COST).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {e}"),
            })?;
        let verify_key = Uuid::new_v4().simple().to_string();

        let account = Account::new_pending(
            username.to_string(),
            email.to_string(),
            password_hash,
            verify_key,
        );
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn compare_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError> {
        self.check_available()?;
        bcrypt::verify(password, &account.password_hash).map_err(|e| DomainError::Internal {
            message: format!("Password comparison failed: {e}"),
        })
    }

    async fn mark_verified(&self, account: &Account) -> Result<Account, DomainError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&account.id) {
            Some(stored) => {
                stored.verify();
                Ok(stored.clone())
            }
            None => Err(DomainError::NotFound {
                resource: "Account".to_string(),
            }),
        }
    }
}
