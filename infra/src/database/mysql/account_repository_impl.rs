//! MySQL implementation of the AccountRepository trait.
//!
//! This module provides the concrete implementation of account persistence
//! using MySQL with SQLx. Password hashing happens here with bcrypt, and
//! verification keys are generated here; neither ever crosses the repository
//! boundary in plaintext-relevant form.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gk_core::domain::entities::account::Account;
use gk_core::errors::{AuthError, DomainError};
use gk_core::repositories::AccountRepository;

/// Length of generated verification keys
const VERIFY_KEY_LENGTH: usize = 32;

/// MySQL implementation of AccountRepository
///
/// Uses SQLx for database operations and bcrypt for password hashing.
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Generate a random alphanumeric verification key
    fn generate_verify_key() -> String {
        let mut rng = rand::thread_rng();
        (0..VERIFY_KEY_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..62u8);
                match idx {
                    0..=9 => (b'0' + idx) as char,
                    10..=35 => (b'a' + idx - 10) as char,
                    _ => (b'A' + idx - 36) as char,
                }
            })
            .collect()
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Internal {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            verify_key: row
                .try_get("verify_key")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get verify_key: {}", e),
                })?,
            is_admin: row.try_get("is_admin").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_admin: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_verified,
                   verify_key, is_admin, created_at, updated_at
            FROM accounts
            WHERE username = ? OR email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_verified,
                   verify_key, is_admin, created_at, updated_at
            FROM accounts
            WHERE username = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_verify_key(&self, key: &str) -> Result<Option<Account>, DomainError> {
        // Keys are cleared on verification, so only pending accounts match
        let query = r#"
            SELECT id, username, email, password_hash, is_verified,
                   verify_key, is_admin, created_at, updated_at
            FROM accounts
            WHERE verify_key = ? AND is_verified = FALSE
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_pending(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        let account = Account::new_pending(
            username.to_string(),
            email.to_string(),
            password_hash,
            Self::generate_verify_key(),
        );

        let query = r#"
            INSERT INTO accounts (
                id, username, email, password_hash, is_verified,
                verify_key, is_admin, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(&account.verify_key)
            .bind(account.is_admin)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                // Unique index on username and email catches the race where
                // two registrations pass the service-level duplicate check
                Some(db_err) if db_err.is_unique_violation() => {
                    DomainError::Auth(AuthError::AccountExists)
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create account: {}", e),
                },
            })?;

        Ok(account)
    }

    async fn compare_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError> {
        bcrypt::verify(password, &account.password_hash).map_err(|e| DomainError::Internal {
            message: format!("Password comparison failed: {}", e),
        })
    }

    async fn mark_verified(&self, account: &Account) -> Result<Account, DomainError> {
        let mut verified = account.clone();
        verified.verify();

        let query = r#"
            UPDATE accounts
            SET is_verified = TRUE, verify_key = NULL, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(verified.updated_at)
            .bind(verified.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to mark account verified: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        Ok(verified)
    }
}
