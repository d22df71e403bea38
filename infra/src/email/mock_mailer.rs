//! Mock mailer for development and testing
//!
//! Records verification mail instead of sending it. Integration tests use
//! the recorded link to drive the verification flow end to end.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use gk_core::domain::entities::account::Account;
use gk_core::services::auth::Notifier;

/// A captured verification email
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Recipient address
    pub recipient: String,
    /// Username the mail greets
    pub username: String,
    /// Verification link carried in the body
    pub link: String,
}

/// Mock mailer that records messages instead of delivering them
#[derive(Clone, Default)]
pub struct MockMailer {
    /// Captured messages in send order
    sent: Arc<Mutex<Vec<SentEmail>>>,
    /// When set, every send fails
    fail_sending: Arc<AtomicBool>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle delivery failure simulation
    pub fn set_failing(&self, failing: bool) {
        self.fail_sending.store(failing, Ordering::SeqCst);
    }

    /// All captured messages, in send order
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Number of captured messages
    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Verification link of the most recent message, if any
    pub fn last_link(&self) -> Option<String> {
        self.sent
            .lock()
            .ok()
            .and_then(|s| s.last().map(|m| m.link.clone()))
    }
}

#[async_trait]
impl Notifier for MockMailer {
    async fn send_verification_email(
        &self,
        account: &Account,
        link: &str,
    ) -> Result<String, String> {
        if self.fail_sending.load(Ordering::SeqCst) {
            return Err("Simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentEmail {
                recipient: account.email.clone(),
                username: account.username.clone(),
                link: link.to_string(),
            });
        }

        info!(
            recipient = %account.email,
            message_id = %message_id,
            "Verification email captured (mock)"
        );

        Ok(message_id)
    }
}
