//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::account::Account;
use crate::services::auth::Notifier;

/// Mailer that records every send instead of delivering anything
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
    failing: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent_links(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, link)| link.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for MockMailer {
    async fn send_verification_email(
        &self,
        account: &Account,
        link: &str,
    ) -> Result<String, String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("smtp connection refused".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((account.email.clone(), link.to_string()));
        Ok(format!("mock-message-{}", sent.len()))
    }
}
