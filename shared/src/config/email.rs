//! Email delivery configuration for account verification mail

use serde::{Deserialize, Serialize};

/// SMTP email configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled; when false, verification
    /// links are logged instead of sent
    pub enabled: bool,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_username: String,

    /// SMTP password
    pub smtp_password: String,

    /// From address for outbound mail
    pub from_address: String,

    /// Base URL the verification link points at, e.g.
    /// `https://app.example.com/api/v1/auth/verify`
    pub verification_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::from("Gatekey <no-reply@gatekey.local>"),
            verification_base_url: String::from("http://localhost:8080/api/v1/auth/verify"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// Email is enabled only when `SMTP_HOST` is present; otherwise the
    /// notifier runs in log-only mode.
    pub fn from_env() -> Self {
        let smtp_host = std::env::var("SMTP_HOST").ok();
        let enabled = smtp_host.is_some();
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587);

        Self {
            enabled,
            smtp_host: smtp_host.unwrap_or_else(|| "localhost".to_string()),
            smtp_port,
            smtp_username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "Gatekey <no-reply@gatekey.local>".to_string()),
            verification_base_url: std::env::var("VERIFICATION_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/v1/auth/verify".to_string()),
        }
    }
}
