//! SMTP delivery of verification mail
//!
//! Wraps a lettre async SMTP transport behind the core `Notifier` trait.
//! When no SMTP host is configured the mailer runs in log-only mode and
//! writes the verification link to the log instead of sending it, which is
//! how local development works without a relay.

use async_trait::async_trait;
use lettre::message::{header, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use gk_core::domain::entities::account::Account;
use gk_core::services::auth::Notifier;
use gk_shared::config::email::EmailConfig;

use crate::InfrastructureError;

/// SMTP implementation of the verification mail notifier
#[derive(Clone)]
pub struct SmtpMailer {
    /// Async transport, absent in log-only mode
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    /// From address for outbound mail
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from configuration
    ///
    /// With `enabled` set, connects the relay over STARTTLS; credentials are
    /// attached only when a username is configured. Otherwise the mailer
    /// operates in log-only mode.
    ///
    /// # Arguments
    /// * `config` - Email delivery configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from = config.from_address.parse::<Mailbox>().map_err(|e| {
            InfrastructureError::Config(format!("Invalid from address: {}", e))
        })?;

        let transport = if config.enabled {
            let mut builder =
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                    .map_err(|e| {
                        InfrastructureError::Email(format!(
                            "Failed to configure SMTP transport: {}",
                            e
                        ))
                    })?
                    .port(config.smtp_port);

            if !config.smtp_username.is_empty() {
                builder = builder.credentials(Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.clone(),
                ));
            }

            Some(builder.build())
        } else {
            warn!("SMTP not configured; verification links will be logged instead of emailed");
            None
        };

        Ok(Self { transport, from })
    }

    /// Whether a real SMTP transport is configured
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn send_verification_email(
        &self,
        account: &Account,
        link: &str,
    ) -> Result<String, String> {
        let Some(transport) = &self.transport else {
            info!(
                recipient = %account.email,
                link = %link,
                "Log-only mode, verification mail not sent"
            );
            return Ok(format!("logged:{}", account.id));
        };

        let to = account
            .email
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        let body = format!(
            "Welcome to Gatekey, {}!\n\n\
            Please click the following link to verify your email address:\n{}\n\n\
            If you did not create this account, please ignore this email.",
            account.username, link
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Verify your Gatekey account")
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email message: {}", e))?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {}", e))?;

        let message_id = response.message().collect::<Vec<&str>>().join(" ");
        info!(recipient = %account.email, "Verification email sent");
        Ok(message_id)
    }
}
