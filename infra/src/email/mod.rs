//! Email module for verification mail delivery
//!
//! This module provides the SMTP notifier used in production and a mock
//! for development and testing:
//! - SMTP delivery via lettre (async, STARTTLS)
//! - Log-only mode when no SMTP host is configured
//! - Mock implementation that records sent mail

pub mod mock_mailer;
pub mod smtp;

#[cfg(test)]
mod tests;

pub use mock_mailer::MockMailer;
pub use smtp::SmtpMailer;
