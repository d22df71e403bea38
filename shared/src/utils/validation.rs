//! Common validation utilities
//!
//! Field bounds live here so the HTTP layer and the domain layer agree
//! on what a well-formed username, password, and email look like.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 4;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Allowed username shape: letters, digits and underscores, 4-20 chars
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{4,20}$").unwrap());

/// Basic email shape check; the real proof of ownership is the
/// verification mail itself
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

/// Common validation functions
pub mod validators {
    use super::{
        EMAIL_REGEX, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, USERNAME_REGEX,
    };

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a username is well formed (charset and length)
    pub fn is_valid_username(username: &str) -> bool {
        USERNAME_REGEX.is_match(username)
    }

    /// Check if a password length is within bounds
    pub fn is_valid_password(password: &str) -> bool {
        length_between(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
    }

    /// Check if an email address is well formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("user_42"));
        assert!(!is_valid_username("abc")); // too short
        assert!(!is_valid_username("a".repeat(21).as_str()));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("dots.not.ok"));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("a".repeat(20).as_str()));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("a".repeat(21).as_str()));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_validation_errors_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add_error("username", "too short", "INVALID_LENGTH");
        errors.add_error("username", "bad charset", "PATTERN_MISMATCH");
        errors.add_error("email", "malformed", "INVALID_FORMAT");

        assert!(errors.has_errors());
        assert_eq!(errors.errors().len(), 3);

        let by_field = errors.to_field_errors();
        assert_eq!(by_field["username"].len(), 2);
        assert_eq!(by_field["email"].len(), 1);
    }
}
