//! Unit tests for the email module

mod mock_mailer_tests;
